//! Plain data node for building forests by hand or from serialized data.

use serde::{Deserialize, Serialize};

use super::item::{NodeId, TreeItem};

/// One entry in the hierarchy.
///
/// `label` and `icon` are opaque to the widget; they travel with the node
/// so the host renderer can draw them.
///
/// # Example
///
/// ```
/// use treeview::tree::Node;
///
/// let docs = Node::new("docs", "Documents")
///     .child(Node::new("cv", "cv.pdf"))
///     .child(Node::new("tax", "tax.pdf").disabled(true));
///
/// assert_eq!(docs.children.as_ref().map(Vec::len), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node<L = String> {
    pub id: NodeId,
    pub label: L,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Node<L>>>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl<L> Node<L> {
    /// Create a leaf node.
    pub fn new(id: impl Into<NodeId>, label: L) -> Self {
        Self {
            id: id.into(),
            label,
            children: None,
            disabled: false,
            icon: None,
        }
    }

    /// Append a child, creating the child list if needed.
    pub fn child(mut self, child: Node<L>) -> Self {
        self.children.get_or_insert_with(Vec::new).push(child);
        self
    }

    /// Replace the child list.
    pub fn with_children(mut self, children: impl IntoIterator<Item = Node<L>>) -> Self {
        self.children = Some(children.into_iter().collect());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

impl<L> TreeItem for Node<L> {
    fn id(&self) -> &NodeId {
        &self.id
    }

    fn children(&self) -> Option<&[Self]> {
        self.children.as_deref()
    }

    fn is_disabled(&self) -> bool {
        self.disabled
    }
}
