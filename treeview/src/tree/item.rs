//! TreeItem trait for items that can be displayed in a tree view.

use serde::{Deserialize, Serialize};

/// Identifier of a node, unique across the entire forest.
///
/// Expansion and selection are tracked as flat id sets, so uniqueness
/// among siblings is not enough.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    /// Create a new node ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trait for items that can be displayed in a tree view.
///
/// [`Node`](super::Node) implements this for the common case. Implement it
/// directly to show an existing hierarchy without copying it.
///
/// # Example
///
/// ```ignore
/// struct Dir {
///     id: NodeId,
///     entries: Vec<Dir>,
///     locked: bool,
/// }
///
/// impl TreeItem for Dir {
///     fn id(&self) -> &NodeId {
///         &self.id
///     }
///
///     fn children(&self) -> Option<&[Self]> {
///         Some(&self.entries)
///     }
///
///     fn is_disabled(&self) -> bool {
///         self.locked
///     }
/// }
/// ```
pub trait TreeItem: Sized {
    /// Unique, stable identifier for this node.
    ///
    /// Must be unique across the whole forest and stable across renders
    /// to keep expansion, selection and focus attached to the same node.
    fn id(&self) -> &NodeId;

    /// Ordered child items, or `None` for a node without a child list.
    fn children(&self) -> Option<&[Self]>;

    /// Disabled nodes are rendered and counted but never focused,
    /// selected or activated.
    fn is_disabled(&self) -> bool {
        false
    }

    /// Whether this node can be expanded.
    ///
    /// True if the child list is present and non-empty.
    fn has_children(&self) -> bool {
        self.children().is_some_and(|children| !children.is_empty())
    }
}
