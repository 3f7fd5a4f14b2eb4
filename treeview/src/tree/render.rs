//! Render output of a tree view.
//!
//! Rendering produces a declarative description: the container plus one
//! entry per visible item with its ARIA state. Drawing it is up to the host.

use crate::focus::Focusable;

use super::aria::{self, AriaAttributes, ROLE_TREE};
use super::item::{NodeId, TreeItem};
use super::state::{TreeProps, TreeView};

/// The tree container and its visible items, in document order.
#[derive(Debug)]
pub struct RenderedTree<'a, T> {
    /// Accessible name of the container.
    pub label: Option<String>,
    pub items: Vec<RenderedItem<'a, T>>,
}

/// One rendered tree item.
#[derive(Debug)]
pub struct RenderedItem<'a, T> {
    pub node: &'a T,
    /// Indentation depth (0 = root level).
    pub depth: usize,
    pub aria: AriaAttributes,
}

impl<'a, T: TreeItem> RenderedItem<'a, T> {
    pub fn id(&self) -> &'a NodeId {
        self.node.id()
    }
}

impl<'a, T: TreeItem> RenderedTree<'a, T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, id: &NodeId) -> Option<&RenderedItem<'a, T>> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// The item with `tabindex="0"`.
    pub fn tab_stop(&self) -> Option<&RenderedItem<'a, T>> {
        self.items.iter().find(|item| item.aria.is_tab_stop())
    }

    /// Ids in document order.
    pub fn ids(&self) -> Vec<&'a NodeId> {
        self.items.iter().map(|item| item.id()).collect()
    }

    /// Container attribute name/value pairs in DOM spelling.
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = vec![("role", ROLE_TREE.to_string())];
        if let Some(label) = &self.label {
            attrs.push(("aria-label", label.clone()));
        }
        attrs
    }
}

impl<H: Focusable> TreeView<H> {
    /// Render one pass.
    ///
    /// Flattens the forest for the current expanded set, anchors the tab
    /// stop and computes every item's ARIA attributes. An empty forest
    /// renders an empty container.
    pub fn render<'a, T: TreeItem>(&mut self, props: &TreeProps<'a, T>) -> RenderedTree<'a, T> {
        let items = props.visible();
        self.anchor_focus(&items);

        let focused = self.focused.as_ref();
        let rendered = items
            .iter()
            .map(|item| RenderedItem {
                node: item.node,
                depth: item.depth,
                aria: aria::annotate(item, props.selected, focused),
            })
            .collect();

        RenderedTree {
            label: self.config.label.clone(),
            items: rendered,
        }
    }
}
