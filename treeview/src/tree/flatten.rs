//! Flattening of the nested forest into the currently visible ordering.
//!
//! The visible list drives both keyboard navigation and the ARIA position
//! attributes. It is rebuilt from scratch on every render and every event;
//! nothing is cached between calls.

use std::collections::HashSet;

use super::item::{NodeId, TreeItem};

/// A node eligible for rendering because all of its ancestors are expanded.
#[derive(Debug)]
pub struct VisibleItem<'a, T> {
    /// The underlying node.
    pub node: &'a T,
    /// Depth from the root level (0 = root).
    pub depth: usize,
    /// 0-based index among the node's siblings.
    pub sibling_index: usize,
    /// Number of siblings sharing the same parent, including this node.
    pub sibling_count: usize,
    /// Whether the node has children and is in the expanded set.
    pub expanded: bool,
}

impl<T> Clone for VisibleItem<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for VisibleItem<'_, T> {}

impl<'a, T: TreeItem> VisibleItem<'a, T> {
    pub fn id(&self) -> &'a NodeId {
        self.node.id()
    }

    pub fn is_disabled(&self) -> bool {
        self.node.is_disabled()
    }

    pub fn has_children(&self) -> bool {
        self.node.has_children()
    }

    /// Disabled items keep their position but are never navigation targets.
    pub fn is_focusable(&self) -> bool {
        !self.is_disabled()
    }
}

/// Compute the visible items of `roots` in document order.
///
/// Roots are always visible. Any other node is visible iff every ancestor
/// is in `expanded`. Disabled nodes are included.
pub fn flatten<'a, T: TreeItem>(roots: &'a [T], expanded: &[NodeId]) -> Vec<VisibleItem<'a, T>> {
    let expanded: HashSet<&NodeId> = expanded.iter().collect();
    let mut items = Vec::new();
    push_siblings(roots, 0, &expanded, &mut items);
    items
}

fn push_siblings<'a, T: TreeItem>(
    siblings: &'a [T],
    depth: usize,
    expanded: &HashSet<&NodeId>,
    items: &mut Vec<VisibleItem<'a, T>>,
) {
    let sibling_count = siblings.len();
    for (sibling_index, node) in siblings.iter().enumerate() {
        let is_expanded = node.has_children() && expanded.contains(node.id());
        items.push(VisibleItem {
            node,
            depth,
            sibling_index,
            sibling_count,
            expanded: is_expanded,
        });
        if is_expanded && let Some(children) = node.children() {
            push_siblings(children, depth + 1, expanded, items);
        }
    }
}

/// Index of `id` within a visible list.
pub fn position_of<T: TreeItem>(items: &[VisibleItem<'_, T>], id: &NodeId) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}
