//! ARIA attributes for visible tree items.

use super::flatten::VisibleItem;
use super::item::{NodeId, TreeItem};

/// Role of the tree container.
pub const ROLE_TREE: &str = "tree";

/// Role of each rendered node.
pub const ROLE_TREEITEM: &str = "treeitem";

/// `tabindex` of the single item that owns the roving tab stop.
pub const TAB_STOP: i8 = 0;

/// `tabindex` of every other rendered item.
pub const NOT_TAB_STOP: i8 = -1;

/// Accessibility state of one visible item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AriaAttributes {
    /// 1-based depth from the root.
    pub level: usize,
    /// Number of siblings under the same parent.
    pub set_size: usize,
    /// 1-based position among those siblings.
    pub pos_in_set: usize,
    /// `None` for nodes without children; the attribute is omitted.
    pub expanded: Option<bool>,
    pub selected: bool,
    pub disabled: bool,
    pub tab_index: i8,
}

impl AriaAttributes {
    pub fn is_tab_stop(&self) -> bool {
        self.tab_index == TAB_STOP
    }

    /// Attribute name/value pairs in DOM spelling.
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = vec![
            ("role", ROLE_TREEITEM.to_string()),
            ("aria-level", self.level.to_string()),
            ("aria-setsize", self.set_size.to_string()),
            ("aria-posinset", self.pos_in_set.to_string()),
        ];
        if let Some(expanded) = self.expanded {
            attrs.push(("aria-expanded", expanded.to_string()));
        }
        attrs.push(("aria-selected", self.selected.to_string()));
        attrs.push(("aria-disabled", self.disabled.to_string()));
        attrs.push(("tabindex", self.tab_index.to_string()));
        attrs
    }
}

/// Compute the ARIA attributes of `item`.
pub fn annotate<T: TreeItem>(
    item: &VisibleItem<'_, T>,
    selected: Option<&NodeId>,
    focused: Option<&NodeId>,
) -> AriaAttributes {
    let id = item.id();
    AriaAttributes {
        level: item.depth + 1,
        set_size: item.sibling_count,
        pos_in_set: item.sibling_index + 1,
        expanded: item.has_children().then_some(item.expanded),
        selected: selected == Some(id),
        disabled: item.is_disabled(),
        tab_index: if focused == Some(id) {
            TAB_STOP
        } else {
            NOT_TAB_STOP
        },
    }
}
