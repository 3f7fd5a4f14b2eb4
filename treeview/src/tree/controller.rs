//! Expansion and selection requests against caller-owned state.
//!
//! None of these functions mutate the expanded set or the selection. They
//! compute the next value and hand it to [`TreeCallbacks`].

use crate::events::TreeCallbacks;

use super::flatten::VisibleItem;
use super::item::{NodeId, TreeItem};

/// `expanded ∪ {id}`, appending `id` if absent.
pub fn expanded_with(expanded: &[NodeId], id: &NodeId) -> Vec<NodeId> {
    let mut next = expanded.to_vec();
    if !next.contains(id) {
        next.push(id.clone());
    }
    next
}

/// `expanded \ {id}`, preserving the order of the remaining ids.
pub fn expanded_without(expanded: &[NodeId], id: &NodeId) -> Vec<NodeId> {
    expanded.iter().filter(|&other| other != id).cloned().collect()
}

/// Add `id` if absent, remove it otherwise.
pub fn toggled(expanded: &[NodeId], id: &NodeId) -> Vec<NodeId> {
    if expanded.contains(id) {
        expanded_without(expanded, id)
    } else {
        expanded_with(expanded, id)
    }
}

/// Ask the caller to expand `id`.
pub fn request_expand(expanded: &[NodeId], id: &NodeId, callbacks: &mut impl TreeCallbacks) {
    log::debug!("[tree] expand {}", id);
    callbacks.on_expanded_change(expanded_with(expanded, id));
}

/// Ask the caller to collapse `id`.
pub fn request_collapse(expanded: &[NodeId], id: &NodeId, callbacks: &mut impl TreeCallbacks) {
    log::debug!("[tree] collapse {}", id);
    callbacks.on_expanded_change(expanded_without(expanded, id));
}

/// Ask the caller to flip the expansion of `id`.
pub fn request_toggle(expanded: &[NodeId], id: &NodeId, callbacks: &mut impl TreeCallbacks) {
    log::debug!("[tree] toggle {}", id);
    callbacks.on_expanded_change(toggled(expanded, id));
}

/// Ask the caller to select `item`. Disabled items are never selected.
/// Returns true if the request was made.
pub fn request_select<T: TreeItem>(
    item: &VisibleItem<'_, T>,
    callbacks: &mut impl TreeCallbacks,
) -> bool {
    if item.is_disabled() {
        return false;
    }
    log::debug!("[tree] select {}", item.id());
    callbacks.on_selected_change(item.id().clone());
    true
}

/// Activate `item` by click, Enter or Space.
///
/// Activating a node with children both selects it and toggles its
/// expansion, in that order, as one action. Disabled items ignore
/// activation entirely. Returns true if anything was requested.
pub fn activate<T: TreeItem>(
    item: &VisibleItem<'_, T>,
    expanded: &[NodeId],
    callbacks: &mut impl TreeCallbacks,
) -> bool {
    if !request_select(item, callbacks) {
        return false;
    }
    if item.has_children() {
        request_toggle(expanded, item.id(), callbacks);
    }
    true
}
