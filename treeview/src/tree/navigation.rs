//! Keyboard navigation state machine.
//!
//! The only state is which id is focused. Given that id, a key and the
//! freshly flattened visible list, [`transition`] decides what happens next.
//! Disabled items are skipped as candidates but keep their index.

use crate::config::ArrowKeyMode;
use crate::keybinds::{Key, KeyCombo};

use super::flatten::{VisibleItem, position_of};
use super::item::{NodeId, TreeItem};

/// Keys the tree reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    Home,
    End,
    Left,
    Right,
    Activate,
}

impl NavKey {
    /// Map a key combo to a navigation key.
    ///
    /// Ctrl and Alt combos are left to the host. Shift is tolerated.
    pub fn from_combo(combo: &KeyCombo) -> Option<Self> {
        if combo.modifiers.ctrl || combo.modifiers.alt {
            return None;
        }
        match combo.key {
            Key::Up => Some(NavKey::Up),
            Key::Down => Some(NavKey::Down),
            Key::Home => Some(NavKey::Home),
            Key::End => Some(NavKey::End),
            Key::Left => Some(NavKey::Left),
            Key::Right => Some(NavKey::Right),
            Key::Enter | Key::Space | Key::Char(' ') => Some(NavKey::Activate),
            _ => None,
        }
    }
}

/// Outcome of a navigation key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Move focus to this id.
    Focus(NodeId),
    /// Ask the caller to expand this id. Focus stays.
    Expand(NodeId),
    /// Ask the caller to collapse this id. Focus stays.
    Collapse(NodeId),
    /// Select (and toggle, for parents) this id.
    Activate(NodeId),
    /// Nothing applies.
    None,
}

/// Decide the transition for `key` with `focused` over `items`.
pub fn transition<T: TreeItem>(
    items: &[VisibleItem<'_, T>],
    focused: Option<&NodeId>,
    key: NavKey,
    mode: ArrowKeyMode,
) -> Transition {
    let index = focused.and_then(|id| position_of(items, id));

    let target = match key {
        NavKey::Down => {
            let start = index.map_or(0, |i| i + 1);
            next_focusable(items, start)
        }
        NavKey::Up => index.and_then(|i| prev_focusable(items, i)),
        NavKey::Home => next_focusable(items, 0),
        NavKey::End => prev_focusable(items, items.len()),
        NavKey::Right => {
            let Some(i) = index else {
                return Transition::None;
            };
            let item = &items[i];
            if item.has_children() && !item.expanded {
                return Transition::Expand(item.id().clone());
            }
            if mode == ArrowKeyMode::Full && item.expanded {
                first_child(items, i)
            } else {
                None
            }
        }
        NavKey::Left => {
            let Some(i) = index else {
                return Transition::None;
            };
            let item = &items[i];
            if item.expanded {
                return Transition::Collapse(item.id().clone());
            }
            if mode == ArrowKeyMode::Full {
                parent(items, i)
            } else {
                None
            }
        }
        NavKey::Activate => {
            return match index.map(|i| &items[i]) {
                Some(item) if item.is_focusable() => Transition::Activate(item.id().clone()),
                _ => Transition::None,
            };
        }
    };

    match target {
        Some(i) => Transition::Focus(items[i].id().clone()),
        None => Transition::None,
    }
}

/// First focusable index at or after `start`.
fn next_focusable<T: TreeItem>(items: &[VisibleItem<'_, T>], start: usize) -> Option<usize> {
    items
        .iter()
        .enumerate()
        .skip(start)
        .find(|(_, item)| item.is_focusable())
        .map(|(i, _)| i)
}

/// Last focusable index strictly before `end`.
fn prev_focusable<T: TreeItem>(items: &[VisibleItem<'_, T>], end: usize) -> Option<usize> {
    items[..end.min(items.len())]
        .iter()
        .rposition(|item| item.is_focusable())
}

/// First focusable direct child of the expanded item at `index`.
fn first_child<T: TreeItem>(items: &[VisibleItem<'_, T>], index: usize) -> Option<usize> {
    let depth = items[index].depth;
    items
        .iter()
        .enumerate()
        .skip(index + 1)
        .take_while(|(_, item)| item.depth > depth)
        .find(|(_, item)| item.depth == depth + 1 && item.is_focusable())
        .map(|(i, _)| i)
}

/// Parent of the item at `index`, if it can take focus.
fn parent<T: TreeItem>(items: &[VisibleItem<'_, T>], index: usize) -> Option<usize> {
    let depth = items[index].depth;
    if depth == 0 {
        return None;
    }
    items[..index]
        .iter()
        .rposition(|item| item.depth == depth - 1)
        .filter(|&i| items[i].is_focusable())
}
