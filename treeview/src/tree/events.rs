//! Event handling for the tree view.

use crate::events::{EventResult, TreeCallbacks};
use crate::focus::Focusable;
use crate::keybinds::KeyCombo;

use super::controller;
use super::flatten::position_of;
use super::item::{NodeId, TreeItem};
use super::navigation::{self, NavKey, Transition};
use super::state::{TreeProps, TreeView};

impl<H: Focusable> TreeView<H> {
    /// Handle a key pressed while the tree has focus.
    ///
    /// The visible list is recomputed from `props` first, so the decision
    /// always reflects the most recently committed expanded set.
    pub fn on_key<T, C>(
        &mut self,
        props: &TreeProps<'_, T>,
        key: &KeyCombo,
        callbacks: &mut C,
    ) -> EventResult
    where
        T: TreeItem,
        C: TreeCallbacks,
    {
        let Some(nav) = NavKey::from_combo(key) else {
            return EventResult::Ignored;
        };

        let items = props.visible();
        self.anchor_focus(&items);

        let next = navigation::transition(&items, self.focused.as_ref(), nav, self.config.arrow_keys);
        log::trace!("[tree {}] {:?} -> {:?}", self.id, nav, next);

        match next {
            Transition::Focus(id) => {
                if self.move_focus(&id) {
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            Transition::Expand(id) => {
                controller::request_expand(props.expanded, &id, callbacks);
                EventResult::Consumed
            }
            Transition::Collapse(id) => {
                controller::request_collapse(props.expanded, &id, callbacks);
                EventResult::Consumed
            }
            Transition::Activate(id) => {
                let activated = position_of(&items, &id)
                    .is_some_and(|i| controller::activate(&items[i], props.expanded, callbacks));
                if activated {
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            Transition::None => EventResult::Ignored,
        }
    }

    /// Handle a pointer click on the item `id`.
    ///
    /// The clicked item takes focus and is activated: selected, and for
    /// parents also expanded or collapsed. Clicks on disabled or hidden
    /// items are ignored.
    pub fn on_click<T, C>(
        &mut self,
        props: &TreeProps<'_, T>,
        id: &NodeId,
        callbacks: &mut C,
    ) -> EventResult
    where
        T: TreeItem,
        C: TreeCallbacks,
    {
        let items = props.visible();
        let Some(index) = position_of(&items, id) else {
            log::trace!("[tree {}] click on hidden item {}", self.id, id);
            return EventResult::Ignored;
        };
        let item = &items[index];
        if !item.is_focusable() {
            return EventResult::Ignored;
        }

        self.move_focus(id);
        controller::activate(item, props.expanded, callbacks);
        EventResult::Consumed
    }
}
