//! Event results and outward callbacks.
//!
//! The tree view is a controlled component: it never changes expansion or
//! selection itself. It asks the caller to, through [`TreeCallbacks`], and
//! renders whatever the caller passes back in on the next render.

use crate::tree::NodeId;

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

/// Requests a tree view makes to the owner of its controlled state.
pub trait TreeCallbacks {
    /// The caller should replace its expanded set with `next`.
    fn on_expanded_change(&mut self, next: Vec<NodeId>);

    /// The caller should select `id`.
    fn on_selected_change(&mut self, id: NodeId);
}

/// [`TreeCallbacks`] built from two closures.
///
/// ```
/// use treeview::events::Callbacks;
/// use treeview::tree::NodeId;
///
/// let mut expanded = Vec::new();
/// let mut selected = None;
/// let mut callbacks = Callbacks::new(
///     |next: Vec<NodeId>| expanded = next,
///     |id: NodeId| selected = Some(id),
/// );
/// # let _ = &mut callbacks;
/// ```
pub struct Callbacks<E, S> {
    on_expanded: E,
    on_selected: S,
}

impl<E, S> Callbacks<E, S>
where
    E: FnMut(Vec<NodeId>),
    S: FnMut(NodeId),
{
    pub fn new(on_expanded: E, on_selected: S) -> Self {
        Self {
            on_expanded,
            on_selected,
        }
    }
}

impl<E, S> TreeCallbacks for Callbacks<E, S>
where
    E: FnMut(Vec<NodeId>),
    S: FnMut(NodeId),
{
    fn on_expanded_change(&mut self, next: Vec<NodeId>) {
        (self.on_expanded)(next);
    }

    fn on_selected_change(&mut self, id: NodeId) {
        (self.on_selected)(id);
    }
}

/// A request emitted through [`TreeCallbacks`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeEvent {
    ExpandedChange(Vec<NodeId>),
    SelectedChange(NodeId),
}

/// Records every request in order, for hosts that apply state changes
/// after the event handler returns.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<TreeEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[TreeEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Drain all recorded events.
    pub fn take(&mut self) -> Vec<TreeEvent> {
        std::mem::take(&mut self.events)
    }

    /// Most recent expanded set requested, if any.
    pub fn last_expanded(&self) -> Option<&[NodeId]> {
        self.events.iter().rev().find_map(|event| match event {
            TreeEvent::ExpandedChange(next) => Some(next.as_slice()),
            TreeEvent::SelectedChange(_) => None,
        })
    }

    /// Most recent selection requested, if any.
    pub fn last_selected(&self) -> Option<&NodeId> {
        self.events.iter().rev().find_map(|event| match event {
            TreeEvent::SelectedChange(id) => Some(id),
            TreeEvent::ExpandedChange(_) => None,
        })
    }
}

impl TreeCallbacks for EventLog {
    fn on_expanded_change(&mut self, next: Vec<NodeId>) {
        self.events.push(TreeEvent::ExpandedChange(next));
    }

    fn on_selected_change(&mut self, id: NodeId) {
        self.events.push(TreeEvent::SelectedChange(id));
    }
}
