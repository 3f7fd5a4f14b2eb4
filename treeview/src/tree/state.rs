//! Tree view instance state.

use uuid::Uuid;

use crate::config::TreeConfig;
use crate::focus::{FocusRegistry, Focusable};

use super::flatten::{VisibleItem, position_of};
use super::forest::Forest;
use super::item::{NodeId, TreeItem};

/// Unique identifier for a tree view instance.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TreeViewId(Uuid);

impl TreeViewId {
    /// Create a new unique tree view ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for TreeViewId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TreeViewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Caller-owned inputs for one render pass.
#[derive(Debug)]
pub struct TreeProps<'a, T> {
    pub forest: &'a Forest<T>,
    pub expanded: &'a [NodeId],
    pub selected: Option<&'a NodeId>,
}

impl<T> Clone for TreeProps<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TreeProps<'_, T> {}

impl<'a, T: TreeItem> TreeProps<'a, T> {
    pub fn new(forest: &'a Forest<T>, expanded: &'a [NodeId], selected: Option<&'a NodeId>) -> Self {
        Self {
            forest,
            expanded,
            selected,
        }
    }

    /// Freshly flattened visible items.
    pub fn visible(&self) -> Vec<VisibleItem<'a, T>> {
        self.forest.flatten(self.expanded)
    }
}

/// A controlled tree view.
///
/// Expansion and selection live with the caller and arrive through
/// [`TreeProps`] on every call. The view owns only the roving focus and
/// the registry of focusable handles for its mounted items.
///
/// # Example
///
/// ```ignore
/// let forest = Forest::new(vec![
///     Node::new("a", "A").child(Node::new("a1", "A1")),
///     Node::new("b", "B"),
/// ])?;
/// let mut expanded = vec![];
/// let mut selected = None;
/// let mut view: TreeView<DomHandle> = TreeView::new(TreeConfig::new("Files"));
///
/// let rendered = view.render(&TreeProps::new(&forest, &expanded, selected.as_ref()));
/// // mount rendered.items, calling view.mount(id, handle) for each
///
/// let mut log = EventLog::new();
/// view.on_key(&TreeProps::new(&forest, &expanded, selected.as_ref()), &Key::Right.into(), &mut log);
/// if let Some(next) = log.last_expanded() {
///     expanded = next.to_vec();
/// }
/// ```
#[derive(Debug)]
pub struct TreeView<H> {
    pub(super) id: TreeViewId,
    pub(super) config: TreeConfig,
    pub(super) focused: Option<NodeId>,
    pub(super) registry: FocusRegistry<H>,
}

impl<H: Focusable> TreeView<H> {
    pub fn new(config: TreeConfig) -> Self {
        let id = TreeViewId::new();
        Self {
            id,
            config,
            focused: None,
            registry: FocusRegistry::new(id),
        }
    }

    pub fn id(&self) -> TreeViewId {
        self.id
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// The id currently owning the roving tab stop. Read-only: focus moves
    /// only through key and click handling.
    pub fn focused(&self) -> Option<&NodeId> {
        self.focused.as_ref()
    }

    pub fn registry(&self) -> &FocusRegistry<H> {
        &self.registry
    }

    /// Register the focus handle of a mounted item.
    pub fn mount(&mut self, id: NodeId, handle: H) {
        self.registry.register(id, handle);
    }

    /// Drop the focus handle of an unmounted item. Unknown ids are ignored.
    pub fn unmount(&mut self, id: &NodeId) {
        self.registry.deregister(id);
    }

    /// Mount and unmount handles to match `items`.
    pub fn reconcile<T, F>(&mut self, items: &[VisibleItem<'_, T>], mount: F)
    where
        T: TreeItem,
        F: FnMut(&VisibleItem<'_, T>) -> H,
    {
        self.registry.reconcile(items, mount);
    }

    /// Keep the tab stop on a visible node.
    ///
    /// Before the first interaction, and whenever the focused node has left
    /// the visible list, the tab stop falls back to the first root. This
    /// does not call into the registry.
    pub(super) fn anchor_focus<T: TreeItem>(&mut self, items: &[VisibleItem<'_, T>]) {
        let still_visible = self
            .focused
            .as_ref()
            .is_some_and(|id| position_of(items, id).is_some());
        if still_visible {
            return;
        }
        let fallback = items.first().map(|item| item.id().clone());
        if self.focused != fallback {
            log::debug!(
                "[tree {}] tab stop anchored at {:?} (was {:?})",
                self.id,
                fallback,
                self.focused
            );
            self.focused = fallback;
        }
    }

    /// Move focus to `id` and focus its handle once.
    /// Returns false if `id` already had focus.
    pub(super) fn move_focus(&mut self, id: &NodeId) -> bool {
        if self.focused.as_ref() == Some(id) {
            return false;
        }
        log::debug!("[tree {}] focus {:?} -> {}", self.id, self.focused, id);
        self.focused = Some(id.clone());
        self.registry.focus(id);
        true
    }
}
