//! Per-instance focus registry.
//!
//! Each mounted tree item registers a handle that can take focus
//! imperatively. The registry belongs to exactly one [`TreeView`] and is
//! never shared between instances.
//!
//! Collapsing a subtree unmounts its items, so a focus request can arrive
//! for an id whose handle is already gone. Such requests are ignored.
//!
//! [`TreeView`]: crate::tree::TreeView

use std::collections::{HashMap, HashSet};

use crate::tree::{NodeId, TreeItem, TreeViewId, VisibleItem};

/// A handle that can receive keyboard focus.
pub trait Focusable {
    /// Move keyboard focus to this handle.
    fn focus(&mut self);
}

impl<H: Focusable + ?Sized> Focusable for Box<H> {
    fn focus(&mut self) {
        (**self).focus();
    }
}

/// Map from node id to the focus handle of the mounted item.
#[derive(Debug)]
pub struct FocusRegistry<H> {
    owner: TreeViewId,
    handles: HashMap<NodeId, H>,
}

impl<H: Focusable> FocusRegistry<H> {
    /// Create an empty registry for one tree view instance.
    pub fn new(owner: TreeViewId) -> Self {
        Self {
            owner,
            handles: HashMap::new(),
        }
    }

    /// The tree view instance this registry belongs to.
    pub fn owner(&self) -> TreeViewId {
        self.owner
    }

    /// Register the handle of a newly mounted item.
    /// Returns the handle previously registered under `id`, if any.
    pub fn register(&mut self, id: NodeId, handle: H) -> Option<H> {
        self.handles.insert(id, handle)
    }

    /// Remove the handle of an unmounted item.
    /// Unknown ids are ignored.
    pub fn deregister(&mut self, id: &NodeId) -> Option<H> {
        let removed = self.handles.remove(id);
        if removed.is_none() {
            log::trace!("[focus {}] deregister of unknown id {}", self.owner, id);
        }
        removed
    }

    pub fn is_registered(&self, id: &NodeId) -> bool {
        self.handles.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Registered ids, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = &NodeId> {
        self.handles.keys()
    }

    pub fn get_mut(&mut self, id: &NodeId) -> Option<&mut H> {
        self.handles.get_mut(id)
    }

    /// Focus the handle registered for `id`.
    /// Returns false without side effects if nothing is registered.
    pub fn focus(&mut self, id: &NodeId) -> bool {
        match self.handles.get_mut(id) {
            Some(handle) => {
                handle.focus();
                true
            }
            None => {
                log::trace!("[focus {}] no handle for {}, skipping", self.owner, id);
                false
            }
        }
    }

    /// Bring the registry in line with a freshly rendered visible list.
    ///
    /// Items that are no longer visible are deregistered; visible items
    /// without a handle get one from `mount`. For hosts that do not have
    /// their own mount/unmount hooks.
    pub fn reconcile<T, F>(&mut self, items: &[VisibleItem<'_, T>], mut mount: F)
    where
        T: TreeItem,
        F: FnMut(&VisibleItem<'_, T>) -> H,
    {
        let visible: HashSet<&NodeId> = items.iter().map(|item| item.id()).collect();
        let before = self.handles.len();
        self.handles.retain(|id, _| visible.contains(id));
        let unmounted = before - self.handles.len();

        let mut mounted = 0;
        for item in items {
            if !self.handles.contains_key(item.id()) {
                self.handles.insert(item.id().clone(), mount(item));
                mounted += 1;
            }
        }

        if mounted > 0 || unmounted > 0 {
            log::debug!(
                "[focus {}] reconcile: mounted={} unmounted={} registered={}",
                self.owner,
                mounted,
                unmounted,
                self.handles.len()
            );
        }
    }
}
