//! Tree view for displaying hierarchical data.
//!
//! The tree is a controlled component. The caller owns the forest, the
//! expanded set and the selected id, and passes them in on every render and
//! event. The view owns only the roving focus and a registry of focusable
//! handles for its mounted items.
//!
//! Keyboard behavior:
//!
//! | Key | Effect |
//! |---|---|
//! | Down / Up | next / previous non-disabled visible item, no wrap |
//! | Home / End | first / last non-disabled visible item |
//! | Right | expand a collapsed parent |
//! | Left | collapse an expanded parent |
//! | Enter / Space | activate |
//!
//! Activating a parent, by click or key, selects it and toggles its
//! expansion in one action.
//!
//! # Example
//!
//! ```
//! use treeview::prelude::*;
//!
//! struct NoopHandle;
//! impl Focusable for NoopHandle {
//!     fn focus(&mut self) {}
//! }
//!
//! let forest = Forest::new(vec![
//!     Node::new("a", "A")
//!         .child(Node::new("a1", "A1"))
//!         .child(Node::new("a2", "A2").disabled(true)),
//!     Node::new("b", "B"),
//! ])
//! .unwrap();
//! let expanded = vec![NodeId::from("a")];
//!
//! let mut view: TreeView<NoopHandle> = TreeView::new(TreeConfig::new("Files"));
//! let props = TreeProps::new(&forest, &expanded, None);
//! let rendered = view.render(&props);
//! assert_eq!(rendered.len(), 4);
//!
//! let mut log = EventLog::new();
//! view.on_key(&props, &Key::Down.into(), &mut log);
//! view.on_key(&props, &Key::Down.into(), &mut log);
//! assert_eq!(view.focused(), Some(&NodeId::from("b")));
//! ```

mod aria;
mod controller;
mod events;
mod flatten;
mod forest;
mod item;
mod navigation;
mod node;
mod render;
mod state;

pub use aria::{AriaAttributes, NOT_TAB_STOP, ROLE_TREE, ROLE_TREEITEM, TAB_STOP, annotate};
pub use controller::{
    activate, expanded_with, expanded_without, request_collapse, request_expand, request_select,
    request_toggle, toggled,
};
pub use flatten::{VisibleItem, flatten, position_of};
pub use forest::{Forest, validate_unique_ids};
pub use item::{NodeId, TreeItem};
pub use navigation::{NavKey, Transition, transition};
pub use node::Node;
pub use render::{RenderedItem, RenderedTree};
pub use state::{TreeProps, TreeView, TreeViewId};
