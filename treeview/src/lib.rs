pub mod config;
pub mod error;
pub mod events;
pub mod focus;
pub mod keybinds;
pub mod tree;

pub use error::{TreeError, TreeResult};

pub mod prelude {
    pub use crate::config::{ArrowKeyMode, TreeConfig};
    pub use crate::error::{TreeError, TreeResult};
    pub use crate::events::{Callbacks, EventLog, EventResult, TreeCallbacks, TreeEvent};
    pub use crate::focus::{FocusRegistry, Focusable};
    pub use crate::keybinds::{Key, KeyCombo, Modifiers};
    pub use crate::tree::{
        AriaAttributes, Forest, Node, NodeId, RenderedItem, RenderedTree, TreeItem, TreeProps,
        TreeView, TreeViewId, VisibleItem,
    };
}
