//! Error types for tree construction and input parsing.

use thiserror::Error;

use crate::tree::NodeId;

/// Result type alias for treeview operations.
pub type TreeResult<T> = Result<T, TreeError>;

/// Errors raised when configuring a tree view.
///
/// Runtime interactions (keys, clicks, focus requests) never fail: a
/// transition that cannot apply is ignored instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The same id appears twice somewhere in the forest.
    #[error("duplicate node id '{id}' at {first} and {second}")]
    DuplicateId {
        id: NodeId,
        first: NodePath,
        second: NodePath,
    },

    /// A DOM key name that the tree does not understand.
    #[error("unknown key name '{0}'")]
    UnknownKey(String),
}

/// Position of a node as child indices from the root, e.g. `0/2/1`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NodePath(pub Vec<usize>);

impl std::fmt::Display for NodePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, index) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            write!(f, "{}", index)?;
        }
        Ok(())
    }
}
