//! Tree view configuration types.

use serde::{Deserialize, Serialize};

/// Per-instance configuration for a [`TreeView`](crate::tree::TreeView).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Accessible name rendered as `aria-label` on the tree container.
    pub label: Option<String>,

    /// What ArrowLeft/ArrowRight do beyond expanding and collapsing.
    pub arrow_keys: ArrowKeyMode,
}

impl TreeConfig {
    /// Create a config with the given accessible name.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Default::default()
        }
    }

    /// Set the arrow key mode.
    pub fn arrow_keys(mut self, mode: ArrowKeyMode) -> Self {
        self.arrow_keys = mode;
        self
    }

    /// Opt in to the full ARIA tree pattern for ArrowLeft/ArrowRight.
    pub fn full_arrow_keys(mut self) -> Self {
        self.arrow_keys = ArrowKeyMode::Full;
        self
    }
}

/// Behavior of ArrowLeft/ArrowRight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrowKeyMode {
    /// ArrowRight expands a collapsed parent, ArrowLeft collapses an
    /// expanded one. Focus never moves.
    #[default]
    Toggle,
    /// As `Toggle`, plus ArrowRight on an expanded node focuses its first
    /// child and ArrowLeft on a collapsed node or leaf focuses its parent.
    Full,
}
