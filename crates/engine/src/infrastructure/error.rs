//! Sheet persistence error types.
//!
//! One error type covers every way a save or load can fail, so callers get a
//! single `Result` from the sheet store regardless of where the fault was.

use arcanum_domain::DomainError;
use thiserror::Error;

use super::document::DocumentError;

/// Failure while saving or loading a character sheet.
#[derive(Debug, Error)]
pub enum SheetError {
    /// A required sub-node is absent from the document.
    #[error("Malformed sheet: <{parent}> has no <{child}>")]
    MissingNode { parent: String, child: String },

    /// A numeric sub-node holds text that is not an integer.
    #[error("Malformed sheet: <{node}> expects a number, got '{text}'")]
    InvalidInteger { node: String, text: String },

    /// A stat holds a value whose shape does not fit its category.
    #[error("Stat '{stat}' holds {found}, expected {expected}")]
    StatShape {
        stat: String,
        expected: &'static str,
        found: &'static str,
    },

    /// The text is not a well-formed document.
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    /// A model edit was rejected.
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SheetError {
    pub fn missing_node(parent: impl Into<String>, child: impl Into<String>) -> Self {
        Self::MissingNode {
            parent: parent.into(),
            child: child.into(),
        }
    }

    pub fn invalid_integer(node: impl Into<String>, text: impl Into<String>) -> Self {
        Self::InvalidInteger {
            node: node.into(),
            text: text.into(),
        }
    }

    pub fn stat_shape(stat: impl Into<String>, expected: &'static str, found: &'static str) -> Self {
        Self::StatShape {
            stat: stat.into(),
            expected,
            found,
        }
    }

    /// Whether the error came from the sheet contents rather than the
    /// filesystem.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::MissingNode { .. } | Self::InvalidInteger { .. } | Self::Document(_)
        )
    }
}
