//! Character sheet operation errors.

use std::path::PathBuf;

use crate::infrastructure::error::SheetError;
use arcanum_domain::DomainError;

/// Errors that can occur during character sheet operations.
#[derive(Debug, thiserror::Error)]
pub enum CharacterSheetError {
    #[error("No character sheet at {}", .0.display())]
    SheetNotFound(PathBuf),

    #[error("A character sheet already exists at {}", .0.display())]
    SheetExists(PathBuf),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Sheet error: {0}")]
    Sheet(#[from] SheetError),
}
