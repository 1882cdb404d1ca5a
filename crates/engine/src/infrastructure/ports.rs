//! Port traits for infrastructure boundaries.
//!
//! These are the seams where the sheet service touches the outside world:
//! sheet storage and randomness. Tests swap in fixed implementations.

use std::path::Path;

use arcanum_domain::Character;

use super::error::SheetError;

// =============================================================================
// Sheet Storage Port
// =============================================================================

/// Saves and loads whole character sheets.
pub trait SheetStorePort: Send + Sync {
    /// Write the character to `path`, replacing any existing sheet.
    fn save(&self, character: &Character, path: &Path) -> Result<(), SheetError>;

    /// Write the character to `path` only if no sheet exists there. An
    /// existing file fails with an `AlreadyExists` I/O error.
    fn create(&self, character: &Character, path: &Path) -> Result<(), SheetError>;

    /// Read the character stored at `path`.
    fn load(&self, path: &Path) -> Result<Character, SheetError>;

    /// Serialize the character without touching the filesystem.
    fn render(&self, character: &Character) -> Result<String, SheetError>;

    /// Deserialize a character from sheet text.
    fn parse(&self, text: &str) -> Result<Character, SheetError>;
}

// =============================================================================
// Random Port (for testing)
// =============================================================================

pub trait RandomPort: Send + Sync {
    /// Uniform integer in `min..=max`.
    fn gen_range(&self, min: i32, max: i32) -> i32;
}
