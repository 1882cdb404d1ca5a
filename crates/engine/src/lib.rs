//! Arcanum Engine library.
//!
//! Saves and loads mage character sheets.
//!
//! ## Structure
//!
//! - `use_cases/` - Sheet creation, edits, round-trip checks, flavor messages
//! - `infrastructure/` - Document codec, sheet store, settings (ports + adapters)

pub mod infrastructure;
pub mod use_cases;
