//! Game system implementations.
//!
//! Each system supplies the default stat schema for a new character and the
//! derived-stat rules the sheet recomputes after edits.
//!
//! # Supported Systems
//!
//! - Mage: The Awakening (`mage`)

pub mod mage;

pub use mage::{default_personality, default_stats, mana_for_gnosis, new_character, update_mana};
