//! Domain entities - Core business objects with identity

mod character;
mod character_stats;
mod personality;

pub use character::Character;
pub use character_stats::CharacterStats;
pub use personality::{Personality, RollOutcome, DEFAULT_RATE, USER_PLACEHOLDER};
