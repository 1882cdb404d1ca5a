extern crate self as arcanum_domain;

pub mod entities;
pub mod error;
pub mod game_systems;
pub mod schema;
pub mod value_objects;

pub use entities::{
    Character, CharacterStats, Personality, RollOutcome, DEFAULT_RATE, USER_PLACEHOLDER,
};

pub use error::DomainError;

// Re-export the mage game system
pub use game_systems::mage;

// Re-export the stat schema classifier
pub use schema::StatCategory;

pub use value_objects::{EnchantedItem, HealthTrack, Praxis, Rote, StatValue, Weapon};
