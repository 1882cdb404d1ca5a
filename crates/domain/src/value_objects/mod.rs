//! Value objects - Immutable objects defined by their attributes

mod sheet_records;
mod stat_value;

// Records stored inside stat collections
pub use sheet_records::{EnchantedItem, HealthTrack, Praxis, Rote, Weapon};

// Typed stat values
pub use stat_value::StatValue;
