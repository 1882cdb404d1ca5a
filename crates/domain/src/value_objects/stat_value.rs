//! Typed stat values
//!
//! A stat is either a scalar (`Int` / `Text`) or one of the collection shapes
//! a mage sheet stores. Collections are ordered by name so that saved sheets
//! are stable from one save to the next.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::sheet_records::{EnchantedItem, HealthTrack, Praxis, Rote, Weapon};

/// The value stored under one stat key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum StatValue {
    /// Attributes, skills, arcana, pools
    Int(u32),
    /// Identity fields and other free text
    Text(String),
    /// Name membership (rote skills)
    Set(BTreeSet<String>),
    /// Name → rating (merits)
    Ratings(BTreeMap<String, u32>),
    /// Name → tooltip (labels, specialties, merit details)
    Tooltips(BTreeMap<String, String>),
    Health(HealthTrack),
    Weapons(BTreeMap<String, Weapon>),
    EnchItems(BTreeMap<String, EnchantedItem>),
    Praxes(BTreeMap<String, Praxis>),
    Rotes(BTreeMap<String, Rote>),
}

impl StatValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Short description of the value's shape, used in error messages.
    pub fn shape_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "an integer",
            Self::Text(_) => "text",
            Self::Set(_) => "a name set",
            Self::Ratings(_) => "a rating map",
            Self::Tooltips(_) => "a tooltip map",
            Self::Health(_) => "a health track",
            Self::Weapons(_) => "a weapon map",
            Self::EnchItems(_) => "an enchanted item map",
            Self::Praxes(_) => "a praxis map",
            Self::Rotes(_) => "a rote map",
        }
    }

    /// Text form of a scalar value; `None` for collections.
    pub fn scalar_text(&self) -> Option<String> {
        match self {
            Self::Int(value) => Some(value.to_string()),
            Self::Text(value) => Some(value.clone()),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<u32> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Whether the value is a collection with no entries.
    ///
    /// Scalars and the health track are never considered empty.
    pub fn is_empty_collection(&self) -> bool {
        match self {
            Self::Set(set) => set.is_empty(),
            Self::Ratings(map) => map.is_empty(),
            Self::Tooltips(map) => map.is_empty(),
            Self::Weapons(map) => map.is_empty(),
            Self::EnchItems(map) => map.is_empty(),
            Self::Praxes(map) => map.is_empty(),
            Self::Rotes(map) => map.is_empty(),
            Self::Int(_) | Self::Text(_) | Self::Health(_) => false,
        }
    }
}

impl From<u32> for StatValue {
    fn from(value: u32) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for StatValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for StatValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<HealthTrack> for StatValue {
    fn from(value: HealthTrack) -> Self {
        Self::Health(value)
    }
}
