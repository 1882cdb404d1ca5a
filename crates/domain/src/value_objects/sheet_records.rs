//! Structured records stored inside mage stat collections
//!
//! Weapons, enchanted items, praxes, rotes and the health track. Each record
//! is keyed by name in its owning collection, so none of them carries its own
//! name field.

use serde::{Deserialize, Serialize};

// =============================================================================
// Health
// =============================================================================

/// Health boxes: the derived maximum plus the three damage tracks.
///
/// The maximum is recomputed from attributes and is never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthTrack {
    pub maximum: u32,
    pub bashing: u32,
    pub lethal: u32,
    pub aggravated: u32,
}

impl HealthTrack {
    pub fn new() -> Self {
        Self::default()
    }

    /// A track with damage recorded and the maximum left at zero.
    pub fn with_damage(bashing: u32, lethal: u32, aggravated: u32) -> Self {
        Self {
            maximum: 0,
            bashing,
            lethal,
            aggravated,
        }
    }

    /// Build from the four-slot layout `[maximum, bashing, lethal, aggravated]`.
    pub fn from_slots(slots: [u32; 4]) -> Self {
        let [maximum, bashing, lethal, aggravated] = slots;
        Self {
            maximum,
            bashing,
            lethal,
            aggravated,
        }
    }

    pub fn slots(&self) -> [u32; 4] {
        [self.maximum, self.bashing, self.lethal, self.aggravated]
    }
}

// =============================================================================
// Weapons
// =============================================================================

/// A weapon profile. `range` is free text and may be blank for melee weapons.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weapon {
    pub damage: i32,
    pub range: String,
    pub clip: i32,
    /// Initiative modifier, usually zero or negative
    pub init: i32,
    /// Strength requirement
    #[serde(rename = "str")]
    pub strength: i32,
    pub size: i32,
}

impl Weapon {
    pub fn new(damage: i32) -> Self {
        Self {
            damage,
            ..Self::default()
        }
    }

    pub fn with_range(mut self, range: impl Into<String>) -> Self {
        self.range = range.into();
        self
    }

    pub fn with_clip(mut self, clip: i32) -> Self {
        self.clip = clip;
        self
    }

    pub fn with_init(mut self, init: i32) -> Self {
        self.init = init;
        self
    }

    pub fn with_strength(mut self, strength: i32) -> Self {
        self.strength = strength;
        self
    }

    pub fn with_size(mut self, size: i32) -> Self {
        self.size = size;
        self
    }

    /// Detail fields as `(field name, text)` in sheet order.
    pub fn details(&self) -> [(&'static str, String); 6] {
        [
            ("damage", self.damage.to_string()),
            ("range", self.range.clone()),
            ("clip", self.clip.to_string()),
            ("init", self.init.to_string()),
            ("str", self.strength.to_string()),
            ("size", self.size.to_string()),
        ]
    }
}

// =============================================================================
// Enchanted items
// =============================================================================

/// An enchanted item with its own mana pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnchantedItem {
    pub item_type: String,
    pub tooltip: String,
    pub rating: u32,
    /// Mana capacity
    pub mana: u32,
    pub mana_spent: u32,
}

impl EnchantedItem {
    pub fn new(item_type: impl Into<String>, rating: u32, mana: u32) -> Self {
        Self {
            item_type: item_type.into(),
            tooltip: String::new(),
            rating,
            mana,
            mana_spent: 0,
        }
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = tooltip.into();
        self
    }

    pub fn with_spent(mut self, mana_spent: u32) -> Self {
        self.mana_spent = mana_spent;
        self
    }

    pub fn remaining_mana(&self) -> u32 {
        self.mana.saturating_sub(self.mana_spent)
    }
}

// =============================================================================
// Praxes and rotes
// =============================================================================

/// A praxis: a spell mastered through practice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Praxis {
    pub tooltip: String,
    pub arcanum: String,
}

impl Praxis {
    pub fn new(arcanum: impl Into<String>) -> Self {
        Self {
            tooltip: String::new(),
            arcanum: arcanum.into(),
        }
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = tooltip.into();
        self
    }
}

/// A rote: a codified spell tied to an arcanum and a skill.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rote {
    pub tooltip: String,
    pub arcanum: String,
    pub skill: String,
}

impl Rote {
    pub fn new(arcanum: impl Into<String>, skill: impl Into<String>) -> Self {
        Self {
            tooltip: String::new(),
            arcanum: arcanum.into(),
            skill: skill.into(),
        }
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = tooltip.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_slots_round_trip() {
        let track = HealthTrack::from_slots([7, 1, 2, 3]);
        assert_eq!(track.slots(), [7, 1, 2, 3]);
    }

    #[test]
    fn health_with_damage_leaves_maximum_unset() {
        let track = HealthTrack::with_damage(2, 0, 1);
        assert_eq!(track.maximum, 0);
        assert_eq!(track.slots(), [0, 2, 0, 1]);
    }

    #[test]
    fn weapon_details_keep_sheet_order() {
        let weapon = Weapon::new(2)
            .with_range("20/40/80")
            .with_clip(6)
            .with_init(-1)
            .with_strength(2)
            .with_size(1);
        let names: Vec<_> = weapon.details().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["damage", "range", "clip", "init", "str", "size"]);
        assert_eq!(weapon.details()[3].1, "-1");
    }

    #[test]
    fn weapon_serializes_strength_as_str() {
        let json = serde_json::to_value(Weapon::new(1).with_strength(3)).expect("serialize");
        assert_eq!(json["str"], 3);
    }

    #[test]
    fn remaining_mana_saturates() {
        let item = EnchantedItem::new("imbued", 2, 3).with_spent(5);
        assert_eq!(item.remaining_mana(), 0);
        assert_eq!(EnchantedItem::new("artifact", 3, 10).with_spent(4).remaining_mana(), 6);
    }
}
