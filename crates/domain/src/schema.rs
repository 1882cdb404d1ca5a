//! Stat keys and their serialization categories.
//!
//! Every stat key of a mage belongs to exactly one [`StatCategory`]. The
//! persistence layer branches on the category rather than on raw key
//! comparisons, so adding a key here is the only place a new stat needs
//! to be registered.

use serde::{Deserialize, Serialize};

// =============================================================================
// Stat name lists
// =============================================================================

pub const ATTRIBUTES: [&str; 9] = [
    "intelligence",
    "wits",
    "resolve",
    "strength",
    "dexterity",
    "stamina",
    "presence",
    "manipulation",
    "composure",
];

/// Modern-era skills. Dark-era skills (`enigmas`, `ride`, `archery`) are retired.
pub const SKILLS: [&str; 24] = [
    // Mental
    "academics",
    "computer",
    "crafts",
    "investigation",
    "medicine",
    "occult",
    "politics",
    "science",
    // Physical
    "athletics",
    "brawl",
    "drive",
    "firearms",
    "larceny",
    "stealth",
    "survival",
    "weaponry",
    // Social
    "animal ken",
    "empathy",
    "expression",
    "intimidation",
    "persuasion",
    "socialize",
    "streetwise",
    "subterfuge",
];

/// The ten arcana (power domains).
pub const ARCANA: [&str; 10] = [
    "death", "fate", "forces", "life", "matter", "mind", "prime", "spirit", "space", "time",
];

/// Free-text identity fields shown in the sheet header, one row per column.
pub const HEADERS: [[&str; 3]; 3] = [
    ["shadow name", "user id", "webhook"],
    ["concept", "virtue", "vice"],
    ["path", "order", "legacy"],
];

/// Free-text stats outside the header block.
pub const BASE_TEXT_STATS: [&str; 4] = ["name", "armor", "portrait", "nimbus"];

// =============================================================================
// Keys with special handling
// =============================================================================

pub const MERITS: &str = "merits";
pub const SKILL_SPECIALTIES: &str = "skill specialties";
pub const MERIT_DETAILS: &str = "merit details";
pub const ROTE_SKILLS: &str = "rote skills";
pub const HEALTH: &str = "health";
pub const WEAPONS: &str = "weapons";
pub const PRAXES: &str = "praxes";
pub const ROTES: &str = "rotes";
pub const ENCH_ITEMS: &str = "ench items";

pub const USER_ID: &str = "user id";
pub const GNOSIS: &str = "gnosis";
pub const MANA: &str = "mana";
pub const MANA_SPENT: &str = "mana spent";

/// Name → tooltip categories. The generic tag category is `magtool`.
pub const LABEL_CATEGORIES: [&str; 6] = [
    "conditions",
    "aspirations",
    "obsessions",
    "active spells",
    "attainments",
    "magtool",
];

/// Collections that always exist after a sheet is loaded, even when the
/// document omits them.
pub const BASELINE_COLLECTIONS: [&str; 9] = [
    MERITS,
    SKILL_SPECIALTIES,
    MERIT_DETAILS,
    ROTE_SKILLS,
    ROTES,
    HEALTH,
    ENCH_ITEMS,
    PRAXES,
    WEAPONS,
];

pub fn is_skill(key: &str) -> bool {
    SKILLS.contains(&key)
}

pub fn is_label_category(key: &str) -> bool {
    LABEL_CATEGORIES.contains(&key)
}

/// Stats that always hold text, whatever a loaded sheet made of them.
pub fn is_text_stat(key: &str) -> bool {
    HEADERS.iter().flatten().any(|name| *name == key) || BASE_TEXT_STATS.contains(&key)
}

// =============================================================================
// Classification
// =============================================================================

/// Serialization category of a stat key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatCategory {
    /// A skill rating, annotated by its specialty and rote membership
    Skill,
    /// Merit name → rating, annotated by merit details
    Merits,
    /// Side mappings folded into skills and merits; never written on their own
    Annotation,
    /// One of the six name → tooltip categories
    Labels,
    Health,
    Weapons,
    Praxes,
    Rotes,
    EnchItems,
    /// Any scalar stat, numeric or text
    Other,
}

impl StatCategory {
    /// Classify a key. Checked in priority order, first match wins.
    pub fn classify(key: &str) -> Self {
        if is_skill(key) {
            return Self::Skill;
        }
        match key {
            MERITS => Self::Merits,
            SKILL_SPECIALTIES | MERIT_DETAILS | ROTE_SKILLS => Self::Annotation,
            k if is_label_category(k) => Self::Labels,
            HEALTH => Self::Health,
            WEAPONS => Self::Weapons,
            PRAXES => Self::Praxes,
            ROTES => Self::Rotes,
            ENCH_ITEMS => Self::EnchItems,
            _ => Self::Other,
        }
    }
}
