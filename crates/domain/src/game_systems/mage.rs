//! Mage: The Awakening character defaults and derived stats.
//!
//! Builds the full default stat schema for a new mage and holds the one
//! derived formula the sheet owns: the mana pool granted by gnosis.

use crate::entities::{Character, CharacterStats, Personality};
use crate::schema::{
    ARCANA, ATTRIBUTES, BASE_TEXT_STATS, GNOSIS, HEADERS, MANA, MANA_SPENT, SKILLS,
};
use crate::value_objects::StatValue;

pub const SPLAT: &str = "mage";

pub const GOOD_MESSAGES: [&str; 7] = [
    "The Lie cannot withstand your will, [userID]!",
    "Reality is yours to command, [userID]!",
    "You should take the beat, [userID].",
    "Aren't I a good bot, [userID]?",
    "[userID] is a conduit to the supernal!",
    "Did you hack me, [userID]?",
    "[userID], if you were still a sleeper the majesty of this action would have awoken you!",
];

pub const BAD_MESSAGES: [&str; 8] = [
    "[userID]'s nimbus looks like a wet dishrag.",
    "The lie constricts your potential, [userID].",
    "Don't blame your bad luck on me, [userID]! I'm just a random number generator.",
    "That was just a practice roll, right [userID]?",
    "[userID] rolls like a diary farmer.",
    "Ask for a dramatic failure [userID], you know you want to!",
    "[userID], I hope that wasn't an important roll ...",
    "[userID]'s watchtower called out to the wrong soul.",
];

/// Integer stats every character sheet starts with, besides attributes,
/// skills and arcana.
const BASE_INT_STATS: [(&str, u32); 14] = [
    ("size", 5),
    ("speed", 0),
    ("defense", 0),
    ("initiative", 0),
    ("willpower", 0),
    ("willpower filled", 0),
    ("beats", 0),
    ("xp", 0),
    (GNOSIS, 1),
    ("wisdom", 7),
    (MANA, 10),
    (MANA_SPENT, 0),
    ("arcane beats", 0),
    ("arcane xp", 0),
];

/// Mana pool for a gnosis rating.
pub fn mana_for_gnosis(gnosis: u32) -> u32 {
    match gnosis {
        0..=4 => 9 + gnosis,
        5..=8 => 15 + 5 * (gnosis - 5),
        9 => 50,
        _ => 75,
    }
}

/// Full default stat schema for a new mage. Collections (including the
/// label categories) start empty.
pub fn default_stats() -> CharacterStats {
    let mut stats = CharacterStats::baseline();

    for name in ATTRIBUTES.iter().chain(SKILLS.iter()).chain(ARCANA.iter()) {
        stats.insert(*name, StatValue::Int(0));
    }
    for (name, value) in BASE_INT_STATS {
        stats.insert(name, StatValue::Int(value));
    }

    for name in HEADERS.iter().flatten().chain(BASE_TEXT_STATS.iter()) {
        stats.insert(*name, StatValue::text(""));
    }
    stats
}

pub fn default_personality() -> Personality {
    Personality::new(
        GOOD_MESSAGES.iter().map(|m| m.to_string()).collect(),
        BAD_MESSAGES.iter().map(|m| m.to_string()).collect(),
    )
}

/// A brand-new mage with default stats and messages.
pub fn new_character() -> Character {
    Character::new(SPLAT, default_stats()).with_personality(default_personality())
}

/// Recompute the mana pool from gnosis. A sheet without an integer gnosis
/// is left alone.
pub fn update_mana(character: &mut Character) {
    if let Some(gnosis) = character.stats.int(GNOSIS) {
        character
            .stats
            .insert(MANA, StatValue::Int(mana_for_gnosis(gnosis)));
    }
}
