//! Document → character import.
//!
//! The inverse of the exporter. Every baseline collection exists after an
//! import even when the document omits it; parsed content is laid over it.

use std::str::FromStr;

use arcanum_domain::schema::{
    ENCH_ITEMS, HEALTH, MERITS, MERIT_DETAILS, PRAXES, ROTES, ROTE_SKILLS, SKILL_SPECIALTIES,
    USER_ID, WEAPONS,
};
use arcanum_domain::{
    mage, Character, CharacterStats, EnchantedItem, HealthTrack, Praxis, Rote, StatValue, Weapon,
};

use super::nodes;
use crate::infrastructure::document::Node;
use crate::infrastructure::error::SheetError;

/// Build a character from a sheet document.
///
/// Parsed stats are merged over a new mage's defaults. A document with a
/// rate node has its message lists taken as written. Without one, missing
/// message lists and rates keep their defaults.
pub fn import_character(root: &Node) -> Result<Character, SheetError> {
    let mut character = mage::new_character();
    character.stats.merge_from(import_stats(root)?);

    character.notes = root
        .find(nodes::NOTES)
        .map(|notes| notes.child_text_or_default(nodes::CONTENT))
        .unwrap_or_default();
    character.splat = root.child_text_or_default(nodes::SPLAT);

    // Saved sheets always carry both rates, so their lists are authoritative
    // even when empty. Older sheets without rates fall back to the defaults.
    let saved_personality =
        root.find(nodes::GOOD_RATE).is_some() || root.find(nodes::BAD_RATE).is_some();
    let good = messages(root, nodes::GOOD_MESSAGE);
    if saved_personality || !good.is_empty() {
        character.personality.good_messages = good;
    }
    let bad = messages(root, nodes::BAD_MESSAGE);
    if saved_personality || !bad.is_empty() {
        character.personality.bad_messages = bad;
    }

    if let Some(node) = root.find(nodes::GOOD_RATE) {
        character.personality.good_rate = int_text(node)?;
    }
    if let Some(node) = root.find(nodes::BAD_RATE) {
        character.personality.bad_rate = int_text(node)?;
    }

    Ok(character)
}

/// Parse the stats mapping out of a sheet document.
pub fn import_stats(root: &Node) -> Result<CharacterStats, SheetError> {
    let mut stats = CharacterStats::baseline();
    let mut skills = 0usize;
    let mut others = 0usize;

    for node in root.children() {
        match node.name() {
            nodes::SKILL => {
                import_skill(node, &mut stats)?;
                skills += 1;
            }
            nodes::MERIT => import_merit(node, &mut stats)?,
            nodes::HEALTH => {
                let track = HealthTrack::with_damage(
                    required_int(node, nodes::BASHING)?,
                    required_int(node, nodes::LETHAL)?,
                    required_int(node, nodes::AGGRAVATED)?,
                );
                stats.insert(HEALTH, StatValue::Health(track));
            }
            nodes::WEAPON => {
                let name = required_text(node, nodes::NAME)?;
                let weapon = Weapon {
                    damage: required_int(node, "damage")?,
                    range: node.child_text_or_default("range"),
                    clip: required_int(node, "clip")?,
                    init: required_int(node, "init")?,
                    strength: required_int(node, "str")?,
                    size: required_int(node, "size")?,
                };
                stats.weapons_mut()?.insert(name, weapon);
            }
            nodes::PRAXIS => {
                let name = required_text(node, nodes::NAME)?;
                let praxis = Praxis::new(required_text(node, nodes::ARCANUM)?)
                    .with_tooltip(node.child_text_or_default(nodes::TOOLTIP));
                stats.praxes_mut()?.insert(name, praxis);
            }
            nodes::ROTE => {
                let name = required_text(node, nodes::NAME)?;
                let rote = Rote::new(
                    required_text(node, nodes::ARCANUM)?,
                    required_text(node, nodes::SKILL)?,
                )
                .with_tooltip(node.child_text_or_default(nodes::TOOLTIP));
                stats.rotes_mut()?.insert(name, rote);
            }
            nodes::ENCH_ITEM => {
                let name = required_text(node, nodes::NAME)?;
                let item = EnchantedItem::new(
                    required_text(node, nodes::ITEM_TYPE)?,
                    required_int(node, nodes::RATING)?,
                    required_int(node, nodes::MANA)?,
                )
                .with_tooltip(node.child_text_or_default(nodes::TOOLTIP))
                .with_spent(required_int(node, nodes::MANA_SPENT)?);
                stats.ench_items_mut()?.insert(name, item);
            }
            nodes::OTHER => {
                let name = required_text(node, nodes::NAME)?;
                let value = other_value(&name, node.child_text(nodes::RATING));
                stats.insert(name, value);
                others += 1;
            }
            name => {
                if let Some(category) = nodes::label_category(name) {
                    import_labels(node, category, &mut stats)?;
                } else if !nodes::is_known_top_level(name) {
                    tracing::warn!(node = %name, "Ignoring unrecognized sheet node");
                }
            }
        }
    }

    tracing::debug!(
        skills,
        others,
        merits = count(&stats, MERITS),
        specialties = count(&stats, SKILL_SPECIALTIES),
        merit_details = count(&stats, MERIT_DETAILS),
        rote_skills = count(&stats, ROTE_SKILLS),
        weapons = count(&stats, WEAPONS),
        praxes = count(&stats, PRAXES),
        rotes = count(&stats, ROTES),
        ench_items = count(&stats, ENCH_ITEMS),
        "Imported sheet stats"
    );

    Ok(stats)
}

fn import_skill(node: &Node, stats: &mut CharacterStats) -> Result<(), SheetError> {
    let name = required_text(node, nodes::NAME)?;
    let rating: u32 = required_int(node, nodes::RATING)?;

    if let Some(specialty) = node.find(nodes::TOOLTIP) {
        stats.tooltips_mut(SKILL_SPECIALTIES)?.insert(
            name.clone(),
            specialty.text_content().unwrap_or_default().to_string(),
        );
    }
    if node.find(nodes::ROTE_MARKER).is_some() {
        stats.rote_skills_mut()?.insert(name.clone());
    }
    stats.insert(name, StatValue::Int(rating));
    Ok(())
}

fn import_merit(node: &Node, stats: &mut CharacterStats) -> Result<(), SheetError> {
    let name = required_text(node, nodes::NAME)?;
    let rating: u32 = required_int(node, nodes::RATING)?;

    if let Some(detail) = node.find(nodes::TOOLTIP) {
        stats.tooltips_mut(MERIT_DETAILS)?.insert(
            name.clone(),
            detail.text_content().unwrap_or_default().to_string(),
        );
    }
    stats.merits_mut()?.insert(name, rating);
    Ok(())
}

fn import_labels(
    node: &Node,
    category: &str,
    stats: &mut CharacterStats,
) -> Result<(), SheetError> {
    let labels = stats.tooltips_mut(category)?;
    for entry in node.find_all(nodes::ENTRY) {
        let name = required_text(entry, nodes::NAME)?;
        labels.insert(name, entry.child_text_or_default(nodes::TOOLTIP));
    }
    Ok(())
}

/// Scalar stat from an `other` node's rating text.
///
/// Absent text is the empty string. Digit-only text becomes an integer,
/// except for the user id, which must keep its exact text.
fn other_value(name: &str, rating: Option<&str>) -> StatValue {
    let Some(text) = rating else {
        return StatValue::text("");
    };
    if name != USER_ID && text.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(value) = text.parse::<u32>() {
            return StatValue::Int(value);
        }
    }
    StatValue::text(text)
}

fn messages(root: &Node, kind: &str) -> Vec<String> {
    root.find_all(kind)
        .map(|node| node.child_text_or_default(nodes::MESSAGE))
        .collect()
}

fn count(stats: &CharacterStats, key: &str) -> usize {
    match stats.get(key) {
        Some(StatValue::Set(set)) => set.len(),
        Some(StatValue::Ratings(map)) => map.len(),
        Some(StatValue::Tooltips(map)) => map.len(),
        Some(StatValue::Weapons(map)) => map.len(),
        Some(StatValue::EnchItems(map)) => map.len(),
        Some(StatValue::Praxes(map)) => map.len(),
        Some(StatValue::Rotes(map)) => map.len(),
        _ => 0,
    }
}

/// Text of a required sub-node. A present node with no text reads as "".
fn required_text(node: &Node, child: &str) -> Result<String, SheetError> {
    node.find(child)
        .map(|found| found.text_content().unwrap_or_default().to_string())
        .ok_or_else(|| SheetError::missing_node(node.name(), child))
}

fn required_int<T: FromStr>(node: &Node, child: &str) -> Result<T, SheetError> {
    let found = node
        .find(child)
        .ok_or_else(|| SheetError::missing_node(node.name(), child))?;
    int_text(found)
}

fn int_text<T: FromStr>(node: &Node) -> Result<T, SheetError> {
    let text = node.text_content().unwrap_or_default();
    text.trim()
        .parse()
        .map_err(|_| SheetError::invalid_integer(node.name(), text))
}
