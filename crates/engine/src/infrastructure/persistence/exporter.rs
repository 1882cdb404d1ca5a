//! Character → document export.
//!
//! Walks the stats mapping in key order and emits one node group per stat.
//! Side mappings (specialties, merit details, rote skills) are folded into
//! their skill and merit nodes instead of being written on their own.

use std::collections::{BTreeMap, BTreeSet};

use arcanum_domain::schema::{MERIT_DETAILS, SKILL_SPECIALTIES};
use arcanum_domain::{Character, CharacterStats, StatCategory, StatValue};

use super::nodes::{self, sanitize_apostrophes};
use crate::infrastructure::document::Node;
use crate::infrastructure::error::SheetError;

/// Build the full sheet document for a character.
pub fn export_character(character: &Character) -> Result<Node, SheetError> {
    let mut root = Node::parent(nodes::ROOT, Vec::new());

    if !character.notes.is_empty() {
        root.push(Node::parent(
            nodes::NOTES,
            vec![Node::text(nodes::CONTENT, character.notes.as_str())],
        ));
    }
    root.push(Node::text(nodes::SPLAT, character.splat.as_str()));

    for node in export_stats(&character.stats)? {
        root.push(node);
    }

    let personality = &character.personality;
    for message in &personality.good_messages {
        root.push(message_node(nodes::GOOD_MESSAGE, message));
    }
    for message in &personality.bad_messages {
        root.push(message_node(nodes::BAD_MESSAGE, message));
    }
    root.push(Node::text(nodes::BAD_RATE, personality.bad_rate.to_string()));
    root.push(Node::text(nodes::GOOD_RATE, personality.good_rate.to_string()));

    Ok(root)
}

/// Export the stats mapping as top-level node groups, in key order.
pub fn export_stats(stats: &CharacterStats) -> Result<Vec<Node>, SheetError> {
    let specialties = stats.tooltips(SKILL_SPECIALTIES);
    let merit_details = stats.tooltips(MERIT_DETAILS);
    let rote_skills = stats.rote_skills();

    let mut out = Vec::new();
    for (key, value) in stats {
        match StatCategory::classify(key) {
            StatCategory::Skill => {
                out.push(skill_node(key, value, specialties, rote_skills)?);
            }
            StatCategory::Merits => match value {
                StatValue::Ratings(merits) => {
                    out.extend(merits.iter().map(|(name, rating)| {
                        merit_node(name, *rating, merit_details.and_then(|d| d.get(name)))
                    }));
                }
                other => return Err(shape_error(key, "a rating map", other)),
            },
            StatCategory::Annotation => {}
            StatCategory::Labels => match value {
                StatValue::Tooltips(labels) if labels.is_empty() => {}
                StatValue::Tooltips(labels) => out.push(label_node(key, labels)),
                other => return Err(shape_error(key, "a tooltip map", other)),
            },
            StatCategory::Health => match value {
                StatValue::Health(track) => out.push(Node::parent(
                    nodes::HEALTH,
                    vec![
                        Node::text(nodes::BASHING, track.bashing.to_string()),
                        Node::text(nodes::LETHAL, track.lethal.to_string()),
                        Node::text(nodes::AGGRAVATED, track.aggravated.to_string()),
                    ],
                )),
                other => return Err(shape_error(key, "a health track", other)),
            },
            StatCategory::Weapons => match value {
                StatValue::Weapons(weapons) => {
                    for (name, weapon) in weapons {
                        let mut node = Node::parent(
                            nodes::WEAPON,
                            vec![Node::text(nodes::NAME, name.as_str())],
                        );
                        for (field, text) in weapon.details() {
                            if !text.is_empty() {
                                node.push(Node::text(field, text));
                            }
                        }
                        out.push(node);
                    }
                }
                other => return Err(shape_error(key, "a weapon map", other)),
            },
            StatCategory::Praxes => match value {
                StatValue::Praxes(praxes) => {
                    for (name, praxis) in praxes {
                        let mut node = Node::parent(
                            nodes::PRAXIS,
                            vec![Node::text(nodes::NAME, sanitize_apostrophes(name))],
                        );
                        if !praxis.tooltip.is_empty() {
                            node.push(Node::text(nodes::TOOLTIP, praxis.tooltip.as_str()));
                        }
                        node.push(Node::text(nodes::ARCANUM, praxis.arcanum.as_str()));
                        out.push(node);
                    }
                }
                other => return Err(shape_error(key, "a praxis map", other)),
            },
            StatCategory::Rotes => match value {
                StatValue::Rotes(rotes) => {
                    for (name, rote) in rotes {
                        let mut node = Node::parent(
                            nodes::ROTE,
                            vec![Node::text(nodes::NAME, sanitize_apostrophes(name))],
                        );
                        if !rote.tooltip.is_empty() {
                            node.push(Node::text(nodes::TOOLTIP, rote.tooltip.as_str()));
                        }
                        node.push(Node::text(nodes::ARCANUM, rote.arcanum.as_str()));
                        node.push(Node::text(nodes::SKILL, rote.skill.as_str()));
                        out.push(node);
                    }
                }
                other => return Err(shape_error(key, "a rote map", other)),
            },
            StatCategory::EnchItems => match value {
                StatValue::EnchItems(items) => {
                    out.extend(items.iter().map(|(name, item)| {
                        Node::parent(
                            nodes::ENCH_ITEM,
                            vec![
                                Node::text(nodes::NAME, name.as_str()),
                                Node::text(nodes::ITEM_TYPE, item.item_type.as_str()),
                                Node::text(nodes::TOOLTIP, item.tooltip.as_str()),
                                Node::text(nodes::RATING, item.rating.to_string()),
                                Node::text(nodes::MANA, item.mana.to_string()),
                                Node::text(nodes::MANA_SPENT, item.mana_spent.to_string()),
                            ],
                        )
                    }));
                }
                other => return Err(shape_error(key, "an enchanted item map", other)),
            },
            StatCategory::Other => {
                let rating = value
                    .scalar_text()
                    .ok_or_else(|| shape_error(key, "an integer or text", value))?;
                out.push(Node::parent(
                    nodes::OTHER,
                    vec![
                        Node::text(nodes::NAME, key.as_str()),
                        Node::text(nodes::RATING, rating),
                    ],
                ));
            }
        }
    }
    Ok(out)
}

fn skill_node(
    skill: &str,
    value: &StatValue,
    specialties: Option<&BTreeMap<String, String>>,
    rote_skills: Option<&BTreeSet<String>>,
) -> Result<Node, SheetError> {
    let rating = value
        .as_int()
        .ok_or_else(|| shape_error(skill, "an integer", value))?;

    let mut node = Node::parent(
        nodes::SKILL,
        vec![
            Node::text(nodes::NAME, skill),
            Node::text(nodes::RATING, rating.to_string()),
        ],
    );
    if let Some(specialty) = specialties.and_then(|s| s.get(skill)) {
        node.push(Node::text(nodes::TOOLTIP, specialty.as_str()));
    }
    if rote_skills.is_some_and(|set| set.contains(skill)) {
        node.push(Node::text(nodes::ROTE_MARKER, nodes::ROTE_MARKER_TEXT));
    }
    Ok(node)
}

fn merit_node(name: &str, rating: u32, detail: Option<&String>) -> Node {
    let mut node = Node::parent(
        nodes::MERIT,
        vec![
            Node::text(nodes::NAME, name),
            Node::text(nodes::RATING, rating.to_string()),
        ],
    );
    if let Some(detail) = detail {
        node.push(Node::text(nodes::TOOLTIP, detail.as_str()));
    }
    node
}

fn label_node(category: &str, labels: &BTreeMap<String, String>) -> Node {
    let entries = labels
        .iter()
        .map(|(name, tooltip)| {
            let mut entry =
                Node::parent(nodes::ENTRY, vec![Node::text(nodes::NAME, name.as_str())]);
            if !tooltip.is_empty() {
                entry.push(Node::text(nodes::TOOLTIP, tooltip.as_str()));
            }
            entry
        })
        .collect();
    Node::parent(nodes::label_element(category), entries)
}

fn message_node(kind: &str, message: &str) -> Node {
    Node::parent(kind, vec![Node::text(nodes::MESSAGE, message)])
}

fn shape_error(stat: &str, expected: &'static str, found: &StatValue) -> SheetError {
    SheetError::stat_shape(stat, expected, found.shape_name())
}
