//! Character entity - a mage and everything its sheet records
//!
//! The stats mapping carries the sheet itself. Notes, the splat label and the
//! flavor-message personality sit beside it and are saved with the sheet.

use serde::{Deserialize, Serialize};

use super::character_stats::CharacterStats;
use super::personality::Personality;
use crate::error::DomainError;
use crate::game_systems::mage;
use crate::schema::{self, MERIT_DETAILS, SKILL_SPECIALTIES, USER_ID};
use crate::value_objects::{EnchantedItem, Praxis, Rote, StatValue, Weapon};

/// A player character sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub stats: CharacterStats,
    /// Free-text notes; omitted from saved sheets when empty
    pub notes: String,
    /// Character type label (e.g. "mage")
    pub splat: String,
    pub personality: Personality,
}

impl Character {
    pub fn new(splat: impl Into<String>, stats: CharacterStats) -> Self {
        Self {
            stats,
            notes: String::new(),
            splat: splat.into(),
            personality: Personality::default(),
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn with_personality(mut self, personality: Personality) -> Self {
        self.personality = personality;
        self
    }

    /// The user identifier used when rendering flavor messages.
    pub fn user_id(&self) -> &str {
        self.stats.text(USER_ID).unwrap_or_default()
    }

    /// Recompute derived stats after edits.
    pub fn update_derivatives(&mut self) {
        mage::update_mana(self);
    }

    /// Apply a scalar edit pushed back from a front end.
    ///
    /// The stat must already exist. Schema text stats always take the raw
    /// value as text, even when a reload read digit-only text back as a number.
    /// Other integer stats only accept whole numbers. Collections have
    /// dedicated methods.
    pub fn set_stat(&mut self, name: &str, raw: &str) -> Result<(), DomainError> {
        let current = self
            .stats
            .get(name)
            .ok_or_else(|| DomainError::not_found("Stat", name))?;

        let value = match current {
            StatValue::Int(_) | StatValue::Text(_) if schema::is_text_stat(name) => {
                StatValue::text(raw)
            }
            StatValue::Int(_) => {
                let parsed = raw.trim().parse::<u32>().map_err(|_| {
                    DomainError::parse(format!("'{}' expects a whole number, got '{}'", name, raw))
                })?;
                StatValue::Int(parsed)
            }
            StatValue::Text(_) => StatValue::text(raw),
            other => {
                return Err(DomainError::kind_mismatch(
                    name,
                    "an integer or text",
                    other.shape_name(),
                ))
            }
        };

        self.stats.insert(name, value);
        Ok(())
    }

    pub fn add_merit(
        &mut self,
        name: impl Into<String>,
        rating: u32,
        detail: Option<String>,
    ) -> Result<(), DomainError> {
        let name = required_name("Merit", name.into())?;
        if let Some(detail) = detail {
            self.stats
                .tooltips_mut(MERIT_DETAILS)?
                .insert(name.clone(), detail);
        }
        self.stats.merits_mut()?.insert(name, rating);
        Ok(())
    }

    pub fn set_specialty(
        &mut self,
        skill: &str,
        specialty: impl Into<String>,
    ) -> Result<(), DomainError> {
        if !schema::is_skill(skill) {
            return Err(DomainError::not_found("Skill", skill));
        }
        self.stats
            .tooltips_mut(SKILL_SPECIALTIES)?
            .insert(skill.to_string(), specialty.into());
        Ok(())
    }

    /// Flip a skill's rote membership. Returns whether it is now a rote skill.
    pub fn toggle_rote_skill(&mut self, skill: &str) -> Result<bool, DomainError> {
        if !schema::is_skill(skill) {
            return Err(DomainError::not_found("Skill", skill));
        }
        let rote_skills = self.stats.rote_skills_mut()?;
        if rote_skills.remove(skill) {
            Ok(false)
        } else {
            rote_skills.insert(skill.to_string());
            Ok(true)
        }
    }

    /// Add or replace an entry in one of the label categories.
    pub fn set_label(
        &mut self,
        category: &str,
        name: impl Into<String>,
        tooltip: impl Into<String>,
    ) -> Result<(), DomainError> {
        if !schema::is_label_category(category) {
            return Err(DomainError::validation(format!(
                "'{}' is not a label category",
                category
            )));
        }
        let name = required_name("Label", name.into())?;
        self.stats
            .tooltips_mut(category)?
            .insert(name, tooltip.into());
        Ok(())
    }

    pub fn add_weapon(&mut self, name: impl Into<String>, weapon: Weapon) -> Result<(), DomainError> {
        let name = required_name("Weapon", name.into())?;
        self.stats.weapons_mut()?.insert(name, weapon);
        Ok(())
    }

    pub fn add_praxis(&mut self, name: impl Into<String>, praxis: Praxis) -> Result<(), DomainError> {
        let name = required_name("Praxis", name.into())?;
        self.stats.praxes_mut()?.insert(name, praxis);
        Ok(())
    }

    pub fn add_rote(&mut self, name: impl Into<String>, rote: Rote) -> Result<(), DomainError> {
        let name = required_name("Rote", name.into())?;
        self.stats.rotes_mut()?.insert(name, rote);
        Ok(())
    }

    pub fn add_ench_item(
        &mut self,
        name: impl Into<String>,
        item: EnchantedItem,
    ) -> Result<(), DomainError> {
        let name = required_name("Enchanted item", name.into())?;
        if item.mana_spent > item.mana {
            return Err(DomainError::validation(format!(
                "{} has spent {} of {} mana",
                name, item.mana_spent, item.mana
            )));
        }
        self.stats.ench_items_mut()?.insert(name, item);
        Ok(())
    }

    /// Record damage on the health track. The maximum is left untouched.
    pub fn set_damage(&mut self, bashing: u32, lethal: u32, aggravated: u32) -> Result<(), DomainError> {
        let health = self.stats.health_mut()?;
        health.bashing = bashing;
        health.lethal = lethal;
        health.aggravated = aggravated;
        Ok(())
    }
}

fn required_name(entity: &str, name: String) -> Result<String, DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::validation(format!(
            "{} name cannot be empty",
            entity
        )));
    }
    Ok(name)
}
