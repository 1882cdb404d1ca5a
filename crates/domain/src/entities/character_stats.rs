//! Character stats - the name → value mapping behind a mage sheet

use std::collections::{btree_map, BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::schema::{
    BASELINE_COLLECTIONS, ENCH_ITEMS, HEALTH, LABEL_CATEGORIES, MERITS, PRAXES, ROTES,
    ROTE_SKILLS, WEAPONS,
};
use crate::value_objects::{EnchantedItem, HealthTrack, Praxis, Rote, StatValue, Weapon};

/// Stat name → value, ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterStats {
    stats: BTreeMap<String, StatValue>,
}

impl CharacterStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stats holding only the collections that must exist after a load:
    /// the nine baseline collections and the six label categories, all empty.
    pub fn baseline() -> Self {
        let mut stats = Self::new();
        for key in BASELINE_COLLECTIONS {
            stats.insert(key, empty_collection(key));
        }
        for key in LABEL_CATEGORIES {
            stats.insert(key, StatValue::Tooltips(BTreeMap::new()));
        }
        stats
    }

    pub fn with_stat(mut self, name: impl Into<String>, value: impl Into<StatValue>) -> Self {
        self.stats.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&StatValue> {
        self.stats.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut StatValue> {
        self.stats.get_mut(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: StatValue) -> Option<StatValue> {
        self.stats.insert(name.into(), value)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.stats.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, StatValue> {
        self.stats.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.stats.keys().map(String::as_str)
    }

    /// Overlay `other` on top of these stats. Keys missing from `other` keep
    /// their current value.
    pub fn merge_from(&mut self, other: CharacterStats) {
        self.stats.extend(other.stats);
    }

    // -------------------------------------------------------------------------
    // Typed reads
    // -------------------------------------------------------------------------

    pub fn int(&self, name: &str) -> Option<u32> {
        self.get(name).and_then(StatValue::as_int)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(StatValue::as_text)
    }

    /// Name → tooltip mapping stored under `name` (labels and side mappings).
    pub fn tooltips(&self, name: &str) -> Option<&BTreeMap<String, String>> {
        match self.get(name) {
            Some(StatValue::Tooltips(map)) => Some(map),
            _ => None,
        }
    }

    pub fn merits(&self) -> Option<&BTreeMap<String, u32>> {
        match self.get(MERITS) {
            Some(StatValue::Ratings(map)) => Some(map),
            _ => None,
        }
    }

    pub fn rote_skills(&self) -> Option<&BTreeSet<String>> {
        match self.get(ROTE_SKILLS) {
            Some(StatValue::Set(set)) => Some(set),
            _ => None,
        }
    }

    pub fn health(&self) -> Option<&HealthTrack> {
        match self.get(HEALTH) {
            Some(StatValue::Health(track)) => Some(track),
            _ => None,
        }
    }

    pub fn weapons(&self) -> Option<&BTreeMap<String, Weapon>> {
        match self.get(WEAPONS) {
            Some(StatValue::Weapons(map)) => Some(map),
            _ => None,
        }
    }

    pub fn ench_items(&self) -> Option<&BTreeMap<String, EnchantedItem>> {
        match self.get(ENCH_ITEMS) {
            Some(StatValue::EnchItems(map)) => Some(map),
            _ => None,
        }
    }

    pub fn praxes(&self) -> Option<&BTreeMap<String, Praxis>> {
        match self.get(PRAXES) {
            Some(StatValue::Praxes(map)) => Some(map),
            _ => None,
        }
    }

    pub fn rotes(&self) -> Option<&BTreeMap<String, Rote>> {
        match self.get(ROTES) {
            Some(StatValue::Rotes(map)) => Some(map),
            _ => None,
        }
    }

    // -------------------------------------------------------------------------
    // Typed writes
    // -------------------------------------------------------------------------

    /// The value under `name`, inserting the key's empty collection first
    /// when it is missing.
    fn collection_mut(&mut self, name: &str) -> &mut StatValue {
        self.stats
            .entry(name.to_string())
            .or_insert_with(|| empty_collection(name))
    }

    pub fn tooltips_mut(&mut self, name: &str) -> Result<&mut BTreeMap<String, String>, DomainError> {
        match self.collection_mut(name) {
            StatValue::Tooltips(map) => Ok(map),
            other => Err(DomainError::kind_mismatch(
                name,
                "a tooltip map",
                other.shape_name(),
            )),
        }
    }

    pub fn merits_mut(&mut self) -> Result<&mut BTreeMap<String, u32>, DomainError> {
        match self.collection_mut(MERITS) {
            StatValue::Ratings(map) => Ok(map),
            other => Err(DomainError::kind_mismatch(
                MERITS,
                "a rating map",
                other.shape_name(),
            )),
        }
    }

    pub fn rote_skills_mut(&mut self) -> Result<&mut BTreeSet<String>, DomainError> {
        match self.collection_mut(ROTE_SKILLS) {
            StatValue::Set(set) => Ok(set),
            other => Err(DomainError::kind_mismatch(
                ROTE_SKILLS,
                "a name set",
                other.shape_name(),
            )),
        }
    }

    pub fn health_mut(&mut self) -> Result<&mut HealthTrack, DomainError> {
        match self.collection_mut(HEALTH) {
            StatValue::Health(track) => Ok(track),
            other => Err(DomainError::kind_mismatch(
                HEALTH,
                "a health track",
                other.shape_name(),
            )),
        }
    }

    pub fn weapons_mut(&mut self) -> Result<&mut BTreeMap<String, Weapon>, DomainError> {
        match self.collection_mut(WEAPONS) {
            StatValue::Weapons(map) => Ok(map),
            other => Err(DomainError::kind_mismatch(
                WEAPONS,
                "a weapon map",
                other.shape_name(),
            )),
        }
    }

    pub fn ench_items_mut(&mut self) -> Result<&mut BTreeMap<String, EnchantedItem>, DomainError> {
        match self.collection_mut(ENCH_ITEMS) {
            StatValue::EnchItems(map) => Ok(map),
            other => Err(DomainError::kind_mismatch(
                ENCH_ITEMS,
                "an enchanted item map",
                other.shape_name(),
            )),
        }
    }

    pub fn praxes_mut(&mut self) -> Result<&mut BTreeMap<String, Praxis>, DomainError> {
        match self.collection_mut(PRAXES) {
            StatValue::Praxes(map) => Ok(map),
            other => Err(DomainError::kind_mismatch(
                PRAXES,
                "a praxis map",
                other.shape_name(),
            )),
        }
    }

    pub fn rotes_mut(&mut self) -> Result<&mut BTreeMap<String, Rote>, DomainError> {
        match self.collection_mut(ROTES) {
            StatValue::Rotes(map) => Ok(map),
            other => Err(DomainError::kind_mismatch(
                ROTES,
                "a rote map",
                other.shape_name(),
            )),
        }
    }
}

/// The empty value for a collection key. Unknown keys get an empty tooltip
/// map, which is the shape of every label category and side mapping.
fn empty_collection(name: &str) -> StatValue {
    match name {
        MERITS => StatValue::Ratings(BTreeMap::new()),
        ROTE_SKILLS => StatValue::Set(BTreeSet::new()),
        HEALTH => StatValue::Health(HealthTrack::new()),
        WEAPONS => StatValue::Weapons(BTreeMap::new()),
        ENCH_ITEMS => StatValue::EnchItems(BTreeMap::new()),
        PRAXES => StatValue::Praxes(BTreeMap::new()),
        ROTES => StatValue::Rotes(BTreeMap::new()),
        _ => StatValue::Tooltips(BTreeMap::new()),
    }
}

impl<'a> IntoIterator for &'a CharacterStats {
    type Item = (&'a String, &'a StatValue);
    type IntoIter = btree_map::Iter<'a, String, StatValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.stats.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_has_every_required_collection() {
        let stats = CharacterStats::baseline();
        for key in BASELINE_COLLECTIONS {
            assert!(stats.contains_key(key), "missing {key}");
            let value = stats.get(key).expect("present");
            assert!(
                value.is_empty_collection() || *value == StatValue::Health(HealthTrack::new()),
                "{key} is not empty"
            );
        }
        for key in LABEL_CATEGORIES {
            assert_eq!(stats.tooltips(key).map(BTreeMap::len), Some(0));
        }
        assert_eq!(stats.health().map(HealthTrack::slots), Some([0, 0, 0, 0]));
    }

    #[test]
    fn merge_only_overwrites_present_keys() {
        let mut stats = CharacterStats::new()
            .with_stat("gnosis", 1u32)
            .with_stat("wisdom", 7u32);
        stats.merge_from(CharacterStats::new().with_stat("gnosis", 3u32));

        assert_eq!(stats.int("gnosis"), Some(3));
        assert_eq!(stats.int("wisdom"), Some(7));
    }

    #[test]
    fn typed_reads_reject_other_shapes() {
        let stats = CharacterStats::new().with_stat(HEALTH, "bad");
        assert!(stats.health().is_none());
        assert_eq!(stats.text(HEALTH), Some("bad"));
        assert_eq!(stats.int(HEALTH), None);
    }

    #[test]
    fn typed_writes_create_missing_collections() {
        let mut stats = CharacterStats::new();
        stats
            .merits_mut()
            .expect("merits")
            .insert("Resources".into(), 2);
        stats
            .rote_skills_mut()
            .expect("rote skills")
            .insert("occult".into());

        assert_eq!(stats.merits().and_then(|m| m.get("Resources")), Some(&2));
        assert!(stats.rote_skills().is_some_and(|s| s.contains("occult")));
    }

    #[test]
    fn typed_writes_report_shape_mismatch() {
        let mut stats = CharacterStats::new().with_stat(WEAPONS, 3u32);
        let err = stats.weapons_mut().expect_err("weapons hold an integer");
        assert!(matches!(err, DomainError::KindMismatch { .. }));
    }

    #[test]
    fn iterates_in_name_order() {
        let stats = CharacterStats::new()
            .with_stat("wits", 2u32)
            .with_stat("academics", 1u32)
            .with_stat("mana", 10u32);
        let keys: Vec<_> = stats.keys().collect();
        assert_eq!(keys, ["academics", "mana", "wits"]);
    }
}
