//! Character sheet use cases.
//!
//! Handles sheet creation, scalar edits with derived value recalculation,
//! round-trip checks and flavor messages for dice rolls.

mod error;

pub use error::CharacterSheetError;

use std::collections::BTreeSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use arcanum_domain::schema::{HEALTH, MANA};
use arcanum_domain::{mage, Character, Personality, RollOutcome, StatValue};

use crate::infrastructure::error::SheetError;
use crate::infrastructure::ports::{RandomPort, SheetStorePort};
use crate::infrastructure::settings::SheetSettings;

// =============================================================================
// Result Types
// =============================================================================

/// Result of a scalar stat edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetStatResult {
    pub path: PathBuf,
    pub stat: String,
    pub previous: StatValue,
    pub value: StatValue,
    /// Mana pool after derived values were recalculated.
    pub mana: Option<u32>,
}

/// Outcome of re-exporting a loaded sheet and reading it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundTripReport {
    pub path: PathBuf,
    pub stat_count: usize,
    /// Stats whose value changed, appeared or vanished across the round trip.
    pub differing_stats: Vec<String>,
    /// Whether notes, splat and personality survived unchanged.
    pub character_fields_match: bool,
}

impl RoundTripReport {
    pub fn is_lossless(&self) -> bool {
        self.differing_stats.is_empty() && self.character_fields_match
    }
}

// =============================================================================
// Use Cases
// =============================================================================

/// Container for character sheet use cases.
pub struct CharacterSheetService {
    store: Arc<dyn SheetStorePort>,
    random: Arc<dyn RandomPort>,
    settings: SheetSettings,
}

impl CharacterSheetService {
    pub fn new(
        store: Arc<dyn SheetStorePort>,
        random: Arc<dyn RandomPort>,
        settings: SheetSettings,
    ) -> Self {
        Self {
            store,
            random,
            settings,
        }
    }

    pub fn settings(&self) -> &SheetSettings {
        &self.settings
    }

    /// Create a default mage and save it. Refuses to overwrite a sheet.
    pub fn create(
        &self,
        sheet: &str,
        splat: Option<&str>,
    ) -> Result<(PathBuf, Character), CharacterSheetError> {
        let path = self.settings.resolve(sheet);
        let mut character = mage::new_character();
        if let Some(splat) = splat {
            character.splat = splat.to_string();
        }
        match self.store.create(&character, &path) {
            Ok(()) => {}
            Err(SheetError::Io(e)) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(CharacterSheetError::SheetExists(path));
            }
            Err(e) => return Err(e.into()),
        }

        tracing::info!(path = %path.display(), splat = %character.splat, "Created character sheet");
        Ok((path, character))
    }

    pub fn load(&self, sheet: &str) -> Result<(PathBuf, Character), CharacterSheetError> {
        let path = self.settings.resolve(sheet);
        let character = self.load_path(&path)?;
        Ok((path, character))
    }

    /// Apply a scalar edit, recalculate derived values and save.
    pub fn set_stat(
        &self,
        sheet: &str,
        stat: &str,
        raw: &str,
    ) -> Result<SetStatResult, CharacterSheetError> {
        let (path, mut character) = self.load(sheet)?;
        let previous = character
            .stats
            .get(stat)
            .cloned()
            .ok_or_else(|| arcanum_domain::DomainError::not_found("Stat", stat))?;

        character.set_stat(stat, raw)?;
        character.update_derivatives();
        self.store.save(&character, &path)?;

        let value = character
            .stats
            .get(stat)
            .cloned()
            .unwrap_or_else(|| previous.clone());

        tracing::debug!(path = %path.display(), stat = %stat, raw = %raw, "Updated stat");

        Ok(SetStatResult {
            path,
            stat: stat.to_string(),
            previous,
            value,
            mana: character.stats.int(MANA),
        })
    }

    /// Load a sheet, export it again in memory and compare what comes back.
    pub fn check(&self, sheet: &str) -> Result<RoundTripReport, CharacterSheetError> {
        let (path, character) = self.load(sheet)?;
        let text = self.store.render(&character)?;
        let reparsed = self.store.parse(&text)?;

        let differing_stats = differing_stats(&character, &reparsed);
        let character_fields_match = character.notes == reparsed.notes
            && character.splat == reparsed.splat
            && character.personality == reparsed.personality;

        if !differing_stats.is_empty() {
            tracing::warn!(
                path = %path.display(),
                stats = ?differing_stats,
                "Sheet does not round-trip"
            );
        }

        Ok(RoundTripReport {
            path,
            stat_count: character.stats.len(),
            differing_stats,
            character_fields_match,
        })
    }

    /// A flavor message for the sheet's user, or `None` when the roll for
    /// a message fails.
    pub fn flavor_message(
        &self,
        sheet: &str,
        outcome: RollOutcome,
    ) -> Result<Option<String>, CharacterSheetError> {
        let (_, character) = self.load(sheet)?;
        Ok(pick_flavor_message(
            &character.personality,
            outcome,
            character.user_id(),
            self.random.as_ref(),
        ))
    }

    fn load_path(&self, path: &Path) -> Result<Character, CharacterSheetError> {
        match self.store.load(path) {
            Ok(character) => Ok(character),
            Err(SheetError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                Err(CharacterSheetError::SheetNotFound(path.to_path_buf()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Pick a message for a roll outcome.
///
/// Rolls a percentile die against the outcome's rate, then picks uniformly
/// from the outcome's message list and fills in the user placeholder.
pub fn pick_flavor_message(
    personality: &Personality,
    outcome: RollOutcome,
    user: &str,
    random: &dyn RandomPort,
) -> Option<String> {
    let messages = personality.messages(outcome);
    let rate = personality.rate(outcome);
    if messages.is_empty() || rate == 0 {
        return None;
    }

    let roll = random.gen_range(1, 100);
    if roll < 1 || roll as u32 > rate {
        return None;
    }

    let last = i32::try_from(messages.len() - 1).unwrap_or(i32::MAX);
    let index = usize::try_from(random.gen_range(0, last)).ok()?;
    messages
        .get(index)
        .map(|template| Personality::render(template, user))
}

/// Stat keys whose values differ between two characters. The derived health
/// maximum is not persisted and is ignored.
fn differing_stats(before: &Character, after: &Character) -> Vec<String> {
    let keys: BTreeSet<&str> = before.stats.keys().chain(after.stats.keys()).collect();
    keys.into_iter()
        .filter(|key| {
            let (a, b) = (before.stats.get(key), after.stats.get(key));
            if *key == HEALTH {
                let damage = |v: Option<&StatValue>| match v {
                    Some(StatValue::Health(track)) => Some(track.slots()[1..].to_vec()),
                    _ => None,
                };
                return damage(a) != damage(b);
            }
            a != b
        })
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::XmlSheetStore;
    use crate::infrastructure::random::FixedRandom;
    use arcanum_domain::schema::{GNOSIS, USER_ID};
    use arcanum_domain::{DomainError, HealthTrack};

    fn service(dir: &Path, roll: i32) -> CharacterSheetService {
        let settings = SheetSettings {
            sheet_dir: dir.to_path_buf(),
            ..SheetSettings::default()
        };
        CharacterSheetService::new(
            Arc::new(XmlSheetStore::new()),
            Arc::new(FixedRandom(roll)),
            settings,
        )
    }

    #[test]
    fn create_saves_a_default_mage() {
        let dir = tempfile::tempdir().expect("tempdir");
        let service = service(dir.path(), 1);

        let (path, created) = service.create("ana", None).expect("create");
        assert_eq!(path, dir.path().join("ana.xml"));
        assert!(path.exists());

        let (_, loaded) = service.load("ana").expect("load");
        assert_eq!(loaded, created);
    }

    #[test]
    fn create_refuses_to_overwrite() {
        let dir = tempfile::tempdir().expect("tempdir");
        let service = service(dir.path(), 1);
        service.create("ana", Some("mage")).expect("create");

        let err = service.create("ana", Some("sleeper")).expect_err("exists");
        assert!(matches!(err, CharacterSheetError::SheetExists(_)));
        let (_, kept) = service.load("ana").expect("load");
        assert_eq!(kept.splat, "mage");
    }

    #[test]
    fn missing_sheet_is_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = service(dir.path(), 1).load("nobody").expect_err("missing");
        assert!(matches!(err, CharacterSheetError::SheetNotFound(_)));
    }

    #[test]
    fn set_stat_recalculates_mana() {
        let dir = tempfile::tempdir().expect("tempdir");
        let service = service(dir.path(), 1);
        service.create("ana", None).expect("create");

        let result = service.set_stat("ana", GNOSIS, "5").expect("set");
        assert_eq!(result.previous, StatValue::Int(1));
        assert_eq!(result.value, StatValue::Int(5));
        assert_eq!(result.mana, Some(15));

        let (_, loaded) = service.load("ana").expect("load");
        assert_eq!(loaded.stats.int(MANA), Some(15));
    }

    #[test]
    fn set_stat_rejects_unknown_stats_and_bad_numbers() {
        let dir = tempfile::tempdir().expect("tempdir");
        let service = service(dir.path(), 1);
        service.create("ana", None).expect("create");

        let err = service.set_stat("ana", "enigmas", "2").expect_err("unknown");
        assert!(matches!(
            err,
            CharacterSheetError::Domain(DomainError::NotFound { .. })
        ));

        let err = service.set_stat("ana", GNOSIS, "lots").expect_err("parse");
        assert!(matches!(err, CharacterSheetError::Domain(DomainError::Parse(_))));
    }

    #[test]
    fn check_reports_lossless_sheet() {
        let dir = tempfile::tempdir().expect("tempdir");
        let service = service(dir.path(), 1);
        service.create("ana", None).expect("create");

        let report = service.check("ana").expect("check");
        assert!(report.is_lossless(), "{report:?}");
        assert_eq!(report.stat_count, mage::default_stats().len());
    }

    #[test]
    fn numeric_text_settles_after_one_save() {
        let dir = tempfile::tempdir().expect("tempdir");
        let service = service(dir.path(), 1);
        service.create("ana", None).expect("create");
        service.set_stat("ana", "nimbus", "42").expect("set");

        // The saved sheet already reads nimbus back as a number, so a second
        // round trip is stable.
        let report = service.check("ana").expect("check");
        assert!(report.is_lossless());
        let (_, loaded) = service.load("ana").expect("load");
        assert_eq!(loaded.stats.get("nimbus"), Some(&StatValue::Int(42)));
    }

    #[test]
    fn text_stat_takes_text_after_digit_only_edit_and_reload() {
        let dir = tempfile::tempdir().expect("tempdir");
        let service = service(dir.path(), 1);
        service.create("ana", None).expect("create");
        service.set_stat("ana", "armor", "2").expect("set digits");

        let (_, loaded) = service.load("ana").expect("load");
        assert_eq!(loaded.stats.get("armor"), Some(&StatValue::Int(2)));

        let result = service.set_stat("ana", "armor", "2/1").expect("set text");
        assert_eq!(result.value, StatValue::text("2/1"));
        let (_, loaded) = service.load("ana").expect("load");
        assert_eq!(loaded.stats.text("armor"), Some("2/1"));
    }

    #[test]
    fn differing_stats_ignores_health_maximum() {
        let mut before = mage::new_character();
        let mut after = before.clone();
        before
            .stats
            .insert(HEALTH, StatValue::Health(HealthTrack::from_slots([7, 1, 0, 0])));
        after
            .stats
            .insert(HEALTH, StatValue::Health(HealthTrack::from_slots([0, 1, 0, 0])));
        assert!(differing_stats(&before, &after).is_empty());

        after.stats.insert("wisdom", StatValue::Int(3));
        assert_eq!(differing_stats(&before, &after), ["wisdom"]);
    }

    #[test]
    fn flavor_message_fills_in_user() {
        let dir = tempfile::tempdir().expect("tempdir");
        let service = service(dir.path(), 1);
        service.create("ana", None).expect("create");
        service.set_stat("ana", USER_ID, "@ana").expect("set");

        // Roll 1 passes the 10% check, then index 1 is picked.
        let message = service
            .flavor_message("ana", RollOutcome::Good)
            .expect("message");
        assert_eq!(
            message.as_deref(),
            Some("Reality is yours to command, @ana!")
        );
    }

    #[test]
    fn failed_rate_roll_gives_no_message() {
        let personality = mage::default_personality();
        let message = pick_flavor_message(&personality, RollOutcome::Bad, "@ana", &FixedRandom(11));
        assert_eq!(message, None);
    }

    #[test]
    fn zero_rate_or_no_messages_gives_no_message() {
        let silent = mage::default_personality().with_rates(0, 0);
        assert_eq!(
            pick_flavor_message(&silent, RollOutcome::Good, "@ana", &FixedRandom(1)),
            None
        );

        let empty = Personality::default().with_rates(100, 100);
        assert_eq!(
            pick_flavor_message(&empty, RollOutcome::Bad, "@ana", &FixedRandom(1)),
            None
        );
    }

    #[test]
    fn single_message_is_always_picked_when_roll_passes() {
        let personality = Personality::new(vec![], vec!["Unlucky, [userID].".into()]).with_rates(0, 100);
        let message = pick_flavor_message(&personality, RollOutcome::Bad, "@ana", &FixedRandom(100));
        assert_eq!(message.as_deref(), Some("Unlucky, @ana."));
    }
}
