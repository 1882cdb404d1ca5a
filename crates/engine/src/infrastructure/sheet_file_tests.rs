use arcanum_domain::schema::{HEALTH, MERIT_DETAILS, ROTE_SKILLS, SKILL_SPECIALTIES, USER_ID};
use arcanum_domain::{
    mage, Character, CharacterStats, EnchantedItem, HealthTrack, Personality, Praxis, Rote,
    StatValue, Weapon,
};

use crate::infrastructure::document::{parse_document, render_document, Node};
use crate::infrastructure::persistence::{export_stats, import_stats, nodes, XmlSheetStore};
use crate::infrastructure::ports::SheetStorePort;

/// A mage with every stat category populated, including the awkward cases:
/// blank tooltips, a weapon with no range and an item with no mana.
fn populated_character() -> Character {
    let mut character = mage::new_character().with_notes("Line one\nLine two & more");
    character.stats.insert("occult", StatValue::Int(3));
    character.stats.insert("stealth", StatValue::Int(2));
    character.stats.insert("name", StatValue::text("Ana Reyes"));
    character.stats.insert("shadow name", StatValue::text("Quill"));
    character.stats.insert(USER_ID, StatValue::text("123456789012"));
    character.stats.insert("gnosis", StatValue::Int(3));

    character.set_specialty("occult", "Tarot").expect("specialty");
    character.set_specialty("stealth", "").expect("blank specialty");
    character.toggle_rote_skill("occult").expect("rote skill");
    character
        .add_merit("Status", 2, Some("Mysterium".into()))
        .expect("merit");
    character.add_merit("Resources", 1, None).expect("merit");

    character.set_label("conditions", "Shaken", "").expect("label");
    character
        .set_label("active spells", "Mage Sight", "space, prime")
        .expect("label");
    character
        .set_label("magtool", "Silver ring", "Mysterium tool")
        .expect("label");

    character.set_damage(1, 2, 0).expect("damage");
    character
        .add_weapon("Knife", Weapon::new(1).with_init(-1).with_size(1))
        .expect("weapon");
    character
        .add_weapon(
            "Pistol",
            Weapon::new(2)
                .with_range("20/40/80")
                .with_clip(6)
                .with_strength(2)
                .with_size(1),
        )
        .expect("weapon");
    character
        .add_praxis("Supernal Vision", Praxis::new("prime").with_tooltip("See magic"))
        .expect("praxis");
    character
        .add_praxis("Finder", Praxis::new("space"))
        .expect("praxis");
    character
        .add_rote("Scrying", Rote::new("space", "occult"))
        .expect("rote");
    character
        .add_rote("Veil", Rote::new("mind", "subterfuge").with_tooltip("Hide"))
        .expect("rote");
    character
        .add_ench_item("Coin", EnchantedItem::new("imbued", 2, 0))
        .expect("item");
    character
        .add_ench_item(
            "Mirror",
            EnchantedItem::new("artifact", 3, 5)
                .with_tooltip("Shows the watchtower")
                .with_spent(2),
        )
        .expect("item");
    character
}

fn round_trip_stats(stats: &CharacterStats) -> CharacterStats {
    let root = Node::parent(nodes::ROOT, export_stats(stats).expect("export"));
    let text = render_document(&root);
    import_stats(&parse_document(&text).expect("parse")).expect("import")
}

#[test]
fn populated_stats_round_trip() {
    let character = populated_character();
    assert_eq!(round_trip_stats(&character.stats), character.stats);
}

#[test]
fn health_maximum_is_reset_on_import() {
    let mut stats = mage::default_stats();
    stats.insert(HEALTH, StatValue::Health(HealthTrack::from_slots([8, 1, 1, 1])));

    let back = round_trip_stats(&stats);
    assert_eq!(back.health(), Some(&HealthTrack::from_slots([0, 1, 1, 1])));
}

#[test]
fn curly_apostrophe_names_come_back_straight() {
    let mut character = mage::new_character();
    character
        .add_praxis("Mage\u{2019}s Armor", Praxis::new("prime"))
        .expect("praxis");
    character
        .add_rote("Hunter\u{2019}s Eye", Rote::new("time", "investigation"))
        .expect("rote");

    let store = XmlSheetStore::new();
    let text = store.render(&character).expect("render");
    assert!(!text.contains('\u{2019}'));

    let back = store.parse(&text).expect("parse");
    let praxes = back.stats.praxes().expect("praxes");
    assert!(praxes.contains_key("Mage's Armor"));
    let rotes = back.stats.rotes().expect("rotes");
    assert!(rotes.contains_key("Hunter's Eye"));
}

#[test]
fn side_mappings_never_appear_as_other_nodes() {
    let character = populated_character();
    let text = XmlSheetStore::new().render(&character).expect("render");
    for key in [SKILL_SPECIALTIES, MERIT_DETAILS, ROTE_SKILLS] {
        assert!(
            !text.contains(&format!("<name>{}</name>", key)),
            "{key} written as a stat"
        );
    }
}

#[test]
fn numeric_inference_spares_user_id() {
    let mut character = mage::new_character();
    character.stats.insert("nimbus", StatValue::text("42"));
    character.stats.insert(USER_ID, StatValue::text("42"));

    let store = XmlSheetStore::new();
    let back = store
        .parse(&store.render(&character).expect("render"))
        .expect("parse");
    assert_eq!(back.stats.get("nimbus"), Some(&StatValue::Int(42)));
    assert_eq!(back.stats.get(USER_ID), Some(&StatValue::text("42")));
}

#[test]
fn blank_weapon_range_is_not_written() {
    let mut character = mage::new_character();
    character
        .add_weapon("Knife", Weapon::new(1))
        .expect("weapon");

    let store = XmlSheetStore::new();
    let text = store.render(&character).expect("render");
    assert!(!text.contains("<range"));

    let back = store.parse(&text).expect("parse");
    let knife = back.stats.weapons().and_then(|w| w.get("Knife")).expect("knife");
    assert_eq!(knife.range, "");
}

#[test]
fn character_survives_save_and_load() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("ana.xml");

    let character = populated_character().with_personality(
        Personality::new(
            vec!["Well done, [userID]!".into(), "Again, [userID]!".into()],
            vec!["Oh no, [userID].".into()],
        )
        .with_rates(30, 5),
    );

    let store = XmlSheetStore::new();
    store.save(&character, &path).expect("save");
    let loaded = store.load(&path).expect("load");

    assert_eq!(loaded, character);
}

#[test]
fn empty_message_lists_survive_save_and_load() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("quiet.xml");

    let character = mage::new_character().with_personality(Personality::new(vec![], vec![]));
    let store = XmlSheetStore::new();
    store.save(&character, &path).expect("save");
    let loaded = store.load(&path).expect("load");

    assert!(loaded.personality.good_messages.is_empty());
    assert!(loaded.personality.bad_messages.is_empty());
    assert_eq!(loaded.personality, character.personality);
}

#[test]
fn save_creates_missing_directories_and_replaces_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("sheets").join("ana.xml");
    let store = XmlSheetStore::new();

    let mut character = mage::new_character();
    store.save(&character, &path).expect("first save");

    character.stats.insert("wisdom", StatValue::Int(5));
    store.save(&character, &path).expect("second save");

    let loaded = store.load(&path).expect("load");
    assert_eq!(loaded.stats.int("wisdom"), Some(5));

    let leftovers = std::fs::read_dir(path.parent().expect("parent"))
        .expect("read dir")
        .count();
    assert_eq!(leftovers, 1);
}

#[test]
fn loading_a_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = XmlSheetStore::new()
        .load(&dir.path().join("nobody.xml"))
        .expect_err("missing");
    assert!(matches!(err, crate::infrastructure::error::SheetError::Io(_)));
}

#[test]
fn hand_written_sheet_without_optional_nodes_loads() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("old.xml");
    std::fs::write(
        &path,
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<root>\n  <splat>mage</splat>\n  \
         <other><name>gnosis</name><rating>4</rating></other>\n</root>\n",
    )
    .expect("write");

    let loaded = XmlSheetStore::new().load(&path).expect("load");
    assert_eq!(loaded.stats.int("gnosis"), Some(4));
    assert_eq!(loaded.stats.health(), Some(&HealthTrack::new()));
    assert_eq!(loaded.personality, mage::default_personality());
}
