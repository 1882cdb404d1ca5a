//! Node names used in saved sheets.

use arcanum_domain::schema::LABEL_CATEGORIES;

pub const ROOT: &str = "root";

pub const NOTES: &str = "notes";
pub const CONTENT: &str = "content";
pub const SPLAT: &str = "splat";

pub const SKILL: &str = "skill";
pub const MERIT: &str = "merit";
pub const HEALTH: &str = "health";
pub const WEAPON: &str = "weapon";
pub const PRAXIS: &str = "praxis";
pub const ROTE: &str = "rote";
pub const ENCH_ITEM: &str = "enchitem";
pub const OTHER: &str = "other";
pub const ENTRY: &str = "entry";

pub const GOOD_MESSAGE: &str = "goodmessage";
pub const BAD_MESSAGE: &str = "badmessage";
pub const MESSAGE: &str = "message";
pub const GOOD_RATE: &str = "goodrate";
pub const BAD_RATE: &str = "badrate";

// Sub-nodes
pub const NAME: &str = "name";
pub const RATING: &str = "rating";
pub const TOOLTIP: &str = "tooltip";
pub const ARCANUM: &str = "arcanum";
pub const ROTE_MARKER: &str = "rote";
pub const BASHING: &str = "bashing";
pub const LETHAL: &str = "lethal";
pub const AGGRAVATED: &str = "agg";
pub const ITEM_TYPE: &str = "item_type";
pub const MANA: &str = "mana";
pub const MANA_SPENT: &str = "mana_spent";

pub const ROTE_MARKER_TEXT: &str = "True";

/// Right single quotation mark; readers of saved sheets choke on it.
const CURLY_APOSTROPHE: char = '\u{2019}';

/// Element name for a label category. Category names may contain spaces,
/// which element names cannot.
pub fn label_element(category: &str) -> String {
    category.replace(' ', "_")
}

/// The label category stored under an element name, if any.
pub fn label_category(element: &str) -> Option<&'static str> {
    LABEL_CATEGORIES
        .iter()
        .copied()
        .find(|category| label_element(category) == element)
}

pub fn sanitize_apostrophes(text: &str) -> String {
    text.replace(CURLY_APOSTROPHE, "'")
}

/// Whether a top-level node is understood by the sheet reader.
pub fn is_known_top_level(name: &str) -> bool {
    matches!(
        name,
        NOTES
            | SPLAT
            | SKILL
            | MERIT
            | HEALTH
            | WEAPON
            | PRAXIS
            | ROTE
            | ENCH_ITEM
            | OTHER
            | GOOD_MESSAGE
            | BAD_MESSAGE
            | GOOD_RATE
            | BAD_RATE
    ) || label_category(name).is_some()
}
