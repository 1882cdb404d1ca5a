//! Sheet location settings.
//!
//! Read from the process environment after `.env` files are loaded:
//! - `ARCANUM_SHEET_DIR` (default `sheets`): where bare sheet names live
//! - `ARCANUM_SHEET_EXTENSION` (default `xml`): appended to names without one

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const SHEET_DIR_VAR: &str = "ARCANUM_SHEET_DIR";
pub const SHEET_EXTENSION_VAR: &str = "ARCANUM_SHEET_EXTENSION";

const DEFAULT_SHEET_DIR: &str = "sheets";
const DEFAULT_SHEET_EXTENSION: &str = "xml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetSettings {
    pub sheet_dir: PathBuf,
    pub extension: String,
}

impl Default for SheetSettings {
    fn default() -> Self {
        Self {
            sheet_dir: PathBuf::from(DEFAULT_SHEET_DIR),
            extension: DEFAULT_SHEET_EXTENSION.to_string(),
        }
    }
}

impl SheetSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable lookup. Blank values fall
    /// back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let defaults = Self::default();
        Self {
            sheet_dir: non_blank(SHEET_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.sheet_dir),
            extension: non_blank(SHEET_EXTENSION_VAR)
                .map(|ext| ext.trim_start_matches('.').to_string())
                .unwrap_or(defaults.extension),
        }
    }

    /// Turn a user-supplied sheet name into a path.
    ///
    /// A bare name (no directory part) is placed in the sheet directory.
    /// Anything that already names a directory is used as given. The
    /// extension is appended when the name has none.
    pub fn resolve(&self, sheet: &str) -> PathBuf {
        let given = Path::new(sheet);
        let mut path = if is_bare_name(given) {
            self.sheet_dir.join(given)
        } else {
            given.to_path_buf()
        };
        if path.extension().is_none() && !self.extension.is_empty() {
            path.set_extension(&self.extension);
        }
        path
    }
}

fn is_bare_name(path: &Path) -> bool {
    let mut components = path.components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let settings = SheetSettings::from_lookup(lookup(&[]));
        assert_eq!(settings, SheetSettings::default());
        assert_eq!(settings.sheet_dir, PathBuf::from("sheets"));
        assert_eq!(settings.extension, "xml");
    }

    #[test]
    fn reads_overrides_and_ignores_blank_values() {
        let settings = SheetSettings::from_lookup(lookup(&[
            (SHEET_DIR_VAR, "/srv/mages"),
            (SHEET_EXTENSION_VAR, " "),
        ]));
        assert_eq!(settings.sheet_dir, PathBuf::from("/srv/mages"));
        assert_eq!(settings.extension, "xml");
    }

    #[test]
    fn extension_leading_dot_is_dropped() {
        let settings = SheetSettings::from_lookup(lookup(&[(SHEET_EXTENSION_VAR, ".sheet")]));
        assert_eq!(settings.extension, "sheet");
    }

    #[test]
    fn bare_names_go_in_sheet_dir() {
        let settings = SheetSettings::default();
        assert_eq!(settings.resolve("ana"), PathBuf::from("sheets/ana.xml"));
        assert_eq!(settings.resolve("ana.xml"), PathBuf::from("sheets/ana.xml"));
    }

    #[test]
    fn paths_are_used_as_given() {
        let settings = SheetSettings::default();
        assert_eq!(settings.resolve("./ana.xml"), PathBuf::from("./ana.xml"));
        assert_eq!(settings.resolve("saves/ana"), PathBuf::from("saves/ana.xml"));
        assert_eq!(settings.resolve("/tmp/ana.bak"), PathBuf::from("/tmp/ana.bak"));
    }
}
