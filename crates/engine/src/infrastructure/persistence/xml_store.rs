//! File-backed sheet store.

use std::fs;
use std::io::Write;
use std::path::Path;

use arcanum_domain::Character;
use tempfile::NamedTempFile;

use super::exporter::export_character;
use super::importer::import_character;
use super::nodes::sanitize_apostrophes;
use crate::infrastructure::document::{parse_document, render_document};
use crate::infrastructure::error::SheetError;
use crate::infrastructure::ports::SheetStorePort;

/// Stores each character as one XML-compatible document per file.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlSheetStore;

impl XmlSheetStore {
    pub fn new() -> Self {
        Self
    }

    fn write(&self, character: &Character, path: &Path, replace: bool) -> Result<(), SheetError> {
        let text = self.render(character)?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        // Write beside the destination, then swap it in.
        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(text.as_bytes())?;
        file.as_file().sync_all()?;
        if replace {
            file.persist(path).map_err(|e| e.error)?;
        } else {
            file.persist_noclobber(path).map_err(|e| e.error)?;
        }

        tracing::debug!(path = %path.display(), bytes = text.len(), "Wrote sheet file");
        tracing::info!(
            path = %path.display(),
            stats = character.stats.len(),
            "Saved character sheet"
        );
        Ok(())
    }
}

impl SheetStorePort for XmlSheetStore {
    fn save(&self, character: &Character, path: &Path) -> Result<(), SheetError> {
        self.write(character, path, true)
    }

    fn create(&self, character: &Character, path: &Path) -> Result<(), SheetError> {
        self.write(character, path, false)
    }

    fn load(&self, path: &Path) -> Result<Character, SheetError> {
        let text = fs::read_to_string(path)?;
        let character = self.parse(&text)?;

        tracing::info!(
            path = %path.display(),
            stats = character.stats.len(),
            "Loaded character sheet"
        );
        Ok(character)
    }

    fn render(&self, character: &Character) -> Result<String, SheetError> {
        let root = export_character(character)?;
        Ok(sanitize_apostrophes(&render_document(&root)))
    }

    fn parse(&self, text: &str) -> Result<Character, SheetError> {
        let root = parse_document(text)?;
        import_character(&root)
    }
}
