//! Character sheet persistence
//!
//! Maps characters to sheet documents and back, and stores those documents
//! as files.

pub mod exporter;
pub mod importer;
pub mod nodes;
mod xml_store;

pub use exporter::{export_character, export_stats};
pub use importer::{import_character, import_stats};
pub use xml_store::XmlSheetStore;
