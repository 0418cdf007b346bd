//! Export module for the phonebook
//!
//! Provides address book export in multiple formats:
//! - CSV: One row per contact (spreadsheet-compatible)
//! - JSON: Machine-readable full export
//! - YAML: Human-readable full export

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_contacts_csv;
pub use json::{export_full_json, ExportMetadata, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
