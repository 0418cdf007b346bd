//! JSON Export functionality
//!
//! Exports the complete address book to JSON format with schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{PhonebookError, PhonebookResult};
use crate::models::{AddressBook, Record};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full address book export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All contacts, sorted by name
    pub contacts: Vec<Record>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Total number of contacts
    pub contact_count: usize,

    /// Total number of stored phone entries
    pub phone_count: usize,

    /// Number of contacts with a birthday set
    pub birthday_count: usize,
}

impl FullExport {
    /// Create a new full export from an address book
    pub fn from_book(book: &AddressBook) -> Self {
        let contacts: Vec<Record> = book.sorted_records().into_iter().cloned().collect();

        let metadata = ExportMetadata {
            contact_count: contacts.len(),
            phone_count: contacts.iter().map(|r| r.phones().len()).sum(),
            birthday_count: contacts.iter().filter(|r| r.birthday().is_some()).count(),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            contacts,
            metadata,
        }
    }
}

/// Export the full address book to JSON
pub fn export_full_json<W: Write>(
    book: &AddressBook,
    writer: &mut W,
    pretty: bool,
) -> PhonebookResult<()> {
    let export = FullExport::from_book(book);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| PhonebookError::Export(e.to_string()))?;

    Ok(())
}
