//! YAML Export functionality
//!
//! Exports the complete address book to YAML format for human-readable backup.

use std::io::Write;

use crate::error::{PhonebookError, PhonebookResult};
use crate::export::json::FullExport;
use crate::models::AddressBook;

/// Export the full address book to YAML format
pub fn export_full_yaml<W: Write>(book: &AddressBook, writer: &mut W) -> PhonebookResult<()> {
    let export = FullExport::from_book(book);

    writeln!(writer, "# Phonebook Export").map_err(|e| PhonebookError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| PhonebookError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| PhonebookError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| PhonebookError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| PhonebookError::Export(e.to_string()))?;

    Ok(())
}
