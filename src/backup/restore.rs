//! Putting a snapshot back in place of book.json

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{PhonebookError, PhonebookResult};
use crate::storage::{write_atomic, BookData};

/// Read a backup and check that it holds a loadable address book
pub fn inspect_backup(backup: &Path) -> PhonebookResult<BookData> {
    let bytes = read_backup(backup)?;
    parse_backup(backup, &bytes)
}

/// Replace `book_file` with the contents of `backup`
///
/// The backup is validated first; an unloadable backup leaves `book_file`
/// untouched. Returns the number of contacts restored.
pub fn restore_backup(backup: &Path, book_file: &Path) -> PhonebookResult<usize> {
    let bytes = read_backup(backup)?;
    let contacts = parse_backup(backup, &bytes)?.contacts.len();

    write_atomic(book_file, &bytes)?;

    info!(backup = %backup.display(), contacts, "Restored address book");
    Ok(contacts)
}

fn read_backup(backup: &Path) -> PhonebookResult<Vec<u8>> {
    fs::read(backup).map_err(|e| {
        PhonebookError::Backup(format!("Failed to read {}: {}", backup.display(), e))
    })
}

fn parse_backup(backup: &Path, bytes: &[u8]) -> PhonebookResult<BookData> {
    BookData::parse(bytes).map_err(|e| {
        PhonebookError::Backup(format!("{} is not a usable backup: {}", backup.display(), e))
    })
}
