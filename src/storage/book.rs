//! The address book file, `data/book.json`
//!
//! The document is versioned:
//!
//! ```json
//! { "schema_version": 1, "contacts": [ { "name": "...", "phones": [], "birthday": null } ] }
//! ```
//!
//! Phones and birthdays pass through the same validation as typed input, so a
//! hand-edited file with a bad value is rejected as a whole.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PhonebookError, PhonebookResult};
use crate::models::{AddressBook, Record};

use super::file_io::write_json_atomic;

/// Current on-disk schema version of book.json
pub const BOOK_SCHEMA_VERSION: u32 = 1;

/// Serializable address book file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookData {
    #[serde(default = "current_schema")]
    pub schema_version: u32,

    #[serde(default)]
    pub contacts: Vec<Record>,
}

fn current_schema() -> u32 {
    BOOK_SCHEMA_VERSION
}

impl Default for BookData {
    fn default() -> Self {
        Self {
            schema_version: BOOK_SCHEMA_VERSION,
            contacts: Vec::new(),
        }
    }
}

impl BookData {
    /// Snapshot of an address book, contacts sorted by name
    pub fn from_book(book: &AddressBook) -> Self {
        Self {
            schema_version: BOOK_SCHEMA_VERSION,
            contacts: book.sorted_records().into_iter().cloned().collect(),
        }
    }

    /// Decode and validate the raw contents of a book file
    pub fn parse(bytes: &[u8]) -> PhonebookResult<Self> {
        let data: Self = serde_json::from_slice(bytes)?;

        if data.schema_version > BOOK_SCHEMA_VERSION {
            return Err(PhonebookError::Storage(format!(
                "book schema version {} is newer than supported version {}",
                data.schema_version, BOOK_SCHEMA_VERSION
            )));
        }

        Ok(data)
    }

    /// Rebuild the address book; a repeated name keeps the last record
    pub fn into_book(self) -> AddressBook {
        self.contacts.into_iter().collect()
    }
}

/// Reads and writes one book file
pub struct BookRepository {
    path: PathBuf,
}

impl BookRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the address book; a missing file is an empty book
    pub fn load(&self) -> PhonebookResult<AddressBook> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(AddressBook::new()),
            Err(e) => {
                return Err(PhonebookError::Storage(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        let book = BookData::parse(&bytes)
            .map_err(|e| PhonebookError::Storage(format!("{}: {}", self.path.display(), e)))?
            .into_book();

        debug!(contacts = book.len(), path = %self.path.display(), "Loaded address book");
        Ok(book)
    }

    /// Save the whole address book
    pub fn save(&self, book: &AddressBook) -> PhonebookResult<()> {
        write_json_atomic(&self.path, &BookData::from_book(book))?;
        debug!(contacts = book.len(), path = %self.path.display(), "Saved address book");
        Ok(())
    }

    /// Rename the file to `book.json.corrupt-<timestamp>` and return the new path
    pub fn set_aside(&self) -> PhonebookResult<PathBuf> {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(format!(".corrupt-{}", Utc::now().format("%Y%m%d-%H%M%S")));
        let target = self.path.with_file_name(name);

        fs::rename(&self.path, &target).map_err(|e| {
            PhonebookError::Storage(format!(
                "Failed to move unreadable {} aside: {}",
                self.path.display(),
                e
            ))
        })?;

        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, BookRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = BookRepository::new(temp_dir.path().join("book.json"));
        (temp_dir, repo)
    }

    fn sample_book() -> AddressBook {
        let mut oleh = Record::new("Oleh");
        oleh.add_phone("0501234567").unwrap();
        oleh.add_phone("0501234567").unwrap();
        oleh.add_birthday("01.02.1990").unwrap();

        let mut anna = Record::new("Anna");
        anna.add_phone("0507654321").unwrap();

        vec![oleh, anna, Record::new("Empty")].into_iter().collect()
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let (_temp, repo) = create_test_repo();
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let (_temp, repo) = create_test_repo();
        let book = sample_book();

        repo.save(&book).unwrap();
        let loaded = repo.load().unwrap();
        assert_eq!(loaded, book);
    }

    #[test]
    fn test_file_layout() {
        let (_temp, repo) = create_test_repo();
        repo.save(&sample_book()).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(repo.path()).unwrap()).unwrap();
        assert_eq!(value["schema_version"], 1);

        let names: Vec<_> = value["contacts"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Anna", "Empty", "Oleh"]);
        assert_eq!(value["contacts"][2]["birthday"], "01.02.1990");
        assert_eq!(value["contacts"][1]["birthday"], serde_json::Value::Null);
    }

    #[test]
    fn test_invalid_phone_in_file_fails_load() {
        let (_temp, repo) = create_test_repo();
        fs::write(
            repo.path(),
            r#"{"schema_version":1,"contacts":[{"name":"Oleh","phones":["12"]}]}"#,
        )
        .unwrap();

        assert!(matches!(repo.load(), Err(PhonebookError::Storage(_))));
    }

    #[test]
    fn test_future_schema_rejected() {
        assert!(BookData::parse(br#"{"schema_version":99,"contacts":[]}"#).is_err());
        assert!(BookData::parse(br#"{"contacts":[]}"#).is_ok());
    }

    #[test]
    fn test_set_aside_keeps_bytes() {
        let (temp, repo) = create_test_repo();
        fs::write(repo.path(), "{\"contacts\": [").unwrap();

        let moved = repo.set_aside().unwrap();

        assert!(!repo.path().exists());
        assert_eq!(moved.parent(), Some(temp.path()));
        assert!(moved
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("book.json.corrupt-"));
        assert_eq!(fs::read_to_string(&moved).unwrap(), "{\"contacts\": [");
    }
}
