//! Storage layer for the phonebook
//!
//! The whole address book is read once at startup and written once on exit.
//! All writes are atomic.

pub mod book;
pub mod file_io;

pub use book::{BookData, BookRepository, BOOK_SCHEMA_VERSION};
pub use file_io::{write_atomic, write_json_atomic};

use tracing::warn;

use crate::config::paths::PhonebookPaths;
use crate::error::PhonebookResult;
use crate::models::AddressBook;

/// Main storage coordinator
pub struct Storage {
    paths: PhonebookPaths,
    book: BookRepository,
}

impl Storage {
    /// Create a new Storage instance, making sure its directories exist
    pub fn new(paths: PhonebookPaths) -> PhonebookResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            book: BookRepository::new(paths.book_file()),
            paths,
        })
    }

    pub fn paths(&self) -> &PhonebookPaths {
        &self.paths
    }

    /// Load the address book; a missing file yields an empty book
    pub fn load(&self) -> PhonebookResult<AddressBook> {
        self.book.load()
    }

    /// Load the address book, starting empty if the file can't be read
    ///
    /// An unreadable file is moved aside first so the next save can't
    /// overwrite it. Fails only when that move fails.
    pub fn load_or_empty(&self) -> PhonebookResult<AddressBook> {
        match self.book.load() {
            Ok(book) => Ok(book),
            Err(e) => {
                let kept = self.book.set_aside()?;
                warn!(
                    error = %e,
                    kept = %kept.display(),
                    "Address book unreadable, starting empty"
                );
                Ok(AddressBook::new())
            }
        }
    }

    /// Save the address book to disk
    pub fn save(&self, book: &AddressBook) -> PhonebookResult<()> {
        self.book.save(book)
    }
}
