//! Interactive shell
//!
//! Reads one command per line, runs it to completion, and prints the reply.
//! The address book is loaded once when the shell starts and saved when the
//! user exits (or input ends).

use std::io::{BufRead, Write};

use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

use crate::backup::BackupManager;
use crate::config::settings::Settings;
use crate::error::{PhonebookError, PhonebookResult};
use crate::models::AddressBook;
use crate::storage::Storage;

use super::commands::{parse_input, Command};
use super::handler::{execute, help_text, render, FAREWELL, GREETING, PROMPT};

/// Interactive command loop over one address book
pub struct Shell<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
    book: AddressBook,
    today: Option<NaiveDate>,
}

impl<'a> Shell<'a> {
    /// Create a shell, loading the address book from storage
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> PhonebookResult<Self> {
        let book = storage.load_or_empty()?;
        debug!(contacts = book.len(), "Shell started");
        Ok(Self {
            storage,
            settings,
            book,
            today: None,
        })
    }

    /// Pin the date used by `birthdays` instead of the local clock
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// The address book as currently held in memory
    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Run until `close`/`exit` or end of input, then save
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> PhonebookResult<()> {
        writeln!(output, "{}", GREETING)?;
        writeln!(output, "{}", help_text())?;

        let mut line = String::new();
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                break;
            }

            match parse_input(&line) {
                Ok(None) => continue,
                Ok(Some(Command::Exit)) => break,
                Ok(Some(command)) => {
                    let today = self.today.unwrap_or_else(|| Local::now().date_naive());
                    let result = execute(
                        command,
                        &mut self.book,
                        today,
                        self.settings.birthday_window_days,
                    );
                    writeln!(output, "{}", render(result))?;
                }
                Err(e) => writeln!(output, "{}", render(Err(e)))?,
            }
        }

        self.save()?;
        writeln!(output, "{}", FAREWELL)?;
        Ok(())
    }

    /// Snapshot the previous file if configured, then write the book
    fn save(&self) -> PhonebookResult<()> {
        if self.settings.backup_on_exit {
            let manager = BackupManager::new(
                self.storage.paths(),
                self.settings.backup_retention.clone(),
            );
            if let Err(e) = manager.snapshot_and_prune() {
                warn!(error = %e, "Backup before save failed");
            }
        }

        self.storage
            .save(&self.book)
            .map_err(|e| PhonebookError::Storage(format!("Failed to save address book: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::PhonebookPaths;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn setup(backup_on_exit: bool) -> (TempDir, Storage, Settings) {
        let temp_dir = TempDir::new().unwrap();
        let paths = PhonebookPaths::with_base_dir(temp_dir.path());
        let storage = Storage::new(paths).unwrap();
        let settings = Settings {
            backup_on_exit,
            ..Settings::default()
        };
        (temp_dir, storage, settings)
    }

    fn run_session(storage: &Storage, settings: &Settings, input: &str) -> String {
        let mut output = Vec::new();
        Shell::new(storage, settings)
            .unwrap()
            .with_today(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
            .run(Cursor::new(input), &mut output)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_session_output() {
        let (_temp, storage, settings) = setup(false);

        let output = run_session(
            &storage,
            &settings,
            "hello\nadd Oleh 0501234567\n\nfoo\nexit\nhello\n",
        );

        assert!(output.starts_with(GREETING));
        assert!(output.contains("Як я можу допомогти?"));
        assert!(output.contains("Контакт доданий."));
        assert!(output.contains("Невірна команда."));
        assert!(output.trim_end().ends_with(FAREWELL));
        // Nothing after exit is processed
        assert_eq!(output.matches("Як я можу допомогти?").count(), 1);
    }

    #[test]
    fn test_book_persists_between_sessions() {
        let (_temp, storage, settings) = setup(false);

        run_session(&storage, &settings, "add Oleh 0501234567\nclose\n");
        let output = run_session(&storage, &settings, "phone Oleh\nexit\n");

        assert!(output.contains("Ім'я: Oleh, телефони: 0501234567"));
    }

    #[test]
    fn test_end_of_input_saves() {
        let (_temp, storage, settings) = setup(false);

        let output = run_session(&storage, &settings, "add Oleh 0501234567");
        assert!(output.trim_end().ends_with(FAREWELL));
        assert!(storage.load().unwrap().find("Oleh").is_some());
    }

    #[test]
    fn test_backup_taken_before_overwrite() {
        let (_temp, storage, settings) = setup(true);
        let manager = BackupManager::new(storage.paths(), settings.backup_retention.clone());

        // First save has no previous file to back up
        run_session(&storage, &settings, "add Oleh 0501234567\nexit\n");
        assert!(manager.list().unwrap().is_empty());

        run_session(&storage, &settings, "add Anna 0507654321\nexit\n");
        let backups = manager.list().unwrap();
        assert_eq!(backups.len(), 1);

        let snapshot = std::fs::read_to_string(&backups[0].path).unwrap();
        assert!(snapshot.contains("Oleh"));
        assert!(!snapshot.contains("Anna"));
    }

    #[test]
    fn test_unreadable_book_survives_exit() {
        let (_temp, storage, settings) = setup(true);
        let book_file = storage.paths().book_file();
        let truncated = "{\n  \"schema_version\": 1,\n  \"contacts\": [\n    {\"name\": \"Oleh\", \"phones\": [\"05012";
        std::fs::write(&book_file, truncated).unwrap();

        let output = run_session(&storage, &settings, "all\nexit\n");
        assert!(output.contains("Контактів немає."));

        // The empty book was saved, and the old bytes are still on disk
        assert!(storage.load().unwrap().is_empty());
        let kept: Vec<_> = std::fs::read_dir(storage.paths().data_dir())
            .unwrap()
            .map(|e| e.unwrap().path())
            .filter(|p| p != &book_file)
            .collect();
        assert_eq!(kept.len(), 1);
        assert_eq!(std::fs::read_to_string(&kept[0]).unwrap(), truncated);
    }

    #[test]
    fn test_birthdays_uses_settings_window() {
        let (_temp, storage, mut settings) = setup(false);
        settings.birthday_window_days = 14;

        let output = run_session(
            &storage,
            &settings,
            "add Anna 0507654321\nadd-birthday Anna 15.01.1985\nbirthdays\nexit\n",
        );
        assert!(output.contains("Anna: 15.01.1985 (через 14 днів)"));
    }
}
