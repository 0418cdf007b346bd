//! User settings, stored in `config.json`
//!
//! Every field is optional in the file; missing ones take their defaults.

use std::fs;
use std::io;

use serde::{Deserialize, Serialize};

use super::paths::PhonebookPaths;
use crate::error::{PhonebookError, PhonebookResult};
use crate::services::birthdays::DEFAULT_WINDOW_DAYS;
use crate::storage::write_json_atomic;

/// How many backups survive pruning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackupRetention {
    /// Most recent ordinary backups to keep
    pub daily_count: u32,
    /// Most recent first-of-month backups to keep
    pub monthly_count: u32,
}

impl Default for BackupRetention {
    fn default() -> Self {
        Self {
            daily_count: 30,
            monthly_count: 12,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub schema_version: u32,

    /// Days ahead covered by `birthdays` when no window is given
    pub birthday_window_days: u32,

    /// Snapshot the previous book before the shell saves over it
    pub backup_on_exit: bool,

    pub backup_retention: BackupRetention,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: 1,
            birthday_window_days: DEFAULT_WINDOW_DAYS,
            backup_on_exit: true,
            backup_retention: BackupRetention::default(),
        }
    }
}

impl Settings {
    /// Read `config.json`, falling back to defaults when it doesn't exist
    pub fn load(paths: &PhonebookPaths) -> PhonebookResult<Self> {
        let path = paths.settings_file();

        match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents)
                .map_err(|e| PhonebookError::Config(format!("{}: {}", path.display(), e))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(PhonebookError::Io(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    pub fn save(&self, paths: &PhonebookPaths) -> PhonebookResult<()> {
        write_json_atomic(&paths.settings_file(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.birthday_window_days, 7);
        assert!(settings.backup_on_exit);
        assert_eq!(settings.backup_retention.daily_count, 30);
        assert_eq!(settings.backup_retention.monthly_count, 12);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PhonebookPaths::with_base_dir(temp_dir.path());

        assert_eq!(Settings::load(&paths).unwrap(), Settings::default());
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PhonebookPaths::with_base_dir(temp_dir.path());

        let settings = Settings {
            birthday_window_days: 14,
            backup_on_exit: false,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        assert_eq!(Settings::load(&paths).unwrap(), settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings: Settings = serde_json::from_str(
            r#"{"birthday_window_days": 3, "backup_retention": {"daily_count": 5}}"#,
        )
        .unwrap();

        assert_eq!(settings.birthday_window_days, 3);
        assert_eq!(settings.schema_version, 1);
        assert!(settings.backup_on_exit);
        assert_eq!(settings.backup_retention.daily_count, 5);
        assert_eq!(settings.backup_retention.monthly_count, 12);
    }

    #[test]
    fn test_corrupt_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PhonebookPaths::with_base_dir(temp_dir.path());
        fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load(&paths).unwrap_err();
        assert!(matches!(err, PhonebookError::Config(_)));
    }
}
