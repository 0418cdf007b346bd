//! Where the phonebook keeps its files
//!
//! Everything lives under one base directory:
//!
//! ```text
//! <base>/config.json
//! <base>/data/book.json
//! <base>/backups/
//! ```
//!
//! The base is an explicit override, else `PHONEBOOK_DATA_DIR`, else the
//! platform config directory (`$XDG_CONFIG_HOME`, `~/.config` or
//! `%APPDATA%`) joined with `phonebook`.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PhonebookError, PhonebookResult};

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "PHONEBOOK_DATA_DIR";

const APP_DIR: &str = "phonebook";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhonebookPaths {
    base_dir: PathBuf,
}

impl PhonebookPaths {
    /// Pick the base directory, preferring `override_dir` when given
    pub fn resolve(override_dir: Option<PathBuf>) -> PhonebookResult<Self> {
        let base_dir = match override_dir.or_else(|| env::var_os(DATA_DIR_ENV).map(PathBuf::from)) {
            Some(dir) => dir,
            None => platform_config_dir()?.join(APP_DIR),
        };

        Ok(Self { base_dir })
    }

    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    pub fn backup_dir(&self) -> PathBuf {
        self.base_dir.join("backups")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn book_file(&self) -> PathBuf {
        self.data_dir().join("book.json")
    }

    /// Create the data and backup directories (and the base above them)
    pub fn ensure_directories(&self) -> PhonebookResult<()> {
        for dir in [self.data_dir(), self.backup_dir()] {
            fs::create_dir_all(&dir).map_err(|e| {
                PhonebookError::Io(format!("Failed to create {}: {}", dir.display(), e))
            })?;
        }
        Ok(())
    }
}

fn platform_config_dir() -> PhonebookResult<PathBuf> {
    if cfg!(windows) {
        return env::var_os("APPDATA")
            .map(PathBuf::from)
            .ok_or_else(|| PhonebookError::Config("APPDATA is not set".into()));
    }

    if let Some(xdg) = env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(xdg));
    }

    env::var_os("HOME")
        .map(|home| PathBuf::from(home).join(".config"))
        .ok_or_else(|| PhonebookError::Config("HOME is not set".into()))
}
