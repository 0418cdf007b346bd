//! Taking, listing and pruning snapshots of book.json

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDateTime, Utc};
use tracing::info;

use crate::config::paths::PhonebookPaths;
use crate::config::settings::BackupRetention;
use crate::error::{PhonebookError, PhonebookResult};
use crate::storage::write_atomic;

const PREFIX: &str = "book-";
const EXTENSION: &str = ".json";
const STAMP_FORMAT: &str = "%Y%m%d-%H%M%S%.3f";

/// One snapshot file in the backup directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Backup {
    pub path: PathBuf,
    /// UTC time encoded in the file name
    pub taken_at: NaiveDateTime,
}

impl Backup {
    /// Recognize `book-YYYYMMDD-HHMMSS.mmm.json`; anything else is not a backup
    fn from_path(path: PathBuf) -> Option<Self> {
        let name = path.file_name()?.to_str()?;
        let stamp = name.strip_prefix(PREFIX)?.strip_suffix(EXTENSION)?;
        let taken_at = NaiveDateTime::parse_from_str(stamp, STAMP_FORMAT).ok()?;
        Some(Self { path, taken_at })
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// First-of-month snapshots count against the monthly quota
    pub fn is_monthly(&self) -> bool {
        self.taken_at.day() == 1
    }
}

pub struct BackupManager {
    dir: PathBuf,
    book_file: PathBuf,
    retention: BackupRetention,
}

impl BackupManager {
    pub fn new(paths: &PhonebookPaths, retention: BackupRetention) -> Self {
        Self {
            dir: paths.backup_dir(),
            book_file: paths.book_file(),
            retention,
        }
    }

    pub fn retention(&self) -> &BackupRetention {
        &self.retention
    }

    /// Copy the current book file byte for byte into the backup directory
    ///
    /// Returns `None` when there is no book file yet. The bytes are not
    /// parsed, so an unreadable book is preserved as well.
    pub fn snapshot(&self) -> PhonebookResult<Option<PathBuf>> {
        let bytes = match fs::read(&self.book_file) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(PhonebookError::Backup(format!(
                    "Failed to read {}: {}",
                    self.book_file.display(),
                    e
                )))
            }
        };

        let stamp = Utc::now().naive_utc().format(STAMP_FORMAT);
        let path = self.dir.join(format!("{PREFIX}{stamp}{EXTENSION}"));
        write_atomic(&path, &bytes)?;

        info!(path = %path.display(), bytes = bytes.len(), "Created backup");
        Ok(Some(path))
    }

    /// Snapshot, then delete whatever falls outside the retention quotas
    pub fn snapshot_and_prune(&self) -> PhonebookResult<Option<PathBuf>> {
        let created = self.snapshot()?;
        self.prune()?;
        Ok(created)
    }

    /// All backups, newest first
    pub fn list(&self) -> PhonebookResult<Vec<Backup>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut backups = Vec::new();
        for entry in entries {
            if let Some(backup) = Backup::from_path(entry?.path()) {
                backups.push(backup);
            }
        }

        backups.sort_by(|a, b| b.taken_at.cmp(&a.taken_at));
        Ok(backups)
    }

    pub fn latest(&self) -> PhonebookResult<Option<Backup>> {
        Ok(self.list()?.into_iter().next())
    }

    /// Backups beyond the newest `daily_count` ordinary and `monthly_count`
    /// first-of-month snapshots
    pub fn expired(&self) -> PhonebookResult<Vec<Backup>> {
        let (monthly, daily): (Vec<_>, Vec<_>) =
            self.list()?.into_iter().partition(Backup::is_monthly);

        Ok(daily
            .into_iter()
            .skip(self.retention.daily_count as usize)
            .chain(monthly.into_iter().skip(self.retention.monthly_count as usize))
            .collect())
    }

    /// Delete expired backups, returning their paths
    pub fn prune(&self) -> PhonebookResult<Vec<PathBuf>> {
        let mut deleted = Vec::new();
        for backup in self.expired()? {
            fs::remove_file(&backup.path).map_err(|e| {
                PhonebookError::Backup(format!("Failed to delete {}: {}", backup.path.display(), e))
            })?;
            deleted.push(backup.path);
        }

        if !deleted.is_empty() {
            info!(count = deleted.len(), "Pruned old backups");
        }
        Ok(deleted)
    }

    /// Find a backup by `latest`, a path, or a file name in the backup directory
    pub fn resolve(&self, name: &str) -> PhonebookResult<PathBuf> {
        let not_found = || PhonebookError::NotFound {
            entity_type: "Backup",
            identifier: name.to_string(),
        };

        if name.eq_ignore_ascii_case("latest") {
            return self.latest()?.map(|b| b.path).ok_or_else(not_found);
        }

        let candidates = [
            PathBuf::from(name),
            self.dir.join(name),
            self.dir.join(format!("{name}{EXTENSION}")),
        ];
        candidates
            .into_iter()
            .find(|p| p.is_file())
            .ok_or_else(not_found)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn setup(daily_count: u32, monthly_count: u32) -> (TempDir, PhonebookPaths, BackupManager) {
        let temp_dir = TempDir::new().unwrap();
        let paths = PhonebookPaths::with_base_dir(temp_dir.path());
        paths.ensure_directories().unwrap();
        let manager = BackupManager::new(
            &paths,
            BackupRetention {
                daily_count,
                monthly_count,
            },
        );
        (temp_dir, paths, manager)
    }

    /// Drop a backup file with a chosen timestamp
    fn plant(manager: &BackupManager, stamp: &str) -> PathBuf {
        let path = manager.dir().join(format!("book-{stamp}.json"));
        fs::write(&path, "{}").unwrap();
        path
    }

    #[test]
    fn test_no_book_no_snapshot() {
        let (_temp, _paths, manager) = setup(3, 3);

        assert_eq!(manager.snapshot().unwrap(), None);
        assert!(manager.list().unwrap().is_empty());
    }

    #[test]
    fn test_snapshot_copies_bytes() {
        let (_temp, paths, manager) = setup(3, 3);
        let contents = "{\"schema_version\": 1, \"contacts\": [";
        fs::write(paths.book_file(), contents).unwrap();

        let path = manager.snapshot().unwrap().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), contents);
        assert_eq!(manager.latest().unwrap().unwrap().path, path);
    }

    #[test]
    fn test_file_name_round_trip() {
        let backup = Backup::from_path(PathBuf::from("book-20251127-143022.456.json")).unwrap();
        let expected = NaiveDate::from_ymd_opt(2025, 11, 27)
            .unwrap()
            .and_hms_milli_opt(14, 30, 22, 456)
            .unwrap();

        assert_eq!(backup.taken_at, expected);
        assert_eq!(backup.file_name(), "book-20251127-143022.456.json");
        assert!(!backup.is_monthly());
    }

    #[test]
    fn test_foreign_files_ignored() {
        let (_temp, _paths, manager) = setup(3, 3);
        fs::write(manager.dir().join("notes.json"), "{}").unwrap();
        fs::write(manager.dir().join("book-garbage.json"), "{}").unwrap();
        fs::write(manager.dir().join("book-20250101-000000.000.txt"), "{}").unwrap();

        assert!(manager.list().unwrap().is_empty());
    }

    #[test]
    fn test_list_newest_first() {
        let (_temp, _paths, manager) = setup(3, 3);
        plant(&manager, "20250310-090000.000");
        plant(&manager, "20250312-090000.000");
        plant(&manager, "20250311-090000.000");

        let days: Vec<_> = manager
            .list()
            .unwrap()
            .iter()
            .map(|b| b.taken_at.day())
            .collect();
        assert_eq!(days, vec![12, 11, 10]);
    }

    #[test]
    fn test_retention_quotas_are_separate() {
        let (_temp, _paths, manager) = setup(2, 1);
        let old_daily = plant(&manager, "20250310-090000.000");
        plant(&manager, "20250311-090000.000");
        plant(&manager, "20250312-090000.000");
        let old_monthly = plant(&manager, "20250201-090000.000");
        plant(&manager, "20250301-090000.000");

        let mut deleted = manager.prune().unwrap();
        deleted.sort();
        let mut expected = vec![old_daily, old_monthly];
        expected.sort();

        assert_eq!(deleted, expected);
        assert_eq!(manager.list().unwrap().len(), 3);
        assert!(manager.expired().unwrap().is_empty());
    }

    #[test]
    fn test_snapshot_and_prune() {
        let (_temp, paths, manager) = setup(1, 0);
        fs::write(paths.book_file(), "{}").unwrap();
        plant(&manager, "20200102-000000.000");

        let created = manager.snapshot_and_prune().unwrap().unwrap();
        assert!(Backup::from_path(created).is_some());

        // One ordinary snapshot survives whichever day this runs on
        assert_eq!(manager.list().unwrap().len(), 1);
    }

    #[test]
    fn test_resolve() {
        let (_temp, _paths, manager) = setup(3, 3);
        assert!(manager.resolve("latest").unwrap_err().is_not_found());

        let older = plant(&manager, "20250101-000000.000");
        let newer = plant(&manager, "20250102-000000.000");

        assert_eq!(manager.resolve("latest").unwrap(), newer);
        assert_eq!(manager.resolve("LATEST").unwrap(), newer);
        assert_eq!(manager.resolve("book-20250101-000000.000.json").unwrap(), older);
        assert_eq!(manager.resolve("book-20250101-000000.000").unwrap(), older);
        assert_eq!(manager.resolve(older.to_str().unwrap()).unwrap(), older);
        assert!(manager.resolve("book-19990101-000000.000").unwrap_err().is_not_found());
    }
}
