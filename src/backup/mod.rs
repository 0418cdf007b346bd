//! Snapshots of the address book
//!
//! A backup is an exact copy of `data/book.json` saved as
//! `backups/book-YYYYMMDD-HHMMSS.mmm.json` (UTC). Copies are taken without
//! parsing, so even a book the app can't read is preserved. Restoring
//! validates the copy before it replaces the live file.
//!
//! Pruning keeps the newest `daily_count` ordinary snapshots and the newest
//! `monthly_count` snapshots taken on the first of a month.

mod manager;
mod restore;

pub use manager::{Backup, BackupManager};
pub use restore::{inspect_backup, restore_backup};
