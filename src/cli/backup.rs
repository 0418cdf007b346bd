//! `phonebook backup ...` subcommands

use clap::Subcommand;

use crate::backup::{inspect_backup, restore_backup, Backup, BackupManager};
use crate::config::paths::PhonebookPaths;
use crate::config::settings::Settings;
use crate::error::PhonebookResult;

#[derive(Subcommand, Debug)]
pub enum BackupCommands {
    /// Snapshot the address book now
    Create,

    /// List snapshots, newest first
    List,

    /// Replace the address book with a snapshot
    Restore {
        /// Snapshot file name or path, or 'latest'
        backup: String,

        /// Actually overwrite the address book
        #[arg(short, long)]
        force: bool,
    },

    /// Delete snapshots outside the retention policy
    Prune {
        /// Actually delete them
        #[arg(short, long)]
        force: bool,
    },
}

pub fn handle_backup_command(
    paths: &PhonebookPaths,
    settings: &Settings,
    cmd: BackupCommands,
) -> PhonebookResult<()> {
    let manager = BackupManager::new(paths, settings.backup_retention.clone());

    match cmd {
        BackupCommands::Create => match manager.snapshot()? {
            Some(path) => {
                println!("Backup created: {}", path.display());
                let pruned = manager.prune()?;
                if !pruned.is_empty() {
                    println!("Pruned {} old backup(s).", pruned.len());
                }
            }
            None => println!(
                "Nothing to back up: {} does not exist yet.",
                paths.book_file().display()
            ),
        },

        BackupCommands::List => {
            let backups = manager.list()?;
            if backups.is_empty() {
                println!("No backups found.");
                return Ok(());
            }

            for (i, backup) in backups.iter().enumerate() {
                println!("{:>3}. {}", i + 1, describe(backup));
            }
            println!("Total: {} backup(s)", backups.len());
        }

        BackupCommands::Restore { backup, force } => {
            let path = manager.resolve(&backup)?;
            let data = inspect_backup(&path)?;
            println!("{}: {} contact(s)", path.display(), data.contacts.len());

            if !force {
                println!("This replaces the current address book. Re-run with --force to restore.");
                return Ok(());
            }

            if let Some(previous) = manager.snapshot()? {
                println!("Current address book saved to {}", previous.display());
            }
            let restored = restore_backup(&path, &paths.book_file())?;
            println!("Restored: {} contact(s)", restored);
        }

        BackupCommands::Prune { force } => {
            let expired = manager.expired()?;
            if expired.is_empty() {
                let retention = manager.retention();
                println!(
                    "No backups to prune (keeping {} daily, {} monthly).",
                    retention.daily_count, retention.monthly_count
                );
                return Ok(());
            }

            if !force {
                for backup in &expired {
                    println!("would delete {}", backup.file_name());
                }
                println!("Re-run with --force to delete {} backup(s).", expired.len());
                return Ok(());
            }

            let deleted = manager.prune()?;
            println!("Deleted {} backup(s).", deleted.len());
        }
    }

    Ok(())
}

fn describe(backup: &Backup) -> String {
    let taken = backup.taken_at.format("%Y-%m-%d %H:%M:%S UTC");
    if backup.is_monthly() {
        format!("{} ({}) [monthly]", backup.file_name(), taken)
    } else {
        format!("{} ({})", backup.file_name(), taken)
    }
}
