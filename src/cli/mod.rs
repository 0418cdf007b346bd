//! CLI command handlers
//!
//! This module contains the interactive shell (command parsing, handlers and
//! the single error-to-message translation) and the clap subcommands for
//! backups and export.

pub mod backup;
pub mod commands;
pub mod export;
pub mod handler;
pub mod shell;

pub use backup::{handle_backup_command, BackupCommands};
pub use commands::{parse_input, Command, CommandSpec, COMMANDS};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use handler::{execute, render};
pub use shell::Shell;
