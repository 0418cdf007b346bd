use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use phonebook::cli::{handle_backup_command, handle_export_command, BackupCommands, ExportArgs, Shell};
use phonebook::config::{paths::DATA_DIR_ENV, PhonebookPaths, Settings};
use phonebook::storage::Storage;

#[derive(Parser)]
#[command(
    name = "phonebook",
    version,
    about = "Terminal contact manager with birthday reminders",
    long_about = "Phonebook keeps names, phone numbers and birthdays between runs. \
                  Run it without a subcommand to open the interactive assistant."
)]
struct Cli {
    /// Override the data directory
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive assistant (default)
    Shell,

    /// Backup management commands
    #[command(subcommand)]
    Backup(BackupCommands),

    /// Export all contacts to a file
    Export(ExportArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    // Logs go to stderr so they never mix with the assistant's replies
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = PhonebookPaths::resolve(cli.data_dir)?;
    let settings = Settings::load(&paths)?;
    debug!(base_dir = %paths.base_dir().display(), "Resolved paths");

    match cli.command {
        None | Some(Commands::Shell) => {
            let storage = Storage::new(paths)?;
            let stdin = io::stdin();
            Shell::new(&storage, &settings)?.run(stdin.lock(), io::stdout())?;
        }
        Some(Commands::Backup(cmd)) => {
            handle_backup_command(&paths, &settings, cmd)?;
        }
        Some(Commands::Export(args)) => {
            let storage = Storage::new(paths)?;
            handle_export_command(&storage, args)?;
        }
        Some(Commands::Config) => {
            // Write the defaults out so there is a file to edit
            if !paths.settings_file().exists() {
                settings.save(&paths)?;
            }

            println!("Phonebook Configuration");
            println!("=======================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Address book:     {}", paths.book_file().display());
            println!("Backup directory: {}", paths.backup_dir().display());
            println!();
            println!("Settings:");
            println!("  Birthday window:  {} days", settings.birthday_window_days);
            println!("  Backup on exit:   {}", settings.backup_on_exit);
            println!(
                "  Backup retention: {} daily, {} monthly",
                settings.backup_retention.daily_count, settings.backup_retention.monthly_count
            );
        }
    }

    Ok(())
}
