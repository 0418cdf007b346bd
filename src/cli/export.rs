//! CLI command for data export

use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::error::{PhonebookError, PhonebookResult};
use crate::export::{export_contacts_csv, export_full_json, export_full_yaml};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV, one row per contact
    Csv,
    /// JSON (full export)
    Json,
    /// YAML (full export, human-readable)
    Yaml,
}

/// Arguments for `phonebook export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path
    pub output: PathBuf,

    /// Export format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle the export command
pub fn handle_export_command(storage: &Storage, args: ExportArgs) -> PhonebookResult<()> {
    let book = storage.load()?;

    let file = File::create(&args.output).map_err(|e| {
        PhonebookError::Export(format!(
            "Failed to create file {}: {}",
            args.output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    match args.format {
        ExportFormat::Csv => export_contacts_csv(&book, &mut writer)?,
        ExportFormat::Json => export_full_json(&book, &mut writer, args.pretty)?,
        ExportFormat::Yaml => export_full_yaml(&book, &mut writer)?,
    }

    writer
        .flush()
        .map_err(|e| PhonebookError::Export(e.to_string()))?;

    println!(
        "Exported {} contact(s) to: {}",
        book.len(),
        args.output.display()
    );

    Ok(())
}
