//! CLI commands for data export
//!
//! Writes one user's expenses to a file in the chosen format.

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_user_csv, export_user_json, export_user_yaml};
use crate::services::{SessionService, UserType};
use crate::storage::Storage;
use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (one row per expense)
    Csv,
    /// JSON format (expenses plus metadata)
    Json,
    /// YAML format (human-readable)
    Yaml,
}

/// Arguments of the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Username
    #[arg(short, long, env = "EXPENSE_USER")]
    pub user: String,

    /// Output file path
    pub output: PathBuf,

    /// Export format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ExportFormat,
}

/// Handle the export command
pub fn handle_export_command(storage: &Storage, args: ExportArgs) -> ExpenseResult<()> {
    let session = SessionService::new(storage).start(&args.user, UserType::Existing)?;

    let file = File::create(&args.output).map_err(|e| {
        ExpenseError::Export(format!(
            "Failed to create file {}: {}",
            args.output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    match args.format {
        ExportFormat::Csv => export_user_csv(&session, &mut writer)?,
        ExportFormat::Json => export_user_json(&session, &mut writer)?,
        ExportFormat::Yaml => export_user_yaml(&session, &mut writer)?,
    }

    writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    println!(
        "Exported {} expense(s) for {} to: {}",
        session.len(),
        session.username(),
        args.output.display()
    );

    Ok(())
}
