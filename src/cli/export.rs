//! Export CLI command
//!
//! Writes the expense collection to a file or stdout in the chosen format.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;

use crate::error::{KakeiboError, KakeiboResult};
use crate::export::{export_expenses_csv, export_full_json, export_full_yaml};
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Arguments for `kakeibo export`
#[derive(Args)]
pub struct ExportArgs {
    /// Output format: csv, json, or yaml
    pub format: String,
    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle `kakeibo export`
pub fn handle_export(storage: &Storage, args: ExportArgs) -> KakeiboResult<()> {
    let service = ExpenseService::new(&storage.expenses);
    let expenses = service.list()?;

    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(File::create(path).map_err(|e| {
            KakeiboError::Export(format!("Failed to create {}: {}", path.display(), e))
        })?),
        None => Box::new(io::stdout()),
    };

    match args.format.trim().to_lowercase().as_str() {
        "csv" => export_expenses_csv(&expenses, &mut writer)?,
        "json" => export_full_json(expenses, &mut writer)?,
        "yaml" => export_full_yaml(expenses, &mut writer)?,
        other => {
            return Err(KakeiboError::Export(format!(
                "Unknown export format '{}'. Use csv, json, or yaml",
                other
            )))
        }
    }

    if let Some(path) = &args.output {
        eprintln!("Exported to {}", path.display());
    }
    Ok(())
}
