//! JSON export functionality
//!
//! Full machine-readable export with a schema version and export timestamp.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{KakeiboError, KakeiboResult};
use crate::models::Expense;

/// Schema version written into every export envelope
pub const EXPORT_SCHEMA_VERSION: u32 = 1;

/// Complete export envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Export format version
    pub schema_version: u32,

    /// When the export was produced
    pub exported_at: DateTime<Utc>,

    /// Every expense record
    pub expenses: Vec<Expense>,
}

impl FullExport {
    /// Build an export envelope around the given expenses
    pub fn new(expenses: Vec<Expense>) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            exported_at: Utc::now(),
            expenses,
        }
    }
}

/// Export everything as pretty-printed JSON
pub fn export_full_json<W: Write>(expenses: Vec<Expense>, writer: &mut W) -> KakeiboResult<()> {
    let export = FullExport::new(expenses);

    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| KakeiboError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| KakeiboError::Export(e.to_string()))?;

    Ok(())
}
