//! Export module for kakeibo
//!
//! Provides expense data export in multiple formats:
//! - CSV: spreadsheet-compatible expense rows
//! - JSON: machine-readable full export
//! - YAML: human-readable full export

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_expenses_csv;
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
