//! YAML export functionality
//!
//! Human-readable rendering of the same envelope the JSON export uses.

use std::io::Write;

use crate::error::{KakeiboError, KakeiboResult};
use crate::models::Expense;

use super::json::FullExport;

/// Export everything as YAML
pub fn export_full_yaml<W: Write>(expenses: Vec<Expense>, writer: &mut W) -> KakeiboResult<()> {
    let export = FullExport::new(expenses);

    serde_yaml::to_writer(writer, &export).map_err(|e| KakeiboError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, PaymentType};
    use chrono::NaiveDate;

    #[test]
    fn test_export_contains_fields() {
        let expenses = vec![Expense::new(
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            "Coffee",
            Money::from_units(50),
            PaymentType::Cash,
        )];

        let mut buffer = Vec::new();
        export_full_yaml(expenses, &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert!(output.contains("schema_version: 1"));
        assert!(output.contains("description: Coffee"));
        assert!(output.contains("date: 2024-03-10"));
        assert!(output.contains("type: cash"));
    }
}
