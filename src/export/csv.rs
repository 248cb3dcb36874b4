//! CSV export functionality
//!
//! Exports expense records to CSV, one row per expense.

use std::io::Write;

use serde::Serialize;

use crate::error::{KakeiboError, KakeiboResult};
use crate::models::Expense;

/// Flat CSV row shape for one expense
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    id: String,
    date: String,
    description: &'a str,
    amount: i64,
    #[serde(rename = "type")]
    payment: String,
}

impl<'a> From<&'a Expense> for CsvRow<'a> {
    fn from(expense: &'a Expense) -> Self {
        Self {
            id: expense.id.as_uuid().to_string(),
            date: expense.date.format("%Y-%m-%d").to_string(),
            description: &expense.description,
            amount: expense.amount.units(),
            payment: expense.payment.to_string(),
        }
    }
}

/// Export expenses to CSV
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: &mut W) -> KakeiboResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for expense in expenses {
        csv_writer
            .serialize(CsvRow::from(expense))
            .map_err(|e| KakeiboError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| KakeiboError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, PaymentType};
    use chrono::NaiveDate;

    fn expense(date: &str, description: &str, amount: i64, payment: PaymentType) -> Expense {
        Expense::new(
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            description,
            Money::from_units(amount),
            payment,
        )
    }

    #[test]
    fn test_export_has_header_and_rows() {
        let expenses = vec![
            expense("2024-03-10", "Coffee", 50, PaymentType::Cash),
            expense("2024-03-11", "Lunch, with drinks", 120, PaymentType::Card),
        ];

        let mut buffer = Vec::new();
        export_expenses_csv(&expenses, &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("id,date,description,amount,type"));
        assert!(output.contains("2024-03-10,Coffee,50,cash"));
        // Comma in description is quoted
        assert!(output.contains("\"Lunch, with drinks\""));
    }

    #[test]
    fn test_export_empty_collection() {
        let mut buffer = Vec::new();
        export_expenses_csv(&[], &mut buffer).unwrap();
        assert!(buffer.is_empty());
    }
}
