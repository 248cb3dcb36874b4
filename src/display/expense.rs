//! Expense display formatting
//!
//! Register-style rows for expense listings and the per-day diary view.

use chrono::NaiveDate;

use crate::calendar::date_header;
use crate::models::{Expense, Money};

/// Format a single expense for display (register row)
pub fn format_expense_row(expense: &Expense, symbol: &str) -> String {
    format!(
        "{}  {}  {:<24} {:>12}  {}",
        expense.id,
        expense.date.format("%Y-%m-%d"),
        truncate(&expense.description, 24),
        expense.amount.format_with_symbol(symbol),
        expense.payment
    )
}

/// Format a list of expenses as a register with a total line
pub fn format_expense_list(expenses: &[Expense], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:12}  {:10}  {:<24} {:>12}  {}\n",
        "Id", "Date", "Description", "Amount", "Type"
    ));
    output.push_str(&"-".repeat(70));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, symbol));
        output.push('\n');
    }

    let total: Money = expenses.iter().map(|e| e.amount).sum();
    output.push_str(&"-".repeat(70));
    output.push('\n');
    output.push_str(&format!(
        "{:<50} {:>12}\n",
        "Total",
        total.format_with_symbol(symbol)
    ));

    output
}

/// Format the diary view for one day: date header, expenses, daily total
pub fn format_daily_view(date: NaiveDate, expenses: &[Expense], symbol: &str) -> String {
    let (date_line, day_line) = date_header(date);

    let mut output = String::new();
    output.push_str(&format!("{}\n{}\n\n", date_line, day_line));

    if expenses.is_empty() {
        output.push_str("No expenses logged.\n");
        return output;
    }

    for expense in expenses {
        output.push_str(&format!(
            "  {:<24} {:>12}  {}\n",
            truncate(&expense.description, 24),
            expense.amount.format_with_symbol(symbol),
            expense.payment
        ));
    }

    let total: Money = expenses.iter().map(|e| e.amount).sum();
    output.push('\n');
    output.push_str(&format!(
        "  {:<24} {:>12}\n",
        "Total",
        total.format_with_symbol(symbol)
    ));

    output
}

/// Truncate a string to a maximum display length
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PaymentType;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn expense(description: &str, amount: i64, payment: PaymentType) -> Expense {
        Expense::new(date("2024-03-10"), description, Money::from_units(amount), payment)
    }

    #[test]
    fn test_row_contains_fields() {
        let e = expense("Coffee", 120, PaymentType::Card);
        let row = format_expense_row(&e, "NT$");
        assert!(row.contains("2024-03-10"));
        assert!(row.contains("Coffee"));
        assert!(row.contains("NT$120"));
        assert!(row.contains("card"));
        assert!(row.contains("exp-"));
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_expense_list(&[], "NT$"), "No expenses found.\n");
    }

    #[test]
    fn test_list_has_total() {
        let expenses = vec![
            expense("Coffee", 50, PaymentType::Cash),
            expense("Lunch", 30, PaymentType::Card),
        ];
        let output = format_expense_list(&expenses, "NT$");
        assert!(output.contains("Total"));
        assert!(output.contains("NT$80"));
    }

    #[test]
    fn test_daily_view_header() {
        let expenses = vec![expense("Coffee", 50, PaymentType::Cash)];
        let output = format_daily_view(date("2024-03-10"), &expenses, "NT$");
        assert!(output.starts_with("2024/03/10\nSUNDAY\n"));
        assert!(output.contains("NT$50"));
    }

    #[test]
    fn test_truncate_long_description() {
        let e = expense("A very long description that will not fit in a row", 10, PaymentType::Cash);
        let row = format_expense_row(&e, "NT$");
        assert!(row.contains('…'));
    }
}
