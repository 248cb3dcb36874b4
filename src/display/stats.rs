//! Stats report formatting
//!
//! Renders a `StatsReport` for the terminal: window header, total and
//! cash/card split, then the ranked description breakdown with percentages.

use crate::stats::StatsReport;

/// Format a stats report for terminal display
pub fn format_stats_report(report: &StatsReport, symbol: &str) -> String {
    let mut output = String::new();

    match report.range {
        Some(range) => output.push_str(&format!(
            "Spending ({}): {}\n",
            report.view, range
        )),
        None => output.push_str(&format!("Spending ({}): no date selected\n", report.view)),
    }
    output.push_str(&"=".repeat(60));
    output.push('\n');

    output.push_str(&format!(
        "Total: {}\n",
        report.total.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Cash:  {}\n",
        report.cash.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Card:  {}\n",
        report.card.format_with_symbol(symbol)
    ));

    if report.chart_data.is_empty() {
        return output;
    }

    output.push('\n');
    output.push_str(&format!("{:<30} {:>12} {:>8}\n", "Description", "Amount", "%"));
    output.push_str(&"-".repeat(60));
    output.push('\n');

    let total_abs = report.total.abs();
    for entry in &report.chart_data {
        let percentage = if total_abs.is_zero() {
            0.0
        } else {
            (entry.value.abs().units() as f64 / total_abs.units() as f64) * 100.0
        };
        output.push_str(&format!(
            "{:<30} {:>12} {:>7.1}%\n",
            entry.name,
            entry.value.format_with_symbol(symbol),
            percentage
        ));
    }

    output.push_str(&format!(
        "\n{} expense(s) in window\n",
        report.filtered.len()
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, Money, PaymentType};
    use crate::stats::{StatsReport, StatsView};
    use chrono::NaiveDate;

    fn sample_report() -> StatsReport {
        let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let expenses = vec![
            Expense::new(date, "Coffee", Money::from_units(50), PaymentType::Cash),
            Expense::new(date, "Groceries", Money::from_units(30), PaymentType::Card),
        ];
        StatsReport::for_date(&expenses, date, StatsView::Daily)
    }

    #[test]
    fn test_report_contains_totals_and_breakdown() {
        let output = format_stats_report(&sample_report(), "NT$");

        assert!(output.contains("Spending (daily): 2024-03-10..2024-03-10"));
        assert!(output.contains("Total: NT$80"));
        assert!(output.contains("Cash:  NT$50"));
        assert!(output.contains("Card:  NT$30"));
        assert!(output.contains("Coffee"));
        assert!(output.contains("62.5%"));
        assert!(output.contains("2 expense(s) in window"));
    }

    #[test]
    fn test_empty_report() {
        let report = StatsReport::empty(StatsView::Weekly);
        let output = format_stats_report(&report, "NT$");
        assert!(output.contains("no date selected"));
        assert!(output.contains("Total: NT$0"));
        assert!(!output.contains("Description"));
    }
}
