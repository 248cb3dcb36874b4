//! Spending report generation
//!
//! Classifies an expense collection into the window around a reference date
//! and produces totals by payment method plus a ranked description breakdown
//! for chart rendering. Pure computation: no I/O, no retained state, the full
//! input is re-aggregated on every call.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{KakeiboError, KakeiboResult};
use crate::models::{Expense, Money, PaymentType};

use super::range::{DateRange, StatsView};

/// One slice of the description breakdown: a label and its summed amount
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartEntry {
    pub name: String,
    pub value: Money,
}

/// Aggregated spending for one reference date and view
#[derive(Debug, Clone, Serialize)]
pub struct StatsReport {
    /// The view this report was computed for
    pub view: StatsView,

    /// The resolved window; `None` for the zero-value report
    pub range: Option<DateRange>,

    /// Expenses inside the window, order-preserving relative to input
    pub filtered: Vec<Expense>,

    /// Sum over `filtered`
    pub total: Money,

    /// Sum over the cash partition of `filtered`
    pub cash: Money,

    /// Sum over the card partition of `filtered`
    pub card: Money,

    /// Per-description sums, sorted descending; ties keep first-seen order
    pub chart_data: Vec<ChartEntry>,
}

impl StatsReport {
    /// The zero-value report for the "nothing selected yet" state
    pub fn empty(view: StatsView) -> Self {
        Self {
            view,
            range: None,
            filtered: Vec::new(),
            total: Money::zero(),
            cash: Money::zero(),
            card: Money::zero(),
            chart_data: Vec::new(),
        }
    }

    /// Generate a report from a string-level reference date
    ///
    /// A blank reference is a defined no-op yielding the zero-value report;
    /// a non-blank reference that does not parse as `YYYY-MM-DD` is a caller
    /// contract violation and fails with `InvalidDate`.
    pub fn generate(
        expenses: &[Expense],
        reference: &str,
        view: StatsView,
    ) -> KakeiboResult<Self> {
        let reference = reference.trim();
        if reference.is_empty() {
            return Ok(Self::empty(view));
        }

        let date = NaiveDate::parse_from_str(reference, "%Y-%m-%d")
            .map_err(|_| KakeiboError::InvalidDate(reference.to_string()))?;

        Ok(Self::for_date(expenses, date, view))
    }

    /// Generate a report for an already-parsed reference date
    pub fn for_date(expenses: &[Expense], reference: NaiveDate, view: StatsView) -> Self {
        let range = DateRange::resolve(reference, view);

        let filtered: Vec<Expense> = expenses
            .iter()
            .filter(|e| match view {
                // Equivalent to single-day range containment; a date equals itself
                StatsView::Daily => e.date == reference,
                _ => range.contains(e.date),
            })
            .cloned()
            .collect();

        let total: Money = filtered.iter().map(|e| e.amount).sum();
        let cash: Money = filtered
            .iter()
            .filter(|e| e.payment == PaymentType::Cash)
            .map(|e| e.amount)
            .sum();
        let card: Money = filtered
            .iter()
            .filter(|e| e.payment == PaymentType::Card)
            .map(|e| e.amount)
            .sum();

        // Group by description: running sums keyed by label, first-seen key
        // order tracked explicitly rather than relying on map iteration order
        let mut order: Vec<String> = Vec::new();
        let mut sums: HashMap<String, Money> = HashMap::new();
        for expense in &filtered {
            if let Some(sum) = sums.get_mut(&expense.description) {
                *sum += expense.amount;
            } else {
                order.push(expense.description.clone());
                sums.insert(expense.description.clone(), expense.amount);
            }
        }

        let mut chart_data: Vec<ChartEntry> = order
            .into_iter()
            .map(|name| {
                let value = sums[&name];
                ChartEntry { name, value }
            })
            .collect();
        // Stable sort: equal sums retain first-seen order
        chart_data.sort_by(|a, b| b.value.cmp(&a.value));

        Self {
            view,
            range: Some(range),
            filtered,
            total,
            cash,
            card,
            chart_data,
        }
    }
}
