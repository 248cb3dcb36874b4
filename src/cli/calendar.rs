//! Calendar CLI command
//!
//! Shows one month as a grid with per-day spending totals.

use std::collections::HashMap;

use chrono::Datelike;
use clap::Args;

use crate::calendar::{today, MonthGrid};
use crate::config::Settings;
use crate::display::format_month_grid;
use crate::error::{KakeiboError, KakeiboResult};
use crate::models::Money;
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Arguments for `kakeibo calendar`
#[derive(Args)]
pub struct CalendarArgs {
    /// Month to show (YYYY-MM), defaults to the current month
    pub month: Option<String>,
}

/// Handle `kakeibo calendar`
pub fn handle_calendar(
    storage: &Storage,
    settings: &Settings,
    args: CalendarArgs,
) -> KakeiboResult<()> {
    let (year, month) = match args.month.as_deref() {
        Some(s) => parse_month(s)?,
        None => {
            let now = today();
            (now.year(), now.month())
        }
    };

    let grid = MonthGrid::new(year, month);

    let service = ExpenseService::new(&storage.expenses);
    let mut totals: HashMap<u32, Money> = HashMap::new();
    for expense in service.list()? {
        if expense.date.year() == year && expense.date.month() == month {
            *totals.entry(expense.date.day()).or_insert(Money::zero()) += expense.amount;
        }
    }

    print!(
        "{}",
        format_month_grid(&grid, &totals, &settings.currency_symbol)
    );
    Ok(())
}

/// Parse a `YYYY-MM` month argument
fn parse_month(s: &str) -> KakeiboResult<(i32, u32)> {
    let invalid = || KakeiboError::Validation(format!("Invalid month '{}': expected YYYY-MM", s));

    let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;

    if !(1..=12).contains(&month) {
        return Err(invalid());
    }
    Ok((year, month))
}
