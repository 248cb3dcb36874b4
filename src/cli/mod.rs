//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging clap
//! argument parsing with the service layer.

pub mod calendar;
pub mod expense;
pub mod export;
pub mod stats;

pub use calendar::{handle_calendar, CalendarArgs};
pub use expense::{
    handle_add, handle_clear, handle_day, handle_delete, handle_list, AddArgs, ClearArgs, DayArgs,
    DeleteArgs, ListArgs,
};
pub use export::{handle_export, ExportArgs};
pub use stats::{handle_stats, StatsArgs};

use chrono::NaiveDate;

use crate::calendar::today;
use crate::error::{KakeiboError, KakeiboResult};

/// Parse a `YYYY-MM-DD` argument, defaulting to today when absent
pub(crate) fn parse_date_or_today(date: Option<&str>) -> KakeiboResult<NaiveDate> {
    match date {
        Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map_err(|_| KakeiboError::InvalidDate(s.to_string())),
        None => Ok(today()),
    }
}

/// Ask the user for a y/N confirmation on stdin
pub(crate) fn confirm(prompt: &str) -> KakeiboResult<bool> {
    use std::io::{BufRead, Write};

    print!("{} [y/N] ", prompt);
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
