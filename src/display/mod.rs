//! Terminal output formatting
//!
//! Pure string builders: every function returns the text to print, keeping
//! I/O at the CLI boundary.

pub mod calendar;
pub mod expense;
pub mod stats;

pub use calendar::format_month_grid;
pub use expense::{format_daily_view, format_expense_list, format_expense_row};
pub use stats::format_stats_report;
