//! Calendar display formatting
//!
//! Renders one month as a Sunday-anchored grid. Days with logged expenses
//! are marked, and their totals are listed under the grid.

use std::collections::HashMap;

use crate::calendar::MonthGrid;
use crate::models::Money;

/// Format a month grid; `totals` maps day-of-month to spending on that day
pub fn format_month_grid(grid: &MonthGrid, totals: &HashMap<u32, Money>, symbol: &str) -> String {
    let mut output = String::new();

    // Month title, e.g. "March 2024"
    let title = grid
        .date_of(1)
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_default();
    output.push_str(&format!("{:^28}\n", title));
    output.push_str(" Su  Mo  Tu  We  Th  Fr  Sa\n");

    for week in grid.weeks() {
        for cell in week {
            match cell {
                Some(day) if totals.contains_key(&day) => {
                    output.push_str(&format!("{:>3}*", day));
                }
                Some(day) => {
                    output.push_str(&format!("{:>3} ", day));
                }
                None => output.push_str("    "),
            }
        }
        output.push('\n');
    }

    let mut spent_days: Vec<(&u32, &Money)> = totals.iter().collect();
    spent_days.sort_by_key(|(day, _)| **day);

    if !spent_days.is_empty() {
        output.push('\n');
        for (day, total) in spent_days {
            output.push_str(&format!(
                "{:>3}: {}\n",
                day,
                total.format_with_symbol(symbol)
            ));
        }
    }

    output
}
