//! Date-range resolution for the stats views
//!
//! Maps a reference date and a view granularity to an inclusive
//! `[start, end]` calendar interval. Weeks are anchored to the Sunday on or
//! before the reference date; month ends are computed as one day before the
//! first of the following month, which handles 28/29/30/31-day months and
//! leap years without a lookup table.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::calendar::days_in_month;
use crate::error::KakeiboError;

/// Aggregation window size for the stats views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StatsView {
    /// The selected day only
    #[default]
    Daily,
    /// Sunday through Saturday containing the selected day
    Weekly,
    /// The selected day's calendar month
    Monthly,
    /// The selected day's calendar year
    Yearly,
}

impl StatsView {
    /// All views, in display order
    pub const ALL: [StatsView; 4] = [Self::Daily, Self::Weekly, Self::Monthly, Self::Yearly];
}

impl fmt::Display for StatsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily => write!(f, "daily"),
            Self::Weekly => write!(f, "weekly"),
            Self::Monthly => write!(f, "monthly"),
            Self::Yearly => write!(f, "yearly"),
        }
    }
}

impl FromStr for StatsView {
    type Err = KakeiboError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" | "day" => Ok(Self::Daily),
            "weekly" | "week" => Ok(Self::Weekly),
            "monthly" | "month" => Ok(Self::Monthly),
            "yearly" | "year" => Ok(Self::Yearly),
            other => Err(KakeiboError::Validation(format!(
                "Unknown stats view '{}'. Use daily, weekly, monthly, or yearly",
                other
            ))),
        }
    }
}

/// An inclusive pair of calendar dates with `start <= end` by construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Resolve the range containing `reference` for the given view
    pub fn resolve(reference: NaiveDate, view: StatsView) -> Self {
        match view {
            StatsView::Daily => Self {
                start: reference,
                end: reference,
            },
            StatsView::Weekly => {
                let back = reference.weekday().num_days_from_sunday() as i64;
                let start = reference - Duration::days(back);
                Self {
                    start,
                    end: start + Duration::days(6),
                }
            }
            StatsView::Monthly => {
                let (year, month) = (reference.year(), reference.month());
                Self {
                    start: NaiveDate::from_ymd_opt(year, month, 1).unwrap(),
                    end: NaiveDate::from_ymd_opt(year, month, days_in_month(year, month)).unwrap(),
                }
            }
            StatsView::Yearly => {
                let year = reference.year();
                Self {
                    start: NaiveDate::from_ymd_opt(year, 1, 1).unwrap(),
                    end: NaiveDate::from_ymd_opt(year, 12, 31).unwrap(),
                }
            }
        }
    }

    /// Check if a date falls within this range, both ends inclusive
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}
