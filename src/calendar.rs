//! Calendar-grid date helpers
//!
//! Pure date math backing the month-view display: day counts, weekday
//! offsets, and month navigation. Weeks start on Sunday throughout.

use chrono::{Datelike, Duration, Local, NaiveDate};

/// Number of days in a month (handles leap years)
///
/// `month` must be in `1..=12`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    // One day before the first of the following month
    (first_of_next.unwrap() - Duration::days(1)).day()
}

/// Weekday index of the first day of a month (0 = Sunday .. 6 = Saturday)
///
/// `month` must be in `1..=12`.
pub fn first_weekday_of_month(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .unwrap()
        .weekday()
        .num_days_from_sunday()
}

/// Today's date in the local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Two-line date header: `"2025/11/25"` and `"TUESDAY"`
pub fn date_header(date: NaiveDate) -> (String, String) {
    let date_line = date.format("%Y/%m/%d").to_string();
    let day_line = date.format("%A").to_string().to_uppercase();
    (date_line, day_line)
}

/// One month of the calendar grid
///
/// Cells are `None` for the leading blanks before the first day of the month,
/// then `Some(day)` for each day. Chunked into rows of seven for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    cells: Vec<Option<u32>>,
}

impl MonthGrid {
    /// Build the grid for a month
    ///
    /// `month` must be in `1..=12`.
    pub fn new(year: i32, month: u32) -> Self {
        let leading = first_weekday_of_month(year, month) as usize;
        let days = days_in_month(year, month);

        let mut cells: Vec<Option<u32>> = vec![None; leading];
        cells.extend((1..=days).map(Some));

        Self { year, month, cells }
    }

    /// Number of days in this month
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    /// The grid rows, each a Sunday-through-Saturday week
    pub fn weeks(&self) -> Vec<[Option<u32>; 7]> {
        self.cells
            .chunks(7)
            .map(|chunk| {
                let mut week = [None; 7];
                week[..chunk.len()].copy_from_slice(chunk);
                week
            })
            .collect()
    }

    /// The date of a given day number within this month
    pub fn date_of(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    /// The previous month's grid
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self::new(self.year - 1, 12)
        } else {
            Self::new(self.year, self.month - 1)
        }
    }

    /// The next month's grid
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self::new(self.year + 1, 1)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 1), 31);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2024, 12), 31);
    }

    #[test]
    fn test_days_in_february() {
        assert_eq!(days_in_month(2024, 2), 29); // leap year
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29); // divisible by 400
        assert_eq!(days_in_month(1900, 2), 28); // divisible by 100 but not 400
    }

    #[test]
    fn test_first_weekday_of_month() {
        // March 2024 starts on a Friday
        assert_eq!(first_weekday_of_month(2024, 3), 5);
        // September 2024 starts on a Sunday
        assert_eq!(first_weekday_of_month(2024, 9), 0);
    }

    #[test]
    fn test_month_grid_cells() {
        let grid = MonthGrid::new(2024, 3);
        let weeks = grid.weeks();

        // 5 leading blanks + 31 days = 36 cells -> 6 rows
        assert_eq!(weeks.len(), 6);
        assert_eq!(weeks[0][4], None);
        assert_eq!(weeks[0][5], Some(1));
        assert_eq!(weeks[5][0], Some(31));
        assert_eq!(weeks[5][1], None);
    }

    #[test]
    fn test_month_grid_no_leading_blanks() {
        let grid = MonthGrid::new(2024, 9);
        assert_eq!(grid.weeks()[0][0], Some(1));
    }

    #[test]
    fn test_month_navigation() {
        let jan = MonthGrid::new(2025, 1);
        assert_eq!(jan.prev(), MonthGrid::new(2024, 12));
        assert_eq!(jan.next(), MonthGrid::new(2025, 2));

        let dec = MonthGrid::new(2024, 12);
        assert_eq!(dec.next(), MonthGrid::new(2025, 1));
    }

    #[test]
    fn test_date_header() {
        let date = NaiveDate::from_ymd_opt(2025, 11, 25).unwrap();
        let (date_line, day_line) = date_header(date);
        assert_eq!(date_line, "2025/11/25");
        assert_eq!(day_line, "TUESDAY");
    }

    #[test]
    fn test_date_of() {
        let grid = MonthGrid::new(2024, 2);
        assert_eq!(
            grid.date_of(29),
            Some(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap())
        );
        assert_eq!(grid.date_of(30), None);
    }
}
