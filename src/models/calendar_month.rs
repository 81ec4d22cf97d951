//! Calendar month model.
//!
//! This module contains the [`CalendarMonth`] type, one cell of the month
//! grid that employment windows are partitioned against.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// A calendar month with inclusive start and end days.
///
/// # Example
///
/// ```
/// use rotation_bridge::models::CalendarMonth;
/// use chrono::NaiveDate;
///
/// let february = CalendarMonth::containing(NaiveDate::from_ymd_opt(2024, 2, 14).unwrap());
/// assert_eq!(february.month_start, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
/// assert_eq!(february.month_end, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// assert_eq!(february.days_in_month, 29);
/// assert_eq!(february.period_label(), "2024-02");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CalendarMonth {
    /// First day of the month.
    pub month_start: NaiveDate,
    /// Last day of the month (inclusive).
    pub month_end: NaiveDate,
    /// Number of days in the month (28-31).
    pub days_in_month: u32,
}

impl CalendarMonth {
    /// Returns the calendar month that contains `date`.
    pub fn containing(date: NaiveDate) -> Self {
        let month_start = date - chrono::Duration::days(i64::from(date.day0()));
        // Only the very last representable month has no successor.
        let month_end = month_start
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(NaiveDate::MAX);
        let days_in_month = ((month_end - month_start).num_days() + 1) as u32;

        Self {
            month_start,
            month_end,
            days_in_month,
        }
    }

    /// Returns the month immediately after this one, if representable.
    pub fn next(&self) -> Option<Self> {
        self.month_end.succ_opt().map(Self::containing)
    }

    /// Checks whether `date` falls within this month (inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.month_start && date <= self.month_end
    }

    /// Months elapsed since year 0, used to index a contiguous grid.
    pub fn ordinal(&self) -> i64 {
        month_ordinal(self.month_start)
    }

    /// The human-readable `YYYY-MM` label of this month.
    pub fn period_label(&self) -> String {
        self.month_start.format("%Y-%m").to_string()
    }
}

/// Months elapsed since January of year 0 for the month containing `date`.
pub(crate) fn month_ordinal(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month0())
}
