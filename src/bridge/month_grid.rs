//! Calendar month grid construction.
//!
//! The grid is the contiguous ascending run of calendar months from the month
//! of the earliest hire date to the month of the latest effective end across
//! a batch. It is built once per batch and shared read-only afterwards.

use std::ops::Range;

use chrono::NaiveDate;

use crate::models::{month_ordinal, CalendarMonth, EmploymentWindow};

/// A contiguous, ascending sequence of calendar months.
///
/// # Example
///
/// ```
/// use rotation_bridge::bridge::MonthGrid;
/// use chrono::NaiveDate;
///
/// let grid = MonthGrid::between(
///     NaiveDate::from_ymd_opt(2023, 11, 20).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 2, 3).unwrap(),
/// );
/// let labels: Vec<String> = grid.months().iter().map(|m| m.period_label()).collect();
/// assert_eq!(labels, ["2023-11", "2023-12", "2024-01", "2024-02"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthGrid {
    months: Vec<CalendarMonth>,
}

impl MonthGrid {
    /// Builds the grid covering every window that has a usable span.
    ///
    /// Windows without a hire date, or whose hire date falls after their
    /// effective end, do not contribute to the bounds. With no contributing
    /// window the grid is empty.
    pub fn spanning(windows: &[EmploymentWindow]) -> Self {
        let bounds = windows
            .iter()
            .filter_map(EmploymentWindow::span)
            .fold(None, |acc: Option<(NaiveDate, NaiveDate)>, (start, end)| {
                Some(match acc {
                    None => (start, end),
                    Some((min, max)) => (min.min(start), max.max(end)),
                })
            });

        match bounds {
            Some((first, last)) => Self::between(first, last),
            None => Self::default(),
        }
    }

    /// Builds the grid from the month containing `first` through the month
    /// containing `last`, inclusive. Empty when `first` is after `last`.
    pub fn between(first: NaiveDate, last: NaiveDate) -> Self {
        if first > last {
            return Self::default();
        }

        let last_month = CalendarMonth::containing(last);
        let mut months = Vec::new();
        let mut current = Some(CalendarMonth::containing(first));

        while let Some(month) = current {
            if month.month_start > last_month.month_start {
                break;
            }
            months.push(month);
            current = month.next();
        }

        Self { months }
    }

    /// The months of the grid, ascending.
    pub fn months(&self) -> &[CalendarMonth] {
        &self.months
    }

    /// Number of months in the grid.
    pub fn len(&self) -> usize {
        self.months.len()
    }

    /// Returns true if the grid has no months.
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Index range of the grid months that intersect `[start, end]`.
    ///
    /// Computed arithmetically from month ordinals, so it costs O(1)
    /// regardless of grid length. Empty if the span misses the grid.
    pub fn index_range(&self, start: NaiveDate, end: NaiveDate) -> Range<usize> {
        let Some(first) = self.months.first() else {
            return 0..0;
        };
        if start > end {
            return 0..0;
        }

        let base = first.ordinal();
        let len = self.months.len() as i64;
        let lo = (month_ordinal(start) - base).clamp(0, len);
        let hi = (month_ordinal(end) - base + 1).clamp(0, len);

        if lo >= hi {
            0..0
        } else {
            lo as usize..hi as usize
        }
    }
}
