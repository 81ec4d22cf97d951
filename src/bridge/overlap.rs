//! Day-level overlap between employment windows and grid months.
//!
//! Two strategies produce the same sparse set of (employee, month) pairs:
//!
//! - [`reference_overlaps`] forms every employee × month pair and keeps the
//!   ones with activity. O(E·M); kept as the behavioral reference.
//! - [`enumerate_overlaps`] visits only the grid months intersecting each
//!   window. O(E + active months); used to build bridges.
//!
//! Both emit pairs in employee input order, then ascending month.

use chrono::NaiveDate;
use rayon::prelude::*;

use crate::models::{CalendarMonth, EmploymentWindow};

use super::month_grid::MonthGrid;

/// One (employee, month) pair with a non-zero overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthOverlap {
    /// Index of the employee in the input batch.
    pub employee_index: usize,
    /// Index of the month in the grid.
    pub month_index: usize,
    /// Days of the month covered by the employment window.
    pub active_days: u32,
}

/// Counts the days of `month` covered by `window`, both ends inclusive.
///
/// Returns 0 when the window has no hire date or does not reach the month.
///
/// # Example
///
/// ```
/// use rotation_bridge::bridge::overlap_days;
/// use rotation_bridge::models::{CalendarMonth, EmploymentWindow};
/// use chrono::NaiveDate;
///
/// let window = EmploymentWindow {
///     hire_date: NaiveDate::from_ymd_opt(2024, 1, 15),
///     termination_date: None,
///     effective_end: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
/// };
/// let january = CalendarMonth::containing(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
/// assert_eq!(overlap_days(&window, &january), 17);
/// ```
pub fn overlap_days(window: &EmploymentWindow, month: &CalendarMonth) -> u32 {
    let Some(hire_date) = window.hire_date else {
        return 0;
    };

    let overlap_start: NaiveDate = hire_date.max(month.month_start);
    let overlap_end: NaiveDate = window.effective_end.min(month.month_end);

    if overlap_end >= overlap_start {
        ((overlap_end - overlap_start).num_days() + 1) as u32
    } else {
        0
    }
}

/// Filtered cross product of every window with every grid month.
pub fn reference_overlaps(windows: &[EmploymentWindow], grid: &MonthGrid) -> Vec<MonthOverlap> {
    windows
        .iter()
        .enumerate()
        .flat_map(|(employee_index, window)| {
            grid.months()
                .iter()
                .enumerate()
                .map(move |(month_index, month)| MonthOverlap {
                    employee_index,
                    month_index,
                    active_days: overlap_days(window, month),
                })
        })
        .filter(|overlap| overlap.active_days > 0)
        .collect()
}

/// Direct enumeration of the grid months each window intersects.
pub fn enumerate_overlaps(windows: &[EmploymentWindow], grid: &MonthGrid) -> Vec<MonthOverlap> {
    windows
        .iter()
        .enumerate()
        .flat_map(|(employee_index, window)| window_overlaps(employee_index, window, grid))
        .collect()
}

/// [`enumerate_overlaps`] partitioned by employee across the rayon pool.
///
/// Output order is identical to the sequential version.
pub fn enumerate_overlaps_parallel(
    windows: &[EmploymentWindow],
    grid: &MonthGrid,
) -> Vec<MonthOverlap> {
    windows
        .par_iter()
        .enumerate()
        .flat_map_iter(|(employee_index, window)| window_overlaps(employee_index, window, grid))
        .collect()
}

fn window_overlaps<'a>(
    employee_index: usize,
    window: &'a EmploymentWindow,
    grid: &'a MonthGrid,
) -> impl Iterator<Item = MonthOverlap> + 'a {
    let range = window
        .span()
        .map(|(start, end)| grid.index_range(start, end))
        .unwrap_or(0..0);

    range
        .map(move |month_index| MonthOverlap {
            employee_index,
            month_index,
            active_days: overlap_days(window, &grid.months()[month_index]),
        })
        .filter(|overlap| overlap.active_days > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn window(hire: &str, end: &str, terminated: bool) -> EmploymentWindow {
        let end = NaiveDate::parse_from_str(end, "%Y-%m-%d").unwrap();
        EmploymentWindow {
            hire_date: Some(NaiveDate::parse_from_str(hire, "%Y-%m-%d").unwrap()),
            termination_date: terminated.then_some(end),
            effective_end: end,
        }
    }

    #[test]
    fn test_overlap_partial_first_month() {
        let w = window("2024-01-15", "2024-03-10", false);
        let january = CalendarMonth::containing(date(2024, 1, 1));
        assert_eq!(overlap_days(&w, &january), 17);
    }

    #[test]
    fn test_overlap_full_leap_february() {
        let w = window("2024-01-15", "2024-03-10", false);
        let february = CalendarMonth::containing(date(2024, 2, 1));
        assert_eq!(overlap_days(&w, &february), 29);
    }

    #[test]
    fn test_overlap_outside_window_is_zero() {
        let w = window("2024-01-15", "2024-03-10", false);
        assert_eq!(overlap_days(&w, &CalendarMonth::containing(date(2023, 12, 1))), 0);
        assert_eq!(overlap_days(&w, &CalendarMonth::containing(date(2024, 4, 1))), 0);
    }

    #[test]
    fn test_overlap_without_hire_is_zero() {
        let w = EmploymentWindow {
            hire_date: None,
            termination_date: None,
            effective_end: date(2024, 3, 10),
        };
        assert_eq!(overlap_days(&w, &CalendarMonth::containing(date(2024, 3, 1))), 0);
    }

    #[test]
    fn test_single_day_overlap() {
        let w = window("2024-03-31", "2024-03-31", true);
        assert_eq!(overlap_days(&w, &CalendarMonth::containing(date(2024, 3, 1))), 1);
    }

    #[test]
    fn test_reference_drops_inactive_months() {
        let windows = vec![
            window("2024-01-15", "2024-03-10", false),
            window("2023-06-01", "2023-06-20", true),
        ];
        let grid = MonthGrid::spanning(&windows);

        let overlaps = reference_overlaps(&windows, &grid);
        let first: Vec<u32> = overlaps
            .iter()
            .filter(|o| o.employee_index == 0)
            .map(|o| o.active_days)
            .collect();
        let second: Vec<u32> = overlaps
            .iter()
            .filter(|o| o.employee_index == 1)
            .map(|o| o.active_days)
            .collect();

        assert_eq!(first, vec![17, 29, 10]);
        assert_eq!(second, vec![20]);
    }

    #[test]
    fn test_enumeration_matches_reference() {
        let windows = vec![
            window("2024-01-15", "2024-03-10", false),
            window("2023-06-01", "2023-06-20", true),
            window("2022-12-31", "2023-01-01", true),
            EmploymentWindow {
                hire_date: None,
                termination_date: None,
                effective_end: date(2024, 3, 10),
            },
            window("2024-05-01", "2024-03-10", false),
        ];
        let grid = MonthGrid::spanning(&windows);

        let reference = reference_overlaps(&windows, &grid);
        assert_eq!(enumerate_overlaps(&windows, &grid), reference);
        assert_eq!(enumerate_overlaps_parallel(&windows, &grid), reference);
    }

    #[test]
    fn test_empty_grid_yields_nothing() {
        let grid = MonthGrid::default();
        let windows = vec![window("2024-01-15", "2024-03-10", false)];
        assert!(reference_overlaps(&windows, &grid).is_empty());
        assert!(enumerate_overlaps(&windows, &grid).is_empty());
    }
}
