//! Per-month activity metrics.
//!
//! Derives the ratio, boundary flags, hire/termination flags and the
//! termination-cause carry-over for one surviving (employee, month) pair.

use chrono::NaiveDate;

use crate::models::{CalendarMonth, EmployeeRecord, EmploymentWindow};

/// Activity metrics of one employee in one month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthMetrics {
    /// Days of the month the employee was employed.
    pub active_days: u32,
    /// `active_days / days_in_month`.
    pub active_ratio: f64,
    /// Employed on the first day of the month.
    pub active_on_month_start: bool,
    /// Employed on the last day of the month.
    pub active_on_month_end: bool,
    /// The hire date falls in the month.
    pub hire_in_month: bool,
    /// The termination date falls in the month.
    pub term_in_month: bool,
    /// Termination cause code, only when `term_in_month`.
    pub term_cause_code: Option<String>,
    /// Termination cause text, only when `term_in_month`.
    pub term_cause_text: Option<String>,
}

/// Computes the metrics of `record` in `month`.
///
/// `active_days` comes from the overlap stage. The cause fields are copied
/// from the record only in the termination month; elsewhere they are null,
/// as they are when the source carries no cause at all.
///
/// # Example
///
/// ```
/// use rotation_bridge::bridge::annotate;
/// use rotation_bridge::models::{CalendarMonth, EmployeeRecord, EmploymentWindow};
/// use chrono::NaiveDate;
///
/// let record = EmployeeRecord::with_dates("2023-06-01", Some("2023-06-20"));
/// let window = EmploymentWindow {
///     hire_date: NaiveDate::from_ymd_opt(2023, 6, 1),
///     termination_date: NaiveDate::from_ymd_opt(2023, 6, 20),
///     effective_end: NaiveDate::from_ymd_opt(2023, 6, 20).unwrap(),
/// };
/// let june = CalendarMonth::containing(NaiveDate::from_ymd_opt(2023, 6, 1).unwrap());
///
/// let metrics = annotate(&record, &window, &june, 20);
/// assert!(metrics.hire_in_month && metrics.term_in_month);
/// assert!(metrics.active_on_month_start && !metrics.active_on_month_end);
/// ```
pub fn annotate(
    record: &EmployeeRecord,
    window: &EmploymentWindow,
    month: &CalendarMonth,
    active_days: u32,
) -> MonthMetrics {
    let employed_on = |day: NaiveDate| {
        window
            .hire_date
            .is_some_and(|hire| hire <= day && window.effective_end >= day)
    };

    let hire_in_month = window.hire_date.is_some_and(|hire| month.contains(hire));
    let term_in_month = window
        .termination_date
        .is_some_and(|termination| month.contains(termination));

    let (term_cause_code, term_cause_text) = if term_in_month {
        (
            record.termination_cause_code.clone(),
            record.termination_cause_text.clone(),
        )
    } else {
        (None, None)
    };

    MonthMetrics {
        active_days,
        active_ratio: f64::from(active_days) / f64::from(month.days_in_month),
        active_on_month_start: employed_on(month.month_start),
        active_on_month_end: employed_on(month.month_end),
        hire_in_month,
        term_in_month,
        term_cause_code,
        term_cause_text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn month(y: i32, m: u32) -> CalendarMonth {
        CalendarMonth::containing(date(y, m, 1))
    }

    fn terminated_record() -> EmployeeRecord {
        EmployeeRecord {
            termination_cause_code: Some("4".to_string()),
            termination_cause_text: Some("VENCIMIENTO DEL PLAZO".to_string()),
            ..EmployeeRecord::with_dates("2023-05-10", Some("2023-07-15"))
        }
    }

    fn terminated_window() -> EmploymentWindow {
        EmploymentWindow {
            hire_date: Some(date(2023, 5, 10)),
            termination_date: Some(date(2023, 7, 15)),
            effective_end: date(2023, 7, 15),
        }
    }

    #[test]
    fn test_hire_month_flags() {
        let metrics = annotate(&terminated_record(), &terminated_window(), &month(2023, 5), 22);

        assert!(metrics.hire_in_month);
        assert!(!metrics.term_in_month);
        assert!(!metrics.active_on_month_start);
        assert!(metrics.active_on_month_end);
        assert!(metrics.term_cause_code.is_none());
        assert!(metrics.term_cause_text.is_none());
        assert_eq!(metrics.active_ratio, 22.0 / 31.0);
    }

    #[test]
    fn test_full_middle_month() {
        let metrics = annotate(&terminated_record(), &terminated_window(), &month(2023, 6), 30);

        assert!(!metrics.hire_in_month);
        assert!(!metrics.term_in_month);
        assert!(metrics.active_on_month_start);
        assert!(metrics.active_on_month_end);
        assert_eq!(metrics.active_ratio, 1.0);
    }

    #[test]
    fn test_termination_month_carries_cause() {
        let metrics = annotate(&terminated_record(), &terminated_window(), &month(2023, 7), 15);

        assert!(metrics.term_in_month);
        assert!(metrics.active_on_month_start);
        assert!(!metrics.active_on_month_end);
        assert_eq!(metrics.term_cause_code.as_deref(), Some("4"));
        assert_eq!(metrics.term_cause_text.as_deref(), Some("VENCIMIENTO DEL PLAZO"));
    }

    #[test]
    fn test_active_employee_never_terminates() {
        let record = EmployeeRecord::with_dates("2024-01-15", None);
        let window = EmploymentWindow {
            hire_date: Some(date(2024, 1, 15)),
            termination_date: None,
            effective_end: date(2024, 3, 10),
        };

        let metrics = annotate(&record, &window, &month(2024, 3), 10);
        assert!(!metrics.term_in_month);
        assert!(!metrics.active_on_month_end);
        assert_eq!(metrics.active_ratio, 10.0 / 31.0);
    }

    #[test]
    fn test_termination_on_last_day_is_active_on_month_end() {
        let record = EmployeeRecord::with_dates("2024-01-01", Some("2024-01-31"));
        let window = EmploymentWindow {
            hire_date: Some(date(2024, 1, 1)),
            termination_date: Some(date(2024, 1, 31)),
            effective_end: date(2024, 1, 31),
        };

        let metrics = annotate(&record, &window, &month(2024, 1), 31);
        assert!(metrics.active_on_month_start);
        assert!(metrics.active_on_month_end);
        assert!(metrics.hire_in_month);
        assert!(metrics.term_in_month);
        assert_eq!(metrics.active_ratio, 1.0);
    }
}
