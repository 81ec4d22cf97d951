//! Employment interval resolution.
//!
//! Combines each record's hire date, optional termination date, and the
//! batch's as-of date into an [`EmploymentWindow`].

use chrono::NaiveDate;

use crate::error::{BridgeError, BridgeResult};
use crate::models::{EmployeeRecord, EmploymentWindow};

use super::date_normalizer::normalize_date;

/// Resolves the employment window of a single record.
///
/// # Arguments
///
/// * `record` - The employee record
/// * `record_index` - Position of the record in its batch, used in errors
/// * `as_of` - The date standing in for "still employed"
///
/// # Returns
///
/// The resolved window, or [`BridgeError::MissingField`] if the record has no
/// hire date at all (absent or blank). A hire date that is present but
/// unparseable resolves to `None` instead; the window then overlaps no month.
///
/// # Example
///
/// ```
/// use rotation_bridge::bridge::resolve_window;
/// use rotation_bridge::models::EmployeeRecord;
/// use chrono::NaiveDate;
///
/// let as_of = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
/// let record = EmployeeRecord::with_dates("2024-01-15", None);
///
/// let window = resolve_window(&record, 0, as_of).unwrap();
/// assert_eq!(window.effective_end, as_of);
/// assert!(window.is_currently_active());
/// ```
pub fn resolve_window(
    record: &EmployeeRecord,
    record_index: usize,
    as_of: NaiveDate,
) -> BridgeResult<EmploymentWindow> {
    let hire_text = record
        .hire_date
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| BridgeError::MissingField {
            field: EmployeeRecord::HIRE_DATE_FIELD.to_string(),
            record_index,
        })?;

    let hire_date = normalize_date(hire_text);
    let termination_date = record.termination_date.as_deref().and_then(normalize_date);

    Ok(EmploymentWindow {
        hire_date,
        termination_date,
        effective_end: termination_date.unwrap_or(as_of),
    })
}

/// Resolves the windows of a whole batch, in input order.
///
/// The first record without a hire date aborts the batch.
pub fn resolve_windows(
    records: &[EmployeeRecord],
    as_of: NaiveDate,
) -> BridgeResult<Vec<EmploymentWindow>> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| resolve_window(record, index, as_of))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_terminated_employee_ends_on_termination() {
        let record = EmployeeRecord::with_dates("2023-06-01", Some("20-06-2023"));
        let window = resolve_window(&record, 0, date(2024, 1, 1)).unwrap();

        assert_eq!(window.hire_date, Some(date(2023, 6, 1)));
        assert_eq!(window.termination_date, Some(date(2023, 6, 20)));
        assert_eq!(window.effective_end, date(2023, 6, 20));
        assert!(!window.is_currently_active());
    }

    #[test]
    fn test_active_employee_ends_on_as_of() {
        let record = EmployeeRecord::with_dates("15-01-2024", None);
        let window = resolve_window(&record, 0, date(2024, 3, 10)).unwrap();

        assert_eq!(window.effective_end, date(2024, 3, 10));
        assert!(window.is_currently_active());
    }

    #[test]
    fn test_unparseable_termination_means_still_employed() {
        let record = EmployeeRecord::with_dates("2024-01-15", Some("pending"));
        let window = resolve_window(&record, 0, date(2024, 3, 10)).unwrap();

        assert!(window.termination_date.is_none());
        assert_eq!(window.effective_end, date(2024, 3, 10));
    }

    #[test]
    fn test_unparseable_hire_resolves_to_none() {
        let record = EmployeeRecord::with_dates("sin fecha", None);
        let window = resolve_window(&record, 0, date(2024, 3, 10)).unwrap();

        assert!(window.hire_date.is_none());
        assert!(window.span().is_none());
    }

    #[test]
    fn test_missing_hire_date_is_fatal() {
        let record = EmployeeRecord::default();
        let result = resolve_window(&record, 7, date(2024, 3, 10));

        match result {
            Err(BridgeError::MissingField {
                field,
                record_index,
            }) => {
                assert_eq!(field, "fecha_de_ingreso");
                assert_eq!(record_index, 7);
            }
            other => panic!("Expected MissingField error, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_hire_date_counts_as_missing() {
        let record = EmployeeRecord::with_dates("   ", None);
        assert!(matches!(
            resolve_window(&record, 0, date(2024, 3, 10)),
            Err(BridgeError::MissingField { .. })
        ));
    }

    #[test]
    fn test_batch_aborts_on_first_missing_hire_date() {
        let records = vec![
            EmployeeRecord::with_dates("2024-01-15", None),
            EmployeeRecord::default(),
            EmployeeRecord::with_dates("2024-02-01", None),
        ];

        match resolve_windows(&records, date(2024, 3, 10)) {
            Err(BridgeError::MissingField { record_index, .. }) => assert_eq!(record_index, 1),
            other => panic!("Expected MissingField error, got {:?}", other),
        }
    }

    #[test]
    fn test_batch_preserves_input_order() {
        let records = vec![
            EmployeeRecord::with_dates("2024-02-01", None),
            EmployeeRecord::with_dates("2023-01-01", Some("2023-05-31")),
        ];

        let windows = resolve_windows(&records, date(2024, 3, 10)).unwrap();
        assert_eq!(windows.len(), 2);
        assert_eq!(windows[0].hire_date, Some(date(2024, 2, 1)));
        assert_eq!(windows[1].effective_end, date(2023, 5, 31));
    }
}
