//! Bridge row assembly.
//!
//! Projects a record, its window, a month and the month's metrics onto the
//! fixed column set of [`EmployeeMonthRecord`].

use crate::models::{CalendarMonth, EmployeeMonthRecord, EmployeeRecord, EmploymentWindow};

use super::metrics::MonthMetrics;

/// Builds one bridge row.
///
/// Returns `None` for a window without a hire date; such windows never reach
/// this stage through the overlap filter.
pub fn assemble_row(
    record: &EmployeeRecord,
    window: &EmploymentWindow,
    month: &CalendarMonth,
    metrics: MonthMetrics,
) -> Option<EmployeeMonthRecord> {
    let hire_date = window.hire_date?;

    Some(EmployeeMonthRecord {
        employee_id: record.employee_id.clone(),
        full_name: record.full_name.clone(),
        client: record.client.clone(),
        cost_center: record.cost_center.clone(),
        origin_cost_center: record.origin_cost_center.clone(),
        role: record.role.clone(),
        employment_type: record.employment_type.clone(),
        status: record.status.clone(),
        site: record.site.clone(),
        hire_date,
        termination_date: window.termination_date,
        effective_end: window.effective_end,
        month_start: month.month_start,
        month_end: month.month_end,
        period: month.period_label(),
        days_in_month: month.days_in_month,
        active_days: metrics.active_days,
        active_ratio: metrics.active_ratio,
        active_on_month_start: metrics.active_on_month_start,
        active_on_month_end: metrics.active_on_month_end,
        hire_in_month: metrics.hire_in_month,
        term_in_month: metrics.term_in_month,
        term_cause_code: metrics.term_cause_code,
        term_cause_text: metrics.term_cause_text,
    })
}
