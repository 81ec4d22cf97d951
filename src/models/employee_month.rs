//! Employee × month bridge row models.
//!
//! This module contains [`EmployeeMonthRecord`], one row of the bridge table,
//! and [`BridgeOutcome`], which tells an empty batch apart from a batch that
//! produced rows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the employee × calendar month bridge table.
///
/// Serialized field order is the table's column order (see
/// [`EmployeeMonthRecord::COLUMNS`]): employee dimensions, then the month
/// span and its period label, then the activity metrics. Column names are the
/// ones the destination table uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeMonthRecord {
    /// National identifier of the employee.
    #[serde(rename = "rut")]
    pub employee_id: Option<String>,
    /// Full name.
    #[serde(rename = "nombre_completo")]
    pub full_name: Option<String>,
    /// Client.
    #[serde(rename = "cliente")]
    pub client: Option<String>,
    /// Cost center.
    #[serde(rename = "cecos")]
    pub cost_center: Option<String>,
    /// Origin cost center.
    #[serde(rename = "cecosorigen")]
    pub origin_cost_center: Option<String>,
    /// Role.
    #[serde(rename = "cargo")]
    pub role: Option<String>,
    /// Employment type.
    #[serde(rename = "tipo_empleado")]
    pub employment_type: Option<String>,
    /// Status.
    #[serde(rename = "estado")]
    pub status: Option<String>,
    /// Site.
    #[serde(rename = "instalacion")]
    pub site: Option<String>,
    /// Parsed hire date.
    #[serde(rename = "fecha_ingreso")]
    pub hire_date: NaiveDate,
    /// Parsed termination date.
    #[serde(rename = "fecha_finiquito")]
    pub termination_date: Option<NaiveDate>,
    /// Termination date, or the as-of date for employees still active.
    #[serde(rename = "fecha_fin_efectivo")]
    pub effective_end: NaiveDate,
    /// First day of the month.
    pub month_start: NaiveDate,
    /// Last day of the month.
    pub month_end: NaiveDate,
    /// `YYYY-MM` label of the month.
    pub period: String,
    /// Days in the month.
    pub days_in_month: u32,
    /// Days of the month the employee was employed.
    pub active_days: u32,
    /// `active_days / days_in_month`.
    pub active_ratio: f64,
    /// Employed on the first day of the month.
    pub active_on_month_start: bool,
    /// Employed on the last day of the month.
    pub active_on_month_end: bool,
    /// The hire date falls in this month.
    pub hire_in_month: bool,
    /// The termination date falls in this month.
    pub term_in_month: bool,
    /// Termination cause code, only on the termination month.
    #[serde(rename = "term_causal_code")]
    pub term_cause_code: Option<String>,
    /// Termination cause text, only on the termination month.
    #[serde(rename = "term_causal_text")]
    pub term_cause_text: Option<String>,
}

impl EmployeeMonthRecord {
    /// Column names of the bridge table, in order.
    pub const COLUMNS: [&'static str; 24] = [
        "rut",
        "nombre_completo",
        "cliente",
        "cecos",
        "cecosorigen",
        "cargo",
        "tipo_empleado",
        "estado",
        "instalacion",
        "fecha_ingreso",
        "fecha_finiquito",
        "fecha_fin_efectivo",
        "month_start",
        "month_end",
        "period",
        "days_in_month",
        "active_days",
        "active_ratio",
        "active_on_month_start",
        "active_on_month_end",
        "hire_in_month",
        "term_in_month",
        "term_causal_code",
        "term_causal_text",
    ];
}

/// The result of building a bridge for one batch.
///
/// An empty input batch is not an error: it yields [`BridgeOutcome::NoData`]
/// so callers can report "nothing to process" distinctly from a failure.
#[derive(Debug, Clone, PartialEq)]
pub enum BridgeOutcome {
    /// The input batch was empty.
    NoData,
    /// Bridge rows for a non-empty batch (possibly zero rows).
    Rows(Vec<EmployeeMonthRecord>),
}

impl BridgeOutcome {
    /// Returns the produced rows, empty for [`BridgeOutcome::NoData`].
    pub fn rows(&self) -> &[EmployeeMonthRecord] {
        match self {
            BridgeOutcome::NoData => &[],
            BridgeOutcome::Rows(rows) => rows,
        }
    }

    /// Consumes the outcome, returning its rows.
    pub fn into_rows(self) -> Vec<EmployeeMonthRecord> {
        match self {
            BridgeOutcome::NoData => Vec::new(),
            BridgeOutcome::Rows(rows) => rows,
        }
    }

    /// Returns true when the input batch was empty.
    pub fn is_no_data(&self) -> bool {
        matches!(self, BridgeOutcome::NoData)
    }

    /// Number of rows produced.
    pub fn len(&self) -> usize {
        self.rows().len()
    }

    /// Returns true when no rows were produced.
    pub fn is_empty(&self) -> bool {
        self.rows().is_empty()
    }
}
