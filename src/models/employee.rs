//! Employee record model and its resolved employment window.
//!
//! This module defines [`EmployeeRecord`], the key-normalized input row the
//! bridge consumes, and [`EmploymentWindow`], the hire-to-effective-end span
//! the interval resolver derives from it.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Represents one employee as delivered by a source adapter.
///
/// Field names on the wire are the normalized source headers (for example
/// `FECHA DE INGRESO` becomes `fecha_de_ingreso`). English aliases are also
/// accepted so callers building records by hand are not tied to the report's
/// vocabulary. Every field is optional at this boundary: the resolver decides
/// which absences are fatal.
///
/// Dates are kept as raw text here and parsed by the date normalizer, so an
/// unparseable value is distinguishable from an absent one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// National identifier of the employee.
    #[serde(rename = "rut", alias = "employee_id", default, deserialize_with = "lenient_text")]
    pub employee_id: Option<String>,
    /// Full name.
    #[serde(rename = "nombre_completo", alias = "full_name", default, deserialize_with = "lenient_text")]
    pub full_name: Option<String>,
    /// Client the employee is assigned to.
    #[serde(rename = "cliente", alias = "client", default, deserialize_with = "lenient_text")]
    pub client: Option<String>,
    /// Cost center.
    #[serde(rename = "cecos", alias = "cost_center", default, deserialize_with = "lenient_text")]
    pub cost_center: Option<String>,
    /// Cost center the employee originally belonged to.
    #[serde(rename = "cecosorigen", alias = "origin_cost_center", default, deserialize_with = "lenient_text")]
    pub origin_cost_center: Option<String>,
    /// Role or position.
    #[serde(rename = "cargo", alias = "role", default, deserialize_with = "lenient_text")]
    pub role: Option<String>,
    /// Employment type (e.g. "PLAZO FIJO", "PART TIME BOLETA").
    #[serde(rename = "tipo_empleado", alias = "employment_type", default, deserialize_with = "lenient_text")]
    pub employment_type: Option<String>,
    /// Employment status as reported upstream.
    #[serde(rename = "estado", alias = "status", default, deserialize_with = "lenient_text")]
    pub status: Option<String>,
    /// Site or installation.
    #[serde(rename = "instalacion", alias = "site", default, deserialize_with = "lenient_text")]
    pub site: Option<String>,
    /// Hire date as raw text. Required.
    #[serde(rename = "fecha_de_ingreso", alias = "hire_date", default, deserialize_with = "lenient_text")]
    pub hire_date: Option<String>,
    /// Termination date as raw text; absent while still employed.
    #[serde(rename = "fecha_finiquito", alias = "termination_date", default, deserialize_with = "lenient_text")]
    pub termination_date: Option<String>,
    /// Termination cause code.
    #[serde(rename = "cod_causal_finiquito", alias = "termination_cause_code", default, deserialize_with = "lenient_text")]
    pub termination_cause_code: Option<String>,
    /// Termination cause description.
    #[serde(rename = "causal_finiquito", alias = "termination_cause_text", default, deserialize_with = "lenient_text")]
    pub termination_cause_text: Option<String>,
}

impl EmployeeRecord {
    /// Normalized wire name of the hire date field.
    pub const HIRE_DATE_FIELD: &'static str = "fecha_de_ingreso";

    /// Creates a record with only a hire date and optional termination date.
    ///
    /// # Example
    ///
    /// ```
    /// use rotation_bridge::models::EmployeeRecord;
    ///
    /// let record = EmployeeRecord::with_dates("2024-01-15", None);
    /// assert_eq!(record.hire_date.as_deref(), Some("2024-01-15"));
    /// assert!(record.termination_date.is_none());
    /// ```
    pub fn with_dates(hire_date: &str, termination_date: Option<&str>) -> Self {
        Self {
            hire_date: Some(hire_date.to_string()),
            termination_date: termination_date.map(str::to_string),
            ..Self::default()
        }
    }
}

/// Scalar cells arrive as strings, numbers or booleans depending on the
/// source; they are all carried as text.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Scalar>::deserialize(deserializer)?;
    Ok(value.map(|scalar| match scalar {
        Scalar::Text(text) => text,
        Scalar::Integer(n) => n.to_string(),
        Scalar::Float(n) => n.to_string(),
        Scalar::Bool(b) => b.to_string(),
    }))
}

/// The resolved employment span of one employee.
///
/// `effective_end` is the termination date when known, otherwise the as-of
/// date standing in for "still employed". `hire_date` is `None` only when the
/// source supplied a hire date that could not be parsed; such a window
/// overlaps no month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmploymentWindow {
    /// Parsed hire date.
    pub hire_date: Option<NaiveDate>,
    /// Parsed termination date, if any.
    pub termination_date: Option<NaiveDate>,
    /// Last day (inclusive) the employee counts as employed.
    pub effective_end: NaiveDate,
}

impl EmploymentWindow {
    /// Returns true while no termination date is recorded.
    pub fn is_currently_active(&self) -> bool {
        self.termination_date.is_none()
    }

    /// Returns the inclusive `(hire_date, effective_end)` span, or `None` if
    /// the hire date is unknown or falls after the effective end.
    ///
    /// # Example
    ///
    /// ```
    /// use rotation_bridge::models::EmploymentWindow;
    /// use chrono::NaiveDate;
    ///
    /// let window = EmploymentWindow {
    ///     hire_date: NaiveDate::from_ymd_opt(2024, 3, 1),
    ///     termination_date: NaiveDate::from_ymd_opt(2024, 2, 1),
    ///     effective_end: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
    /// };
    /// assert!(window.span().is_none());
    /// ```
    pub fn span(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.hire_date
            .filter(|hire| *hire <= self.effective_end)
            .map(|hire| (hire, self.effective_end))
    }

    /// Number of employed days in the window, both ends inclusive.
    pub fn total_days(&self) -> u32 {
        self.span()
            .map(|(start, end)| ((end - start).num_days() + 1) as u32)
            .unwrap_or(0)
    }
}
