//! The employee × calendar month bridge.
//!
//! This module turns a batch of employee records into the sparse bridge
//! table: date normalization, employment interval resolution, month grid
//! construction, day-level overlap, per-month metrics, and row assembly.
//! Everything here is pure; I/O lives in [`crate::source`] and
//! [`crate::sink`].
//!
//! # Example
//!
//! ```
//! use rotation_bridge::bridge::{build_employee_month_bridge, BridgeOptions};
//! use rotation_bridge::models::EmployeeRecord;
//! use chrono::NaiveDate;
//!
//! let records = vec![EmployeeRecord::with_dates("2024-01-15", None)];
//! let options = BridgeOptions::as_of(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
//!
//! let outcome = build_employee_month_bridge(&records, &options).unwrap();
//! let days: Vec<u32> = outcome.rows().iter().map(|row| row.active_days).collect();
//! assert_eq!(days, [17, 29, 10]);
//! ```

mod assembler;
mod date_normalizer;
mod interval;
mod metrics;
mod month_grid;
mod overlap;

pub use assembler::assemble_row;
pub use date_normalizer::{
    DAY_FIRST_FORMATS, ISO_DATE_FORMAT, normalize_date, parse_day_first, parse_iso,
};
pub use interval::{resolve_window, resolve_windows};
pub use metrics::{MonthMetrics, annotate};
pub use month_grid::MonthGrid;
pub use overlap::{
    MonthOverlap, enumerate_overlaps, enumerate_overlaps_parallel, overlap_days,
    reference_overlaps,
};

use std::time::Instant;

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::error::BridgeResult;
use crate::models::{BridgeOutcome, EmployeeRecord};

/// Options controlling a bridge build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BridgeOptions {
    /// The date standing in for "still employed".
    pub as_of: NaiveDate,
    /// Partition the overlap stage by employee across the rayon pool.
    pub parallel: bool,
}

impl BridgeOptions {
    /// Sequential build with the given as-of date.
    pub fn as_of(as_of: NaiveDate) -> Self {
        Self {
            as_of,
            parallel: false,
        }
    }

    /// Sequential build as of today's local date.
    pub fn today() -> Self {
        Self::as_of(Local::now().date_naive())
    }

    /// Returns a copy with parallel overlap enumeration switched on or off.
    pub fn with_parallel(self, parallel: bool) -> Self {
        Self { parallel, ..self }
    }
}

impl Default for BridgeOptions {
    fn default() -> Self {
        Self::today()
    }
}

/// Builds the employee × month bridge for a batch.
///
/// # Returns
///
/// - [`BridgeOutcome::NoData`] for an empty batch
/// - [`BridgeOutcome::Rows`] otherwise, ordered by employee input order and
///   then ascending month
///
/// # Errors
///
/// [`crate::error::BridgeError::MissingField`] if any record lacks a hire
/// date; the whole batch is rejected.
pub fn build_employee_month_bridge(
    records: &[EmployeeRecord],
    options: &BridgeOptions,
) -> BridgeResult<BridgeOutcome> {
    if records.is_empty() {
        debug!("Empty batch, no bridge rows to build");
        return Ok(BridgeOutcome::NoData);
    }

    let start_time = Instant::now();
    let windows = resolve_windows(records, options.as_of)?;
    let grid = MonthGrid::spanning(&windows);

    let overlaps = if options.parallel {
        enumerate_overlaps_parallel(&windows, &grid)
    } else {
        enumerate_overlaps(&windows, &grid)
    };

    let rows: Vec<_> = overlaps
        .into_iter()
        .filter_map(|overlap| {
            let record = &records[overlap.employee_index];
            let window = &windows[overlap.employee_index];
            let month = &grid.months()[overlap.month_index];
            let metrics = annotate(record, window, month, overlap.active_days);
            assemble_row(record, window, month, metrics)
        })
        .collect();

    let unplaced = windows.iter().filter(|w| w.span().is_none()).count();
    let still_employed = windows.iter().filter(|w| w.is_currently_active()).count();
    debug!(
        employees = records.len(),
        still_employed,
        months = grid.len(),
        rows = rows.len(),
        unplaced_employees = unplaced,
        as_of = %options.as_of,
        parallel = options.parallel,
        duration_us = start_time.elapsed().as_micros() as u64,
        "Built employee-month bridge"
    );

    Ok(BridgeOutcome::Rows(rows))
}
