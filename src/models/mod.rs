//! Core data models for the rotation bridge.
//!
//! This module contains the input record, the resolved employment window,
//! the calendar month grid cell, and the bridge output row.

mod calendar_month;
mod employee;
mod employee_month;

pub use calendar_month::CalendarMonth;
pub(crate) use calendar_month::month_ordinal;
pub use employee::{EmployeeRecord, EmploymentWindow};
pub use employee_month::{BridgeOutcome, EmployeeMonthRecord};
