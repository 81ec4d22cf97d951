//! Employee × calendar month bridge for workforce rotation reporting.
//!
//! This crate expands each employee's employment interval into one row per
//! calendar month the interval touches, annotated with active days, active
//! ratio, and hire/termination markers. It also ships the service that
//! fetches the employee batch, builds the bridge, and replaces the
//! destination table with it.

#![warn(missing_docs)]

pub mod api;
pub mod bridge;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod pipeline;
pub mod sink;
pub mod source;
