//! Employee record sources.
//!
//! A source produces the key-normalized [`EmployeeRecord`] batch the bridge
//! consumes. The upstream HTTP report and delimited spreadsheet exports are
//! supported; [`MemorySource`] serves a fixed batch.

mod normalize;
mod report;
mod spreadsheet;

pub use normalize::{normalize_key, normalize_keys};
pub use report::{HttpReportSource, parse_report};
pub use spreadsheet::{SpreadsheetSource, read_records};

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::SourceConfig;
use crate::error::BridgeResult;
use crate::models::EmployeeRecord;

/// Something that can deliver a batch of employee records.
#[async_trait]
pub trait EmployeeSource: Send + Sync {
    /// Fetches the current batch, in source order.
    async fn fetch(&self) -> BridgeResult<Vec<EmployeeRecord>>;
}

/// A source that always returns the same batch.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    records: Vec<EmployeeRecord>,
}

impl MemorySource {
    /// Creates a source serving `records`.
    pub fn new(records: Vec<EmployeeRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl EmployeeSource for MemorySource {
    async fn fetch(&self) -> BridgeResult<Vec<EmployeeRecord>> {
        Ok(self.records.clone())
    }
}

/// Builds the source described by `config`.
pub fn source_from_config(config: &SourceConfig) -> BridgeResult<Arc<dyn EmployeeSource>> {
    Ok(match config {
        SourceConfig::Report(report) => Arc::new(HttpReportSource::new(report)?),
        SourceConfig::Spreadsheet(sheet) => Arc::new(SpreadsheetSource::new(sheet)),
    })
}
