//! The rotation sync pipeline.
//!
//! Fetches the employee batch from the configured source, drops excluded
//! employment types, builds the employee × month bridge, and replaces the
//! destination table with it.

use std::sync::Arc;
use std::time::Instant;

use chrono::{Local, NaiveDate};
use tracing::info;

use crate::bridge::{BridgeOptions, build_employee_month_bridge};
use crate::config::{BridgeConfig, ServiceConfig};
use crate::error::BridgeResult;
use crate::models::{BridgeOutcome, EmployeeRecord};
use crate::sink::{WarehouseSink, sink_from_config};
use crate::source::{EmployeeSource, source_from_config};

/// Result of a full sync run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The source delivered no records; nothing was loaded.
    NoData,
    /// The destination table was replaced.
    Loaded {
        /// Rows written to the destination table.
        records_loaded: usize,
    },
}

/// Runs the fetch → bridge → load pipeline.
pub struct SyncService {
    source: Arc<dyn EmployeeSource>,
    sink: Arc<dyn WarehouseSink>,
    table: String,
    bridge: BridgeConfig,
}

impl SyncService {
    /// Creates a service from explicit collaborators.
    pub fn new(
        source: Arc<dyn EmployeeSource>,
        sink: Arc<dyn WarehouseSink>,
        table: impl Into<String>,
        bridge: BridgeConfig,
    ) -> Self {
        Self {
            source,
            sink,
            table: table.into(),
            bridge,
        }
    }

    /// Creates a service with the source and sink named in `config`.
    pub fn from_config(config: &ServiceConfig) -> BridgeResult<Self> {
        Ok(Self::new(
            source_from_config(&config.source)?,
            sink_from_config(&config.warehouse),
            config.warehouse.table.clone(),
            config.bridge.clone(),
        ))
    }

    /// The destination table name.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// The as-of date a run would use: the override, the configured date, or
    /// today's local date, in that order.
    pub fn resolve_as_of(&self, as_of_override: Option<NaiveDate>) -> NaiveDate {
        as_of_override
            .or(self.bridge.as_of)
            .unwrap_or_else(|| Local::now().date_naive())
    }

    /// Fetches the batch and builds the bridge without loading it.
    pub async fn build_bridge(&self, as_of: Option<NaiveDate>) -> BridgeResult<BridgeOutcome> {
        let start_time = Instant::now();
        let fetched = self.source.fetch().await?;
        let fetched_count = fetched.len();

        if fetched.is_empty() {
            info!("Source returned no records");
            return Ok(BridgeOutcome::NoData);
        }

        let records = self.retain_included(fetched);
        if records.is_empty() {
            info!(
                fetched = fetched_count,
                excluded_types = ?self.bridge.excluded_employment_types,
                "Every fetched record was excluded by employment type"
            );
            return Ok(BridgeOutcome::NoData);
        }

        let options = BridgeOptions {
            as_of: self.resolve_as_of(as_of),
            parallel: self.bridge.parallel,
        };
        let outcome = build_employee_month_bridge(&records, &options)?;

        info!(
            fetched = fetched_count,
            excluded = fetched_count - records.len(),
            rows = outcome.len(),
            as_of = %options.as_of,
            duration_us = start_time.elapsed().as_micros() as u64,
            "Bridge built"
        );
        Ok(outcome)
    }

    /// Builds the bridge and replaces the destination table with it.
    pub async fn sync(&self, as_of: Option<NaiveDate>) -> BridgeResult<SyncOutcome> {
        match self.build_bridge(as_of).await? {
            BridgeOutcome::NoData => Ok(SyncOutcome::NoData),
            BridgeOutcome::Rows(rows) => {
                let records_loaded = self.sink.load(&self.table, &rows).await?;
                info!(table = %self.table, records_loaded, "Destination table replaced");
                Ok(SyncOutcome::Loaded { records_loaded })
            }
        }
    }

    fn retain_included(&self, mut records: Vec<EmployeeRecord>) -> Vec<EmployeeRecord> {
        let excluded = &self.bridge.excluded_employment_types;
        if !excluded.is_empty() {
            records.retain(|record| {
                record
                    .employment_type
                    .as_ref()
                    .is_none_or(|kind| !excluded.contains(kind))
            });
        }
        records
    }
}
