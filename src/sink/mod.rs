//! Destination table sinks.
//!
//! A sink receives the assembled bridge rows and replaces the destination
//! table wholesale (truncate-and-load). There is no append path.

mod ndjson;

pub use ndjson::NdjsonFileSink;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::config::WarehouseConfig;
use crate::error::BridgeResult;
use crate::models::EmployeeMonthRecord;

/// Something that can replace a destination table with a new set of rows.
#[async_trait]
pub trait WarehouseSink: Send + Sync {
    /// Replaces `table` with `rows`, returning the number of rows loaded.
    async fn load(&self, table: &str, rows: &[EmployeeMonthRecord]) -> BridgeResult<usize>;
}

/// A sink that keeps the last loaded rows of each table in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    tables: Mutex<HashMap<String, Vec<EmployeeMonthRecord>>>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the rows currently held for `table`, if it was ever loaded.
    pub fn rows(&self, table: &str) -> Option<Vec<EmployeeMonthRecord>> {
        self.tables
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(table)
            .cloned()
    }
}

#[async_trait]
impl WarehouseSink for MemorySink {
    async fn load(&self, table: &str, rows: &[EmployeeMonthRecord]) -> BridgeResult<usize> {
        self.tables
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(table.to_string(), rows.to_vec());
        Ok(rows.len())
    }
}

/// Builds the sink described by `config`.
pub fn sink_from_config(config: &WarehouseConfig) -> Arc<dyn WarehouseSink> {
    Arc::new(NdjsonFileSink::new(config.path.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_sink_replaces_table() {
        let sink = MemorySink::new();
        assert!(sink.rows("rrhh.bridge").is_none());

        sink.load("rrhh.bridge", &[]).await.unwrap();
        assert_eq!(sink.rows("rrhh.bridge"), Some(vec![]));
    }
}
