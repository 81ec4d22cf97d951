//! Newline-delimited JSON file sink.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::info;

use crate::error::{BridgeError, BridgeResult};
use crate::models::EmployeeMonthRecord;

use super::WarehouseSink;

/// Materializes the destination table as one JSON object per line.
///
/// Each load writes a sibling temporary file and renames it over the target,
/// so readers see either the previous table or the new one, never a mix.
#[derive(Debug, Clone)]
pub struct NdjsonFileSink {
    path: PathBuf,
}

impl NdjsonFileSink {
    /// Creates a sink writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file the table is written to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl WarehouseSink for NdjsonFileSink {
    async fn load(&self, table: &str, rows: &[EmployeeMonthRecord]) -> BridgeResult<usize> {
        let load_error = |message: String| BridgeError::WarehouseLoad {
            table: table.to_string(),
            message,
        };

        let mut buffer = Vec::with_capacity(rows.len() * 512);
        for row in rows {
            serde_json::to_writer(&mut buffer, row).map_err(|e| load_error(e.to_string()))?;
            buffer.push(b'\n');
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| load_error(format!("{}: {}", parent.display(), e)))?;
        }

        let staging = self.path.with_extension("ndjson.tmp");
        fs::write(&staging, &buffer)
            .await
            .map_err(|e| load_error(format!("{}: {}", staging.display(), e)))?;
        fs::rename(&staging, &self.path)
            .await
            .map_err(|e| load_error(format!("{}: {}", self.path.display(), e)))?;

        info!(
            table = %table,
            path = %self.path.display(),
            rows = rows.len(),
            bytes = buffer.len(),
            "Table replaced"
        );
        Ok(rows.len())
    }
}
