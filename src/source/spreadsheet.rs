//! Delimited spreadsheet source.
//!
//! Reads an exported sheet whose first row is the raw header. Headers are
//! normalized the same way report keys are, and empty cells become nulls.

use std::io::Read;
use std::path::PathBuf;

use async_trait::async_trait;
use csv::ReaderBuilder;
use serde_json::{Map, Value};
use tracing::info;

use crate::config::SpreadsheetSourceConfig;
use crate::error::{BridgeError, BridgeResult};
use crate::models::EmployeeRecord;

use super::EmployeeSource;
use super::normalize::normalize_key;

/// Employee source backed by a delimited file on disk.
#[derive(Debug, Clone)]
pub struct SpreadsheetSource {
    path: PathBuf,
    delimiter: u8,
}

impl SpreadsheetSource {
    /// Creates a spreadsheet source from its configuration.
    pub fn new(config: &SpreadsheetSourceConfig) -> Self {
        Self {
            path: config.path.clone(),
            delimiter: config.delimiter,
        }
    }
}

#[async_trait]
impl EmployeeSource for SpreadsheetSource {
    async fn fetch(&self) -> BridgeResult<Vec<EmployeeRecord>> {
        let path = self.path.clone();
        let delimiter = self.delimiter;
        let path_str = path.display().to_string();

        let records = tokio::task::spawn_blocking(move || {
            let file = std::fs::File::open(&path).map_err(|e| BridgeError::SpreadsheetRead {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
            read_records(file, delimiter).map_err(|e| match e {
                BridgeError::SpreadsheetRead { message, .. } => BridgeError::SpreadsheetRead {
                    path: path.display().to_string(),
                    message,
                },
                other => other,
            })
        })
        .await
        .map_err(|e| BridgeError::SpreadsheetRead {
            path: path_str.clone(),
            message: e.to_string(),
        })??;

        info!(path = %path_str, records = records.len(), "Spreadsheet read");
        Ok(records)
    }
}

/// Reads employee records from delimited text.
///
/// # Example
///
/// ```
/// use rotation_bridge::source::read_records;
///
/// let sheet = "RUT;Fecha de Ingreso;Fecha Finiquito\n1-9;15-01-2024;\n";
/// let records = read_records(sheet.as_bytes(), b';').unwrap();
/// assert_eq!(records[0].hire_date.as_deref(), Some("15-01-2024"));
/// assert!(records[0].termination_date.is_none());
/// ```
pub fn read_records<R: Read>(reader: R, delimiter: u8) -> BridgeResult<Vec<EmployeeRecord>> {
    let read_error = |message: String| BridgeError::SpreadsheetRead {
        path: "<stream>".to_string(),
        message,
    };

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| read_error(e.to_string()))?
        .iter()
        .map(normalize_key)
        .collect();

    reader
        .records()
        .enumerate()
        .map(|(index, row)| {
            let row = row.map_err(|e| read_error(e.to_string()))?;
            let object: Map<String, Value> = headers
                .iter()
                .zip(row.iter())
                .map(|(header, cell)| {
                    let value = if cell.trim().is_empty() {
                        Value::Null
                    } else {
                        Value::String(cell.to_string())
                    };
                    (header.clone(), value)
                })
                .collect();

            serde_json::from_value(Value::Object(object))
                .map_err(|e| read_error(format!("row {}: {}", index + 1, e)))
        })
        .collect()
}
