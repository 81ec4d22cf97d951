//! Configuration types for the rotation sync service.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML service configuration file.

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

/// The complete service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Where employee records come from.
    pub source: SourceConfig,
    /// Where bridge rows are loaded.
    pub warehouse: WarehouseConfig,
    /// Bridge build settings.
    #[serde(default)]
    pub bridge: BridgeConfig,
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Default log filter when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
        }
    }
}

/// Employee record source selection.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceConfig {
    /// The upstream HTTP report.
    Report(ReportSourceConfig),
    /// A delimited spreadsheet export on disk.
    Spreadsheet(SpreadsheetSourceConfig),
}

/// Upstream HTTP report settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportSourceConfig {
    /// Report endpoint URL.
    pub url: String,
    /// Value of the `method` request header.
    #[serde(default = "default_report_method")]
    pub method: String,
    /// Value of the `token` request header.
    #[serde(default)]
    pub token: Option<String>,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Spreadsheet export settings.
#[derive(Debug, Clone, Deserialize)]
pub struct SpreadsheetSourceConfig {
    /// Path to the delimited file.
    pub path: PathBuf,
    /// Field delimiter, a single ASCII character.
    #[serde(default = "default_delimiter", deserialize_with = "ascii_delimiter")]
    pub delimiter: u8,
}

/// Destination table settings.
#[derive(Debug, Clone, Deserialize)]
pub struct WarehouseConfig {
    /// Fully qualified destination table name.
    pub table: String,
    /// File the table is materialized to.
    pub path: PathBuf,
}

/// Bridge build settings.
#[derive(Debug, Clone, Deserialize)]
pub struct BridgeConfig {
    /// Fixed as-of date; the processing date when absent.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
    /// Employment types dropped before building the bridge.
    #[serde(default = "default_excluded_employment_types")]
    pub excluded_employment_types: Vec<String>,
    /// Enumerate overlaps in parallel.
    #[serde(default)]
    pub parallel: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            as_of: None,
            excluded_employment_types: default_excluded_employment_types(),
            parallel: false,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_report_method() -> String {
    "report".to_string()
}

fn default_timeout_secs() -> u64 {
    3600
}

fn default_delimiter() -> u8 {
    b','
}

fn default_excluded_employment_types() -> Vec<String> {
    vec!["PART TIME BOLETA".to_string()]
}

fn ascii_delimiter<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    match text.as_bytes() {
        [byte] if byte.is_ascii() => Ok(*byte),
        _ => Err(serde::de::Error::custom(format!(
            "delimiter must be a single ASCII character, got {:?}",
            text
        ))),
    }
}
