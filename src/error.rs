//! Error types for the rotation bridge.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the bridge core and its surrounding service can report.
//! The core itself only raises [`BridgeError::MissingField`]; the remaining
//! variants belong to configuration loading and the upstream/downstream
//! adapters.

use thiserror::Error;

/// The main error type for the rotation bridge.
///
/// # Example
///
/// ```
/// use rotation_bridge::error::BridgeError;
///
/// let error = BridgeError::MissingField {
///     field: "fecha_de_ingreso".to_string(),
///     record_index: 3,
/// };
/// assert_eq!(
///     error.to_string(),
///     "Missing required field 'fecha_de_ingreso' in record 3"
/// );
/// ```
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A record lacked a field the batch cannot be processed without.
    ///
    /// This aborts the whole batch rather than skipping the record.
    #[error("Missing required field '{field}' in record {record_index}")]
    MissingField {
        /// The normalized name of the missing field.
        field: String,
        /// Zero-based position of the offending record in the input batch.
        record_index: usize,
    },

    /// The report source did not answer within the configured timeout.
    #[error("Report source timed out after {timeout_secs}s")]
    UpstreamTimeout {
        /// The timeout that elapsed, in seconds.
        timeout_secs: u64,
    },

    /// The report source could not be reached.
    #[error("Could not connect to report source: {message}")]
    UpstreamConnection {
        /// A description of the connection failure.
        message: String,
    },

    /// The report source answered with a non-success status.
    #[error("Report source returned HTTP {status}")]
    UpstreamStatus {
        /// The HTTP status code returned.
        status: u16,
    },

    /// The report body could not be decoded into employee records.
    #[error("Failed to decode report: {message}")]
    UpstreamDecode {
        /// A description of the decode failure.
        message: String,
    },

    /// A spreadsheet file could not be read or parsed.
    #[error("Failed to read spreadsheet '{path}': {message}")]
    SpreadsheetRead {
        /// The path to the spreadsheet.
        path: String,
        /// A description of the read failure.
        message: String,
    },

    /// The warehouse rejected or failed to store the bridge rows.
    #[error("Failed to load table '{table}': {message}")]
    WarehouseLoad {
        /// The destination table.
        table: String,
        /// A description of the load failure.
        message: String,
    },
}

/// A type alias for Results that return BridgeError.
pub type BridgeResult<T> = Result<T, BridgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = BridgeError::ConfigNotFound {
            path: "/missing/service.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/service.yaml"
        );
    }

    #[test]
    fn test_missing_field_displays_field_and_index() {
        let error = BridgeError::MissingField {
            field: "fecha_de_ingreso".to_string(),
            record_index: 0,
        };
        assert_eq!(
            error.to_string(),
            "Missing required field 'fecha_de_ingreso' in record 0"
        );
    }

    #[test]
    fn test_upstream_timeout_displays_seconds() {
        let error = BridgeError::UpstreamTimeout { timeout_secs: 3600 };
        assert_eq!(error.to_string(), "Report source timed out after 3600s");
    }

    #[test]
    fn test_upstream_status_displays_code() {
        let error = BridgeError::UpstreamStatus { status: 503 };
        assert_eq!(error.to_string(), "Report source returned HTTP 503");
    }

    #[test]
    fn test_warehouse_load_displays_table_and_message() {
        let error = BridgeError::WarehouseLoad {
            table: "rrhh.rotation_bridge".to_string(),
            message: "disk full".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to load table 'rrhh.rotation_bridge': disk full"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<BridgeError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_missing_field() -> BridgeResult<()> {
            Err(BridgeError::MissingField {
                field: "fecha_de_ingreso".to_string(),
                record_index: 1,
            })
        }

        fn propagates_error() -> BridgeResult<()> {
            returns_missing_field()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
