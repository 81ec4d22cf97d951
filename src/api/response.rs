//! Response types for the rotation sync API.
//!
//! This module defines the success payloads, the error response structure,
//! and the mapping from [`BridgeError`] to HTTP status codes.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::BridgeError;
use crate::models::EmployeeMonthRecord;

/// Body of `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Service banner.
    pub message: String,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"healthy"` while the process serves requests.
    pub status: String,
    /// Human-readable status line.
    pub message: String,
    /// RFC 3339 timestamp of the check.
    pub timestamp: String,
}

/// Body of the sync endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncResponse {
    /// Whether the run completed.
    pub success: bool,
    /// Human-readable outcome.
    pub message: String,
    /// Number of bridge rows built (and loaded, for loading endpoints).
    pub records_processed: usize,
    /// Output column names; only set by `/fetch_data`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<String>>,
    /// Leading rows of the bridge; only set by `/fetch_data`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_data: Option<Vec<EmployeeMonthRecord>>,
}

impl SyncResponse {
    /// A response for a run that loaded or built `records_processed` rows.
    pub fn completed(message: impl Into<String>, records_processed: usize) -> Self {
        Self {
            success: true,
            message: message.into(),
            records_processed,
            columns: None,
            sample_data: None,
        }
    }

    /// A response for a run whose source returned nothing.
    pub fn no_data() -> Self {
        Self::completed("No data returned by the source", 0)
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response for a rejected query string.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<BridgeError> for ApiErrorResponse {
    fn from(error: BridgeError) -> Self {
        let message = error.to_string();
        let (status, error) = match error {
            BridgeError::ConfigNotFound { .. } | BridgeError::ConfigParseError { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            ),
            BridgeError::MissingField { field, .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::with_details(
                    "MISSING_FIELD",
                    message,
                    format!("Every employee record must provide '{}'", field),
                ),
            ),
            BridgeError::UpstreamTimeout { .. } => (
                StatusCode::GATEWAY_TIMEOUT,
                ApiError::new("UPSTREAM_TIMEOUT", message),
            ),
            BridgeError::UpstreamConnection { .. }
            | BridgeError::UpstreamStatus { .. }
            | BridgeError::UpstreamDecode { .. } => (
                StatusCode::BAD_GATEWAY,
                ApiError::new("UPSTREAM_ERROR", message),
            ),
            BridgeError::SpreadsheetRead { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("SPREADSHEET_ERROR", message),
            ),
            BridgeError::WarehouseLoad { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("LOAD_ERROR", message),
            ),
        };
        ApiErrorResponse { status, error }
    }
}
