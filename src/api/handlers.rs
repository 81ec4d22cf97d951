//! HTTP request handlers for the rotation sync API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{BridgeOutcome, EmployeeMonthRecord};
use crate::pipeline::SyncOutcome;

use super::request::SyncParams;
use super::response::{
    ApiError, ApiErrorResponse, HealthResponse, MessageResponse, SyncResponse,
};
use super::state::AppState;

/// Rows included in the `/fetch_data` preview.
const SAMPLE_ROWS: usize = 3;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/fetch_data", post(fetch_data_handler))
        .route("/load_data", post(load_data_handler))
        .route("/rotacion_sync", post(rotation_sync_handler))
        .route("/rotation_sync", post(rotation_sync_handler))
        .with_state(state)
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn query_params(
    correlation_id: Uuid,
    params: Result<Query<SyncParams>, QueryRejection>,
) -> Result<SyncParams, ApiErrorResponse> {
    params.map(|Query(params)| params).map_err(|rejection| {
        let body_text = rejection.body_text();
        warn!(
            correlation_id = %correlation_id,
            error = %body_text,
            "Invalid query string"
        );
        ApiErrorResponse::bad_request(ApiError::validation_error(body_text))
    })
}

/// Handler for GET /.
async fn root_handler() -> impl IntoResponse {
    json_response(
        StatusCode::OK,
        MessageResponse {
            message: "rotation sync service running".to_string(),
        },
    )
}

/// Handler for GET /health.
async fn health_handler() -> impl IntoResponse {
    json_response(
        StatusCode::OK,
        HealthResponse {
            status: "healthy".to_string(),
            message: "Service is running".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        },
    )
}

/// Handler for POST /fetch_data.
///
/// Fetches the batch and builds the bridge without touching the destination
/// table, returning the column list and a short preview.
async fn fetch_data_handler(
    State(state): State<AppState>,
    params: Result<Query<SyncParams>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing fetch request");

    let params = match query_params(correlation_id, params) {
        Ok(params) => params,
        Err(api_error) => return api_error.into_response(),
    };

    let start_time = Instant::now();
    match state.service().build_bridge(params.as_of).await {
        Ok(BridgeOutcome::NoData) => {
            info!(correlation_id = %correlation_id, "Source returned no data");
            json_response(StatusCode::OK, SyncResponse::no_data())
        }
        Ok(BridgeOutcome::Rows(rows)) => {
            info!(
                correlation_id = %correlation_id,
                rows = rows.len(),
                duration_us = start_time.elapsed().as_micros() as u64,
                "Bridge preview built"
            );
            let records_processed = rows.len();
            let sample_data: Vec<EmployeeMonthRecord> =
                rows.into_iter().take(SAMPLE_ROWS).collect();
            let response = SyncResponse {
                columns: Some(
                    EmployeeMonthRecord::COLUMNS
                        .iter()
                        .map(|column| column.to_string())
                        .collect(),
                ),
                sample_data: Some(sample_data),
                ..SyncResponse::completed("Data fetched and processed", records_processed)
            };
            json_response(StatusCode::OK, response)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Fetch failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /load_data.
async fn load_data_handler(
    State(state): State<AppState>,
    params: Result<Query<SyncParams>, QueryRejection>,
) -> Response {
    run_sync(state, params, "load_data").await
}

/// Handler for POST /rotacion_sync and its alias POST /rotation_sync.
async fn rotation_sync_handler(
    State(state): State<AppState>,
    params: Result<Query<SyncParams>, QueryRejection>,
) -> Response {
    run_sync(state, params, "rotacion_sync").await
}

/// Runs a full fetch → bridge → load and reports the outcome.
async fn run_sync(
    state: AppState,
    params: Result<Query<SyncParams>, QueryRejection>,
    route: &'static str,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, route, "Processing sync request");

    let params = match query_params(correlation_id, params) {
        Ok(params) => params,
        Err(api_error) => return api_error.into_response(),
    };

    let start_time = Instant::now();
    let service = state.service();
    match service.sync(params.as_of).await {
        Ok(SyncOutcome::NoData) => {
            info!(correlation_id = %correlation_id, "Source returned no data, nothing loaded");
            json_response(StatusCode::OK, SyncResponse::no_data())
        }
        Ok(SyncOutcome::Loaded { records_loaded }) => {
            info!(
                correlation_id = %correlation_id,
                table = %service.table(),
                records_loaded,
                duration_us = start_time.elapsed().as_micros() as u64,
                "Sync completed successfully"
            );
            json_response(
                StatusCode::OK,
                SyncResponse::completed(
                    format!("Data loaded into {}", service.table()),
                    records_loaded,
                ),
            )
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Sync failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}
