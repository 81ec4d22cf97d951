//! HTTP API module for the rotation sync service.
//!
//! Exposes the health routes and the endpoints that trigger a fetch, a
//! bridge build, and a load of the employee × month table.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::SyncParams;
pub use response::{ApiError, ApiErrorResponse, HealthResponse, MessageResponse, SyncResponse};
pub use state::AppState;
