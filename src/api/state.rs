//! Application state for the rotation sync API.

use std::sync::Arc;

use crate::pipeline::SyncService;

/// Shared application state.
///
/// Holds the sync service every handler runs against.
#[derive(Clone)]
pub struct AppState {
    service: Arc<SyncService>,
}

impl AppState {
    /// Creates a new application state around `service`.
    pub fn new(service: SyncService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Returns the sync service.
    pub fn service(&self) -> &SyncService {
        &self.service
    }
}
