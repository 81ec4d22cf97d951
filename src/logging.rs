//! Logging configuration and initialization.

use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Builds the log filter: `RUST_LOG` when set, `default_level` otherwise.
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Initialize tracing/logging for the service.
///
/// Safe to call more than once; later calls leave the first subscriber in
/// place.
pub fn init_logging(default_level: &str) {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_target(false)
        .try_init()
        .is_ok();

    if installed {
        debug!(default_level, "Logging initialized");
    }
}
