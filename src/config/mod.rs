//! Configuration loading for the rotation sync service.
//!
//! This module loads the service configuration from a YAML file: server
//! settings, the employee source, the destination table, and bridge options.
//! The configuration is an explicit value handed to the pipeline.
//!
//! # Example
//!
//! ```no_run
//! use rotation_bridge::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/service.yaml").unwrap();
//! println!("Loading into: {}", config.config().warehouse.table);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    BridgeConfig, ReportSourceConfig, ServerConfig, ServiceConfig, SourceConfig,
    SpreadsheetSourceConfig, WarehouseConfig,
};
