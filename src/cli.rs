//! Command-line arguments for the service binary.

use std::path::PathBuf;

use clap::Parser;

/// Default configuration file location.
pub const DEFAULT_CONFIG_PATH: &str = "./config/service.yaml";

/// Serve the employee × month rotation sync API
#[derive(Parser, Debug)]
#[command(name = "rotation-bridge")]
#[command(about = "rotation-bridge - Build and load the employee x month rotation bridge", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Service configuration file
    #[arg(default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Listen port, overriding `server.port` from the configuration
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,
}

impl Cli {
    /// The port to bind: the override when given, `configured` otherwise.
    pub fn port_or(&self, configured: u16) -> u16 {
        self.port.unwrap_or(configured)
    }
}
