//! Rotation sync service binary.
//!
//! Usage: `rotation-bridge [CONFIG] [--port PORT]`. `PORT` in the environment
//! is read when `--port` is absent.

use std::error::Error;
use std::net::SocketAddr;

use clap::Parser;
use rotation_bridge::api::{AppState, create_router};
use rotation_bridge::cli::Cli;
use rotation_bridge::config::ConfigLoader;
use rotation_bridge::logging::init_logging;
use rotation_bridge::pipeline::SyncService;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let config = ConfigLoader::load(&cli.config)?.into_config();

    init_logging(&config.server.log_level);

    let port = cli.port_or(config.server.port);
    let addr: SocketAddr = format!("{}:{}", config.server.host, port).parse()?;

    let service = SyncService::from_config(&config)?;
    info!(
        config = %cli.config.display(),
        table = %service.table(),
        "Rotation sync service configured"
    );

    let router = create_router(AppState::new(service));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(address = %addr, "Listening");
    axum::serve(listener, router).await?;

    Ok(())
}
