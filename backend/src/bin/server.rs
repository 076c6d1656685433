//! Thermometer HTTP Server Binary
//!
//! Loads the server configuration, builds the router and serves requests
//! until Ctrl-C.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin thermometer-server
//! ```
//!
//! # Environment Variables
//!
//! - `THERMOMETER_CONFIG`: Path to a TOML config file (optional)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Log level (default: info)

use std::env;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use thermometer::config::ServerConfig;
use thermometer::http::create_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Thermometer HTTP Server");

    let config = ServerConfig::load()?;
    let addr = config.socket_addr()?;

    let app = create_router();

    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
