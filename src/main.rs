//! OctoFit Web Front End
//!
//! Run with: cargo run --bin octofit
//!
//! # Configuration
//!
//! Read from the first config file found (see [`octofit::config`]), then
//! overridden by environment variables:
//! - `OCTOFIT_API_URL`: Fitness API base URL (default: http://localhost:8000)
//! - `OCTOFIT_CODESPACE_NAME`: Reach the API through a GitHub Codespace
//! - `OCTOFIT_HOST`: Host to bind to (default: 0.0.0.0)
//! - `OCTOFIT_PORT`: Port to listen on (default: 3000)
//! - `OCTOFIT_LOG_LEVEL`, `OCTOFIT_LOG_FORMAT`: Logging
//! - `RUST_LOG`: Log filter, wins over `OCTOFIT_LOG_LEVEL`

use anyhow::Context;
use octofit::config::Config;
use octofit::logging::init_tracing;
use octofit::server::{serve, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_default();
    init_tracing(&config.logging);

    tracing::info!("Starting OctoFit Tracker v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::from_config(&config).context("failed to create API client")?;
    tracing::info!("Fitness API: {}", state.client.base_url());

    match state.client.ping().await {
        Ok(()) => tracing::info!("Fitness API reachable"),
        Err(e) => tracing::warn!("Fitness API not reachable: {} (views will show errors)", e),
    }

    serve(state, &config.server).await?;

    tracing::info!("OctoFit Tracker stopped");
    Ok(())
}
