//! Yield Radar — Entry Point
//!
//! Initializes configuration, logging, the upstream HTTP client, and
//! the API server. Runs until SIGINT.
//!
//! Wiring sequence:
//! 1. Load environment config + validate (CURVE_API, AAVE_API required)
//! 2. Init tracing (JSON structured logging)
//! 3. Build shared reqwest client with request timeout
//! 4. Create Curve and Aave source adapters (YieldSource ports)
//! 5. Wire the HighestApy use case — Curve before Aave, the order
//!    fixes the tie-break
//! 6. Serve the axum API until SIGINT → graceful shutdown

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::info;

mod adapters;
mod config;
mod domain;
mod ports;
mod usecases;

use adapters::api::server::{ApiServer, AppState};
use adapters::sources::{AaveSource, CurveSource};
use ports::yield_source::YieldSource;
use usecases::highest_apy::HighestApy;

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1. Load configuration from the environment ──────────
    let config = config::loader::load_from_env().context("Failed to load configuration")?;

    // ── 2. Initialize structured JSON logging ───────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.server.log_level)),
        )
        .json()
        .init();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        bind = %config.server.bind_address,
        timeout_ms = config.sources.timeout_ms,
        "Starting Yield Radar"
    );

    // ── 3. Shared upstream HTTP client ──────────────────────
    let http = reqwest::Client::builder()
        .timeout(Duration::from_millis(config.sources.timeout_ms))
        .build()
        .context("Failed to build HTTP client")?;

    // ── 4. Source adapters (YieldSource ports) ──────────────
    let curve = Arc::new(CurveSource::new(
        http.clone(),
        config.sources.curve_api.clone(),
    ));
    let aave = Arc::new(AaveSource::new(http, config.sources.aave_api.clone()));

    // ── 5. Aggregation use case — source order is tie-break order
    let highest_apy = Arc::new(HighestApy::new(vec![
        curve as Arc<dyn YieldSource>,
        aave as Arc<dyn YieldSource>,
    ]));

    // ── 6. Serve until SIGINT ───────────────────────────────
    let server = ApiServer::new(
        config.server.bind_address.clone(),
        AppState { highest_apy },
    );
    server.run(shutdown_signal()).await?;

    info!("Shutdown complete");
    Ok(())
}

/// Resolve when SIGINT is received.
async fn shutdown_signal() {
    let _ = signal::ctrl_c().await;
    info!("SIGINT received, initiating graceful shutdown");
}
