//! Steady API server.
//!
//! Seeds the in-memory store from the data directory and serves the JSON
//! API until interrupted.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use catalog::Dataset;
use server::{AppState, build_router};

#[derive(Parser, Debug)]
#[command(name = "steady-server")]
#[command(about = "Serve the Steady athlete API", long_about = None)]
struct Config {
    /// Address to listen on
    #[arg(long, env = "STEADY_BIND", default_value = "127.0.0.1:8080")]
    bind: SocketAddr,

    /// Directory holding techniques.dat and accounts.dat
    #[arg(long, env = "STEADY_DATA_DIR", default_value = "data")]
    data_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::parse();
    info!("Starting Steady server with {:?}", config);

    let start = Instant::now();
    let dataset = Dataset::load_from_dir(&config.data_dir)
        .with_context(|| format!("failed to load seed data from {}", config.data_dir.display()))?;
    info!(
        "Loaded {} techniques and {} accounts in {:?}",
        dataset.techniques.len(),
        dataset.accounts.len(),
        start.elapsed()
    );

    let app = build_router(AppState::in_memory(&dataset));

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    info!("Listening on http://{}", config.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
    }
}
