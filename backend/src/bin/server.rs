//! School dashboard HTTP server.
//!
//! Loads the configuration, fetches and normalizes the dataset, mounts the
//! initial view and serves the dashboard API until interrupted.
//!
//! # Usage
//!
//! ```bash
//! # Fetch the dataset from the default URL
//! cargo run --bin school-dash-server
//!
//! # Read the dataset from a local file
//! DATASET_FILE=./schools.json cargo run --bin school-dash-server
//! ```
//!
//! # Environment Variables
//!
//! - `SCHOOL_DASH_CONFIG`: path of the TOML configuration file
//! - `HOST`, `PORT`: bind address (default: 0.0.0.0:8080)
//! - `DATASET_URL` / `DATASET_FILE`: dataset location
//! - `FETCH_TIMEOUT_SECS`, `CHART_TIMEOUT_SECS`: timeouts
//! - `RUST_LOG`: log filter directives, e.g. `school_dash=debug,tower_http=info`
//!   (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use school_dash::charts::DocumentRenderer;
use school_dash::config::DashboardConfig;
use school_dash::http::{create_router, AppState};
use school_dash::source::SourceFactory;
use school_dash::Dashboard;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_env_filter(log_filter(env::var("RUST_LOG").ok()))
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting school dashboard server");

    let config = DashboardConfig::load()?;
    let source = SourceFactory::from_settings(&config.source)?;
    let renderer = Arc::new(DocumentRenderer::new());

    let dashboard = Arc::new(Dashboard::init(&config, source, renderer).await?);
    info!("Dashboard initialized with {} schools", dashboard.dataset().len());

    let app = create_router(AppState::new(Arc::clone(&dashboard)));

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    dashboard.teardown().await;
    info!("Server stopped");
    Ok(())
}

const DEFAULT_LOG_FILTER: &str = "info";

/// Filter from `RUST_LOG` directives; unset or invalid falls back to info.
fn log_filter(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
    }
}
