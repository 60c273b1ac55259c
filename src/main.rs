// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::application::generator::SyntheticGenerator;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::dataset_cache::{DatasetCache, MemoizedSource};
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_app_config()?;

    // Generator behind a caller-owned cache
    let generator = SyntheticGenerator::new(config.dataset.generator_settings())?;
    let cache = Arc::new(DatasetCache::new());
    let source = Arc::new(MemoizedSource::new(generator, cache));

    // Create services (application layer)
    let dashboard_service = DashboardService::new(source, config.dashboard.clone());

    // Create application state
    let state = Arc::new(AppState {
        dashboard_service,
        dataset_settings: config.dataset.clone(),
    });

    // Build router (presentation layer)
    let router = build_router(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    tracing::info!(
        "Starting sales-dashboard on {} (points {}..={}, seed {:?})",
        addr,
        config.dataset.min_points,
        config.dataset.max_points,
        config.dataset.seed
    );

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
