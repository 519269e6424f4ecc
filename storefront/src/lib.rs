pub mod api;
pub mod filters;
pub mod profile;
pub mod services;


use std::sync::Arc;
use catalog::MockCatalogSource;
use common::config::Settings;
use common::Result;
use services::StorefrontService;
use tokio::net::TcpListener;
use std::net::SocketAddr;
use tracing::info;

/// Loads configuration, generates the catalog once, and serves the storefront API.
pub async fn run_storefront(config_path: &str) -> Result<()> {
    // Load configuration
    let config = Settings::new(config_path)?;
    common::logging::init_tracing(&config.logging)?;

    let source = MockCatalogSource::from_config(&config.catalog)?;
    let tables = source.tables().clone();

    // Initialize storefront service
    let service = Arc::new(StorefrontService::new(Arc::new(source), tables).await?);

    // Create API router
    let api_router = api::routes(Arc::clone(&service));

    // Start the server
    let addr = SocketAddr::from(([127, 0, 0, 1], config.api_port));
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "Storefront API server listening");
    axum::serve(listener, api_router).await?;

    Ok(())
}
