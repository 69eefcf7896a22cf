//! Trip Planner Server
//!
//! Provider proxy and trip aggregation REST API.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trip_planner::{api, config::AppConfig, providers::Providers, services::Services, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("trip_planner={},tower_http=debug", config.logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting Trip Planner Server v{}", env!("CARGO_PKG_VERSION"));

    for variable in config.providers.missing_credentials() {
        tracing::warn!("{} is not set, requests to its provider will fail", variable);
    }

    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create provider adapters and services
    let providers = Providers::direct(&config.providers)?;
    let services = Services::new(providers);

    if let Some(dir) = &config.server.static_dir {
        tracing::info!("Serving client bundle from {}", dir);
    }

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = api::router(state);

    // Start server
    let addr = SocketAddr::new(server_host.parse()?, server_port);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
