//! Crop Rotation Planner - Backend Server
//!
//! Stateless HTTP API over the rotation optimizer. Clients send their crop
//! catalog with every request; nothing is stored server side.

use axum::{routing::get, Router};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod handlers;
mod routes;
mod services;

pub use config::Config;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rotation_server=debug,shared=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()
        .map_err(|e| error::AppError::Configuration(e.to_string()))?;

    tracing::info!("Starting Crop Rotation Planner Server");
    tracing::info!("Environment: {}", config.environment);
    tracing::info!(
        days_in_season = config.planner.days_in_season,
        max_catalog_size = config.planner.max_catalog_size,
        "Planner defaults"
    );

    let host: std::net::IpAddr = config
        .server
        .host
        .parse()
        .map_err(|_| error::AppError::Configuration(format!("invalid host {}", config.server.host)))?;
    let addr = SocketAddr::from((host, config.server.port));

    // Create application state
    let state = AppState {
        config: Arc::new(config),
    };

    // Build application
    let app = create_app(state);

    // Start server
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Crop Rotation Planner API v1.0"
}
