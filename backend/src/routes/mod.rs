//! Route definitions for the Crop Rotation Planner

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/crops", crop_routes())
        .nest("/rotation", rotation_routes())
}

/// Catalog helper routes
fn crop_routes() -> Router<AppState> {
    Router::new()
        .route("/defaults", get(handlers::default_crops))
        .route("/overview", post(handlers::catalog_overview))
        .route("/parse-row", post(handlers::parse_crop_row))
}

/// Rotation planning routes
fn rotation_routes() -> Router<AppState> {
    Router::new().route("/optimize", post(handlers::optimize_rotation))
}
