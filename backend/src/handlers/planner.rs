//! Crop catalog and rotation planning HTTP handlers

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::services::planner::{CatalogOverviewInput, OptimizeRotationInput, ParseRowInput, PlannerService};
use crate::AppState;

/// Starter catalog for new users
pub async fn default_crops() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({ "crops": shared::default_catalog() })))
}

/// Per-plot economics for every crop in the submitted catalog
pub async fn catalog_overview(
    State(state): State<AppState>,
    Json(input): Json<CatalogOverviewInput>,
) -> impl IntoResponse {
    let service = PlannerService::new(state.config.planner.clone());

    match service.catalog_overview(input) {
        Ok(entries) => (StatusCode::OK, Json(serde_json::json!({ "crops": entries }))).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Parse a pasted spreadsheet row into a crop draft
pub async fn parse_crop_row(
    State(state): State<AppState>,
    Json(input): Json<ParseRowInput>,
) -> impl IntoResponse {
    let service = PlannerService::new(state.config.planner.clone());

    match service.parse_row(input) {
        Ok(crop) => (StatusCode::OK, Json(crop)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Recommend plot allocations for a season
pub async fn optimize_rotation(
    State(state): State<AppState>,
    Json(input): Json<OptimizeRotationInput>,
) -> impl IntoResponse {
    let service = PlannerService::new(state.config.planner.clone());

    match service.optimize_rotation(input) {
        Ok(plan) => (StatusCode::OK, Json(plan)).into_response(),
        Err(e) => e.into_response(),
    }
}
