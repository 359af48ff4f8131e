//! WebAssembly module for the Crop Rotation Planner
//!
//! Provides client-side computation for:
//! - Per-plot crop profitability
//! - Season rotation planning
//! - Catalog overview and spreadsheet row parsing
//!
//! Everything crosses the boundary as JSON strings so the front end can keep
//! its catalog in whatever store it likes.

use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn to_js_error(err: PlannerError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[cfg(target_arch = "wasm32")]
fn log_debug(message: &str) {
    web_sys::console::debug_1(&JsValue::from_str(message));
}

#[cfg(not(target_arch = "wasm32"))]
fn log_debug(_message: &str) {}

fn parse_catalog(catalog_json: &str) -> Result<Vec<CropDefinition>, PlannerError> {
    let catalog = import_catalog(catalog_json)?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

/// Compute season metrics for one crop on `plot_count` plots
#[wasm_bindgen]
pub fn compute_crop_metrics(crop_json: &str, plot_count: u32, days_in_season: u32) -> Result<String, JsValue> {
    crop_metrics_json(crop_json, plot_count, days_in_season).map_err(to_js_error)
}

fn crop_metrics_json(crop_json: &str, plot_count: u32, days_in_season: u32) -> Result<String, PlannerError> {
    let crop: CropDefinition = serde_json::from_str(crop_json)?;
    let metrics = compute_metrics(&crop, plot_count, days_in_season);
    Ok(serde_json::to_string(&metrics)?)
}

/// Recommend a rotation for `season`
///
/// Returns `{ season, daysInSeason, allocations, summary }`.
#[wasm_bindgen]
pub fn optimize_rotation(
    catalog_json: &str,
    season: &str,
    budget: f64,
    plots: f64,
    days_in_season: u32,
) -> Result<String, JsValue> {
    let plan = rotation_plan_json(catalog_json, season, budget, plots, days_in_season).map_err(to_js_error)?;
    log_debug(&format!("Planned rotation for {season}"));
    Ok(plan)
}

fn rotation_plan_json(
    catalog_json: &str,
    season: &str,
    budget: f64,
    plots: f64,
    days_in_season: u32,
) -> Result<String, PlannerError> {
    let catalog = parse_catalog(catalog_json)?;
    let season: Season = season.parse()?;
    let budget = limit_from_js("budget", budget)?;
    let plots = limit_from_js("plots", plots)?;
    validate_limits(budget, plots)?;

    let allocations = optimize(&catalog, season, budget, plots, days_in_season);
    let plan = RotationPlan::new(season, days_in_season, allocations);
    Ok(serde_json::to_string(&plan)?)
}

/// Largest integer a JS number holds exactly
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Convert a JS number into a whole limit without wrapping
fn limit_from_js(field: &'static str, value: f64) -> Result<i64, PlannerError> {
    if !value.is_finite() || value.fract() != 0.0 || value.abs() > MAX_SAFE_INTEGER {
        return Err(PlannerError::InvalidLimit { field, value });
    }
    Ok(value as i64)
}

/// Per-plot metrics for every crop in the catalog, best ROI first
#[wasm_bindgen]
pub fn catalog_overview_json(catalog_json: &str, season: &str, days_in_season: u32) -> Result<String, JsValue> {
    overview_json(catalog_json, season, days_in_season).map_err(to_js_error)
}

fn overview_json(catalog_json: &str, season: &str, days_in_season: u32) -> Result<String, PlannerError> {
    let catalog = import_catalog(catalog_json)?;
    let season: Season = season.parse()?;
    Ok(serde_json::to_string(&catalog_overview(&catalog, season, days_in_season))?)
}

/// Turn a pasted spreadsheet row into a crop draft
///
/// `seasons_json` is the list of seasons currently selected in the form.
#[wasm_bindgen]
pub fn parse_crop_row_json(row: &str, id: u32, seasons_json: &str) -> Result<String, JsValue> {
    crop_row_json(row, id, seasons_json).map_err(to_js_error)
}

fn crop_row_json(row: &str, id: u32, seasons_json: &str) -> Result<String, PlannerError> {
    let seasons: Vec<Season> = serde_json::from_str(seasons_json)?;
    let crop = parse_crop_row(row, u64::from(id), seasons)?;
    Ok(serde_json::to_string(&crop)?)
}

/// Starter catalog as JSON
#[wasm_bindgen]
pub fn default_catalog_json() -> String {
    export_catalog(&default_catalog()).unwrap_or_else(|_| "[]".to_string())
}

/// Default season length in days
#[wasm_bindgen]
pub fn default_days_in_season() -> u32 {
    DAYS_IN_SEASON
}
