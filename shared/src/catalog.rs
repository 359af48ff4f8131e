//! Crop catalog helpers
//!
//! Import/export of catalog snapshots, spreadsheet row parsing and the
//! per-plot overview shown next to the catalog.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::PlannerError;
use crate::models::{compute_metrics, CropDefinition, CropKind, CropMetrics};
use crate::types::Season;

/// Starter catalog offered before the user adds their own crops
pub fn default_catalog() -> Vec<CropDefinition> {
    vec![
        CropDefinition {
            id: 1,
            name: "Tomato".to_string(),
            kind: CropKind::Renewable { days_to_reflower: 7 },
            seed_cost: 150,
            profit_per_harvest: 50,
            days_to_mature: 14,
            seasons: vec![Season::Spring, Season::Summer],
            is_tree: false,
            is_disabled: false,
        },
        CropDefinition {
            id: 2,
            name: "Apple Tree".to_string(),
            kind: CropKind::Renewable { days_to_reflower: 30 },
            seed_cost: 500,
            profit_per_harvest: 200,
            days_to_mature: 60,
            seasons: vec![Season::Summer, Season::Fall],
            is_tree: true,
            is_disabled: false,
        },
        CropDefinition {
            id: 3,
            name: "Lettuce".to_string(),
            kind: CropKind::SingleUse,
            seed_cost: 20,
            profit_per_harvest: 40,
            days_to_mature: 10,
            seasons: vec![Season::Spring, Season::Fall],
            is_tree: false,
            is_disabled: false,
        },
    ]
}

/// Parse a catalog snapshot exported as JSON
pub fn import_catalog(json: &str) -> Result<Vec<CropDefinition>, PlannerError> {
    Ok(serde_json::from_str(json)?)
}

/// Export a catalog snapshot as pretty-printed JSON
pub fn export_catalog(catalog: &[CropDefinition]) -> Result<String, PlannerError> {
    Ok(serde_json::to_string_pretty(catalog)?)
}

/// Next free crop id for `catalog`
pub fn next_crop_id(catalog: &[CropDefinition]) -> u64 {
    catalog.iter().map(|crop| crop.id).max().unwrap_or(0) + 1
}

/// Parse one row pasted from a spreadsheet into a crop draft
///
/// Columns are tab separated: name, seed cost, days to mature, days to
/// reflower, profit per harvest. An empty reflower column marks the crop as
/// single-use. Numbers that do not parse are read as 0, matching what a
/// user sees when pasting a half-filled row.
pub fn parse_crop_row(row: &str, id: u64, seasons: Vec<Season>) -> Result<CropDefinition, PlannerError> {
    let columns: Vec<&str> = row.split('\t').collect();
    if columns.len() < 4 {
        return Err(PlannerError::IncompleteRow(columns.len()));
    }

    let column = |index: usize| columns.get(index).copied().unwrap_or("");
    let reflower = column(3);

    let kind = if reflower.trim().is_empty() {
        CropKind::SingleUse
    } else {
        CropKind::Renewable {
            days_to_reflower: parse_days(reflower),
        }
    };

    Ok(CropDefinition {
        id,
        name: column(0).trim().to_string(),
        kind,
        seed_cost: parse_leading_int(column(1)),
        profit_per_harvest: parse_leading_int(column(4)),
        days_to_mature: parse_days(column(2)),
        seasons,
        is_tree: false,
        is_disabled: false,
    })
}

/// Read the leading integer of a cell ("12 days" reads as 12)
fn parse_leading_int(cell: &str) -> i64 {
    let cell = cell.trim();
    let (sign, digits) = match cell.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, cell.strip_prefix('+').unwrap_or(cell)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().map(|value| sign * value).unwrap_or(0)
}

fn parse_days(cell: &str) -> u32 {
    u32::try_from(parse_leading_int(cell)).unwrap_or(0)
}

/// One catalog row with its single-plot economics
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    #[serde(flatten)]
    pub crop: CropDefinition,
    pub per_plot: CropMetrics,
    pub roi_percent: Option<Decimal>,
    pub in_season: bool,
}

/// Single-plot metrics for every crop, best ROI first
///
/// Disabled and out-of-season crops are listed too; `in_season` tells the
/// caller which ones the optimizer would consider. Crops with no cost (and
/// therefore no ROI) go last.
pub fn catalog_overview(catalog: &[CropDefinition], season: Season, days_in_season: u32) -> Vec<CatalogEntry> {
    let mut entries: Vec<CatalogEntry> = catalog
        .iter()
        .map(|crop| {
            let per_plot = compute_metrics(crop, 1, days_in_season);
            CatalogEntry {
                crop: crop.clone(),
                per_plot,
                roi_percent: per_plot.roi_percent(),
                in_season: crop.is_available_in(season),
            }
        })
        .collect();

    entries.sort_by(|a, b| match (a.roi_percent, b.roi_percent) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });

    entries
}
