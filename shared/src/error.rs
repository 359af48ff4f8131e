//! Error types for planner inputs crossing a collaborator boundary

use thiserror::Error;

use crate::validation::CropValidationError;

/// Errors raised while turning caller input into planner input
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Unknown season: {0}")]
    UnknownSeason(String),

    #[error("Invalid catalog JSON: {0}")]
    InvalidCatalog(#[from] serde_json::Error),

    #[error("Crop row needs at least 4 tab-separated columns, found {0}")]
    IncompleteRow(usize),

    #[error("Invalid crop: {0}")]
    InvalidCrop(#[from] CropValidationError),

    #[error("{field} cannot be negative (got {value})")]
    NegativeLimit { field: &'static str, value: i64 },

    #[error("{field} must be a whole number of at most 2^53 - 1 (got {value})")]
    InvalidLimit { field: &'static str, value: f64 },
}
