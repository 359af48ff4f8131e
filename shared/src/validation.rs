//! Validation utilities for crop catalogs and planning limits
//!
//! The optimizer trusts its input. These checks run at the edges (HTTP,
//! WASM, catalog import) before a catalog reaches it.

use std::collections::HashSet;

use thiserror::Error;

use crate::error::PlannerError;
use crate::models::{CropDefinition, CropKind};

/// A crop record that cannot be planned with
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CropValidationError {
    #[error("Crop {id} has no name")]
    EmptyName { id: u64 },

    #[error("Crop '{name}' must take at least one day to mature")]
    NonPositiveMaturity { name: String },

    #[error("Renewable crop '{name}' must take at least one day to reflower")]
    NonPositiveReflower { name: String },

    #[error("Crop '{name}' has a negative seed cost")]
    NegativeSeedCost { name: String },

    #[error("Crop '{name}' has a negative profit per harvest")]
    NegativeProfit { name: String },

    #[error("Crop '{name}' is not assigned to any season")]
    NoSeasons { name: String },

    #[error("Crop id {0} appears more than once")]
    DuplicateId(u64),
}

impl CropValidationError {
    /// Wire name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            CropValidationError::EmptyName { .. } => "name",
            CropValidationError::NonPositiveMaturity { .. } => "daysToMature",
            CropValidationError::NonPositiveReflower { .. } => "daysToReflower",
            CropValidationError::NegativeSeedCost { .. } => "seedCost",
            CropValidationError::NegativeProfit { .. } => "profitPerHarvest",
            CropValidationError::NoSeasons { .. } => "seasons",
            CropValidationError::DuplicateId(_) => "id",
        }
    }
}

/// Validate a single crop record
pub fn validate_crop(crop: &CropDefinition) -> Result<(), CropValidationError> {
    if crop.name.trim().is_empty() {
        return Err(CropValidationError::EmptyName { id: crop.id });
    }

    let name = || crop.name.clone();

    if crop.days_to_mature == 0 {
        return Err(CropValidationError::NonPositiveMaturity { name: name() });
    }
    if let CropKind::Renewable { days_to_reflower: 0 } = crop.kind {
        return Err(CropValidationError::NonPositiveReflower { name: name() });
    }
    if crop.seed_cost < 0 {
        return Err(CropValidationError::NegativeSeedCost { name: name() });
    }
    if crop.profit_per_harvest < 0 {
        return Err(CropValidationError::NegativeProfit { name: name() });
    }
    if crop.seasons.is_empty() {
        return Err(CropValidationError::NoSeasons { name: name() });
    }
    Ok(())
}

/// Validate every record and check that ids are unique
pub fn validate_catalog(catalog: &[CropDefinition]) -> Result<(), CropValidationError> {
    let mut seen = HashSet::with_capacity(catalog.len());
    for crop in catalog {
        validate_crop(crop)?;
        if !seen.insert(crop.id) {
            return Err(CropValidationError::DuplicateId(crop.id));
        }
    }
    Ok(())
}

/// Reject negative budgets and plot counts
///
/// Zero is allowed: it simply plans nothing.
pub fn validate_limits(budget: i64, plots: i64) -> Result<(), PlannerError> {
    if budget < 0 {
        return Err(PlannerError::NegativeLimit {
            field: "budget",
            value: budget,
        });
    }
    if plots < 0 {
        return Err(PlannerError::NegativeLimit {
            field: "plots",
            value: plots,
        });
    }
    Ok(())
}
