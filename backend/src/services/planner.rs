//! Planning service: validates requests and runs the rotation optimizer

use serde::Deserialize;
use shared::{
    catalog_overview, next_crop_id, optimize, parse_crop_row, validate_catalog, validate_limits,
    CatalogEntry, CropDefinition, RotationPlan, Season,
};

use crate::config::PlannerConfig;
use crate::error::{AppError, AppResult};

/// Planning service. Holds no catalog: every request brings its own.
#[derive(Clone)]
pub struct PlannerService {
    config: PlannerConfig,
}

/// Input for planning a season
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeRotationInput {
    pub crops: Vec<CropDefinition>,
    pub season: String,
    pub budget: i64,
    pub plots: i64,
    pub days_in_season: Option<u32>,
}

/// Input for the catalog overview table
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogOverviewInput {
    pub crops: Vec<CropDefinition>,
    pub season: Option<String>,
    pub days_in_season: Option<u32>,
}

/// Input for parsing a pasted spreadsheet row
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseRowInput {
    pub row: String,
    /// Existing catalog, used to pick the next free id
    #[serde(default)]
    pub crops: Vec<CropDefinition>,
    #[serde(default)]
    pub seasons: Vec<Season>,
}

impl PlannerService {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Plan the requested season
    pub fn optimize_rotation(&self, input: OptimizeRotationInput) -> AppResult<RotationPlan> {
        self.check_catalog(&input.crops)?;
        let season: Season = input.season.parse()?;
        validate_limits(input.budget, input.plots)?;
        let days_in_season = self.season_length(input.days_in_season)?;

        let allocations = optimize(&input.crops, season, input.budget, input.plots, days_in_season);
        let plan = RotationPlan::new(season, days_in_season, allocations);

        tracing::info!(
            season = %season,
            crops = input.crops.len(),
            budget = input.budget,
            plots = input.plots,
            allocations = plan.allocations.len(),
            net_profit = plan.summary.net_profit,
            "Planned rotation"
        );

        Ok(plan)
    }

    /// Per-plot economics for every crop in the request
    pub fn catalog_overview(&self, input: CatalogOverviewInput) -> AppResult<Vec<CatalogEntry>> {
        self.check_size(&input.crops)?;
        let season = match input.season {
            Some(season) => season.parse()?,
            None => Season::Spring,
        };
        let days_in_season = self.season_length(input.days_in_season)?;

        Ok(catalog_overview(&input.crops, season, days_in_season))
    }

    /// Turn a pasted row into a crop draft with a fresh id
    pub fn parse_row(&self, input: ParseRowInput) -> AppResult<CropDefinition> {
        let id = next_crop_id(&input.crops);
        Ok(parse_crop_row(&input.row, id, input.seasons)?)
    }

    fn check_size(&self, crops: &[CropDefinition]) -> AppResult<()> {
        if crops.len() > self.config.max_catalog_size {
            return Err(AppError::CatalogTooLarge {
                size: crops.len(),
                limit: self.config.max_catalog_size,
            });
        }
        Ok(())
    }

    fn check_catalog(&self, crops: &[CropDefinition]) -> AppResult<()> {
        self.check_size(crops)?;
        validate_catalog(crops)?;
        Ok(())
    }

    fn season_length(&self, requested: Option<u32>) -> AppResult<u32> {
        match requested {
            Some(0) => Err(AppError::Validation {
                field: "daysInSeason".to_string(),
                message: "A season must last at least one day".to_string(),
            }),
            Some(days) => Ok(days),
            None => Ok(self.config.days_in_season),
        }
    }
}
