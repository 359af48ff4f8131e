//! Plot allocation results

use rust_decimal::Decimal;
use serde::Serialize;

use super::crop::CropDefinition;
use super::metrics::CropMetrics;
use crate::types::Season;

/// A crop together with the metrics for the plots assigned to it
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Allocation {
    #[serde(flatten)]
    pub crop: CropDefinition,
    #[serde(flatten)]
    pub metrics: CropMetrics,
    pub roi_percent: Option<Decimal>,
}

impl Allocation {
    pub fn new(crop: CropDefinition, metrics: CropMetrics) -> Self {
        let roi_percent = metrics.roi_percent();
        Self {
            crop,
            metrics,
            roi_percent,
        }
    }
}

/// Totals across an allocation result
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AllocationSummary {
    pub allocated_plots: i64,
    pub startup_cost: i64,
    pub total_cost: i64,
    pub total_profit: i64,
    pub net_profit: i64,
}

impl AllocationSummary {
    pub fn from_allocations(allocations: &[Allocation]) -> Self {
        allocations
            .iter()
            .fold(Self::default(), |summary, allocation| Self {
                allocated_plots: summary
                    .allocated_plots
                    .saturating_add(i64::from(allocation.metrics.allocated_plots)),
                startup_cost: summary.startup_cost.saturating_add(allocation.metrics.startup_cost),
                total_cost: summary.total_cost.saturating_add(allocation.metrics.total_cost),
                total_profit: summary.total_profit.saturating_add(allocation.metrics.total_profit),
                net_profit: summary.net_profit.saturating_add(allocation.metrics.net_profit),
            })
    }
}

/// A season's recommended allocations, ready for display
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RotationPlan {
    pub season: Season,
    pub days_in_season: u32,
    pub allocations: Vec<Allocation>,
    pub summary: AllocationSummary,
}

impl RotationPlan {
    pub fn new(season: Season, days_in_season: u32, allocations: Vec<Allocation>) -> Self {
        let summary = AllocationSummary::from_allocations(&allocations);
        Self {
            season,
            days_in_season,
            allocations,
            summary,
        }
    }
}

/// Sum of net profit over an allocation result
pub fn total_net_profit(allocations: &[Allocation]) -> i64 {
    allocations
        .iter()
        .fold(0i64, |total, a| total.saturating_add(a.metrics.net_profit))
}
