//! Profitability metrics for a crop over one season

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::crop::{CropDefinition, CropKind};

/// Economic outcome of planting a crop on a number of plots for one season
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CropMetrics {
    /// Harvest events that fit in the season
    pub available_harvests: u32,
    /// Cost of planting the plots once
    pub startup_cost: i64,
    /// Cost across every planting in the season
    pub total_cost: i64,
    pub total_profit: i64,
    pub net_profit: i64,
    pub allocated_plots: u32,
}

impl CropMetrics {
    /// Metrics for a crop that cannot produce anything this season
    pub fn empty(plot_count: u32) -> Self {
        Self {
            allocated_plots: plot_count,
            ..Self::default()
        }
    }

    /// Return on the season's total cost, as a percentage with one decimal
    pub fn roi_percent(&self) -> Option<Decimal> {
        if self.total_cost == 0 {
            return None;
        }
        let ratio = Decimal::from(self.net_profit) / Decimal::from(self.total_cost);
        Some((ratio * Decimal::ONE_HUNDRED).round_dp(1))
    }
}

/// Calculate the season metrics of `crop` planted on `plot_count` plots
///
/// Renewable crops are planted once: the first harvest lands at
/// `days_to_mature` and another one every `days_to_reflower` days after it.
/// Single-use crops are replanted every cycle, so both harvests and seed
/// cost scale with `days_in_season / days_to_mature`.
///
/// Malformed timings never fault: a zero maturity yields empty metrics and
/// a zero reflower interval yields no additional harvests. Money saturates
/// at the `i64` bounds instead of overflowing.
pub fn compute_metrics(crop: &CropDefinition, plot_count: u32, days_in_season: u32) -> CropMetrics {
    if crop.days_to_mature == 0 {
        return CropMetrics::empty(plot_count);
    }

    let plots = i64::from(plot_count);
    let startup_cost = crop.seed_cost.saturating_mul(plots);

    let (available_harvests, total_cost) = match crop.kind {
        CropKind::Renewable { days_to_reflower } => {
            let harvests = match days_in_season.checked_sub(crop.days_to_mature) {
                Some(days_after_first_harvest) => {
                    let additional = days_after_first_harvest
                        .checked_div(days_to_reflower)
                        .unwrap_or(0);
                    1 + additional
                }
                None => 0,
            };
            (harvests, startup_cost)
        }
        CropKind::SingleUse => {
            let cycles = days_in_season / crop.days_to_mature;
            (cycles, i64::from(cycles).saturating_mul(startup_cost))
        }
    };

    let total_profit = i64::from(available_harvests)
        .saturating_mul(crop.profit_per_harvest)
        .saturating_mul(plots);

    CropMetrics {
        available_harvests,
        startup_cost,
        total_cost,
        total_profit,
        net_profit: total_profit.saturating_sub(total_cost),
        allocated_plots: plot_count,
    }
}
