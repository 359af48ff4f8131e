//! Season rotation optimizer
//!
//! Plots and budget are handed out greedily to the crops with the best
//! single-plot net profit, then improved by a first-improvement hill climb:
//! drop one allocation, refill the freed plots and budget greedily, and keep
//! the result whenever total net profit strictly increases.
//!
//! Budget is charged with each allocation's startup cost only. The
//! replanting cost of single-use crops shows up in their metrics but does
//! not count against the budget ceiling.

use crate::models::{
    compute_metrics, total_net_profit, Allocation, AllocationSummary, CropDefinition, CropMetrics,
};
use crate::types::Season;

/// An eligible crop with its single-plot metrics
#[derive(Debug, Clone, Copy)]
pub struct RankedCrop<'a> {
    pub crop: &'a CropDefinition,
    pub per_plot: CropMetrics,
}

/// Optimizer for one catalog snapshot, season and season length
#[derive(Debug, Clone)]
pub struct RotationOptimizer<'a> {
    ranked: Vec<RankedCrop<'a>>,
    days_in_season: u32,
}

impl<'a> RotationOptimizer<'a> {
    /// Filter the catalog to crops plantable in `season` and rank them by
    /// single-plot net profit, best first. Ties keep catalog order.
    pub fn new(catalog: &'a [CropDefinition], season: Season, days_in_season: u32) -> Self {
        let mut ranked: Vec<RankedCrop<'a>> = catalog
            .iter()
            .filter(|crop| crop.is_available_in(season))
            .map(|crop| RankedCrop {
                crop,
                per_plot: compute_metrics(crop, 1, days_in_season),
            })
            .collect();

        ranked.sort_by(|a, b| b.per_plot.net_profit.cmp(&a.per_plot.net_profit));

        tracing::debug!(
            season = %season,
            catalog_size = catalog.len(),
            eligible = ranked.len(),
            "Ranked crops for season"
        );

        Self {
            ranked,
            days_in_season,
        }
    }

    pub fn ranked(&self) -> &[RankedCrop<'a>] {
        &self.ranked
    }

    pub fn days_in_season(&self) -> u32 {
        self.days_in_season
    }

    /// Greedily hand out `plots` and `budget` in ranking order
    ///
    /// Each crop takes as many plots as its per-plot startup cost allows.
    /// A crop that costs nothing to plant takes every remaining plot, but
    /// only when it actually makes money. Free crops are still placed after
    /// the budget is spent.
    pub fn allocate_plots(&self, budget: i64, plots: i64) -> Vec<Allocation> {
        let mut remaining_budget = budget;
        let mut remaining_plots = plots;
        let mut allocations = Vec::new();

        for candidate in &self.ranked {
            if remaining_plots <= 0 {
                break;
            }

            let cost_per_plot = candidate.per_plot.startup_cost;
            let plots_to_allocate = if cost_per_plot > 0 {
                if remaining_budget <= 0 {
                    continue;
                }
                (remaining_budget / cost_per_plot).min(remaining_plots)
            } else if candidate.per_plot.net_profit > 0 {
                remaining_plots
            } else {
                0
            };

            if plots_to_allocate <= 0 {
                continue;
            }

            let plot_count = u32::try_from(plots_to_allocate).unwrap_or(u32::MAX);
            let metrics = compute_metrics(candidate.crop, plot_count, self.days_in_season);

            remaining_budget = remaining_budget.saturating_sub(metrics.startup_cost);
            remaining_plots -= i64::from(plot_count);
            allocations.push(Allocation::new(candidate.crop.clone(), metrics));
        }

        allocations
    }

    /// Greedy allocation followed by local search
    ///
    /// Returns an empty result when there is no budget, no plots, or no
    /// crop for the season.
    pub fn optimize(&self, budget: i64, total_plots: i64) -> Vec<Allocation> {
        if budget <= 0 || total_plots <= 0 || self.ranked.is_empty() {
            return Vec::new();
        }

        let mut best = self.allocate_plots(budget, total_plots);
        let mut best_profit = total_net_profit(&best);

        // Every accepted move strictly raises profit; the cap only guards
        // against that ever stopping to hold.
        let move_limit = self.ranked.len().saturating_mul(self.ranked.len()).max(1);
        let mut accepted_moves = 0usize;

        loop {
            let improvement = (0..best.len()).find_map(|index| {
                let candidate = self.reallocate_without(&best, index, budget, total_plots);
                let profit = total_net_profit(&candidate);
                (profit > best_profit).then_some((candidate, profit))
            });

            let Some((candidate, profit)) = improvement else {
                break;
            };

            tracing::debug!(
                previous = best_profit,
                improved = profit,
                "Accepted rotation improvement"
            );
            best = candidate;
            best_profit = profit;
            accepted_moves += 1;

            if accepted_moves >= move_limit {
                tracing::warn!(
                    moves = accepted_moves,
                    "Rotation search hit its move limit, returning best allocation so far"
                );
                break;
            }
        }

        tracing::debug!(
            allocations = best.len(),
            net_profit = best_profit,
            moves = accepted_moves,
            "Rotation optimized"
        );

        best
    }

    /// Drop the allocation at `removed` and refill what it freed
    fn reallocate_without(
        &self,
        current: &[Allocation],
        removed: usize,
        budget: i64,
        total_plots: i64,
    ) -> Vec<Allocation> {
        let mut kept: Vec<Allocation> = current
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != removed)
            .map(|(_, allocation)| allocation.clone())
            .collect();

        let committed = AllocationSummary::from_allocations(&kept);

        kept.extend(self.allocate_plots(
            budget.saturating_sub(committed.startup_cost),
            total_plots.saturating_sub(committed.allocated_plots),
        ));
        kept
    }
}

/// Recommend plot allocations for `season` from a catalog snapshot
pub fn optimize(
    catalog: &[CropDefinition],
    season: Season,
    budget: i64,
    total_plots: i64,
    days_in_season: u32,
) -> Vec<Allocation> {
    RotationOptimizer::new(catalog, season, days_in_season).optimize(budget, total_plots)
}
