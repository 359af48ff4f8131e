//! Tests for the rotation optimizer and crop profitability metrics
//! Covers planting scenarios and the allocation invariants under random catalogs

use proptest::prelude::*;
use shared::{
    compute_metrics, optimize, total_net_profit, CropDefinition, CropKind, RotationOptimizer,
    Season, DAYS_IN_SEASON,
};

fn crop(id: u64, name: &str, kind: CropKind, seed_cost: i64, profit: i64, mature: u32) -> CropDefinition {
    CropDefinition {
        id,
        name: name.to_string(),
        kind,
        seed_cost,
        profit_per_harvest: profit,
        days_to_mature: mature,
        seasons: vec![Season::Spring],
        is_tree: false,
        is_disabled: false,
    }
}

fn renewable(days_to_reflower: u32) -> CropKind {
    CropKind::Renewable { days_to_reflower }
}

fn plots_used(allocations: &[shared::Allocation]) -> i64 {
    allocations
        .iter()
        .map(|a| i64::from(a.metrics.allocated_plots))
        .sum()
}

fn budget_used(allocations: &[shared::Allocation]) -> i64 {
    allocations.iter().map(|a| a.metrics.startup_cost).sum()
}

// =============================================================================
// Planting Scenarios
// =============================================================================

mod scenarios {
    use super::*;

    #[test]
    fn budget_limits_plots() {
        // 1000 buys 6 Strawberry plots at 150 each, the last 100 buys 2 Potato plots.
        // Strawberry: 6 harvests of 60 on a 150 seed (net 210 per plot)
        // Potato: 4 cycles of 80 on a 50 seed (net 120 per plot)
        let catalog = vec![
            crop(1, "Strawberry", renewable(4), 150, 60, 8),
            crop(2, "Potato", CropKind::SingleUse, 50, 80, 6),
        ];

        let result = optimize(&catalog, Season::Spring, 1000, 10, DAYS_IN_SEASON);

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].crop.name, "Strawberry");
        assert_eq!(result[0].metrics.allocated_plots, 6);
        assert_eq!(result[0].metrics.net_profit, 6 * 210);
        assert_eq!(result[1].crop.name, "Potato");
        assert_eq!(result[1].metrics.allocated_plots, 2);
        assert_eq!(result[1].metrics.net_profit, 2 * 120);
        assert_eq!(budget_used(&result), 1000);
        assert_eq!(total_net_profit(&result), 6 * 210 + 2 * 120);
    }

    #[test]
    fn plots_limit_allocation() {
        let catalog = vec![crop(1, "Lettuce", CropKind::SingleUse, 20, 40, 10)];

        let result = optimize(&catalog, Season::Spring, 10_000, 3, DAYS_IN_SEASON);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].metrics.allocated_plots, 3);
        assert_eq!(result[0].metrics.startup_cost, 60);
        // Two 10-day cycles fit in 28 days
        assert_eq!(result[0].metrics.available_harvests, 2);
        assert_eq!(result[0].metrics.net_profit, 3 * (80 - 40));
    }

    #[test]
    fn out_of_season_crops_are_ignored() {
        let mut fall_only = crop(1, "Pumpkin", CropKind::SingleUse, 100, 320, 13);
        fall_only.seasons = vec![Season::Fall];

        assert!(optimize(&[fall_only], Season::Spring, 1000, 4, DAYS_IN_SEASON).is_empty());
    }

    #[test]
    fn slow_crop_yields_nothing() {
        // Matures after the season ends
        let catalog = vec![crop(1, "Ancient Fruit", renewable(7), 100, 550, 40)];
        let metrics = compute_metrics(&catalog[0], 1, DAYS_IN_SEASON);

        assert_eq!(metrics.available_harvests, 0);
        assert_eq!(metrics.net_profit, -100);
    }

    #[test]
    fn nothing_to_spend_returns_empty() {
        let catalog = vec![crop(1, "Lettuce", CropKind::SingleUse, 20, 40, 10)];

        assert!(optimize(&catalog, Season::Spring, 0, 4, DAYS_IN_SEASON).is_empty());
        assert!(optimize(&catalog, Season::Spring, 100, 0, DAYS_IN_SEASON).is_empty());
        assert!(optimize(&catalog, Season::Spring, -5, 4, DAYS_IN_SEASON).is_empty());
        assert!(optimize(&[], Season::Spring, 100, 4, DAYS_IN_SEASON).is_empty());
    }

    #[test]
    fn huge_profit_saturates_instead_of_overflowing() {
        let catalog = vec![crop(1, "Golden Melon", CropKind::SingleUse, 1, i64::MAX / 10, 1)];
        assert!(shared::validate_catalog(&catalog).is_ok());

        let result = optimize(&catalog, Season::Spring, 100, 4, DAYS_IN_SEASON);
        let plan = shared::RotationPlan::new(Season::Spring, DAYS_IN_SEASON, result);

        assert_eq!(plan.summary.allocated_plots, 4);
        assert_eq!(plan.summary.total_profit, i64::MAX);
        assert_eq!(plan.summary.net_profit, i64::MAX - 112);
    }

    #[test]
    fn long_season_with_large_values() {
        let catalog = vec![crop(1, "Giant Pumpkin", renewable(1), i64::MAX / 4, i64::MAX / 4, 1)];

        let result = optimize(&catalog, Season::Spring, i64::MAX, 8, u32::MAX);

        // Four plots exhaust the budget; profit pins at the i64 ceiling
        assert_eq!(plots_used(&result), 4);
        assert_eq!(result[0].metrics.available_harvests, u32::MAX);
        assert_eq!(result[0].metrics.total_profit, i64::MAX);
        assert_eq!(budget_used(&result), 4 * (i64::MAX / 4));
    }

    #[test]
    fn custom_season_length() {
        let catalog = vec![crop(1, "Lettuce", CropKind::SingleUse, 20, 40, 10)];

        let result = optimize(&catalog, Season::Spring, 1000, 1, 56);

        assert_eq!(result[0].metrics.available_harvests, 5);
    }
}

// =============================================================================
// Allocation Invariants
// =============================================================================

fn kind_strategy() -> impl Strategy<Value = CropKind> {
    prop_oneof![
        (1u32..20).prop_map(|days_to_reflower| CropKind::Renewable { days_to_reflower }),
        Just(CropKind::SingleUse),
    ]
}

fn season_strategy() -> impl Strategy<Value = Season> {
    prop::sample::select(Season::ALL.to_vec())
}

fn crop_strategy() -> impl Strategy<Value = CropDefinition> {
    (
        kind_strategy(),
        0i64..500,
        0i64..300,
        1u32..40,
        prop::sample::subsequence(Season::ALL.to_vec(), 1..=4),
        any::<bool>(),
    )
        .prop_map(|(kind, seed_cost, profit, mature, seasons, is_disabled)| CropDefinition {
            id: 0,
            name: "Crop".to_string(),
            kind,
            seed_cost,
            profit_per_harvest: profit,
            days_to_mature: mature,
            seasons,
            is_tree: false,
            is_disabled,
        })
}

fn catalog_strategy() -> impl Strategy<Value = Vec<CropDefinition>> {
    prop::collection::vec(crop_strategy(), 0..6).prop_map(|mut crops| {
        for (index, crop) in crops.iter_mut().enumerate() {
            crop.id = index as u64 + 1;
            crop.name = format!("Crop {}", index + 1);
        }
        crops
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_allocation_respects_plot_limit(
        catalog in catalog_strategy(),
        season in season_strategy(),
        budget in 0i64..5000,
        plots in 0i64..50,
    ) {
        let result = optimize(&catalog, season, budget, plots, DAYS_IN_SEASON);
        prop_assert!(plots_used(&result) <= plots);
    }

    #[test]
    fn prop_allocation_respects_budget(
        catalog in catalog_strategy(),
        season in season_strategy(),
        budget in 0i64..5000,
        plots in 0i64..50,
    ) {
        let result = optimize(&catalog, season, budget, plots, DAYS_IN_SEASON);
        prop_assert!(budget_used(&result) <= budget);
    }

    #[test]
    fn prop_only_eligible_crops_allocated(
        catalog in catalog_strategy(),
        season in season_strategy(),
        budget in 0i64..5000,
        plots in 0i64..50,
    ) {
        let result = optimize(&catalog, season, budget, plots, DAYS_IN_SEASON);
        for allocation in &result {
            prop_assert!(allocation.crop.is_available_in(season));
            prop_assert!(allocation.metrics.allocated_plots > 0);
        }
    }

    #[test]
    fn prop_local_search_never_loses_to_greedy(
        catalog in catalog_strategy(),
        season in season_strategy(),
        budget in 1i64..5000,
        plots in 1i64..50,
    ) {
        let optimizer = RotationOptimizer::new(&catalog, season, DAYS_IN_SEASON);
        let greedy = optimizer.allocate_plots(budget, plots);
        let optimized = optimizer.optimize(budget, plots);

        prop_assert!(total_net_profit(&optimized) >= total_net_profit(&greedy));
    }

    #[test]
    fn prop_optimize_is_deterministic(
        catalog in catalog_strategy(),
        season in season_strategy(),
        budget in 0i64..5000,
        plots in 0i64..50,
    ) {
        let first = optimize(&catalog, season, budget, plots, DAYS_IN_SEASON);
        let second = optimize(&catalog, season, budget, plots, DAYS_IN_SEASON);
        prop_assert_eq!(first, second);
    }
}

// =============================================================================
// Metric Invariants
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_renewable_harvests_iff_mature_in_season(
        mature in 1u32..60,
        reflower in 1u32..30,
        days in 1u32..120,
    ) {
        let crop = crop(1, "Berry", renewable(reflower), 100, 30, mature);
        let metrics = compute_metrics(&crop, 1, days);

        prop_assert_eq!(metrics.available_harvests >= 1, mature <= days);
        prop_assert_eq!(metrics.total_cost, metrics.startup_cost);
    }

    #[test]
    fn prop_single_use_harvests_are_whole_cycles(
        mature in 1u32..60,
        days in 1u32..120,
        seed_cost in 0i64..500,
    ) {
        let crop = crop(1, "Radish", CropKind::SingleUse, seed_cost, 30, mature);
        let metrics = compute_metrics(&crop, 1, days);

        prop_assert_eq!(metrics.available_harvests, days / mature);
        prop_assert_eq!(metrics.total_cost, i64::from(days / mature) * seed_cost);
    }

    #[test]
    fn prop_metrics_scale_with_plots(
        crop in crop_strategy(),
        plot_count in 1u32..50,
    ) {
        let one = compute_metrics(&crop, 1, DAYS_IN_SEASON);
        let many = compute_metrics(&crop, plot_count, DAYS_IN_SEASON);
        let n = i64::from(plot_count);

        prop_assert_eq!(many.available_harvests, one.available_harvests);
        prop_assert_eq!(many.startup_cost, one.startup_cost * n);
        prop_assert_eq!(many.total_cost, one.total_cost * n);
        prop_assert_eq!(many.net_profit, one.net_profit * n);
        prop_assert_eq!(many.net_profit, many.total_profit - many.total_cost);
    }
}
