use std::collections::HashMap;

use api::gql::domains::rewards::service::{
    allocate, auto_calculate_spa_for_positions, auto_distribute_prizes, band_for_position,
    compute_quick_allocation, compute_template_rewards, elo_points_for_band, has_exceeded_pool,
    resolve_active_rewards, spa_base_points, AllocationRequest, PlacementBand, PrizePositionCount,
    RankCode, RewardPosition, TournamentScale,
};

fn split_50_30_20() -> HashMap<i32, f64> {
    HashMap::from([(1, 0.5), (2, 0.3), (3, 0.2)])
}

fn position(n: i32, cash: i64) -> RewardPosition {
    RewardPosition {
        position: n,
        name: format!("Place {n}"),
        cash_amount: cash,
        elo_points: 0,
        spa_points: 0,
        items: Vec::new(),
        is_visible: true,
    }
}

#[test]
fn quick_allocation_splits_a_regular_k_pool() {
    let rows = compute_quick_allocation(
        10_000_000,
        RankCode::K,
        TournamentScale::Regular,
        PrizePositionCount::Three,
        &split_50_30_20(),
    );

    assert_eq!(rows.len(), 3);

    assert_eq!(rows[0].position, 1);
    assert_eq!(rows[0].cash_amount, 5_000_000);
    assert_eq!(rows[0].spa_points, 900);
    assert_eq!(rows[0].elo_points, 75);
    assert_eq!(rows[0].name, "Champion");

    assert_eq!(rows[1].cash_amount, 3_000_000);
    assert_eq!(rows[1].spa_points, 700);
    assert_eq!(rows[1].elo_points, 60);

    assert_eq!(rows[2].cash_amount, 2_000_000);
    assert_eq!(rows[2].spa_points, 500);
    assert_eq!(rows[2].elo_points, 45);
}

#[test]
fn quick_allocation_is_deterministic() {
    let a = compute_quick_allocation(
        7_777_777,
        RankCode::G,
        TournamentScale::Major,
        PrizePositionCount::Eight,
        &split_50_30_20(),
    );
    let b = compute_quick_allocation(
        7_777_777,
        RankCode::G,
        TournamentScale::Major,
        PrizePositionCount::Eight,
        &split_50_30_20(),
    );
    assert_eq!(a, b);
}

#[test]
fn quick_allocation_scales_spa_but_not_elo() {
    let rows = compute_quick_allocation(
        0,
        RankCode::K,
        TournamentScale::Major,
        PrizePositionCount::Three,
        &HashMap::new(),
    );

    // floor(900 * 1.5) and the flat band award
    assert_eq!(rows[0].spa_points, 1350);
    assert_eq!(rows[0].elo_points, 75);
}

#[test]
fn quick_allocation_treats_missing_template_keys_as_zero() {
    let template = HashMap::from([(1, 0.5)]);
    let rows = compute_quick_allocation(
        1_000_000,
        RankCode::K,
        TournamentScale::Regular,
        PrizePositionCount::Four,
        &template,
    );

    assert_eq!(rows[0].cash_amount, 500_000);
    assert!(rows[1..].iter().all(|r| r.cash_amount == 0));
}

#[test]
fn quick_allocation_floors_fractional_cash() {
    let template = HashMap::from([(1, 0.333)]);
    let rows = compute_quick_allocation(
        10,
        RankCode::K,
        TournamentScale::Regular,
        PrizePositionCount::Three,
        &template,
    );
    assert_eq!(rows[0].cash_amount, 3);
}

#[test]
fn quick_allocation_uses_band_markers_past_fourth_place() {
    let rows = compute_quick_allocation(
        0,
        RankCode::K,
        TournamentScale::Regular,
        PrizePositionCount::Sixteen,
        &HashMap::new(),
    );

    let positions: Vec<i32> = rows.iter().map(|r| r.position).collect();
    assert_eq!(positions, vec![1, 2, 3, 4, 8, 16]);
    assert_eq!(rows[4].name, "Top 8");
    assert_eq!(rows[4].spa_points, 270);
    assert_eq!(rows[5].name, "Top 16");
    assert_eq!(rows[5].elo_points, 15);
}

#[test]
fn template_without_entry_fee_uses_flat_base_prizes() {
    let allocation = compute_template_rewards(8, 0, PrizePositionCount::Three);

    assert_eq!(allocation.positions.len(), 3);
    assert!(!allocation.hidden_beyond_display);

    assert_eq!(allocation.positions[0].cash_amount, 5_000_000);
    assert_eq!(allocation.positions[1].cash_amount, 3_000_000);
    assert_eq!(allocation.positions[2].cash_amount, 2_000_000);
    assert!(allocation.positions[0]
        .items
        .iter()
        .any(|i| i == "Champion cup"));
}

#[test]
fn template_with_entry_fee_splits_three_quarters_of_the_take() {
    let allocation = compute_template_rewards(16, 100_000, PrizePositionCount::Four);

    // pool = floor(16 * 100_000 * 0.75) = 1_200_000, split 50/30/20/0
    assert_eq!(allocation.positions[0].cash_amount, 600_000);
    assert_eq!(allocation.positions[1].cash_amount, 360_000);
    assert_eq!(allocation.positions[2].cash_amount, 240_000);
    assert_eq!(allocation.positions[3].cash_amount, 0);

    // template points use the entry-tier base row
    assert_eq!(allocation.positions[0].spa_points, 900);
    assert_eq!(allocation.positions[3].spa_points, 400);
}

#[test]
fn template_caps_positions_at_the_field_size() {
    let allocation = compute_template_rewards(3, 0, PrizePositionCount::Eight);
    assert_eq!(allocation.positions.len(), 3);
}

#[test]
fn template_flags_fields_larger_than_the_display_cap() {
    let capped = compute_template_rewards(32, 0, PrizePositionCount::Sixteen);
    assert!(capped.hidden_beyond_display);
    assert_eq!(capped.positions.len(), 16);

    let small = compute_template_rewards(16, 0, PrizePositionCount::Sixteen);
    assert!(!small.hidden_beyond_display);
}

#[test]
fn auto_distribute_follows_list_order_not_position_numbers() {
    let input = vec![position(5, 0), position(2, 0), position(9, 0)];
    let out = auto_distribute_prizes(1_000_000, &input);

    assert_eq!(out[0].position, 5);
    assert_eq!(out[0].cash_amount, 500_000);
    assert_eq!(out[1].cash_amount, 300_000);
    assert_eq!(out[2].cash_amount, 200_000);
}

#[test]
fn auto_distribute_zeroes_entries_past_the_third() {
    let input: Vec<RewardPosition> = (1..=5).map(|n| position(n, 123)).collect();
    let out = auto_distribute_prizes(100, &input);
    assert_eq!(out[3].cash_amount, 0);
    assert_eq!(out[4].cash_amount, 0);
}

#[test]
fn auto_spa_is_idempotent_and_unscaled() {
    let input = vec![position(1, 0), position(4, 0), position(10, 0)];

    let once = auto_calculate_spa_for_positions(&input, RankCode::F);
    let twice = auto_calculate_spa_for_positions(&once, RankCode::F);

    assert_eq!(once, twice);
    assert_eq!(once[0].spa_points, 1350);
    assert_eq!(once[1].spa_points, 650);
    assert_eq!(once[2].spa_points, 320);
}

#[test]
fn pool_check_only_fires_when_prizes_are_shown() {
    let over = vec![position(1, 600), position(2, 500)];

    assert!(has_exceeded_pool(&over, 1_000, true));
    assert!(!has_exceeded_pool(&over, 1_000, false));
    assert!(!has_exceeded_pool(&over, 1_100, true));
    assert!(!has_exceeded_pool(&[], 0, true));
}

#[test]
fn band_boundaries() {
    assert_eq!(band_for_position(1), PlacementBand::Champion);
    assert_eq!(band_for_position(4), PlacementBand::FourthPlace);
    assert_eq!(band_for_position(5), PlacementBand::Top8);
    assert_eq!(band_for_position(8), PlacementBand::Top8);
    assert_eq!(band_for_position(9), PlacementBand::Top16);
    assert_eq!(band_for_position(16), PlacementBand::Top16);
    assert_eq!(band_for_position(17), PlacementBand::Participation);
}

#[test]
fn spa_rows_rise_with_rank_tier() {
    for band in [
        PlacementBand::Champion,
        PlacementBand::Top8,
        PlacementBand::Participation,
    ] {
        assert!(spa_base_points(RankCode::E, band) > spa_base_points(RankCode::K, band));
    }
    assert_eq!(elo_points_for_band(PlacementBand::Champion), 75);
}

#[test]
fn rank_codes_order_from_entry_tier_up() {
    assert!(RankCode::K < RankCode::I);
    assert!(RankCode::I < RankCode::H);
    assert!(RankCode::H < RankCode::E);
    assert_eq!("h".parse::<RankCode>().unwrap(), RankCode::H);
    assert!("z".parse::<RankCode>().is_err());
}

#[test]
fn active_rewards_prefer_local_then_remote_then_fallback() {
    let local = vec![position(1, 1)];
    let remote = vec![position(1, 2)];
    let fallback = vec![position(1, 3)];

    let picked = resolve_active_rewards(
        Some(local.clone()),
        Some(remote.clone()),
        fallback.clone(),
    );
    assert_eq!(picked[0].cash_amount, 1);

    let picked = resolve_active_rewards(Some(Vec::new()), Some(remote), fallback.clone());
    assert_eq!(picked[0].cash_amount, 2);

    let picked = resolve_active_rewards(None, Some(Vec::new()), fallback);
    assert_eq!(picked[0].cash_amount, 3);
}

#[test]
fn allocate_dispatches_to_the_matching_computation() {
    let quick = allocate(AllocationRequest::QuickAllocation {
        total_prize_pool: 10_000_000,
        rank: RankCode::K,
        scale: TournamentScale::Regular,
        count: PrizePositionCount::Three,
        cash_template: split_50_30_20(),
    });
    assert_eq!(
        quick.positions,
        compute_quick_allocation(
            10_000_000,
            RankCode::K,
            TournamentScale::Regular,
            PrizePositionCount::Three,
            &split_50_30_20(),
        )
    );
    assert!(!quick.hidden_beyond_display);

    let template = allocate(AllocationRequest::TemplatePreview {
        max_participants: 16,
        entry_fee: 100_000,
        count: PrizePositionCount::Four,
    });
    assert_eq!(
        template,
        compute_template_rewards(16, 100_000, PrizePositionCount::Four)
    );
}
