use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Share of collected entry fees that funds the prize pool.
pub const PRIZE_POOL_RATE: f64 = 0.75;

/// Positions past this place get no reward row; the caller is told they were
/// hidden.
pub const MAX_DISPLAY_POSITIONS: i32 = 16;

/// Ordinal skill tiers, lowest (`K`) to highest (`E`). The ordering matters:
/// a tournament's `max_rank_code` admits every rank up to and including it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum RankCode {
    K,
    I,
    H,
    G,
    F,
    E,
}

impl RankCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RankCode::K => "K",
            RankCode::I => "I",
            RankCode::H => "H",
            RankCode::G => "G",
            RankCode::F => "F",
            RankCode::E => "E",
        }
    }
}

impl FromStr for RankCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "K" => Ok(RankCode::K),
            "I" => Ok(RankCode::I),
            "H" => Ok(RankCode::H),
            "G" => Ok(RankCode::G),
            "F" => Ok(RankCode::F),
            "E" => Ok(RankCode::E),
            _ => Err(format!("Unknown rank code: {}", s)),
        }
    }
}

impl std::fmt::Display for RankCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse finishing band a position falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementBand {
    Champion,
    RunnerUp,
    ThirdPlace,
    FourthPlace,
    Top8,
    Top16,
    Participation,
}

impl PlacementBand {
    pub fn label(&self) -> &'static str {
        match self {
            PlacementBand::Champion => "Champion",
            PlacementBand::RunnerUp => "Runner-up",
            PlacementBand::ThirdPlace => "Third place",
            PlacementBand::FourthPlace => "Fourth place",
            PlacementBand::Top8 => "Top 8",
            PlacementBand::Top16 => "Top 16",
            PlacementBand::Participation => "Participation",
        }
    }

    fn table_index(&self) -> usize {
        match self {
            PlacementBand::Champion => 0,
            PlacementBand::RunnerUp => 1,
            PlacementBand::ThirdPlace => 2,
            PlacementBand::FourthPlace => 3,
            PlacementBand::Top8 => 4,
            PlacementBand::Top16 => 5,
            PlacementBand::Participation => 6,
        }
    }
}

/// The single position-to-band mapping shared by every allocation path.
/// Exact for places 1-4, banded for 5-8 and 9-16, participation past that.
pub fn band_for_position(position: i32) -> PlacementBand {
    match position {
        1 => PlacementBand::Champion,
        2 => PlacementBand::RunnerUp,
        3 => PlacementBand::ThirdPlace,
        4 => PlacementBand::FourthPlace,
        5..=8 => PlacementBand::Top8,
        9..=16 => PlacementBand::Top16,
        _ => PlacementBand::Participation,
    }
}

/// Base SPA points per rank tier and finishing band, before any tournament
/// scale multiplier. Higher tiers play for more points.
pub fn spa_base_points(rank: RankCode, band: PlacementBand) -> i64 {
    let row: [i64; 7] = match rank {
        RankCode::E => [1500, 1100, 900, 750, 500, 350, 200],
        RankCode::F => [1350, 1000, 800, 650, 450, 320, 180],
        RankCode::G => [1200, 900, 700, 550, 400, 280, 160],
        RankCode::H => [1100, 850, 650, 500, 350, 250, 130],
        RankCode::I => [1000, 800, 600, 450, 300, 220, 110],
        RankCode::K => [900, 700, 500, 400, 270, 200, 100],
    };
    row[band.table_index()]
}

/// ELO award per finishing band. Unlike SPA this is flat across rank tiers
/// and never scaled.
pub fn elo_points_for_band(band: PlacementBand) -> i64 {
    match band {
        PlacementBand::Champion => 75,
        PlacementBand::RunnerUp => 60,
        PlacementBand::ThirdPlace => 45,
        PlacementBand::FourthPlace => 35,
        PlacementBand::Top8 => 25,
        PlacementBand::Top16 => 15,
        PlacementBand::Participation => 5,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TournamentScale {
    Regular,
    Major,
    Championship,
}

impl TournamentScale {
    pub fn multiplier(&self) -> f64 {
        match self {
            TournamentScale::Regular => 1.0,
            TournamentScale::Major => 1.5,
            TournamentScale::Championship => 2.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TournamentScale::Regular => "regular",
            TournamentScale::Major => "major",
            TournamentScale::Championship => "championship",
        }
    }
}

impl FromStr for TournamentScale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "regular" => Ok(TournamentScale::Regular),
            "major" => Ok(TournamentScale::Major),
            "championship" => Ok(TournamentScale::Championship),
            _ => Err(format!("Unknown tournament scale: {}", s)),
        }
    }
}

/// How many places are paid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrizePositionCount {
    Three,
    Four,
    Eight,
    Sixteen,
}

impl PrizePositionCount {
    pub fn as_i32(&self) -> i32 {
        match self {
            PrizePositionCount::Three => 3,
            PrizePositionCount::Four => 4,
            PrizePositionCount::Eight => 8,
            PrizePositionCount::Sixteen => 16,
        }
    }

    /// Marker positions templated by the quick allocator. Past fourth place
    /// a single marker stands in for its whole band.
    pub fn marker_positions(&self) -> &'static [i32] {
        match self {
            PrizePositionCount::Three => &[1, 2, 3],
            PrizePositionCount::Four => &[1, 2, 3, 4],
            PrizePositionCount::Eight => &[1, 2, 3, 4, 8],
            PrizePositionCount::Sixteen => &[1, 2, 3, 4, 8, 16],
        }
    }
}

/// One finishing position's full reward record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardPosition {
    pub position: i32,
    pub name: String,
    pub cash_amount: i64,
    pub elo_points: i64,
    pub spa_points: i64,
    pub items: Vec<String>,
    pub is_visible: bool,
}

/// Result of an allocation call. `hidden_beyond_display` tells the caller
/// that real finishing places past the display cap got no row.
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    pub positions: Vec<RewardPosition>,
    pub hidden_beyond_display: bool,
}

struct TemplateEntry {
    flat_cash: i64,
    items: &'static [&'static str],
}

/// Position-keyed defaults for the template path: flat base prize and
/// physical items per band. Points come from the base tables.
fn template_entry(band: PlacementBand) -> TemplateEntry {
    match band {
        PlacementBand::Champion => TemplateEntry {
            flat_cash: 5_000_000,
            items: &["Champion cup", "Certificate"],
        },
        PlacementBand::RunnerUp => TemplateEntry {
            flat_cash: 3_000_000,
            items: &["Silver medal", "Certificate"],
        },
        PlacementBand::ThirdPlace => TemplateEntry {
            flat_cash: 2_000_000,
            items: &["Bronze medal", "Certificate"],
        },
        PlacementBand::FourthPlace => TemplateEntry {
            flat_cash: 1_000_000,
            items: &["Certificate"],
        },
        PlacementBand::Top8 => TemplateEntry {
            flat_cash: 500_000,
            items: &[],
        },
        PlacementBand::Top16 => TemplateEntry {
            flat_cash: 200_000,
            items: &[],
        },
        PlacementBand::Participation => TemplateEntry {
            flat_cash: 0,
            items: &[],
        },
    }
}

/// Fixed shares for the fee-funded template split and the auto-fill helper:
/// 50/30/20 to the first three, nothing past that.
const DEFAULT_SPLIT: [f64; 3] = [0.5, 0.3, 0.2];

fn floor_share(total: i64, share: f64) -> i64 {
    (total as f64 * share).floor() as i64
}

/// Build an editable reward table from the tournament's basic parameters.
///
/// With a positive entry fee the pool is `fee * participants * 0.75` and cash
/// is split 50/30/20/0… across places. With no entry fee each place gets its
/// flat base prize and the pool is simply their sum. Points and items come
/// from the static per-band tables either way.
pub fn compute_template_rewards(
    max_participants: i32,
    entry_fee: i64,
    count: PrizePositionCount,
) -> Allocation {
    let shown = count.as_i32().min(max_participants.max(0));
    let fee_funded = entry_fee > 0;

    let total_pool = if fee_funded {
        floor_share(entry_fee * max_participants as i64, PRIZE_POOL_RATE)
    } else {
        (1..=shown)
            .map(|p| template_entry(band_for_position(p)).flat_cash)
            .sum()
    };

    let positions = (1..=shown)
        .map(|position| {
            let band = band_for_position(position);
            let entry = template_entry(band);
            let cash_amount = if fee_funded {
                let share = DEFAULT_SPLIT
                    .get((position - 1) as usize)
                    .copied()
                    .unwrap_or(0.0);
                floor_share(total_pool, share)
            } else {
                entry.flat_cash
            };
            RewardPosition {
                position,
                name: band.label().to_string(),
                cash_amount,
                elo_points: elo_points_for_band(band),
                spa_points: spa_base_points(RankCode::K, band),
                items: entry.items.iter().map(|s| s.to_string()).collect(),
                is_visible: true,
            }
        })
        .collect();

    Allocation {
        positions,
        hidden_beyond_display: max_participants > MAX_DISPLAY_POSITIONS,
    }
}

/// Allocate a known prize pool across a position-count's marker positions.
///
/// SPA is the rank-tier base scaled by the tournament multiplier (floored),
/// ELO is the flat per-band award, and cash follows the caller's percentage
/// map. Positions missing from the map get nothing; shares need not sum to 1
/// and any remainder stays undistributed. Deterministic, order-preserving.
pub fn compute_quick_allocation(
    total_prize_pool: i64,
    rank: RankCode,
    scale: TournamentScale,
    count: PrizePositionCount,
    cash_template: &HashMap<i32, f64>,
) -> Vec<RewardPosition> {
    count
        .marker_positions()
        .iter()
        .map(|&position| {
            let band = band_for_position(position);
            let spa_points =
                (spa_base_points(rank, band) as f64 * scale.multiplier()).floor() as i64;
            let share = cash_template.get(&position).copied().unwrap_or(0.0);
            RewardPosition {
                position,
                name: band.label().to_string(),
                cash_amount: floor_share(total_prize_pool, share),
                elo_points: elo_points_for_band(band),
                spa_points,
                items: Vec::new(),
                is_visible: true,
            }
        })
        .collect()
}

/// Interactive auto-fill: 50/30/20 to the first three entries *by list
/// order*, zero to the rest. Distinct from the quick allocator, which keys
/// shares off the `position` field.
pub fn auto_distribute_prizes(total_prize: i64, positions: &[RewardPosition]) -> Vec<RewardPosition> {
    positions
        .iter()
        .enumerate()
        .map(|(idx, p)| {
            let share = DEFAULT_SPLIT.get(idx).copied().unwrap_or(0.0);
            let mut out = p.clone();
            out.cash_amount = floor_share(total_prize, share);
            out
        })
        .collect()
}

/// Re-derive every position's SPA from the rank base table, no multiplier.
/// Used after a tournament's maximum allowed rank changes. Idempotent.
pub fn auto_calculate_spa_for_positions(
    positions: &[RewardPosition],
    rank: RankCode,
) -> Vec<RewardPosition> {
    positions
        .iter()
        .map(|p| {
            let mut out = p.clone();
            out.spa_points = spa_base_points(rank, band_for_position(p.position));
            out
        })
        .collect()
}

/// Advisory check: true when prizes are shown and the cash sum exceeds the
/// pool. Never blocks anything here; the caller gates its own save.
pub fn has_exceeded_pool(positions: &[RewardPosition], total_prize: i64, show_prizes: bool) -> bool {
    show_prizes && positions.iter().map(|p| p.cash_amount).sum::<i64>() > total_prize
}

/// Explicit precedence for the reward table a screen should show: unsaved
/// local edits win over persisted rows, which win over computed defaults.
/// Empty lists fall through.
pub fn resolve_active_rewards(
    local: Option<Vec<RewardPosition>>,
    remote: Option<Vec<RewardPosition>>,
    fallback: Vec<RewardPosition>,
) -> Vec<RewardPosition> {
    local
        .filter(|p| !p.is_empty())
        .or(remote.filter(|p| !p.is_empty()))
        .unwrap_or(fallback)
}

/// The single allocation entry point; dispatches on the request shape.
#[derive(Debug, Clone)]
pub enum AllocationRequest {
    QuickAllocation {
        total_prize_pool: i64,
        rank: RankCode,
        scale: TournamentScale,
        count: PrizePositionCount,
        cash_template: HashMap<i32, f64>,
    },
    TemplatePreview {
        max_participants: i32,
        entry_fee: i64,
        count: PrizePositionCount,
    },
    AutoDistribute {
        total_prize: i64,
        positions: Vec<RewardPosition>,
    },
    AutoSpa {
        positions: Vec<RewardPosition>,
        rank: RankCode,
    },
}

pub fn allocate(request: AllocationRequest) -> Allocation {
    match request {
        AllocationRequest::QuickAllocation {
            total_prize_pool,
            rank,
            scale,
            count,
            cash_template,
        } => Allocation {
            positions: compute_quick_allocation(
                total_prize_pool,
                rank,
                scale,
                count,
                &cash_template,
            ),
            hidden_beyond_display: false,
        },
        AllocationRequest::TemplatePreview {
            max_participants,
            entry_fee,
            count,
        } => compute_template_rewards(max_participants, entry_fee, count),
        AllocationRequest::AutoDistribute {
            total_prize,
            positions,
        } => Allocation {
            positions: auto_distribute_prizes(total_prize, &positions),
            hidden_beyond_display: false,
        },
        AllocationRequest::AutoSpa { positions, rank } => Allocation {
            positions: auto_calculate_spa_for_positions(&positions, rank),
            hidden_beyond_display: false,
        },
    }
}
