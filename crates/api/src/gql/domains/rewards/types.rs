use async_graphql::{Enum, InputObject, SimpleObject, ID};

use super::service;

// Rank tiers and tournament scale mirror the allocator's core enums.

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum RankCode {
    K,
    I,
    H,
    G,
    F,
    E,
}

impl From<RankCode> for service::RankCode {
    fn from(rank: RankCode) -> Self {
        match rank {
            RankCode::K => service::RankCode::K,
            RankCode::I => service::RankCode::I,
            RankCode::H => service::RankCode::H,
            RankCode::G => service::RankCode::G,
            RankCode::F => service::RankCode::F,
            RankCode::E => service::RankCode::E,
        }
    }
}

impl From<service::RankCode> for RankCode {
    fn from(rank: service::RankCode) -> Self {
        match rank {
            service::RankCode::K => RankCode::K,
            service::RankCode::I => RankCode::I,
            service::RankCode::H => RankCode::H,
            service::RankCode::G => RankCode::G,
            service::RankCode::F => RankCode::F,
            service::RankCode::E => RankCode::E,
        }
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum TournamentScale {
    Regular,
    Major,
    Championship,
}

impl From<TournamentScale> for service::TournamentScale {
    fn from(scale: TournamentScale) -> Self {
        match scale {
            TournamentScale::Regular => service::TournamentScale::Regular,
            TournamentScale::Major => service::TournamentScale::Major,
            TournamentScale::Championship => service::TournamentScale::Championship,
        }
    }
}

impl From<service::TournamentScale> for TournamentScale {
    fn from(scale: service::TournamentScale) -> Self {
        match scale {
            service::TournamentScale::Regular => TournamentScale::Regular,
            service::TournamentScale::Major => TournamentScale::Major,
            service::TournamentScale::Championship => TournamentScale::Championship,
        }
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum PrizePositionCount {
    Three,
    Four,
    Eight,
    Sixteen,
}

impl From<PrizePositionCount> for service::PrizePositionCount {
    fn from(count: PrizePositionCount) -> Self {
        match count {
            PrizePositionCount::Three => service::PrizePositionCount::Three,
            PrizePositionCount::Four => service::PrizePositionCount::Four,
            PrizePositionCount::Eight => service::PrizePositionCount::Eight,
            PrizePositionCount::Sixteen => service::PrizePositionCount::Sixteen,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct RewardPosition {
    pub position: i32,
    pub name: String,
    pub cash_amount: i64,
    pub elo_points: i64,
    pub spa_points: i64,
    pub items: Vec<String>,
    pub is_visible: bool,
}

impl From<service::RewardPosition> for RewardPosition {
    fn from(p: service::RewardPosition) -> Self {
        Self {
            position: p.position,
            name: p.name,
            cash_amount: p.cash_amount,
            elo_points: p.elo_points,
            spa_points: p.spa_points,
            items: p.items,
            is_visible: p.is_visible,
        }
    }
}

impl From<infra::models::TournamentRewardRow> for RewardPosition {
    fn from(row: infra::models::TournamentRewardRow) -> Self {
        Self {
            position: row.position,
            name: row.name,
            cash_amount: row.cash_amount,
            elo_points: row.elo_points,
            spa_points: row.spa_points,
            items: row.items,
            is_visible: row.is_visible,
        }
    }
}

#[derive(InputObject, Clone)]
pub struct RewardPositionInput {
    pub position: i32,
    pub name: String,
    pub cash_amount: i64,
    pub elo_points: i64,
    pub spa_points: i64,
    #[graphql(default)]
    pub items: Vec<String>,
    #[graphql(default = true)]
    pub is_visible: bool,
}

impl From<RewardPositionInput> for service::RewardPosition {
    fn from(input: RewardPositionInput) -> Self {
        Self {
            position: input.position,
            name: input.name,
            cash_amount: input.cash_amount,
            elo_points: input.elo_points,
            spa_points: input.spa_points,
            items: input.items,
            is_visible: input.is_visible,
        }
    }
}

/// One `position -> share of the pool` entry of a cash split template.
#[derive(InputObject, Clone, Copy)]
pub struct CashShareInput {
    pub position: i32,
    pub share: f64,
}

/// A computed reward table plus the note that places past the display cap
/// were left out.
#[derive(SimpleObject)]
pub struct RewardTable {
    pub positions: Vec<RewardPosition>,
    pub hidden_beyond_display: bool,
}

impl From<service::Allocation> for RewardTable {
    fn from(allocation: service::Allocation) -> Self {
        Self {
            positions: allocation
                .positions
                .into_iter()
                .map(RewardPosition::from)
                .collect(),
            hidden_beyond_display: allocation.hidden_beyond_display,
        }
    }
}

#[derive(InputObject)]
pub struct QuickAllocationInput {
    pub tournament_id: ID,
    pub total_prize_pool: i64,
    pub rank_code: RankCode,
    pub scale: TournamentScale,
    pub position_count: PrizePositionCount,
    pub cash_template: Vec<CashShareInput>,
}

#[derive(InputObject)]
pub struct SaveRewardsInput {
    pub tournament_id: ID,
    pub total_prize: i64,
    pub show_prizes: bool,
    pub positions: Vec<RewardPositionInput>,
}

/// Mutation payload: the rows as persisted plus the advisory pool check.
#[derive(SimpleObject)]
pub struct RewardSavePayload {
    pub positions: Vec<RewardPosition>,
    pub exceeds_pool: bool,
}

#[derive(SimpleObject, Clone)]
pub struct RewardChangeEvent {
    pub tournament_id: ID,
    pub position_count: i32,
}
