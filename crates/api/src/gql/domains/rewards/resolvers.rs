use std::collections::HashMap;

use async_graphql::{Context, Object, Result};
use uuid::Uuid;

use crate::gql::error::{DbResultExt, ResultExt};
use crate::gql::subscriptions::publish_reward_event;
use crate::state::AppState;
use infra::repos::{tournament_rewards, tournament_rewards::CreateTournamentReward, tournaments};

use super::service;
use super::types::{
    PrizePositionCount, QuickAllocationInput, RankCode, RewardChangeEvent, RewardPosition,
    RewardPositionInput, RewardSavePayload, RewardTable, SaveRewardsInput,
};

#[derive(Default)]
pub struct RewardQuery;

#[Object]
impl RewardQuery {
    /// The persisted reward table of a tournament
    async fn tournament_rewards(
        &self,
        ctx: &Context<'_>,
        tournament_id: async_graphql::ID,
    ) -> Result<Vec<RewardPosition>> {
        let state = ctx.data::<AppState>()?;
        let tournament_uuid =
            Uuid::parse_str(tournament_id.as_str()).gql_err("Invalid tournament ID")?;

        let rows = tournament_rewards::list_by_tournament(&state.db, tournament_uuid)
            .await
            .db_err("Database operation failed")?;

        Ok(rows.into_iter().map(RewardPosition::from).collect())
    }

    /// Non-persisted template preview from the tournament's basic parameters
    async fn reward_template_preview(
        &self,
        max_participants: i32,
        entry_fee: i64,
        position_count: PrizePositionCount,
    ) -> RewardTable {
        service::allocate(service::AllocationRequest::TemplatePreview {
            max_participants,
            entry_fee,
            count: position_count.into(),
        })
        .into()
    }

    /// Auto-fill helper: 50/30/20 to the first three entries by list order
    async fn auto_distribute_prizes(
        &self,
        total_prize: i64,
        positions: Vec<RewardPositionInput>,
    ) -> Vec<RewardPosition> {
        let positions: Vec<service::RewardPosition> =
            positions.into_iter().map(Into::into).collect();

        service::allocate(service::AllocationRequest::AutoDistribute {
            total_prize,
            positions,
        })
        .positions
        .into_iter()
        .map(Into::into)
        .collect()
    }

    /// Recompute SPA points from the rank base table, no multiplier
    async fn recalculate_spa_points(
        &self,
        positions: Vec<RewardPositionInput>,
        rank_code: RankCode,
    ) -> Vec<RewardPosition> {
        let positions: Vec<service::RewardPosition> =
            positions.into_iter().map(Into::into).collect();

        service::allocate(service::AllocationRequest::AutoSpa {
            positions,
            rank: rank_code.into(),
        })
        .positions
        .into_iter()
        .map(Into::into)
        .collect()
    }

    /// Advisory check used to gate saves in the client
    async fn reward_pool_exceeded(
        &self,
        positions: Vec<RewardPositionInput>,
        total_prize: i64,
        show_prizes: bool,
    ) -> bool {
        let positions: Vec<service::RewardPosition> =
            positions.into_iter().map(Into::into).collect();
        service::has_exceeded_pool(&positions, total_prize, show_prizes)
    }
}

#[derive(Default)]
pub struct RewardMutation;

#[Object]
impl RewardMutation {
    /// Compute a quick allocation and persist it as the tournament's reward
    /// table, replacing any previous one.
    async fn apply_quick_allocation(
        &self,
        ctx: &Context<'_>,
        input: QuickAllocationInput,
    ) -> Result<RewardSavePayload> {
        let state = ctx.data::<AppState>()?;
        let tournament_uuid =
            Uuid::parse_str(input.tournament_id.as_str()).gql_err("Invalid tournament ID")?;

        let tournament = tournaments::get_by_id(&state.db, tournament_uuid)
            .await
            .db_err("Database operation failed")?
            .ok_or_else(|| async_graphql::Error::new("Tournament not found"))?;

        let cash_template: HashMap<i32, f64> = input
            .cash_template
            .iter()
            .map(|entry| (entry.position, entry.share))
            .collect();

        let allocation = service::allocate(service::AllocationRequest::QuickAllocation {
            total_prize_pool: input.total_prize_pool,
            rank: input.rank_code.into(),
            scale: input.scale.into(),
            count: input.position_count.into(),
            cash_template,
        });

        let exceeds_pool = service::has_exceeded_pool(
            &allocation.positions,
            input.total_prize_pool,
            tournament.show_prizes,
        );

        let saved = replace_reward_rows(state, tournament_uuid, &allocation.positions).await?;

        tournaments::set_total_prize_pool(&state.db, tournament_uuid, input.total_prize_pool)
            .await
            .db_err("Database operation failed")?;

        publish_reward_event(
            tournament_uuid,
            RewardChangeEvent {
                tournament_id: input.tournament_id.clone(),
                position_count: saved.len() as i32,
            },
        );

        Ok(RewardSavePayload {
            positions: saved,
            exceeds_pool,
        })
    }

    /// Persist an edited reward table as-is. The over-pool check is returned,
    /// not enforced; the client decides whether to warn or block.
    async fn save_tournament_rewards(
        &self,
        ctx: &Context<'_>,
        input: SaveRewardsInput,
    ) -> Result<RewardSavePayload> {
        let state = ctx.data::<AppState>()?;
        let tournament_uuid =
            Uuid::parse_str(input.tournament_id.as_str()).gql_err("Invalid tournament ID")?;

        tournaments::get_by_id(&state.db, tournament_uuid)
            .await
            .db_err("Database operation failed")?
            .ok_or_else(|| async_graphql::Error::new("Tournament not found"))?;

        let positions: Vec<service::RewardPosition> =
            input.positions.into_iter().map(Into::into).collect();

        for p in &positions {
            if p.position < 1 {
                return Err(async_graphql::Error::new("Positions must be >= 1"));
            }
            if p.cash_amount < 0 {
                return Err(async_graphql::Error::new("Cash amounts must be >= 0"));
            }
        }

        let exceeds_pool =
            service::has_exceeded_pool(&positions, input.total_prize, input.show_prizes);
        if exceeds_pool {
            tracing::warn!(
                tournament_id = %tournament_uuid,
                total_prize = input.total_prize,
                "Saved reward table exceeds the configured prize pool"
            );
        }

        let saved = replace_reward_rows(state, tournament_uuid, &positions).await?;

        publish_reward_event(
            tournament_uuid,
            RewardChangeEvent {
                tournament_id: input.tournament_id.clone(),
                position_count: saved.len() as i32,
            },
        );

        Ok(RewardSavePayload {
            positions: saved,
            exceeds_pool,
        })
    }
}

/// Replace a tournament's reward rows inside a transaction.
async fn replace_reward_rows(
    state: &AppState,
    tournament_id: Uuid,
    positions: &[service::RewardPosition],
) -> Result<Vec<RewardPosition>> {
    let mut tx = state
        .db
        .begin()
        .await
        .db_err("Database operation failed")?;

    tournament_rewards::delete_for_tournament(&mut *tx, tournament_id)
        .await
        .db_err("Database operation failed")?;

    let mut saved = Vec::with_capacity(positions.len());
    for p in positions {
        let row = tournament_rewards::create(
            &mut *tx,
            CreateTournamentReward {
                tournament_id,
                position: p.position,
                name: p.name.clone(),
                cash_amount: p.cash_amount,
                elo_points: p.elo_points,
                spa_points: p.spa_points,
                items: p.items.clone(),
                is_visible: p.is_visible,
            },
        )
        .await
        .db_err("Database operation failed")?;
        saved.push(RewardPosition::from(row));
    }

    tx.commit().await.db_err("Database operation failed")?;

    Ok(saved)
}
