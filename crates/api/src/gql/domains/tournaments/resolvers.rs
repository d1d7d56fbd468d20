use async_graphql::{Context, Object, Result};
use chrono::{DateTime, Utc};
use tokio::try_join;
use uuid::Uuid;

use crate::gql::common::types::{PaginatedResponse, PaginationInput};
use crate::gql::error::{DbResultExt, ResultExt};
use crate::state::AppState;
use infra::repos::tournaments::{self, CreateTournamentData, TournamentFilter};

use super::types::{CreateTournamentInput, Tournament, TournamentStatus};
use crate::gql::domains::rewards::service;

#[derive(Default)]
pub struct TournamentQuery;

#[Object]
impl TournamentQuery {
    async fn tournament(
        &self,
        ctx: &Context<'_>,
        id: async_graphql::ID,
    ) -> Result<Option<Tournament>> {
        let state = ctx.data::<AppState>()?;
        let tournament_uuid = Uuid::parse_str(id.as_str()).gql_err("Invalid tournament ID")?;

        let row = tournaments::get_by_id(&state.db, tournament_uuid)
            .await
            .db_err("Database operation failed")?;

        Ok(row.map(Tournament::from))
    }

    /// Tournaments ordered by start time, newest first
    async fn tournaments(
        &self,
        ctx: &Context<'_>,
        club_id: Option<async_graphql::ID>,
        status: Option<TournamentStatus>,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
        pagination: Option<PaginationInput>,
    ) -> Result<PaginatedResponse<Tournament>> {
        let state = ctx.data::<AppState>()?;

        let club_uuid = club_id
            .map(|id| Uuid::parse_str(id.as_str()))
            .transpose()
            .gql_err("Invalid club ID")?;

        let filter = TournamentFilter {
            club_id: club_uuid,
            from,
            to,
            status: status.map(Into::into),
        };

        let page = pagination
            .map(PaginationInput::to_limit_offset)
            .unwrap_or_default();

        let (rows, total) = try_join!(
            tournaments::list(&state.db, filter.clone(), Some(page)),
            tournaments::count(&state.db, filter),
        )
        .db_err("Database operation failed")?;

        let has_next_page = page.offset + (rows.len() as i64) < total;

        Ok(PaginatedResponse {
            items: rows.into_iter().map(Tournament::from).collect(),
            total_count: total as i32,
            page_size: page.limit as i32,
            offset: page.offset as i32,
            has_next_page,
        })
    }
}

#[derive(Default)]
pub struct TournamentMutation;

#[Object]
impl TournamentMutation {
    async fn create_tournament(
        &self,
        ctx: &Context<'_>,
        input: CreateTournamentInput,
    ) -> Result<Tournament> {
        let state = ctx.data::<AppState>()?;
        let club_uuid = Uuid::parse_str(input.club_id.as_str()).gql_err("Invalid club ID")?;

        if input.max_participants < 2 {
            return Err(async_graphql::Error::new(
                "A tournament needs at least 2 participant slots",
            ));
        }
        if input.entry_fee < 0 {
            return Err(async_graphql::Error::new("Entry fee must be >= 0"));
        }

        let scale: service::TournamentScale = input
            .scale
            .map(Into::into)
            .unwrap_or(service::TournamentScale::Regular);
        let max_rank: Option<service::RankCode> = input.max_rank_code.map(Into::into);

        let row = tournaments::create(
            &state.db,
            CreateTournamentData {
                club_id: club_uuid,
                name: input.name,
                description: input.description,
                start_time: input.start_time,
                entry_fee: input.entry_fee,
                max_participants: input.max_participants,
                max_rank_code: max_rank.map(|r| r.as_str().to_string()),
                scale: scale.as_str().to_string(),
                show_prizes: input.show_prizes,
            },
        )
        .await
        .db_err("Database operation failed")?;

        tracing::info!(tournament_id = %row.id, name = %row.name, "Created tournament");

        Ok(row.into())
    }

    /// Move a tournament through its lifecycle. Completing a tournament
    /// stamps its end time.
    async fn update_tournament_status(
        &self,
        ctx: &Context<'_>,
        id: async_graphql::ID,
        status: TournamentStatus,
    ) -> Result<Tournament> {
        let state = ctx.data::<AppState>()?;
        let tournament_uuid = Uuid::parse_str(id.as_str()).gql_err("Invalid tournament ID")?;

        let row = tournaments::update_status(&state.db, tournament_uuid, status.into())
            .await
            .db_err("Database operation failed")?
            .ok_or_else(|| async_graphql::Error::new("Tournament not found"))?;

        Ok(row.into())
    }
}
