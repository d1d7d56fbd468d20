use async_graphql::{Context, Object, Result};
use uuid::Uuid;

use crate::gql::common::types::PaginationInput;
use crate::gql::domains::rewards::service;
use crate::gql::domains::rewards::types::RankCode;
use crate::gql::error::{DbResultExt, ResultExt};
use crate::state::AppState;
use infra::repos::players::{self, CreatePlayer, PlayerFilter};

use super::types::{CreatePlayerInput, Player};

#[derive(Default)]
pub struct PlayerQuery;

#[Object]
impl PlayerQuery {
    async fn player(&self, ctx: &Context<'_>, id: async_graphql::ID) -> Result<Option<Player>> {
        let state = ctx.data::<AppState>()?;
        let player_uuid = Uuid::parse_str(id.as_str()).gql_err("Invalid player ID")?;

        let row = players::get_by_id(&state.db, player_uuid)
            .await
            .db_err("Database operation failed")?;

        Ok(row.map(Player::from))
    }

    /// Players ordered by display name, optional substring search
    async fn players(
        &self,
        ctx: &Context<'_>,
        search: Option<String>,
        #[graphql(default = true)] only_active: bool,
        pagination: Option<PaginationInput>,
    ) -> Result<Vec<Player>> {
        let state = ctx.data::<AppState>()?;

        let filter = PlayerFilter {
            search,
            only_active,
        };
        let page = pagination.map(PaginationInput::to_limit_offset);

        let rows = players::list(&state.db, filter, page)
            .await
            .db_err("Database operation failed")?;

        Ok(rows.into_iter().map(Player::from).collect())
    }
}

#[derive(Default)]
pub struct PlayerMutation;

#[Object]
impl PlayerMutation {
    async fn create_player(&self, ctx: &Context<'_>, input: CreatePlayerInput) -> Result<Player> {
        let state = ctx.data::<AppState>()?;

        let rank: service::RankCode = input.rank_code.into();
        let row = players::create(
            &state.db,
            CreatePlayer {
                display_name: input.display_name,
                email: input.email,
                rank_code: rank.as_str().to_string(),
                elo_rating: input.elo_rating,
            },
        )
        .await
        .db_err("Database operation failed")?;

        Ok(row.into())
    }

    /// Update a player's rank and rating, typically after a tournament settles
    async fn update_player_rank(
        &self,
        ctx: &Context<'_>,
        id: async_graphql::ID,
        rank_code: RankCode,
        elo_rating: i32,
    ) -> Result<Player> {
        let state = ctx.data::<AppState>()?;
        let player_uuid = Uuid::parse_str(id.as_str()).gql_err("Invalid player ID")?;

        let rank: service::RankCode = rank_code.into();
        let row = players::update_rank(&state.db, player_uuid, rank.as_str().to_string(), elo_rating)
            .await
            .db_err("Database operation failed")?
            .ok_or_else(|| async_graphql::Error::new("Player not found"))?;

        Ok(row.into())
    }

    async fn set_player_active(
        &self,
        ctx: &Context<'_>,
        id: async_graphql::ID,
        is_active: bool,
    ) -> Result<Player> {
        let state = ctx.data::<AppState>()?;
        let player_uuid = Uuid::parse_str(id.as_str()).gql_err("Invalid player ID")?;

        let row = players::set_active(&state.db, player_uuid, is_active)
            .await
            .db_err("Database operation failed")?
            .ok_or_else(|| async_graphql::Error::new("Player not found"))?;

        Ok(row.into())
    }
}
