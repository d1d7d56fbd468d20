use async_graphql::dataloader::DataLoader;
use async_graphql::{ComplexObject, Context, Enum, InputObject, Result, SimpleObject, ID};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::gql::domains::players::types::Player;
use crate::gql::error::{DbResultExt, ResultExt};
use crate::gql::loaders::PlayerLoader;

use super::service;

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum SeedingMethod {
    Random,
    Seeded,
}

impl From<SeedingMethod> for service::SeedingMethod {
    fn from(method: SeedingMethod) -> Self {
        match method {
            SeedingMethod::Random => service::SeedingMethod::Random,
            SeedingMethod::Seeded => service::SeedingMethod::Seeded,
        }
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum MatchStatus {
    Pending,
    InProgress,
    Completed,
}

impl From<String> for MatchStatus {
    fn from(status: String) -> Self {
        match status.as_str() {
            "in_progress" => MatchStatus::InProgress,
            "completed" => MatchStatus::Completed,
            _ => MatchStatus::Pending,
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct BracketMatch {
    pub id: ID,
    pub tournament_id: ID,
    pub round: i32,
    pub match_number: i32,
    pub player_a_id: Option<ID>,
    pub player_b_id: Option<ID>,
    pub winner_id: Option<ID>,
    pub status: MatchStatus,
    pub club_table_id: Option<ID>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<infra::models::TournamentMatchRow> for BracketMatch {
    fn from(row: infra::models::TournamentMatchRow) -> Self {
        Self {
            id: row.id.into(),
            tournament_id: row.tournament_id.into(),
            round: row.round,
            match_number: row.match_number,
            player_a_id: row.player_a_id.map(Into::into),
            player_b_id: row.player_b_id.map(Into::into),
            winner_id: row.winner_id.map(Into::into),
            status: row.status.into(),
            club_table_id: row.club_table_id.map(Into::into),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[ComplexObject]
impl BracketMatch {
    /// `None` is a bye seat.
    async fn player_a(&self, ctx: &Context<'_>) -> Result<Option<Player>> {
        load_player(ctx, self.player_a_id.as_ref()).await
    }

    async fn player_b(&self, ctx: &Context<'_>) -> Result<Option<Player>> {
        load_player(ctx, self.player_b_id.as_ref()).await
    }
}

async fn load_player(ctx: &Context<'_>, id: Option<&ID>) -> Result<Option<Player>> {
    let Some(id) = id else {
        return Ok(None);
    };
    let loader = ctx.data::<DataLoader<PlayerLoader>>()?;
    let player_uuid = Uuid::parse_str(id.as_str()).gql_err("Invalid player ID")?;

    Ok(loader
        .load_one(player_uuid)
        .await
        .db_err("Loading player failed")?
        .map(Player::from))
}

#[derive(InputObject)]
pub struct GenerateBracketInput {
    pub tournament_id: ID,
    pub method: SeedingMethod,
}

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum BracketEventType {
    Generated,
    ResultReported,
    TableAssigned,
}

#[derive(SimpleObject, Clone)]
pub struct BracketChangeEvent {
    pub tournament_id: ID,
    pub event_type: BracketEventType,
    pub match_id: Option<ID>,
}
