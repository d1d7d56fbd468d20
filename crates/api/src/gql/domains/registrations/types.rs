use async_graphql::dataloader::DataLoader;
use async_graphql::{ComplexObject, Context, Enum, InputObject, Result, SimpleObject, ID};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::gql::domains::players::types::Player;
use crate::gql::domains::tournaments::types::Tournament;
use crate::gql::error::{DbResultExt, ResultExt};
use crate::gql::loaders::{PlayerLoader, TournamentLoader};

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum RegistrationStatus {
    Pending,
    Confirmed,
    Withdrawn,
}

impl RegistrationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistrationStatus::Pending => "pending",
            RegistrationStatus::Confirmed => "confirmed",
            RegistrationStatus::Withdrawn => "withdrawn",
        }
    }
}

impl From<String> for RegistrationStatus {
    fn from(status: String) -> Self {
        match status.as_str() {
            "confirmed" => RegistrationStatus::Confirmed,
            "withdrawn" => RegistrationStatus::Withdrawn,
            _ => RegistrationStatus::Pending,
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct TournamentRegistration {
    pub id: ID,
    pub tournament_id: ID,
    pub player_id: ID,
    pub status: RegistrationStatus,
    pub registered_at: DateTime<Utc>,
    pub notes: Option<String>,
}

impl From<infra::models::TournamentRegistrationRow> for TournamentRegistration {
    fn from(row: infra::models::TournamentRegistrationRow) -> Self {
        Self {
            id: row.id.into(),
            tournament_id: row.tournament_id.into(),
            player_id: row.player_id.into(),
            status: row.status.into(),
            registered_at: row.registered_at,
            notes: row.notes,
        }
    }
}

#[ComplexObject]
impl TournamentRegistration {
    async fn player(&self, ctx: &Context<'_>) -> Result<Player> {
        let loader = ctx.data::<DataLoader<PlayerLoader>>()?;
        let player_uuid =
            Uuid::parse_str(self.player_id.as_str()).gql_err("Invalid player ID")?;

        match loader
            .load_one(player_uuid)
            .await
            .db_err("Loading player failed")?
        {
            Some(row) => Ok(row.into()),
            None => Err(async_graphql::Error::new("Player not found")),
        }
    }

    async fn tournament(&self, ctx: &Context<'_>) -> Result<Tournament> {
        let loader = ctx.data::<DataLoader<TournamentLoader>>()?;
        let tournament_uuid =
            Uuid::parse_str(self.tournament_id.as_str()).gql_err("Invalid tournament ID")?;

        match loader
            .load_one(tournament_uuid)
            .await
            .db_err("Loading tournament failed")?
        {
            Some(row) => Ok(row.into()),
            None => Err(async_graphql::Error::new("Tournament not found")),
        }
    }
}

#[derive(InputObject)]
pub struct RegisterForTournamentInput {
    pub tournament_id: ID,
    pub player_id: ID,
    pub notes: Option<String>,
}
