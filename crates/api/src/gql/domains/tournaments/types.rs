use async_graphql::dataloader::DataLoader;
use async_graphql::{ComplexObject, Context, Enum, InputObject, Result, SimpleObject, ID};
use chrono::{DateTime, Utc};

use crate::gql::domains::clubs::types::Club;
use crate::gql::domains::rewards::service;
use crate::gql::domains::rewards::types::{RankCode, TournamentScale};
use crate::gql::error::{DbResultExt, ResultExt};
use crate::gql::loaders::ClubLoader;

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
pub enum TournamentStatus {
    Upcoming,
    RegistrationOpen,
    InProgress,
    Completed,
}

impl From<TournamentStatus> for infra::repos::tournaments::TournamentStatus {
    fn from(status: TournamentStatus) -> Self {
        match status {
            TournamentStatus::Upcoming => infra::repos::tournaments::TournamentStatus::Upcoming,
            TournamentStatus::RegistrationOpen => {
                infra::repos::tournaments::TournamentStatus::RegistrationOpen
            }
            TournamentStatus::InProgress => infra::repos::tournaments::TournamentStatus::InProgress,
            TournamentStatus::Completed => infra::repos::tournaments::TournamentStatus::Completed,
        }
    }
}

impl From<infra::repos::tournaments::TournamentStatus> for TournamentStatus {
    fn from(status: infra::repos::tournaments::TournamentStatus) -> Self {
        match status {
            infra::repos::tournaments::TournamentStatus::Upcoming => TournamentStatus::Upcoming,
            infra::repos::tournaments::TournamentStatus::RegistrationOpen => {
                TournamentStatus::RegistrationOpen
            }
            infra::repos::tournaments::TournamentStatus::InProgress => TournamentStatus::InProgress,
            infra::repos::tournaments::TournamentStatus::Completed => TournamentStatus::Completed,
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Tournament {
    pub id: ID,
    pub club_id: ID,
    pub name: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub entry_fee: i64,
    pub max_participants: i32,
    pub max_rank_code: Option<RankCode>,
    pub scale: TournamentScale,
    pub show_prizes: bool,
    pub total_prize_pool: i64,
    pub status: TournamentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<infra::models::TournamentRow> for Tournament {
    fn from(row: infra::models::TournamentRow) -> Self {
        let scale: service::TournamentScale =
            row.scale.parse().unwrap_or(service::TournamentScale::Regular);
        let max_rank: Option<service::RankCode> =
            row.max_rank_code.as_deref().and_then(|s| s.parse().ok());
        Self {
            id: row.id.into(),
            club_id: row.club_id.into(),
            name: row.name,
            description: row.description,
            start_time: row.start_time,
            end_time: row.end_time,
            entry_fee: row.entry_fee,
            max_participants: row.max_participants,
            max_rank_code: max_rank.map(Into::into),
            scale: scale.into(),
            show_prizes: row.show_prizes,
            total_prize_pool: row.total_prize_pool,
            status: row.status.into(),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[ComplexObject]
impl Tournament {
    async fn club(&self, ctx: &Context<'_>) -> Result<Club> {
        let loader = ctx.data::<DataLoader<ClubLoader>>()?;
        let club_uuid = uuid::Uuid::parse_str(self.club_id.as_str()).gql_err("Invalid club ID")?;

        match loader
            .load_one(club_uuid)
            .await
            .db_err("Loading club failed")?
        {
            Some(row) => Ok(row.into()),
            None => Err(async_graphql::Error::new("Club not found")),
        }
    }
}

#[derive(InputObject)]
pub struct CreateTournamentInput {
    pub club_id: ID,
    pub name: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    #[graphql(default = 0)]
    pub entry_fee: i64,
    #[graphql(default = 16)]
    pub max_participants: i32,
    pub max_rank_code: Option<RankCode>,
    pub scale: Option<TournamentScale>,
    #[graphql(default = true)]
    pub show_prizes: bool,
}
