use async_graphql::{InputObject, SimpleObject, ID};
use chrono::{DateTime, Utc};

use crate::gql::domains::rewards::types::RankCode;
use crate::gql::domains::rewards::service;

#[derive(SimpleObject, Clone)]
pub struct Player {
    pub id: ID,
    pub display_name: String,
    pub email: Option<String>,
    pub rank_code: RankCode,
    pub elo_rating: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<infra::models::PlayerRow> for Player {
    fn from(row: infra::models::PlayerRow) -> Self {
        // Unknown rank strings fall back to the entry tier
        let rank: service::RankCode = row.rank_code.parse().unwrap_or(service::RankCode::K);
        Self {
            id: row.id.into(),
            display_name: row.display_name,
            email: row.email,
            rank_code: rank.into(),
            elo_rating: row.elo_rating,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(InputObject)]
pub struct CreatePlayerInput {
    pub display_name: String,
    pub email: Option<String>,
    pub rank_code: RankCode,
    #[graphql(default = 1000)]
    pub elo_rating: i32,
}
