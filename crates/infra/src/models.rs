use crate::repos::tournaments::TournamentStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ClubRow {
    pub id: Uuid,
    pub name: String,
    pub city: Option<String>,
    pub country: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ClubTableRow {
    pub id: Uuid,
    pub club_id: Uuid,
    pub table_number: i32,
    pub table_name: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct PlayerRow {
    pub id: Uuid,
    pub display_name: String,
    pub email: Option<String>,
    pub rank_code: String,
    pub elo_rating: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TournamentRow {
    pub id: Uuid,
    pub club_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub entry_fee: i64,
    pub max_participants: i32,
    pub max_rank_code: Option<String>,
    pub scale: String,
    pub show_prizes: bool,
    pub total_prize_pool: i64,
    pub status: TournamentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TournamentRegistrationRow {
    pub id: Uuid,
    pub tournament_id: Uuid,
    pub player_id: Uuid,
    pub status: String,
    pub registered_at: DateTime<Utc>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Confirmed registration joined with the player snapshot the seeder needs.
#[derive(Debug, Clone, FromRow)]
pub struct ConfirmedParticipantRow {
    pub player_id: Uuid,
    pub display_name: String,
    pub rank_code: String,
    pub elo_rating: i32,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TournamentMatchRow {
    pub id: Uuid,
    pub tournament_id: Uuid,
    pub round: i32,
    pub match_number: i32,
    pub player_a_id: Option<Uuid>,
    pub player_b_id: Option<Uuid>,
    pub winner_id: Option<Uuid>,
    pub status: String,
    pub club_table_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TournamentRewardRow {
    pub id: Uuid,
    pub tournament_id: Uuid,
    pub position: i32,
    pub name: String,
    pub cash_amount: i64,
    pub elo_points: i64,
    pub spa_points: i64,
    pub items: Vec<String>,
    pub is_visible: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
