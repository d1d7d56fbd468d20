use chrono::{DateTime, Utc};
use sqlx::{PgExecutor, Result as SqlxResult};
use std::str::FromStr;
use uuid::Uuid;

use crate::models::TournamentRow;
use crate::pagination::LimitOffset;

#[derive(Debug, Clone, Default)]
pub struct TournamentFilter {
    pub club_id: Option<Uuid>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub status: Option<TournamentStatus>,
}

#[derive(Debug, Clone, Copy, PartialEq, sqlx::Type, serde::Serialize, serde::Deserialize)]
#[sqlx(type_name = "tournament_status", rename_all = "snake_case")]
pub enum TournamentStatus {
    Upcoming,
    RegistrationOpen,
    InProgress,
    Completed,
}

impl TournamentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TournamentStatus::Upcoming => "upcoming",
            TournamentStatus::RegistrationOpen => "registration_open",
            TournamentStatus::InProgress => "in_progress",
            TournamentStatus::Completed => "completed",
        }
    }

    /// Registrations are only accepted before play starts.
    pub fn accepts_registrations(&self) -> bool {
        matches!(
            self,
            TournamentStatus::Upcoming | TournamentStatus::RegistrationOpen
        )
    }
}

impl FromStr for TournamentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upcoming" => Ok(TournamentStatus::Upcoming),
            "registration_open" => Ok(TournamentStatus::RegistrationOpen),
            "in_progress" => Ok(TournamentStatus::InProgress),
            "completed" => Ok(TournamentStatus::Completed),
            _ => Err(format!("Unknown tournament status: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTournamentData {
    pub club_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub entry_fee: i64,
    pub max_participants: i32,
    pub max_rank_code: Option<String>,
    pub scale: String,
    pub show_prizes: bool,
}

const TOURNAMENT_COLUMNS: &str = r#"id, club_id, name, description, start_time, end_time,
               entry_fee, max_participants, max_rank_code, scale, show_prizes,
               total_prize_pool, status, created_at, updated_at"#;

pub async fn create<'e>(
    executor: impl PgExecutor<'e>,
    data: CreateTournamentData,
) -> SqlxResult<TournamentRow> {
    sqlx::query_as::<_, TournamentRow>(&format!(
        r#"
        INSERT INTO tournaments
            (club_id, name, description, start_time, entry_fee, max_participants,
             max_rank_code, scale, show_prizes)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING {TOURNAMENT_COLUMNS}
        "#
    ))
    .bind(data.club_id)
    .bind(data.name)
    .bind(data.description)
    .bind(data.start_time)
    .bind(data.entry_fee)
    .bind(data.max_participants)
    .bind(data.max_rank_code)
    .bind(data.scale)
    .bind(data.show_prizes)
    .fetch_one(executor)
    .await
}

pub async fn get_by_id<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
) -> SqlxResult<Option<TournamentRow>> {
    sqlx::query_as::<_, TournamentRow>(&format!(
        r#"
        SELECT {TOURNAMENT_COLUMNS}
        FROM tournaments
        WHERE id = $1
        "#
    ))
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn list<'e>(
    executor: impl PgExecutor<'e>,
    filter: TournamentFilter,
    page: Option<LimitOffset>,
) -> SqlxResult<Vec<TournamentRow>> {
    let p = page.unwrap_or_default();

    // Dynamic WHERE using NULL-checked binds to keep a single prepared statement
    sqlx::query_as::<_, TournamentRow>(&format!(
        r#"
        SELECT {TOURNAMENT_COLUMNS}
        FROM tournaments
        WHERE ($1::uuid IS NULL OR club_id = $1)
          AND ($2::timestamptz IS NULL OR start_time >= $2)
          AND ($3::timestamptz IS NULL OR start_time <= $3)
          AND ($4::tournament_status IS NULL OR status = $4)
        ORDER BY start_time DESC
        LIMIT $5 OFFSET $6
        "#
    ))
    .bind(filter.club_id)
    .bind(filter.from)
    .bind(filter.to)
    .bind(filter.status)
    .bind(p.limit)
    .bind(p.offset)
    .fetch_all(executor)
    .await
}

pub async fn count<'e>(
    executor: impl PgExecutor<'e>,
    filter: TournamentFilter,
) -> SqlxResult<i64> {
    sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*)
        FROM tournaments
        WHERE ($1::uuid IS NULL OR club_id = $1)
          AND ($2::timestamptz IS NULL OR start_time >= $2)
          AND ($3::timestamptz IS NULL OR start_time <= $3)
          AND ($4::tournament_status IS NULL OR status = $4)
        "#,
    )
    .bind(filter.club_id)
    .bind(filter.from)
    .bind(filter.to)
    .bind(filter.status)
    .fetch_one(executor)
    .await
}

pub async fn update_status<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
    status: TournamentStatus,
) -> SqlxResult<Option<TournamentRow>> {
    sqlx::query_as::<_, TournamentRow>(&format!(
        r#"
        UPDATE tournaments
        SET status = $2,
            end_time = CASE WHEN $2 = 'completed'::tournament_status THEN NOW() ELSE end_time END,
            updated_at = NOW()
        WHERE id = $1
        RETURNING {TOURNAMENT_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(status)
    .fetch_optional(executor)
    .await
}

pub async fn set_total_prize_pool<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
    total_prize_pool: i64,
) -> SqlxResult<Option<TournamentRow>> {
    sqlx::query_as::<_, TournamentRow>(&format!(
        r#"
        UPDATE tournaments
        SET total_prize_pool = $2, updated_at = NOW()
        WHERE id = $1
        RETURNING {TOURNAMENT_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(total_prize_pool)
    .fetch_optional(executor)
    .await
}
