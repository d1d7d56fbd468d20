use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::PlayerRow;
use crate::pagination::LimitOffset;

#[derive(Debug, Clone)]
pub struct CreatePlayer {
    pub display_name: String,
    pub email: Option<String>,
    pub rank_code: String,
    pub elo_rating: i32,
}

#[derive(Debug, Clone, Default)]
pub struct PlayerFilter {
    pub search: Option<String>,
    pub only_active: bool,
}

pub async fn create<'e>(executor: impl PgExecutor<'e>, data: CreatePlayer) -> SqlxResult<PlayerRow> {
    sqlx::query_as::<_, PlayerRow>(
        r#"
        INSERT INTO players (display_name, email, rank_code, elo_rating)
        VALUES ($1, $2, $3, $4)
        RETURNING id, display_name, email, rank_code, elo_rating, is_active, created_at, updated_at
        "#,
    )
    .bind(data.display_name)
    .bind(data.email)
    .bind(data.rank_code)
    .bind(data.elo_rating)
    .fetch_one(executor)
    .await
}

pub async fn get_by_id<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
) -> SqlxResult<Option<PlayerRow>> {
    sqlx::query_as::<_, PlayerRow>(
        r#"
        SELECT id, display_name, email, rank_code, elo_rating, is_active, created_at, updated_at
        FROM players
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn list<'e>(
    executor: impl PgExecutor<'e>,
    filter: PlayerFilter,
    page: Option<LimitOffset>,
) -> SqlxResult<Vec<PlayerRow>> {
    let p = page.unwrap_or_default();

    sqlx::query_as::<_, PlayerRow>(
        r#"
        SELECT id, display_name, email, rank_code, elo_rating, is_active, created_at, updated_at
        FROM players
        WHERE ($1::text IS NULL OR display_name ILIKE '%' || $1 || '%')
          AND (NOT $2 OR is_active)
        ORDER BY display_name ASC
        LIMIT $3 OFFSET $4
        "#,
    )
    .bind(filter.search)
    .bind(filter.only_active)
    .bind(p.limit)
    .bind(p.offset)
    .fetch_all(executor)
    .await
}

pub async fn set_active<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
    is_active: bool,
) -> SqlxResult<Option<PlayerRow>> {
    sqlx::query_as::<_, PlayerRow>(
        r#"
        UPDATE players
        SET is_active = $2, updated_at = NOW()
        WHERE id = $1
        RETURNING id, display_name, email, rank_code, elo_rating, is_active, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(is_active)
    .fetch_optional(executor)
    .await
}

pub async fn update_rank<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
    rank_code: String,
    elo_rating: i32,
) -> SqlxResult<Option<PlayerRow>> {
    sqlx::query_as::<_, PlayerRow>(
        r#"
        UPDATE players
        SET rank_code = $2, elo_rating = $3, updated_at = NOW()
        WHERE id = $1
        RETURNING id, display_name, email, rank_code, elo_rating, is_active, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(rank_code)
    .bind(elo_rating)
    .fetch_optional(executor)
    .await
}
