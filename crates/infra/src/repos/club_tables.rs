use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::ClubTableRow;

#[derive(Debug, Clone)]
pub struct CreateClubTable {
    pub club_id: Uuid,
    pub table_number: i32,
    pub table_name: Option<String>,
}

pub async fn create<'e>(
    executor: impl PgExecutor<'e>,
    data: CreateClubTable,
) -> SqlxResult<ClubTableRow> {
    sqlx::query_as::<_, ClubTableRow>(
        r#"
        INSERT INTO club_tables (club_id, table_number, table_name)
        VALUES ($1, $2, $3)
        RETURNING id, club_id, table_number, table_name, is_active, created_at, updated_at
        "#,
    )
    .bind(data.club_id)
    .bind(data.table_number)
    .bind(data.table_name)
    .fetch_one(executor)
    .await
}

pub async fn get_by_id<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
) -> SqlxResult<Option<ClubTableRow>> {
    sqlx::query_as::<_, ClubTableRow>(
        r#"
        SELECT id, club_id, table_number, table_name, is_active, created_at, updated_at
        FROM club_tables
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn list_by_club<'e>(
    executor: impl PgExecutor<'e>,
    club_id: Uuid,
) -> SqlxResult<Vec<ClubTableRow>> {
    sqlx::query_as::<_, ClubTableRow>(
        r#"
        SELECT id, club_id, table_number, table_name, is_active, created_at, updated_at
        FROM club_tables
        WHERE club_id = $1
        ORDER BY table_number ASC
        "#,
    )
    .bind(club_id)
    .fetch_all(executor)
    .await
}

pub async fn set_active<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
    is_active: bool,
) -> SqlxResult<Option<ClubTableRow>> {
    sqlx::query_as::<_, ClubTableRow>(
        r#"
        UPDATE club_tables
        SET is_active = $2, updated_at = NOW()
        WHERE id = $1
        RETURNING id, club_id, table_number, table_name, is_active, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(is_active)
    .fetch_optional(executor)
    .await
}
