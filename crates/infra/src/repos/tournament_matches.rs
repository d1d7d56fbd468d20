use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::TournamentMatchRow;

#[derive(Debug, Clone)]
pub struct CreateTournamentMatch {
    pub tournament_id: Uuid,
    pub round: i32,
    pub match_number: i32,
    pub player_a_id: Option<Uuid>,
    pub player_b_id: Option<Uuid>,
}

const MATCH_COLUMNS: &str = r#"id, tournament_id, round, match_number, player_a_id, player_b_id,
               winner_id, status, club_table_id, created_at, updated_at"#;

pub async fn create<'e>(
    executor: impl PgExecutor<'e>,
    data: CreateTournamentMatch,
) -> SqlxResult<TournamentMatchRow> {
    sqlx::query_as::<_, TournamentMatchRow>(&format!(
        r#"
        INSERT INTO tournament_matches (tournament_id, round, match_number, player_a_id, player_b_id)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING {MATCH_COLUMNS}
        "#
    ))
    .bind(data.tournament_id)
    .bind(data.round)
    .bind(data.match_number)
    .bind(data.player_a_id)
    .bind(data.player_b_id)
    .fetch_one(executor)
    .await
}

pub async fn get_by_id<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
) -> SqlxResult<Option<TournamentMatchRow>> {
    sqlx::query_as::<_, TournamentMatchRow>(&format!(
        r#"
        SELECT {MATCH_COLUMNS}
        FROM tournament_matches
        WHERE id = $1
        "#
    ))
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn list_by_tournament<'e>(
    executor: impl PgExecutor<'e>,
    tournament_id: Uuid,
) -> SqlxResult<Vec<TournamentMatchRow>> {
    sqlx::query_as::<_, TournamentMatchRow>(&format!(
        r#"
        SELECT {MATCH_COLUMNS}
        FROM tournament_matches
        WHERE tournament_id = $1
        ORDER BY round ASC, match_number ASC
        "#
    ))
    .bind(tournament_id)
    .fetch_all(executor)
    .await
}

/// Drop a round so a regenerated bracket can replace it atomically.
pub async fn delete_round<'e>(
    executor: impl PgExecutor<'e>,
    tournament_id: Uuid,
    round: i32,
) -> SqlxResult<u64> {
    let result = sqlx::query("DELETE FROM tournament_matches WHERE tournament_id = $1 AND round = $2")
        .bind(tournament_id)
        .bind(round)
        .execute(executor)
        .await?;

    Ok(result.rows_affected())
}

pub async fn set_result<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
    winner_id: Uuid,
) -> SqlxResult<Option<TournamentMatchRow>> {
    sqlx::query_as::<_, TournamentMatchRow>(&format!(
        r#"
        UPDATE tournament_matches
        SET winner_id = $2, status = 'completed', club_table_id = NULL, updated_at = NOW()
        WHERE id = $1
        RETURNING {MATCH_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(winner_id)
    .fetch_optional(executor)
    .await
}

pub async fn assign_table<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
    club_table_id: Option<Uuid>,
) -> SqlxResult<Option<TournamentMatchRow>> {
    let status = if club_table_id.is_some() {
        "in_progress"
    } else {
        "pending"
    };

    sqlx::query_as::<_, TournamentMatchRow>(&format!(
        r#"
        UPDATE tournament_matches
        SET club_table_id = $2, status = $3, updated_at = NOW()
        WHERE id = $1 AND status <> 'completed'
        RETURNING {MATCH_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(club_table_id)
    .bind(status)
    .fetch_optional(executor)
    .await
}

/// Club tables currently occupied by an unfinished match.
pub async fn list_tables_in_use<'e>(
    executor: impl PgExecutor<'e>,
    club_id: Uuid,
) -> SqlxResult<Vec<Uuid>> {
    sqlx::query_scalar::<_, Uuid>(
        r#"
        SELECT DISTINCT m.club_table_id
        FROM tournament_matches m
        JOIN club_tables t ON t.id = m.club_table_id
        WHERE t.club_id = $1 AND m.status <> 'completed'
        "#,
    )
    .bind(club_id)
    .fetch_all(executor)
    .await
}
