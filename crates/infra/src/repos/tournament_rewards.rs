use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::TournamentRewardRow;

#[derive(Debug, Clone)]
pub struct CreateTournamentReward {
    pub tournament_id: Uuid,
    pub position: i32,
    pub name: String,
    pub cash_amount: i64,
    pub elo_points: i64,
    pub spa_points: i64,
    pub items: Vec<String>,
    pub is_visible: bool,
}

const REWARD_COLUMNS: &str = r#"id, tournament_id, position, name, cash_amount, elo_points,
               spa_points, items, is_visible, created_at, updated_at"#;

pub async fn create<'e>(
    executor: impl PgExecutor<'e>,
    data: CreateTournamentReward,
) -> SqlxResult<TournamentRewardRow> {
    sqlx::query_as::<_, TournamentRewardRow>(&format!(
        r#"
        INSERT INTO tournament_rewards
            (tournament_id, position, name, cash_amount, elo_points, spa_points, items, is_visible)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING {REWARD_COLUMNS}
        "#
    ))
    .bind(data.tournament_id)
    .bind(data.position)
    .bind(data.name)
    .bind(data.cash_amount)
    .bind(data.elo_points)
    .bind(data.spa_points)
    .bind(data.items)
    .bind(data.is_visible)
    .fetch_one(executor)
    .await
}

pub async fn list_by_tournament<'e>(
    executor: impl PgExecutor<'e>,
    tournament_id: Uuid,
) -> SqlxResult<Vec<TournamentRewardRow>> {
    sqlx::query_as::<_, TournamentRewardRow>(&format!(
        r#"
        SELECT {REWARD_COLUMNS}
        FROM tournament_rewards
        WHERE tournament_id = $1
        ORDER BY position ASC
        "#
    ))
    .bind(tournament_id)
    .fetch_all(executor)
    .await
}

/// Clear a tournament's reward table so a recomputed one can replace it.
pub async fn delete_for_tournament<'e>(
    executor: impl PgExecutor<'e>,
    tournament_id: Uuid,
) -> SqlxResult<u64> {
    let result = sqlx::query("DELETE FROM tournament_rewards WHERE tournament_id = $1")
        .bind(tournament_id)
        .execute(executor)
        .await?;

    Ok(result.rows_affected())
}
