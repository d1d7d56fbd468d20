use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::{ConfirmedParticipantRow, TournamentRegistrationRow};

#[derive(Debug, Clone)]
pub struct CreateTournamentRegistration {
    pub tournament_id: Uuid,
    pub player_id: Uuid,
    pub notes: Option<String>,
}

pub async fn create<'e>(
    executor: impl PgExecutor<'e>,
    data: CreateTournamentRegistration,
) -> SqlxResult<TournamentRegistrationRow> {
    sqlx::query_as::<_, TournamentRegistrationRow>(
        r#"
        INSERT INTO tournament_registrations (tournament_id, player_id, notes)
        VALUES ($1, $2, $3)
        RETURNING id, tournament_id, player_id, status, registered_at, notes, created_at, updated_at
        "#,
    )
    .bind(data.tournament_id)
    .bind(data.player_id)
    .bind(data.notes)
    .fetch_one(executor)
    .await
}

pub async fn get_by_id<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
) -> SqlxResult<Option<TournamentRegistrationRow>> {
    sqlx::query_as::<_, TournamentRegistrationRow>(
        r#"
        SELECT id, tournament_id, player_id, status, registered_at, notes, created_at, updated_at
        FROM tournament_registrations
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn get_by_tournament_and_player<'e>(
    executor: impl PgExecutor<'e>,
    tournament_id: Uuid,
    player_id: Uuid,
) -> SqlxResult<Option<TournamentRegistrationRow>> {
    sqlx::query_as::<_, TournamentRegistrationRow>(
        r#"
        SELECT id, tournament_id, player_id, status, registered_at, notes, created_at, updated_at
        FROM tournament_registrations
        WHERE tournament_id = $1 AND player_id = $2
        "#,
    )
    .bind(tournament_id)
    .bind(player_id)
    .fetch_optional(executor)
    .await
}

pub async fn list_by_tournament<'e>(
    executor: impl PgExecutor<'e>,
    tournament_id: Uuid,
) -> SqlxResult<Vec<TournamentRegistrationRow>> {
    sqlx::query_as::<_, TournamentRegistrationRow>(
        r#"
        SELECT id, tournament_id, player_id, status, registered_at, notes, created_at, updated_at
        FROM tournament_registrations
        WHERE tournament_id = $1
        ORDER BY registered_at ASC
        "#,
    )
    .bind(tournament_id)
    .fetch_all(executor)
    .await
}

pub async fn update_status<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
    status: &str,
) -> SqlxResult<Option<TournamentRegistrationRow>> {
    sqlx::query_as::<_, TournamentRegistrationRow>(
        r#"
        UPDATE tournament_registrations
        SET status = $2, updated_at = NOW()
        WHERE id = $1
        RETURNING id, tournament_id, player_id, status, registered_at, notes, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(status)
    .fetch_optional(executor)
    .await
}

/// Confirmed registrations joined with the player fields the bracket seeder
/// snapshots at generation time.
pub async fn list_confirmed_participants<'e>(
    executor: impl PgExecutor<'e>,
    tournament_id: Uuid,
) -> SqlxResult<Vec<ConfirmedParticipantRow>> {
    sqlx::query_as::<_, ConfirmedParticipantRow>(
        r#"
        SELECT p.id AS player_id, p.display_name, p.rank_code, p.elo_rating
        FROM tournament_registrations r
        JOIN players p ON p.id = r.player_id
        WHERE r.tournament_id = $1 AND r.status = 'confirmed' AND p.is_active
        ORDER BY r.registered_at ASC
        "#,
    )
    .bind(tournament_id)
    .fetch_all(executor)
    .await
}
