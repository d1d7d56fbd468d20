use async_graphql::{Context, Object, Result};
use uuid::Uuid;

use crate::gql::domains::rewards::service::RankCode;
use crate::gql::error::{DbResultExt, ResultExt};
use crate::state::AppState;
use infra::repos::{
    players, tournament_registrations, tournament_registrations::CreateTournamentRegistration,
    tournaments,
};

use super::service;
use super::types::{RegisterForTournamentInput, RegistrationStatus, TournamentRegistration};

#[derive(Default)]
pub struct RegistrationQuery;

#[Object]
impl RegistrationQuery {
    /// Every registration of a tournament, oldest first
    async fn tournament_registrations(
        &self,
        ctx: &Context<'_>,
        tournament_id: async_graphql::ID,
    ) -> Result<Vec<TournamentRegistration>> {
        let state = ctx.data::<AppState>()?;
        let tournament_uuid =
            Uuid::parse_str(tournament_id.as_str()).gql_err("Invalid tournament ID")?;

        let rows = tournament_registrations::list_by_tournament(&state.db, tournament_uuid)
            .await
            .db_err("Database operation failed")?;

        Ok(rows.into_iter().map(TournamentRegistration::from).collect())
    }
}

#[derive(Default)]
pub struct RegistrationMutation;

#[Object]
impl RegistrationMutation {
    /// Register a player. Rejected when the tournament no longer accepts
    /// registrations, when it is full, or when the player outranks its cap.
    async fn register_for_tournament(
        &self,
        ctx: &Context<'_>,
        input: RegisterForTournamentInput,
    ) -> Result<TournamentRegistration> {
        let state = ctx.data::<AppState>()?;
        let tournament_uuid =
            Uuid::parse_str(input.tournament_id.as_str()).gql_err("Invalid tournament ID")?;
        let player_uuid =
            Uuid::parse_str(input.player_id.as_str()).gql_err("Invalid player ID")?;

        let tournament = tournaments::get_by_id(&state.db, tournament_uuid)
            .await
            .db_err("Database operation failed")?
            .ok_or_else(|| async_graphql::Error::new("Tournament not found"))?;

        if !tournament.status.accepts_registrations() {
            return Err(async_graphql::Error::new(
                "Tournament is not accepting registrations",
            ));
        }

        let player = players::get_by_id(&state.db, player_uuid)
            .await
            .db_err("Database operation failed")?
            .ok_or_else(|| async_graphql::Error::new("Player not found"))?;

        if !player.is_active {
            return Err(async_graphql::Error::new("Player account is inactive"));
        }

        let cap = tournament
            .max_rank_code
            .as_deref()
            .and_then(|s| s.parse::<RankCode>().ok());
        service::ensure_rank_within_cap(&player.rank_code, cap)
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        if tournament_registrations::get_by_tournament_and_player(
            &state.db,
            tournament_uuid,
            player_uuid,
        )
        .await
        .db_err("Database operation failed")?
        .is_some()
        {
            return Err(async_graphql::Error::new("Player is already registered"));
        }

        let registrations =
            tournament_registrations::list_by_tournament(&state.db, tournament_uuid)
                .await
                .db_err("Database operation failed")?;
        let taken = registrations
            .iter()
            .filter(|r| r.status != "withdrawn")
            .count();
        if taken >= tournament.max_participants as usize {
            return Err(async_graphql::Error::new("Tournament is full"));
        }

        let row = tournament_registrations::create(
            &state.db,
            CreateTournamentRegistration {
                tournament_id: tournament_uuid,
                player_id: player_uuid,
                notes: input.notes,
            },
        )
        .await
        .db_err("Database operation failed")?;

        tracing::info!(
            tournament_id = %tournament_uuid,
            player_id = %player_uuid,
            "Registered player for tournament"
        );

        Ok(row.into())
    }

    /// Confirm or withdraw a registration
    async fn update_registration_status(
        &self,
        ctx: &Context<'_>,
        id: async_graphql::ID,
        status: RegistrationStatus,
    ) -> Result<TournamentRegistration> {
        let state = ctx.data::<AppState>()?;
        let registration_uuid = Uuid::parse_str(id.as_str()).gql_err("Invalid registration ID")?;

        let row = tournament_registrations::update_status(
            &state.db,
            registration_uuid,
            status.as_str(),
        )
        .await
        .db_err("Database operation failed")?
        .ok_or_else(|| async_graphql::Error::new("Registration not found"))?;

        Ok(row.into())
    }
}
