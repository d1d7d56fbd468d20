use async_graphql::{Context, Object, Result};
use uuid::Uuid;

use crate::gql::domains::tables::types::{TableStatus, TableStatusEvent};
use crate::gql::error::{DbResultExt, ResultExt};
use crate::gql::subscriptions::{publish_bracket_event, publish_table_event};
use crate::state::AppState;
use infra::repos::{
    club_tables, tournament_matches, tournament_matches::CreateTournamentMatch,
    tournament_registrations, tournaments,
};

use super::service;
use super::types::{
    BracketChangeEvent, BracketEventType, BracketMatch, GenerateBracketInput,
};

#[derive(Default)]
pub struct BracketQuery;

#[Object]
impl BracketQuery {
    /// All persisted matches of a tournament, ordered by round and match number
    async fn tournament_bracket(
        &self,
        ctx: &Context<'_>,
        tournament_id: async_graphql::ID,
    ) -> Result<Vec<BracketMatch>> {
        let state = ctx.data::<AppState>()?;
        let tournament_uuid =
            Uuid::parse_str(tournament_id.as_str()).gql_err("Invalid tournament ID")?;

        let rows = tournament_matches::list_by_tournament(&state.db, tournament_uuid)
            .await
            .db_err("Database operation failed")?;

        Ok(rows.into_iter().map(BracketMatch::from).collect())
    }
}

#[derive(Default)]
pub struct BracketMutation;

#[Object]
impl BracketMutation {
    /// Draw round 1 from the confirmed participants and replace any existing
    /// round-1 matches in one transaction.
    async fn generate_bracket(
        &self,
        ctx: &Context<'_>,
        input: GenerateBracketInput,
    ) -> Result<Vec<BracketMatch>> {
        let state = ctx.data::<AppState>()?;
        let tournament_uuid =
            Uuid::parse_str(input.tournament_id.as_str()).gql_err("Invalid tournament ID")?;

        let tournament = tournaments::get_by_id(&state.db, tournament_uuid)
            .await
            .db_err("Database operation failed")?
            .ok_or_else(|| async_graphql::Error::new("Tournament not found"))?;

        let participant_rows =
            tournament_registrations::list_confirmed_participants(&state.db, tournament_uuid)
                .await
                .db_err("Database operation failed")?;

        let participants: Vec<service::Participant> = participant_rows
            .into_iter()
            .map(|row| service::Participant {
                id: row.player_id,
                display_name: row.display_name,
                rank_code: row.rank_code,
                rating: row.elo_rating,
            })
            .collect();

        // Precondition failures surface to the caller verbatim, no retry
        let slots = service::seed_bracket(&participants, input.method.into())
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        let mut tx = state
            .db
            .begin()
            .await
            .db_err("Database operation failed")?;

        tournament_matches::delete_round(&mut *tx, tournament_uuid, 1)
            .await
            .db_err("Database operation failed")?;

        let mut matches = Vec::with_capacity(slots.len());
        for slot in &slots {
            let row = tournament_matches::create(
                &mut *tx,
                CreateTournamentMatch {
                    tournament_id: tournament_uuid,
                    round: slot.round,
                    match_number: slot.match_number,
                    player_a_id: slot.player_a.as_ref().map(|p| p.id),
                    player_b_id: slot.player_b.as_ref().map(|p| p.id),
                },
            )
            .await
            .db_err("Database operation failed")?;
            matches.push(BracketMatch::from(row));
        }

        tx.commit().await.db_err("Database operation failed")?;

        tracing::info!(
            tournament_id = %tournament.id,
            matches = matches.len(),
            "Generated round-1 bracket"
        );

        publish_bracket_event(
            tournament_uuid,
            BracketChangeEvent {
                tournament_id: input.tournament_id.clone(),
                event_type: BracketEventType::Generated,
                match_id: None,
            },
        );

        Ok(matches)
    }

    /// Record a match winner. The winner must be one of the two seats; the
    /// match's table (if any) is released.
    async fn report_match_result(
        &self,
        ctx: &Context<'_>,
        match_id: async_graphql::ID,
        winner_id: async_graphql::ID,
    ) -> Result<BracketMatch> {
        let state = ctx.data::<AppState>()?;
        let match_uuid = Uuid::parse_str(match_id.as_str()).gql_err("Invalid match ID")?;
        let winner_uuid = Uuid::parse_str(winner_id.as_str()).gql_err("Invalid winner ID")?;

        let row = tournament_matches::get_by_id(&state.db, match_uuid)
            .await
            .db_err("Database operation failed")?
            .ok_or_else(|| async_graphql::Error::new("Match not found"))?;

        if row.player_a_id != Some(winner_uuid) && row.player_b_id != Some(winner_uuid) {
            return Err(async_graphql::Error::new(
                "Winner is not a player of this match",
            ));
        }

        let updated = tournament_matches::set_result(&state.db, match_uuid, winner_uuid)
            .await
            .db_err("Database operation failed")?
            .ok_or_else(|| async_graphql::Error::new("Match not found"))?;

        // Recording a result frees the match's table
        if let Some(table_uuid) = row.club_table_id {
            if let Some(table) = club_tables::get_by_id(&state.db, table_uuid)
                .await
                .db_err("Database operation failed")?
            {
                publish_table_event(
                    table.club_id,
                    TableStatusEvent {
                        club_id: table.club_id.into(),
                        club_table_id: table_uuid.into(),
                        match_id: None,
                        status: TableStatus::Free,
                    },
                );
            }
        }

        publish_bracket_event(
            row.tournament_id,
            BracketChangeEvent {
                tournament_id: row.tournament_id.into(),
                event_type: BracketEventType::ResultReported,
                match_id: Some(match_id.clone()),
            },
        );

        Ok(BracketMatch::from(updated))
    }
}
