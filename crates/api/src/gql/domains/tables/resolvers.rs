use async_graphql::{Context, Object, Result};
use uuid::Uuid;

use crate::gql::domains::brackets::types::{BracketChangeEvent, BracketEventType, BracketMatch};
use crate::gql::error::{DbResultExt, ResultExt};
use crate::gql::subscriptions::{publish_bracket_event, publish_table_event};
use crate::state::AppState;
use infra::repos::{club_tables, tournament_matches, tournaments};

use super::types::{AssignTableInput, TableStatus, TableStatusEvent};

#[derive(Default)]
pub struct TableMutation;

#[Object]
impl TableMutation {
    /// Put a match on a table. The table must belong to the tournament's
    /// club, be active and not already occupied.
    async fn assign_match_to_table(
        &self,
        ctx: &Context<'_>,
        input: AssignTableInput,
    ) -> Result<BracketMatch> {
        let state = ctx.data::<AppState>()?;
        let match_uuid = Uuid::parse_str(input.match_id.as_str()).gql_err("Invalid match ID")?;
        let table_uuid =
            Uuid::parse_str(input.club_table_id.as_str()).gql_err("Invalid table ID")?;

        let match_row = tournament_matches::get_by_id(&state.db, match_uuid)
            .await
            .db_err("Database operation failed")?
            .ok_or_else(|| async_graphql::Error::new("Match not found"))?;

        if match_row.status == "completed" {
            return Err(async_graphql::Error::new(
                "Completed matches cannot be assigned a table",
            ));
        }

        let table = club_tables::get_by_id(&state.db, table_uuid)
            .await
            .db_err("Database operation failed")?
            .ok_or_else(|| async_graphql::Error::new("Table not found"))?;

        if !table.is_active {
            return Err(async_graphql::Error::new("Table is out of rotation"));
        }

        let tournament = tournaments::get_by_id(&state.db, match_row.tournament_id)
            .await
            .db_err("Database operation failed")?
            .ok_or_else(|| async_graphql::Error::new("Tournament not found"))?;

        if tournament.club_id != table.club_id {
            return Err(async_graphql::Error::new(
                "Table belongs to a different club",
            ));
        }

        let occupied = tournament_matches::list_tables_in_use(&state.db, table.club_id)
            .await
            .db_err("Database operation failed")?;
        if occupied.contains(&table_uuid) {
            return Err(async_graphql::Error::new("Table is already in use"));
        }

        let updated = tournament_matches::assign_table(&state.db, match_uuid, Some(table_uuid))
            .await
            .db_err("Database operation failed")?
            .ok_or_else(|| async_graphql::Error::new("Match not found"))?;

        publish_table_event(
            table.club_id,
            TableStatusEvent {
                club_id: table.club_id.into(),
                club_table_id: table_uuid.into(),
                match_id: Some(input.match_id.clone()),
                status: TableStatus::InUse,
            },
        );
        publish_bracket_event(
            match_row.tournament_id,
            BracketChangeEvent {
                tournament_id: match_row.tournament_id.into(),
                event_type: BracketEventType::TableAssigned,
                match_id: Some(input.match_id.clone()),
            },
        );

        Ok(BracketMatch::from(updated))
    }

    /// Take a match off its table without recording a result
    async fn release_match_table(
        &self,
        ctx: &Context<'_>,
        match_id: async_graphql::ID,
    ) -> Result<BracketMatch> {
        let state = ctx.data::<AppState>()?;
        let match_uuid = Uuid::parse_str(match_id.as_str()).gql_err("Invalid match ID")?;

        let match_row = tournament_matches::get_by_id(&state.db, match_uuid)
            .await
            .db_err("Database operation failed")?
            .ok_or_else(|| async_graphql::Error::new("Match not found"))?;

        let Some(table_uuid) = match_row.club_table_id else {
            return Err(async_graphql::Error::new("Match is not on a table"));
        };

        let updated = tournament_matches::assign_table(&state.db, match_uuid, None)
            .await
            .db_err("Database operation failed")?
            .ok_or_else(|| async_graphql::Error::new("Match not found"))?;

        let table = club_tables::get_by_id(&state.db, table_uuid)
            .await
            .db_err("Database operation failed")?;

        if let Some(table) = table {
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

        Ok(BracketMatch::from(updated))
    }
}
