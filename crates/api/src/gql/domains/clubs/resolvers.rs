use std::collections::HashSet;

use async_graphql::{Context, Object, Result};
use uuid::Uuid;

use crate::gql::error::{DbResultExt, ResultExt};
use crate::state::AppState;
use infra::repos::{
    club_tables, club_tables::CreateClubTable, clubs, clubs::CreateClub, tournament_matches,
};

use super::types::{Club, ClubTable, CreateClubInput, CreateClubTableInput};

#[derive(Default)]
pub struct ClubQuery;

#[Object]
impl ClubQuery {
    async fn clubs(&self, ctx: &Context<'_>) -> Result<Vec<Club>> {
        let state = ctx.data::<AppState>()?;

        let rows = clubs::list(&state.db)
            .await
            .db_err("Database operation failed")?;

        Ok(rows.into_iter().map(Club::from).collect())
    }

    async fn club(&self, ctx: &Context<'_>, id: async_graphql::ID) -> Result<Option<Club>> {
        let state = ctx.data::<AppState>()?;
        let club_uuid = Uuid::parse_str(id.as_str()).gql_err("Invalid club ID")?;

        let row = clubs::get_by_id(&state.db, club_uuid)
            .await
            .db_err("Database operation failed")?;

        Ok(row.map(Club::from))
    }

    /// Tables of a club with their live occupancy
    async fn club_tables(
        &self,
        ctx: &Context<'_>,
        club_id: async_graphql::ID,
    ) -> Result<Vec<ClubTable>> {
        let state = ctx.data::<AppState>()?;
        let club_uuid = Uuid::parse_str(club_id.as_str()).gql_err("Invalid club ID")?;

        let rows = club_tables::list_by_club(&state.db, club_uuid)
            .await
            .db_err("Database operation failed")?;

        let in_use: HashSet<Uuid> = tournament_matches::list_tables_in_use(&state.db, club_uuid)
            .await
            .db_err("Database operation failed")?
            .into_iter()
            .collect();

        Ok(rows
            .into_iter()
            .map(|row| {
                let occupied = in_use.contains(&row.id);
                ClubTable::from_row(row, occupied)
            })
            .collect())
    }
}

#[derive(Default)]
pub struct ClubMutation;

#[Object]
impl ClubMutation {
    async fn create_club(&self, ctx: &Context<'_>, input: CreateClubInput) -> Result<Club> {
        let state = ctx.data::<AppState>()?;

        let row = clubs::create(
            &state.db,
            CreateClub {
                name: input.name,
                city: input.city,
                country: input.country,
            },
        )
        .await
        .db_err("Database operation failed")?;

        Ok(row.into())
    }

    async fn create_club_table(
        &self,
        ctx: &Context<'_>,
        input: CreateClubTableInput,
    ) -> Result<ClubTable> {
        let state = ctx.data::<AppState>()?;
        let club_uuid = Uuid::parse_str(input.club_id.as_str()).gql_err("Invalid club ID")?;

        if input.table_number < 1 {
            return Err(async_graphql::Error::new("Table numbers start at 1"));
        }

        let row = club_tables::create(
            &state.db,
            CreateClubTable {
                club_id: club_uuid,
                table_number: input.table_number,
                table_name: input.table_name,
            },
        )
        .await
        .db_err("Database operation failed")?;

        Ok(ClubTable::from_row(row, false))
    }

    /// Take a table out of rotation (or bring it back)
    async fn set_club_table_active(
        &self,
        ctx: &Context<'_>,
        id: async_graphql::ID,
        is_active: bool,
    ) -> Result<ClubTable> {
        let state = ctx.data::<AppState>()?;
        let table_uuid = Uuid::parse_str(id.as_str()).gql_err("Invalid table ID")?;

        let row = club_tables::set_active(&state.db, table_uuid, is_active)
            .await
            .db_err("Database operation failed")?
            .ok_or_else(|| async_graphql::Error::new("Table not found"))?;

        Ok(ClubTable::from_row(row, false))
    }
}
