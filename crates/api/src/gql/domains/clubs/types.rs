use async_graphql::{InputObject, SimpleObject, ID};
use chrono::{DateTime, Utc};

#[derive(SimpleObject, Clone)]
pub struct Club {
    pub id: ID,
    pub name: String,
    pub city: Option<String>,
}

impl From<infra::models::ClubRow> for Club {
    fn from(row: infra::models::ClubRow) -> Self {
        Self {
            id: row.id.into(),
            name: row.name,
            city: row.city,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct ClubTable {
    pub id: ID,
    pub club_id: ID,
    pub table_number: i32,
    pub table_name: Option<String>,
    pub is_active: bool,
    pub in_use: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ClubTable {
    pub fn from_row(row: infra::models::ClubTableRow, in_use: bool) -> Self {
        Self {
            id: row.id.into(),
            club_id: row.club_id.into(),
            table_number: row.table_number,
            table_name: row.table_name,
            is_active: row.is_active,
            in_use,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(InputObject)]
pub struct CreateClubInput {
    pub name: String,
    pub city: Option<String>,
    pub country: Option<String>,
}

#[derive(InputObject)]
pub struct CreateClubTableInput {
    pub club_id: ID,
    pub table_number: i32,
    pub table_name: Option<String>,
}
