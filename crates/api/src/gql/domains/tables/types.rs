use async_graphql::{Enum, InputObject, SimpleObject, ID};

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum TableStatus {
    Free,
    InUse,
}

#[derive(SimpleObject, Clone)]
pub struct TableStatusEvent {
    pub club_id: ID,
    pub club_table_id: ID,
    pub match_id: Option<ID>,
    pub status: TableStatus,
}

#[derive(InputObject)]
pub struct AssignTableInput {
    pub match_id: ID,
    pub club_table_id: ID,
}
