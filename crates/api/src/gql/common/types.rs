use async_graphql::{InputObject, OutputType, SimpleObject};

use infra::pagination::LimitOffset;

#[derive(InputObject, Clone, Copy)]
pub struct PaginationInput {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl PaginationInput {
    pub fn to_limit_offset(self) -> LimitOffset {
        LimitOffset {
            limit: self.limit.unwrap_or(50).clamp(1, 200),
            offset: self.offset.unwrap_or(0).max(0),
        }
    }
}

#[derive(SimpleObject)]
#[graphql(concrete(name = "PaginatedTournaments", params(crate::gql::domains::tournaments::types::Tournament)))]
pub struct PaginatedResponse<T: OutputType> {
    pub items: Vec<T>,
    pub total_count: i32,
    pub page_size: i32,
    pub offset: i32,
    pub has_next_page: bool,
}
