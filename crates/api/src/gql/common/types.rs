use async_graphql::{InputObject, OutputType, SimpleObject};

use crate::gql::domains::tournaments::types::Tournament;
use infra::pagination::LimitOffset;

#[derive(InputObject, Clone, Copy)]
pub struct PaginationInput {
    pub limit: Option<i32>,
    pub offset: Option<i32>,
}

impl PaginationInput {
    pub fn to_limit_offset(self) -> LimitOffset {
        let defaults = LimitOffset::default();
        LimitOffset {
            limit: self.limit.map(i64::from).unwrap_or(defaults.limit),
            offset: self.offset.map(i64::from).unwrap_or(defaults.offset),
        }
    }
}

#[derive(SimpleObject)]
#[graphql(concrete(name = "TournamentPage", params(Tournament)))]
pub struct PaginatedResponse<T: OutputType> {
    pub items: Vec<T>,
    pub total_count: i32,
    pub page_size: i32,
    pub offset: i32,
    pub has_next_page: bool,
}
