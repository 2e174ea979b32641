use async_graphql::{InputObject, SimpleObject, ID};
use chrono::{DateTime, Utc};

#[derive(SimpleObject, Clone)]
pub struct Season {
    pub id: ID,
    pub name: String,
    pub year: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<infra::models::SeasonRow> for Season {
    fn from(row: infra::models::SeasonRow) -> Self {
        Self {
            id: row.id.into(),
            name: row.name,
            year: row.year,
            created_at: row.created_at,
        }
    }
}

#[derive(InputObject)]
pub struct CreateSeasonInput {
    pub name: String,
    pub year: Option<String>,
}
