use async_graphql::{InputObject, SimpleObject, ID};
use chrono::{DateTime, NaiveDate, Utc};

#[derive(SimpleObject, Clone)]
pub struct Player {
    pub id: ID,
    pub season_id: ID,
    pub name: String,
    /// Short display name used on registers; falls back to `name`.
    pub alias: Option<String>,
    pub age_group: String,
    pub membership_number: String,
    pub dob: Option<NaiveDate>,
    pub mobile_phone: Option<String>,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<infra::models::PlayerRow> for Player {
    fn from(row: infra::models::PlayerRow) -> Self {
        Self {
            id: row.id.into(),
            season_id: row.season_id.into(),
            name: row.name,
            alias: row.alias,
            age_group: row.age_group,
            membership_number: row.membership_number,
            dob: row.dob,
            mobile_phone: row.mobile_phone,
            email: row.email,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(InputObject)]
pub struct CreatePlayerInput {
    pub season_id: uuid::Uuid,
    pub name: String,
    pub alias: Option<String>,
    pub age_group: String,
    pub membership_number: String,
    pub dob: Option<NaiveDate>,
    pub mobile_phone: Option<String>,
    pub email: Option<String>,
}

#[derive(InputObject)]
pub struct UpdatePlayerInput {
    pub id: uuid::Uuid,
    pub season_id: uuid::Uuid,
    pub name: Option<String>,
    pub alias: Option<String>,
    pub age_group: Option<String>,
    pub membership_number: Option<String>,
    pub dob: Option<NaiveDate>,
    pub mobile_phone: Option<String>,
    pub email: Option<String>,
}
