use chrono::NaiveDate;
use sqlx::{PgExecutor, Result};
use uuid::Uuid;

use crate::models::PlayerRow;
use crate::scope::Scope;

const PLAYER_COLUMNS: &str = "id, user_id, season_id, name, alias, age_group, \
     membership_number, dob, mobile_phone, email, created_at, updated_at";

#[derive(Debug, Clone)]
pub struct CreatePlayer {
    pub scope: Scope,
    pub name: String,
    pub alias: Option<String>,
    pub age_group: String,
    pub membership_number: String,
    pub dob: Option<NaiveDate>,
    pub mobile_phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdatePlayer {
    pub name: Option<String>,
    pub alias: Option<String>,
    pub age_group: Option<String>,
    pub membership_number: Option<String>,
    pub dob: Option<NaiveDate>,
    pub mobile_phone: Option<String>,
    pub email: Option<String>,
}

pub async fn create<'e>(executor: impl PgExecutor<'e>, data: CreatePlayer) -> Result<PlayerRow> {
    sqlx::query_as::<_, PlayerRow>(&format!(
        r#"
        INSERT INTO players (user_id, season_id, name, alias, age_group,
                             membership_number, dob, mobile_phone, email)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING {PLAYER_COLUMNS}
        "#,
    ))
    .bind(data.scope.user_id)
    .bind(data.scope.season_id)
    .bind(data.name)
    .bind(data.alias)
    .bind(data.age_group)
    .bind(data.membership_number)
    .bind(data.dob)
    .bind(data.mobile_phone)
    .bind(data.email)
    .fetch_one(executor)
    .await
}

pub async fn get_by_id<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> Result<Option<PlayerRow>> {
    sqlx::query_as::<_, PlayerRow>(&format!(
        "SELECT {PLAYER_COLUMNS} FROM players WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn list_for_scope<'e>(
    executor: impl PgExecutor<'e>,
    scope: Scope,
) -> Result<Vec<PlayerRow>> {
    sqlx::query_as::<_, PlayerRow>(&format!(
        r#"
        SELECT {PLAYER_COLUMNS}
        FROM players
        WHERE user_id = $1 AND season_id = $2
        ORDER BY name ASC
        "#,
    ))
    .bind(scope.user_id)
    .bind(scope.season_id)
    .fetch_all(executor)
    .await
}

pub async fn update<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
    data: UpdatePlayer,
) -> Result<Option<PlayerRow>> {
    sqlx::query_as::<_, PlayerRow>(&format!(
        r#"
        UPDATE players
        SET name = COALESCE($2, name),
            alias = COALESCE($3, alias),
            age_group = COALESCE($4, age_group),
            membership_number = COALESCE($5, membership_number),
            dob = COALESCE($6, dob),
            mobile_phone = COALESCE($7, mobile_phone),
            email = COALESCE($8, email),
            updated_at = NOW()
        WHERE id = $1
        RETURNING {PLAYER_COLUMNS}
        "#,
    ))
    .bind(id)
    .bind(data.name)
    .bind(data.alias)
    .bind(data.age_group)
    .bind(data.membership_number)
    .bind(data.dob)
    .bind(data.mobile_phone)
    .bind(data.email)
    .fetch_optional(executor)
    .await
}

pub async fn delete<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> Result<u64> {
    let result = sqlx::query("DELETE FROM players WHERE id = $1")
        .bind(id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}
