use sqlx::{PgExecutor, Result};
use uuid::Uuid;

use crate::models::SeasonRow;

#[derive(Debug, Clone)]
pub struct CreateSeason {
    pub user_id: Uuid,
    pub name: String,
    pub year: Option<String>,
}

pub async fn create<'e>(executor: impl PgExecutor<'e>, data: CreateSeason) -> Result<SeasonRow> {
    sqlx::query_as::<_, SeasonRow>(
        r#"
        INSERT INTO seasons (user_id, name, year)
        VALUES ($1, $2, $3)
        RETURNING id, user_id, name, year, created_at
        "#,
    )
    .bind(data.user_id)
    .bind(data.name)
    .bind(data.year)
    .fetch_one(executor)
    .await
}

pub async fn get_by_id<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> Result<Option<SeasonRow>> {
    sqlx::query_as::<_, SeasonRow>(
        r#"
        SELECT id, user_id, name, year, created_at
        FROM seasons
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn list_for_user<'e>(
    executor: impl PgExecutor<'e>,
    user_id: Uuid,
) -> Result<Vec<SeasonRow>> {
    sqlx::query_as::<_, SeasonRow>(
        r#"
        SELECT id, user_id, name, year, created_at
        FROM seasons
        WHERE user_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(executor)
    .await
}
