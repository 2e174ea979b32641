use sqlx::{PgExecutor, Result};
use uuid::Uuid;

use crate::models::PracticeExerciseRow;
use crate::scope::Scope;

const EXERCISE_COLUMNS: &str = "id, user_id, season_id, category, needed_material, \
     execution_description, images, created_at";

#[derive(Debug, Clone)]
pub struct CreatePracticeExercise {
    pub scope: Scope,
    pub category: String,
    pub needed_material: Option<String>,
    pub execution_description: Option<String>,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdatePracticeExercise {
    pub category: Option<String>,
    pub needed_material: Option<String>,
    pub execution_description: Option<String>,
    pub images: Option<Vec<String>>,
}

pub async fn create<'e>(
    executor: impl PgExecutor<'e>,
    data: CreatePracticeExercise,
) -> Result<PracticeExerciseRow> {
    sqlx::query_as::<_, PracticeExerciseRow>(&format!(
        r#"
        INSERT INTO practice_exercises (user_id, season_id, category,
                                        needed_material, execution_description, images)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING {EXERCISE_COLUMNS}
        "#,
    ))
    .bind(data.scope.user_id)
    .bind(data.scope.season_id)
    .bind(data.category)
    .bind(data.needed_material)
    .bind(data.execution_description)
    .bind(data.images)
    .fetch_one(executor)
    .await
}

pub async fn get_by_id<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
) -> Result<Option<PracticeExerciseRow>> {
    sqlx::query_as::<_, PracticeExerciseRow>(&format!(
        "SELECT {EXERCISE_COLUMNS} FROM practice_exercises WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn list_for_scope<'e>(
    executor: impl PgExecutor<'e>,
    scope: Scope,
) -> Result<Vec<PracticeExerciseRow>> {
    sqlx::query_as::<_, PracticeExerciseRow>(&format!(
        r#"
        SELECT {EXERCISE_COLUMNS}
        FROM practice_exercises
        WHERE user_id = $1 AND season_id = $2
        ORDER BY created_at DESC
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
    data: UpdatePracticeExercise,
) -> Result<Option<PracticeExerciseRow>> {
    sqlx::query_as::<_, PracticeExerciseRow>(&format!(
        r#"
        UPDATE practice_exercises
        SET category = COALESCE($2, category),
            needed_material = COALESCE($3, needed_material),
            execution_description = COALESCE($4, execution_description),
            images = COALESCE($5, images)
        WHERE id = $1
        RETURNING {EXERCISE_COLUMNS}
        "#,
    ))
    .bind(id)
    .bind(data.category)
    .bind(data.needed_material)
    .bind(data.execution_description)
    .bind(data.images)
    .fetch_optional(executor)
    .await
}

pub async fn delete<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> Result<u64> {
    let result = sqlx::query("DELETE FROM practice_exercises WHERE id = $1")
        .bind(id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}
