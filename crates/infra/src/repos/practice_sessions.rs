use chrono::NaiveDate;
use sqlx::{PgExecutor, Result};
use uuid::Uuid;

use crate::models::PracticeSessionRow;
use crate::scope::Scope;

const SESSION_COLUMNS: &str = "id, user_id, season_id, date, attendees, exercise_ids, \
     coach_notes, duration_minutes, created_at, updated_at";

#[derive(Debug, Clone)]
pub struct CreatePracticeSession {
    pub scope: Scope,
    pub date: NaiveDate,
    pub attendees: Vec<String>,
    pub exercise_ids: Vec<Uuid>,
    pub coach_notes: Option<String>,
    pub duration_minutes: i32,
}

#[derive(Debug, Clone, Default)]
pub struct UpdatePracticeSession {
    pub date: Option<NaiveDate>,
    pub attendees: Option<Vec<String>>,
    pub exercise_ids: Option<Vec<Uuid>>,
    pub coach_notes: Option<String>,
    pub duration_minutes: Option<i32>,
}

pub async fn create<'e>(
    executor: impl PgExecutor<'e>,
    data: CreatePracticeSession,
) -> Result<PracticeSessionRow> {
    sqlx::query_as::<_, PracticeSessionRow>(&format!(
        r#"
        INSERT INTO practice_sessions (user_id, season_id, date, attendees,
                                       exercise_ids, coach_notes, duration_minutes)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING {SESSION_COLUMNS}
        "#,
    ))
    .bind(data.scope.user_id)
    .bind(data.scope.season_id)
    .bind(data.date)
    .bind(data.attendees)
    .bind(data.exercise_ids)
    .bind(data.coach_notes)
    .bind(data.duration_minutes)
    .fetch_one(executor)
    .await
}

pub async fn get_by_id<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
) -> Result<Option<PracticeSessionRow>> {
    sqlx::query_as::<_, PracticeSessionRow>(&format!(
        "SELECT {SESSION_COLUMNS} FROM practice_sessions WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn list_for_scope<'e>(
    executor: impl PgExecutor<'e>,
    scope: Scope,
    from_date: Option<NaiveDate>,
) -> Result<Vec<PracticeSessionRow>> {
    sqlx::query_as::<_, PracticeSessionRow>(&format!(
        r#"
        SELECT {SESSION_COLUMNS}
        FROM practice_sessions
        WHERE user_id = $1 AND season_id = $2
          AND ($3::date IS NULL OR date >= $3)
        ORDER BY date DESC, created_at DESC
        "#,
    ))
    .bind(scope.user_id)
    .bind(scope.season_id)
    .bind(from_date)
    .fetch_all(executor)
    .await
}

/// Sessions dated within [first, last], both inclusive. Used by the monthly
/// attendance table.
pub async fn list_for_scope_between<'e>(
    executor: impl PgExecutor<'e>,
    scope: Scope,
    first: NaiveDate,
    last: NaiveDate,
) -> Result<Vec<PracticeSessionRow>> {
    sqlx::query_as::<_, PracticeSessionRow>(&format!(
        r#"
        SELECT {SESSION_COLUMNS}
        FROM practice_sessions
        WHERE user_id = $1 AND season_id = $2 AND date BETWEEN $3 AND $4
        ORDER BY date ASC, created_at ASC
        "#,
    ))
    .bind(scope.user_id)
    .bind(scope.season_id)
    .bind(first)
    .bind(last)
    .fetch_all(executor)
    .await
}

pub async fn update<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
    data: UpdatePracticeSession,
) -> Result<Option<PracticeSessionRow>> {
    sqlx::query_as::<_, PracticeSessionRow>(&format!(
        r#"
        UPDATE practice_sessions
        SET date = COALESCE($2, date),
            attendees = COALESCE($3, attendees),
            exercise_ids = COALESCE($4, exercise_ids),
            coach_notes = COALESCE($5, coach_notes),
            duration_minutes = COALESCE($6, duration_minutes),
            updated_at = NOW()
        WHERE id = $1
        RETURNING {SESSION_COLUMNS}
        "#,
    ))
    .bind(id)
    .bind(data.date)
    .bind(data.attendees)
    .bind(data.exercise_ids)
    .bind(data.coach_notes)
    .bind(data.duration_minutes)
    .fetch_optional(executor)
    .await
}

pub async fn delete<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> Result<u64> {
    let result = sqlx::query("DELETE FROM practice_sessions WHERE id = $1")
        .bind(id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}
