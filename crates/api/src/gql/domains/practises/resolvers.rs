use async_graphql::{Context, Object, Result};
use chrono::NaiveDate;
use uuid::Uuid;

use crate::gql::common::helpers::{clean_names, current_scope};
use crate::gql::error::GqlError;
use crate::state::AppState;
use infra::models::{PracticeExerciseRow, PracticeSessionRow};
use infra::repos::{
    practice_exercises,
    practice_exercises::{CreatePracticeExercise, UpdatePracticeExercise},
    practice_sessions,
    practice_sessions::{CreatePracticeSession, UpdatePracticeSession},
};
use infra::Scope;

use super::types::{
    CreatePracticeExerciseInput, CreatePracticeSessionInput, PracticeExercise, PracticeSession,
    UpdatePracticeExerciseInput, UpdatePracticeSessionInput,
};

async fn load_owned_session(
    db: &sqlx::PgPool,
    scope: Scope,
    id: Uuid,
) -> Result<PracticeSessionRow> {
    let row = practice_sessions::get_by_id(db, id)
        .await
        .map_err(GqlError::from)?
        .ok_or_else(|| GqlError::new("Practice session not found"))?;
    if row.user_id != scope.user_id || row.season_id != scope.season_id {
        return Err(GqlError::new("Practice session belongs to another coach or season").into());
    }
    Ok(row)
}

async fn load_owned_exercise(
    db: &sqlx::PgPool,
    scope: Scope,
    id: Uuid,
) -> Result<PracticeExerciseRow> {
    let row = practice_exercises::get_by_id(db, id)
        .await
        .map_err(GqlError::from)?
        .ok_or_else(|| GqlError::new("Practice exercise not found"))?;
    if row.user_id != scope.user_id || row.season_id != scope.season_id {
        return Err(GqlError::new("Practice exercise belongs to another coach or season").into());
    }
    Ok(row)
}

fn validate_duration(minutes: i32) -> Result<()> {
    if minutes < 0 {
        return Err(GqlError::new("Duration must not be negative").into());
    }
    Ok(())
}

#[derive(Default)]
pub struct PractiseQuery;

#[Object]
impl PractiseQuery {
    /// Practice register entries, newest first, optionally from a date on.
    async fn practice_sessions(
        &self,
        ctx: &Context<'_>,
        season_id: Uuid,
        from_date: Option<NaiveDate>,
    ) -> Result<Vec<PracticeSession>> {
        let scope = current_scope(ctx, season_id)?;
        let state = ctx.data::<AppState>()?;

        let rows = practice_sessions::list_for_scope(&state.db, scope, from_date)
            .await
            .map_err(GqlError::from)?;
        Ok(rows.into_iter().map(PracticeSession::from).collect())
    }

    /// The exercise library for the season, newest first.
    async fn practice_exercises(
        &self,
        ctx: &Context<'_>,
        season_id: Uuid,
    ) -> Result<Vec<PracticeExercise>> {
        let scope = current_scope(ctx, season_id)?;
        let state = ctx.data::<AppState>()?;

        let rows = practice_exercises::list_for_scope(&state.db, scope)
            .await
            .map_err(GqlError::from)?;
        Ok(rows.into_iter().map(PracticeExercise::from).collect())
    }
}

#[derive(Default)]
pub struct PractiseMutation;

#[Object]
impl PractiseMutation {
    async fn create_practice_session(
        &self,
        ctx: &Context<'_>,
        input: CreatePracticeSessionInput,
    ) -> Result<PracticeSession> {
        let scope = current_scope(ctx, input.season_id)?;
        let state = ctx.data::<AppState>()?;
        validate_duration(input.duration_minutes)?;

        let row = practice_sessions::create(
            &state.db,
            CreatePracticeSession {
                scope,
                date: input.date,
                attendees: clean_names(input.attendees),
                exercise_ids: input.exercise_ids,
                coach_notes: input.coach_notes,
                duration_minutes: input.duration_minutes,
            },
        )
        .await
        .map_err(GqlError::from)?;

        Ok(row.into())
    }

    async fn update_practice_session(
        &self,
        ctx: &Context<'_>,
        input: UpdatePracticeSessionInput,
    ) -> Result<PracticeSession> {
        let scope = current_scope(ctx, input.season_id)?;
        let state = ctx.data::<AppState>()?;

        if let Some(minutes) = input.duration_minutes {
            validate_duration(minutes)?;
        }
        load_owned_session(&state.db, scope, input.id).await?;

        let row = practice_sessions::update(
            &state.db,
            input.id,
            UpdatePracticeSession {
                date: input.date,
                attendees: input.attendees.map(clean_names),
                exercise_ids: input.exercise_ids,
                coach_notes: input.coach_notes,
                duration_minutes: input.duration_minutes,
            },
        )
        .await
        .map_err(GqlError::from)?
        .ok_or_else(|| GqlError::new("Practice session not found"))?;

        Ok(row.into())
    }

    async fn delete_practice_session(
        &self,
        ctx: &Context<'_>,
        season_id: Uuid,
        id: Uuid,
    ) -> Result<bool> {
        let scope = current_scope(ctx, season_id)?;
        let state = ctx.data::<AppState>()?;

        load_owned_session(&state.db, scope, id).await?;
        practice_sessions::delete(&state.db, id)
            .await
            .map_err(GqlError::from)?;
        Ok(true)
    }

    async fn create_practice_exercise(
        &self,
        ctx: &Context<'_>,
        input: CreatePracticeExerciseInput,
    ) -> Result<PracticeExercise> {
        let scope = current_scope(ctx, input.season_id)?;
        let state = ctx.data::<AppState>()?;

        let category = input.category.trim().to_string();
        if category.is_empty() {
            return Err(GqlError::new("Category must not be empty").into());
        }

        let row = practice_exercises::create(
            &state.db,
            CreatePracticeExercise {
                scope,
                category,
                needed_material: input.needed_material,
                execution_description: input.execution_description,
                images: input.images,
            },
        )
        .await
        .map_err(GqlError::from)?;

        Ok(row.into())
    }

    async fn update_practice_exercise(
        &self,
        ctx: &Context<'_>,
        input: UpdatePracticeExerciseInput,
    ) -> Result<PracticeExercise> {
        let scope = current_scope(ctx, input.season_id)?;
        let state = ctx.data::<AppState>()?;

        load_owned_exercise(&state.db, scope, input.id).await?;

        let row = practice_exercises::update(
            &state.db,
            input.id,
            UpdatePracticeExercise {
                category: input.category,
                needed_material: input.needed_material,
                execution_description: input.execution_description,
                images: input.images,
            },
        )
        .await
        .map_err(GqlError::from)?
        .ok_or_else(|| GqlError::new("Practice exercise not found"))?;

        Ok(row.into())
    }

    async fn delete_practice_exercise(
        &self,
        ctx: &Context<'_>,
        season_id: Uuid,
        id: Uuid,
    ) -> Result<bool> {
        let scope = current_scope(ctx, season_id)?;
        let state = ctx.data::<AppState>()?;

        load_owned_exercise(&state.db, scope, id).await?;
        practice_exercises::delete(&state.db, id)
            .await
            .map_err(GqlError::from)?;
        Ok(true)
    }
}
