use async_graphql::{ComplexObject, Context, InputObject, Result, SimpleObject, ID};
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::HashMap;
use uuid::Uuid;

use crate::gql::error::GqlError;
use crate::state::AppState;
use infra::repos::practice_exercises;
use infra::Scope;

#[derive(SimpleObject, Clone)]
pub struct PracticeExercise {
    pub id: ID,
    pub season_id: ID,
    pub category: String,
    pub needed_material: Option<String>,
    pub execution_description: Option<String>,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<infra::models::PracticeExerciseRow> for PracticeExercise {
    fn from(row: infra::models::PracticeExerciseRow) -> Self {
        Self {
            id: row.id.into(),
            season_id: row.season_id.into(),
            category: row.category,
            needed_material: row.needed_material,
            execution_description: row.execution_description,
            images: row.images,
            created_at: row.created_at,
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct PracticeSession {
    pub id: ID,
    pub season_id: ID,
    pub date: NaiveDate,
    pub attendees: Vec<String>,
    pub exercise_ids: Vec<ID>,
    pub coach_notes: Option<String>,
    pub duration_minutes: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[graphql(skip)]
    pub scope: Scope,
    #[graphql(skip)]
    pub raw_exercise_ids: Vec<Uuid>,
}

impl From<infra::models::PracticeSessionRow> for PracticeSession {
    fn from(row: infra::models::PracticeSessionRow) -> Self {
        Self {
            id: row.id.into(),
            season_id: row.season_id.into(),
            date: row.date,
            attendees: row.attendees,
            exercise_ids: row.exercise_ids.iter().map(|id| ID::from(*id)).collect(),
            coach_notes: row.coach_notes,
            duration_minutes: row.duration_minutes,
            created_at: row.created_at,
            updated_at: row.updated_at,
            scope: Scope::new(row.user_id, row.season_id),
            raw_exercise_ids: row.exercise_ids,
        }
    }
}

/// "{category} – {first 40 chars of the description}…", or just the category
/// when there is no description.
pub(crate) fn exercise_label(category: &str, description: Option<&str>) -> String {
    match description {
        Some(desc) if !desc.trim().is_empty() => {
            let head: String = desc.chars().take(40).collect();
            let ellipsis = if desc.chars().count() > 40 { "…" } else { "" };
            format!("{category} – {head}{ellipsis}")
        }
        _ => category.to_string(),
    }
}

#[ComplexObject]
impl PracticeSession {
    /// Human-readable labels for the exercises used, in stored order.
    async fn exercise_labels(&self, ctx: &Context<'_>) -> Result<Vec<String>> {
        if self.raw_exercise_ids.is_empty() {
            return Ok(Vec::new());
        }
        let state = ctx.data::<AppState>()?;

        let exercises = practice_exercises::list_for_scope(&state.db, self.scope)
            .await
            .map_err(GqlError::from)?;
        let labels: HashMap<Uuid, String> = exercises
            .iter()
            .map(|e| {
                (
                    e.id,
                    exercise_label(&e.category, e.execution_description.as_deref()),
                )
            })
            .collect();

        Ok(self
            .raw_exercise_ids
            .iter()
            .map(|id| {
                labels
                    .get(id)
                    .cloned()
                    .unwrap_or_else(|| format!("unknown exercise {id}"))
            })
            .collect())
    }
}

// Inputs

#[derive(InputObject)]
pub struct CreatePracticeSessionInput {
    pub season_id: Uuid,
    pub date: NaiveDate,
    pub attendees: Vec<String>,
    pub exercise_ids: Vec<Uuid>,
    pub coach_notes: Option<String>,
    pub duration_minutes: i32,
}

#[derive(InputObject)]
pub struct UpdatePracticeSessionInput {
    pub id: Uuid,
    pub season_id: Uuid,
    pub date: Option<NaiveDate>,
    pub attendees: Option<Vec<String>>,
    pub exercise_ids: Option<Vec<Uuid>>,
    pub coach_notes: Option<String>,
    pub duration_minutes: Option<i32>,
}

#[derive(InputObject)]
pub struct CreatePracticeExerciseInput {
    pub season_id: Uuid,
    pub category: String,
    pub needed_material: Option<String>,
    pub execution_description: Option<String>,
    pub images: Vec<String>,
}

#[derive(InputObject)]
pub struct UpdatePracticeExerciseInput {
    pub id: Uuid,
    pub season_id: Uuid,
    pub category: Option<String>,
    pub needed_material: Option<String>,
    pub execution_description: Option<String>,
    pub images: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::exercise_label;

    #[test]
    fn labels_truncate_long_descriptions() {
        let long = "Dribbling between cones, two touches per cone, both feet";
        let label = exercise_label("Ball control", Some(long));
        assert_eq!(
            label,
            format!("Ball control – {}…", &long[..40])
        );
    }

    #[test]
    fn labels_without_description_are_just_the_category() {
        assert_eq!(exercise_label("Warm-up", None), "Warm-up");
        assert_eq!(exercise_label("Warm-up", Some("  ")), "Warm-up");
    }

    #[test]
    fn short_descriptions_get_no_ellipsis() {
        assert_eq!(
            exercise_label("Shooting", Some("Penalty drill")),
            "Shooting – Penalty drill"
        );
    }
}
