use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct UserRow {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct SeasonRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub year: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct PlayerRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub season_id: Uuid,
    pub name: String,
    pub alias: Option<String>,
    pub age_group: String,
    pub membership_number: String,
    pub dob: Option<NaiveDate>,
    pub mobile_phone: Option<String>,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A tournament owns its roster/opponent lists as ordered name snapshots:
/// renaming a player later must not rewrite historical sheets.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TournamentRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub season_id: Uuid,
    pub date: NaiveDate,
    pub place: String,
    pub team_name: String,
    pub roster: Vec<String>,
    pub opponents: Vec<String>,
    pub coach_notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One participation fact: player P did/did not play period K against
/// opponent O in tournament T. At most one row per (T, P, O, K).
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct MatrixEntryRow {
    pub id: Uuid,
    pub tournament_id: Uuid,
    pub player_name: String,
    pub opponent_name: String,
    pub period: i32,
    pub played: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct PracticeExerciseRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub season_id: Uuid,
    pub category: String,
    pub needed_material: Option<String>,
    pub execution_description: Option<String>,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct PracticeSessionRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub season_id: Uuid,
    pub date: NaiveDate,
    pub attendees: Vec<String>,
    pub exercise_ids: Vec<Uuid>,
    pub coach_notes: Option<String>,
    pub duration_minutes: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
