use chrono::NaiveDate;
use sqlx::{PgExecutor, Result};
use uuid::Uuid;

use crate::models::TournamentRow;
use crate::pagination::LimitOffset;
use crate::scope::Scope;

const TOURNAMENT_COLUMNS: &str = "id, user_id, season_id, date, place, team_name, \
     roster, opponents, coach_notes, created_at, updated_at";

#[derive(Debug, Clone)]
pub struct CreateTournament {
    pub scope: Scope,
    pub date: NaiveDate,
    pub place: String,
    pub team_name: String,
    pub roster: Vec<String>,
    pub opponents: Vec<String>,
    pub coach_notes: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateTournament {
    pub date: Option<NaiveDate>,
    pub place: Option<String>,
    pub team_name: Option<String>,
    pub roster: Option<Vec<String>>,
    pub opponents: Option<Vec<String>>,
    pub coach_notes: Option<String>,
}

pub async fn create<'e>(
    executor: impl PgExecutor<'e>,
    data: CreateTournament,
) -> Result<TournamentRow> {
    sqlx::query_as::<_, TournamentRow>(&format!(
        r#"
        INSERT INTO tournaments (user_id, season_id, date, place, team_name,
                                 roster, opponents, coach_notes)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING {TOURNAMENT_COLUMNS}
        "#,
    ))
    .bind(data.scope.user_id)
    .bind(data.scope.season_id)
    .bind(data.date)
    .bind(data.place)
    .bind(data.team_name)
    .bind(data.roster)
    .bind(data.opponents)
    .bind(data.coach_notes)
    .fetch_one(executor)
    .await
}

pub async fn get_by_id<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
) -> Result<Option<TournamentRow>> {
    sqlx::query_as::<_, TournamentRow>(&format!(
        "SELECT {TOURNAMENT_COLUMNS} FROM tournaments WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn list_for_scope<'e>(
    executor: impl PgExecutor<'e>,
    scope: Scope,
    page: LimitOffset,
) -> Result<Vec<TournamentRow>> {
    sqlx::query_as::<_, TournamentRow>(&format!(
        r#"
        SELECT {TOURNAMENT_COLUMNS}
        FROM tournaments
        WHERE user_id = $1 AND season_id = $2
        ORDER BY date DESC, created_at DESC
        LIMIT $3 OFFSET $4
        "#,
    ))
    .bind(scope.user_id)
    .bind(scope.season_id)
    .bind(page.limit)
    .bind(page.offset)
    .fetch_all(executor)
    .await
}

pub async fn count_for_scope<'e>(executor: impl PgExecutor<'e>, scope: Scope) -> Result<i64> {
    sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM tournaments WHERE user_id = $1 AND season_id = $2",
    )
    .bind(scope.user_id)
    .bind(scope.season_id)
    .fetch_one(executor)
    .await
}

pub async fn update<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
    data: UpdateTournament,
) -> Result<Option<TournamentRow>> {
    sqlx::query_as::<_, TournamentRow>(&format!(
        r#"
        UPDATE tournaments
        SET date = COALESCE($2, date),
            place = COALESCE($3, place),
            team_name = COALESCE($4, team_name),
            roster = COALESCE($5, roster),
            opponents = COALESCE($6, opponents),
            coach_notes = COALESCE($7, coach_notes),
            updated_at = NOW()
        WHERE id = $1
        RETURNING {TOURNAMENT_COLUMNS}
        "#,
    ))
    .bind(id)
    .bind(data.date)
    .bind(data.place)
    .bind(data.team_name)
    .bind(data.roster)
    .bind(data.opponents)
    .bind(data.coach_notes)
    .fetch_optional(executor)
    .await
}

pub async fn update_coach_notes<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
    coach_notes: Option<String>,
) -> Result<Option<TournamentRow>> {
    sqlx::query_as::<_, TournamentRow>(&format!(
        r#"
        UPDATE tournaments
        SET coach_notes = $2, updated_at = NOW()
        WHERE id = $1
        RETURNING {TOURNAMENT_COLUMNS}
        "#,
    ))
    .bind(id)
    .bind(coach_notes)
    .fetch_optional(executor)
    .await
}

/// Drop a single name from the roster snapshot, preserving order.
pub async fn remove_from_roster<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
    player_name: &str,
) -> Result<Option<TournamentRow>> {
    sqlx::query_as::<_, TournamentRow>(&format!(
        r#"
        UPDATE tournaments
        SET roster = array_remove(roster, $2), updated_at = NOW()
        WHERE id = $1
        RETURNING {TOURNAMENT_COLUMNS}
        "#,
    ))
    .bind(id)
    .bind(player_name)
    .fetch_optional(executor)
    .await
}

pub async fn remove_from_opponents<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
    opponent_name: &str,
) -> Result<Option<TournamentRow>> {
    sqlx::query_as::<_, TournamentRow>(&format!(
        r#"
        UPDATE tournaments
        SET opponents = array_remove(opponents, $2), updated_at = NOW()
        WHERE id = $1
        RETURNING {TOURNAMENT_COLUMNS}
        "#,
    ))
    .bind(id)
    .bind(opponent_name)
    .fetch_optional(executor)
    .await
}

pub async fn delete<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> Result<u64> {
    let result = sqlx::query("DELETE FROM tournaments WHERE id = $1")
        .bind(id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}
