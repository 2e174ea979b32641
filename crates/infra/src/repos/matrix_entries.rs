use sqlx::{PgExecutor, Result};
use uuid::Uuid;

use crate::models::MatrixEntryRow;
use crate::scope::Scope;

const ENTRY_COLUMNS: &str = "id, tournament_id, player_name, opponent_name, period, \
     played, created_at, updated_at";

#[derive(Debug, Clone)]
pub struct NewMatrixEntry {
    pub tournament_id: Uuid,
    pub player_name: String,
    pub opponent_name: String,
    pub period: i32,
    pub played: bool,
}

pub async fn insert<'e>(
    executor: impl PgExecutor<'e>,
    entry: NewMatrixEntry,
) -> Result<MatrixEntryRow> {
    sqlx::query_as::<_, MatrixEntryRow>(&format!(
        r#"
        INSERT INTO tournament_matrix_entries
            (tournament_id, player_name, opponent_name, period, played)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING {ENTRY_COLUMNS}
        "#,
    ))
    .bind(entry.tournament_id)
    .bind(entry.player_name)
    .bind(entry.opponent_name)
    .bind(entry.period)
    .bind(entry.played)
    .fetch_one(executor)
    .await
}

pub async fn update_played<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
    played: bool,
) -> Result<()> {
    sqlx::query(
        "UPDATE tournament_matrix_entries SET played = $2, updated_at = NOW() WHERE id = $1",
    )
    .bind(id)
    .bind(played)
    .execute(executor)
    .await?;
    Ok(())
}

pub async fn list_for_tournament<'e>(
    executor: impl PgExecutor<'e>,
    tournament_id: Uuid,
) -> Result<Vec<MatrixEntryRow>> {
    sqlx::query_as::<_, MatrixEntryRow>(&format!(
        r#"
        SELECT {ENTRY_COLUMNS}
        FROM tournament_matrix_entries
        WHERE tournament_id = $1
        ORDER BY opponent_name, period, player_name
        "#,
    ))
    .bind(tournament_id)
    .fetch_all(executor)
    .await
}

/// Played-only entries across every tournament in scope. Joining on the
/// owning tournament keeps the aggregates inside the caller's (user, season).
pub async fn list_played_for_scope<'e>(
    executor: impl PgExecutor<'e>,
    scope: Scope,
) -> Result<Vec<MatrixEntryRow>> {
    sqlx::query_as::<_, MatrixEntryRow>(
        r#"
        SELECT m.id, m.tournament_id, m.player_name, m.opponent_name, m.period,
               m.played, m.created_at, m.updated_at
        FROM tournament_matrix_entries m
        JOIN tournaments t ON m.tournament_id = t.id
        WHERE t.user_id = $1 AND t.season_id = $2 AND m.played = TRUE
        "#,
    )
    .bind(scope.user_id)
    .bind(scope.season_id)
    .fetch_all(executor)
    .await
}

pub async fn delete_by_ids<'e>(executor: impl PgExecutor<'e>, ids: &[Uuid]) -> Result<u64> {
    if ids.is_empty() {
        return Ok(0);
    }
    let result = sqlx::query("DELETE FROM tournament_matrix_entries WHERE id = ANY($1::uuid[])")
        .bind(ids)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}

pub async fn delete_for_tournament<'e>(
    executor: impl PgExecutor<'e>,
    tournament_id: Uuid,
) -> Result<u64> {
    let result = sqlx::query("DELETE FROM tournament_matrix_entries WHERE tournament_id = $1")
        .bind(tournament_id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}

pub async fn delete_for_player<'e>(
    executor: impl PgExecutor<'e>,
    tournament_id: Uuid,
    player_name: &str,
) -> Result<u64> {
    let result = sqlx::query(
        "DELETE FROM tournament_matrix_entries WHERE tournament_id = $1 AND player_name = $2",
    )
    .bind(tournament_id)
    .bind(player_name)
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}

pub async fn delete_for_opponent<'e>(
    executor: impl PgExecutor<'e>,
    tournament_id: Uuid,
    opponent_name: &str,
) -> Result<u64> {
    let result = sqlx::query(
        "DELETE FROM tournament_matrix_entries WHERE tournament_id = $1 AND opponent_name = $2",
    )
    .bind(tournament_id)
    .bind(opponent_name)
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}
