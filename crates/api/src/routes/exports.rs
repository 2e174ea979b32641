use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::auth::Claims;
use crate::error::AppError;
use crate::exports;
use crate::state::AppState;
use crate::stats;
use infra::models::TournamentRow;
use infra::repos::{matrix_entries, players, practice_sessions, seasons, tournaments};
use infra::Scope;

fn attachment(bytes: Vec<u8>, content_type: &'static str, filename: String) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    )
        .into_response()
}

async fn load_tournament_for_user(
    state: &AppState,
    claims: &Claims,
    tournament_id: Uuid,
) -> Result<TournamentRow, AppError> {
    let tournament = tournaments::get_by_id(&state.db, tournament_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("tournament {tournament_id}")))?;
    if tournament.user_id != claims.user_id()? {
        return Err(AppError::Forbidden(
            "tournament belongs to another coach".to_string(),
        ));
    }
    Ok(tournament)
}

async fn season_scope(
    state: &AppState,
    claims: &Claims,
    season_id: Uuid,
) -> Result<Scope, AppError> {
    let season = seasons::get_by_id(&state.db, season_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("season {season_id}")))?;
    let user_id = claims.user_id()?;
    if season.user_id != user_id {
        return Err(AppError::Forbidden(
            "season belongs to another coach".to_string(),
        ));
    }
    Ok(Scope::new(user_id, season_id))
}

/// GET /export/tournaments/{id}/matrix.csv
pub async fn tournament_matrix_csv(
    State(state): State<AppState>,
    claims: Claims,
    Path(tournament_id): Path<Uuid>,
) -> Result<Response, AppError> {
    load_tournament_for_user(&state, &claims, tournament_id).await?;

    let entries = matrix_entries::list_for_tournament(&state.db, tournament_id).await?;
    let bytes = exports::csv::tournament_matrix(&entries)?;

    Ok(attachment(
        bytes,
        "text/csv",
        format!("tournament_{tournament_id}_matrix.csv"),
    ))
}

/// GET /export/tournaments/{id}/sheet.pdf
pub async fn tournament_sheet_pdf(
    State(state): State<AppState>,
    claims: Claims,
    Path(tournament_id): Path<Uuid>,
) -> Result<Response, AppError> {
    let tournament = load_tournament_for_user(&state, &claims, tournament_id).await?;

    let entries = matrix_entries::list_for_tournament(&state.db, tournament_id).await?;
    let bytes = exports::pdf::tournament_sheet(&tournament, &entries)?;

    Ok(attachment(
        bytes,
        "application/pdf",
        format!("tournament_{tournament_id}_sheet.pdf"),
    ))
}

/// GET /export/seasons/{season_id}/minutes.csv
pub async fn season_minutes_csv(
    State(state): State<AppState>,
    claims: Claims,
    Path(season_id): Path<Uuid>,
) -> Result<Response, AppError> {
    let scope = season_scope(&state, &claims, season_id).await?;

    let (players, entries, sessions) = tokio::try_join!(
        players::list_for_scope(&state.db, scope),
        matrix_entries::list_played_for_scope(&state.db, scope),
        practice_sessions::list_for_scope(&state.db, scope, None),
    )?;

    let data = stats::minutes_and_practice(&players, &entries, &sessions);
    let bytes = exports::csv::minutes_summary(&players, &data)?;

    Ok(attachment(bytes, "text/csv", "dashboard_minutes.csv".to_string()))
}

/// GET /export/seasons/{season_id}/totals.csv
pub async fn season_totals_csv(
    State(state): State<AppState>,
    claims: Claims,
    Path(season_id): Path<Uuid>,
) -> Result<Response, AppError> {
    let scope = season_scope(&state, &claims, season_id).await?;

    let (players, entries, sessions) = tokio::try_join!(
        players::list_for_scope(&state.db, scope),
        matrix_entries::list_played_for_scope(&state.db, scope),
        practice_sessions::list_for_scope(&state.db, scope, None),
    )?;

    let data = stats::games_and_practices(&players, &entries, &sessions);
    let bytes = exports::csv::totals_summary(&players, &data)?;

    Ok(attachment(bytes, "text/csv", "dashboard_totals.csv".to_string()))
}
