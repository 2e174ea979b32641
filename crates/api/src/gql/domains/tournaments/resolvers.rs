use async_graphql::{Context, Object, Result};
use uuid::Uuid;

use crate::gql::common::helpers::{clean_names, current_scope};
use crate::gql::error::GqlError;
use crate::gql::types::{
    CreateTournamentInput, MatrixEntry, PaginatedResponse, PaginationInput,
    ReconcileParticipationInput, RemoveTournamentOpponentInput, RemoveTournamentPlayerInput,
    Tournament, UpdateCoachNotesInput, UpdateTournamentInput,
};
use crate::state::AppState;
use infra::repos::tournaments::{self, CreateTournament, UpdateTournament};

use super::service;
use super::service::SlotKey;

/// A tournament card lists at most six opposing teams, like the paper form.
const MAX_OPPONENTS: usize = 6;

#[derive(Default)]
pub struct TournamentQuery;

#[Object]
impl TournamentQuery {
    /// Tournaments in the selected season, newest first.
    async fn tournaments(
        &self,
        ctx: &Context<'_>,
        season_id: Uuid,
        pagination: Option<PaginationInput>,
    ) -> Result<PaginatedResponse<Tournament>> {
        let scope = current_scope(ctx, season_id)?;
        let state = ctx.data::<AppState>()?;

        let page = pagination
            .map(PaginationInput::to_limit_offset)
            .unwrap_or_default();

        let (rows, total_count) = tokio::try_join!(
            tournaments::list_for_scope(&state.db, scope, page),
            tournaments::count_for_scope(&state.db, scope),
        )
        .map_err(GqlError::from)?;

        let items: Vec<Tournament> = rows.into_iter().map(Tournament::from).collect();
        let page_size = items.len() as i32;
        let offset = page.offset as i32;
        let has_next_page = (offset + page_size) < total_count as i32;

        Ok(PaginatedResponse {
            items,
            total_count: total_count as i32,
            page_size,
            offset,
            has_next_page,
        })
    }

    /// A single tournament, with its matrix and sheet stats as sub-fields.
    async fn tournament(
        &self,
        ctx: &Context<'_>,
        season_id: Uuid,
        id: Uuid,
    ) -> Result<Tournament> {
        let scope = current_scope(ctx, season_id)?;
        let state = ctx.data::<AppState>()?;

        let row = service::load_owned(&state.db, scope, id).await?;
        Ok(row.into())
    }
}

#[derive(Default)]
pub struct TournamentMutation;

#[Object]
impl TournamentMutation {
    async fn create_tournament(
        &self,
        ctx: &Context<'_>,
        input: CreateTournamentInput,
    ) -> Result<Tournament> {
        let scope = current_scope(ctx, input.season_id)?;
        let state = ctx.data::<AppState>()?;

        let opponents = clean_names(input.opponents);
        if opponents.len() > MAX_OPPONENTS {
            return Err(async_graphql::Error::new(format!(
                "a tournament takes at most {MAX_OPPONENTS} opponents"
            )));
        }

        let row = tournaments::create(
            &state.db,
            CreateTournament {
                scope,
                date: input.date,
                place: input.place.trim().to_string(),
                team_name: input.team_name.trim().to_string(),
                roster: clean_names(input.roster),
                opponents,
                coach_notes: input.coach_notes,
            },
        )
        .await
        .map_err(GqlError::from)?;

        Ok(row.into())
    }

    /// Edit the card fields and the roster/opponent snapshots. Matrix rows
    /// are untouched: history for names dropped here survives until the
    /// explicit remove mutations below.
    async fn update_tournament(
        &self,
        ctx: &Context<'_>,
        input: UpdateTournamentInput,
    ) -> Result<Tournament> {
        let scope = current_scope(ctx, input.season_id)?;
        let state = ctx.data::<AppState>()?;

        service::load_owned(&state.db, scope, input.id).await?;

        let opponents = input.opponents.map(clean_names);
        if let Some(ref opponents) = opponents {
            if opponents.len() > MAX_OPPONENTS {
                return Err(async_graphql::Error::new(format!(
                    "a tournament takes at most {MAX_OPPONENTS} opponents"
                )));
            }
        }

        let row = tournaments::update(
            &state.db,
            input.id,
            UpdateTournament {
                date: input.date,
                place: input.place,
                team_name: input.team_name,
                roster: input.roster.map(clean_names),
                opponents,
                coach_notes: input.coach_notes,
            },
        )
        .await
        .map_err(GqlError::from)?
        .ok_or_else(|| GqlError::new("Tournament not found"))?;

        Ok(row.into())
    }

    async fn update_coach_notes(
        &self,
        ctx: &Context<'_>,
        input: UpdateCoachNotesInput,
    ) -> Result<Tournament> {
        let scope = current_scope(ctx, input.season_id)?;
        let state = ctx.data::<AppState>()?;

        service::load_owned(&state.db, scope, input.tournament_id).await?;

        let row = tournaments::update_coach_notes(
            &state.db,
            input.tournament_id,
            Some(input.coach_notes),
        )
        .await
        .map_err(GqlError::from)?
        .ok_or_else(|| GqlError::new("Tournament not found"))?;

        Ok(row.into())
    }

    /// Idempotent bulk upsert of the participation grid from the submitted
    /// form state. Returns the stored grid after the write.
    async fn reconcile_participation(
        &self,
        ctx: &Context<'_>,
        input: ReconcileParticipationInput,
    ) -> Result<Vec<MatrixEntry>> {
        let scope = current_scope(ctx, input.season_id)?;
        let state = ctx.data::<AppState>()?;

        let flags: Vec<SlotKey> = input
            .flags
            .into_iter()
            .map(|f| SlotKey::new(f.opponent, f.period, f.player))
            .collect();

        let entries = service::reconcile(&state.db, scope, input.tournament_id, flags).await?;
        Ok(entries.into_iter().map(MatrixEntry::from).collect())
    }

    /// Drop a player from the tournament: roster entry and matrix rows go
    /// together, atomically.
    async fn remove_tournament_player(
        &self,
        ctx: &Context<'_>,
        input: RemoveTournamentPlayerInput,
    ) -> Result<Tournament> {
        let scope = current_scope(ctx, input.season_id)?;
        let state = ctx.data::<AppState>()?;

        let row = service::remove_player(
            &state.db,
            scope,
            input.tournament_id,
            input.player_name.trim(),
        )
        .await?;
        Ok(row.into())
    }

    async fn remove_tournament_opponent(
        &self,
        ctx: &Context<'_>,
        input: RemoveTournamentOpponentInput,
    ) -> Result<Tournament> {
        let scope = current_scope(ctx, input.season_id)?;
        let state = ctx.data::<AppState>()?;

        let row = service::remove_opponent(
            &state.db,
            scope,
            input.tournament_id,
            input.opponent_name.trim(),
        )
        .await?;
        Ok(row.into())
    }

    /// Cascade delete: the tournament and every matrix entry it owns.
    async fn delete_tournament(
        &self,
        ctx: &Context<'_>,
        season_id: Uuid,
        id: Uuid,
    ) -> Result<bool> {
        let scope = current_scope(ctx, season_id)?;
        let state = ctx.data::<AppState>()?;

        service::delete_tournament(&state.db, scope, id).await?;
        Ok(true)
    }
}
