use async_graphql::{Context, Object, Result};
use uuid::Uuid;

use crate::gql::common::helpers::current_scope;
use crate::gql::error::GqlError;
use crate::state::AppState;
use crate::stats;
use crate::stats::attendance;
use infra::repos::{matrix_entries, players, practice_sessions};

use super::types::{MonthlyAttendance, PlayerMinutesSummary, PlayerTotalsSummary};

#[derive(Default)]
pub struct DashboardQuery;

#[Object]
impl DashboardQuery {
    /// Minutes played (6 per played period) and practice minutes per player,
    /// recomputed from current rows on every call.
    async fn player_minutes(
        &self,
        ctx: &Context<'_>,
        season_id: Uuid,
    ) -> Result<Vec<PlayerMinutesSummary>> {
        let scope = current_scope(ctx, season_id)?;
        let state = ctx.data::<AppState>()?;

        let (players, entries, sessions) = tokio::try_join!(
            players::list_for_scope(&state.db, scope),
            matrix_entries::list_played_for_scope(&state.db, scope),
            practice_sessions::list_for_scope(&state.db, scope, None),
        )
        .map_err(GqlError::from)?;

        let data = stats::minutes_and_practice(&players, &entries, &sessions);
        Ok(data
            .into_iter()
            .map(|(player_name, m)| PlayerMinutesSummary {
                player_name,
                minutes_played: m.minutes_played,
                practice_minutes: m.practice_minutes,
                total_minutes: m.minutes_played + m.practice_minutes,
            })
            .collect())
    }

    /// Games played (a match counts once however many periods were played)
    /// and practices attended per player.
    async fn player_totals(
        &self,
        ctx: &Context<'_>,
        season_id: Uuid,
    ) -> Result<Vec<PlayerTotalsSummary>> {
        let scope = current_scope(ctx, season_id)?;
        let state = ctx.data::<AppState>()?;

        let (players, entries, sessions) = tokio::try_join!(
            players::list_for_scope(&state.db, scope),
            matrix_entries::list_played_for_scope(&state.db, scope),
            practice_sessions::list_for_scope(&state.db, scope, None),
        )
        .map_err(GqlError::from)?;

        let data = stats::games_and_practices(&players, &entries, &sessions);
        Ok(data
            .into_iter()
            .map(|(player_name, t)| PlayerTotalsSummary {
                player_name,
                games_played: t.games_played,
                practices_attended: t.practices_attended,
                total_activities: t.games_played + t.practices_attended,
            })
            .collect())
    }

    /// Player × practice-date attendance table for one calendar month.
    async fn monthly_attendance(
        &self,
        ctx: &Context<'_>,
        season_id: Uuid,
        year: i32,
        month: i32,
    ) -> Result<MonthlyAttendance> {
        let scope = current_scope(ctx, season_id)?;
        let state = ctx.data::<AppState>()?;

        let (first, last) = u32::try_from(month)
            .ok()
            .and_then(|m| attendance::month_bounds(year, m))
            .ok_or_else(|| GqlError::new(format!("Invalid month: {year}-{month}")))?;

        let (players, sessions) = tokio::try_join!(
            players::list_for_scope(&state.db, scope),
            practice_sessions::list_for_scope_between(&state.db, scope, first, last),
        )
        .map_err(GqlError::from)?;

        Ok(attendance::monthly_attendance(&players, &sessions).into())
    }
}
