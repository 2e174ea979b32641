use async_graphql::{ComplexObject, Context, InputObject, Result, SimpleObject, ID};
use chrono::{DateTime, NaiveDate, Utc};

use crate::gql::error::{GqlError, ResultExt};
use crate::state::AppState;
use crate::stats;
use infra::repos::matrix_entries;

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Tournament {
    pub id: ID,
    pub season_id: ID,
    pub date: NaiveDate,
    pub place: String,
    pub team_name: String,
    /// Ordered player-name snapshot taken when the tournament was set up.
    pub roster: Vec<String>,
    pub opponents: Vec<String>,
    pub coach_notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<infra::models::TournamentRow> for Tournament {
    fn from(row: infra::models::TournamentRow) -> Self {
        Self {
            id: row.id.into(),
            season_id: row.season_id.into(),
            date: row.date,
            place: row.place,
            team_name: row.team_name,
            roster: row.roster,
            opponents: row.opponents,
            coach_notes: row.coach_notes,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct MatrixEntry {
    pub id: ID,
    pub player_name: String,
    pub opponent_name: String,
    pub period: i32,
    pub played: bool,
}

impl From<infra::models::MatrixEntryRow> for MatrixEntry {
    fn from(row: infra::models::MatrixEntryRow) -> Self {
        Self {
            id: row.id.into(),
            player_name: row.player_name,
            opponent_name: row.opponent_name,
            period: row.period,
            played: row.played,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct PlayerSheetMinutes {
    pub player_name: String,
    pub minutes_played: i64,
}

#[ComplexObject]
impl Tournament {
    /// Every stored participation fact for this tournament, stale rows
    /// included.
    async fn matrix(&self, ctx: &Context<'_>) -> Result<Vec<MatrixEntry>> {
        let state = ctx.data::<AppState>()?;
        let tournament_id =
            uuid::Uuid::parse_str(self.id.as_str()).gql_err("Invalid tournament ID")?;

        let entries = matrix_entries::list_for_tournament(&state.db, tournament_id)
            .await
            .map_err(GqlError::from)?;

        Ok(entries.into_iter().map(MatrixEntry::from).collect())
    }

    /// Minutes per player for the sheet labels, 6 per played period.
    async fn sheet_stats(&self, ctx: &Context<'_>) -> Result<Vec<PlayerSheetMinutes>> {
        let state = ctx.data::<AppState>()?;
        let tournament_id =
            uuid::Uuid::parse_str(self.id.as_str()).gql_err("Invalid tournament ID")?;

        let entries = matrix_entries::list_for_tournament(&state.db, tournament_id)
            .await
            .map_err(GqlError::from)?;

        let minutes = stats::sheet_minutes(&entries);
        let mut rows: Vec<PlayerSheetMinutes> = self
            .roster
            .iter()
            .map(|player| PlayerSheetMinutes {
                player_name: player.clone(),
                minutes_played: minutes.get(player).copied().unwrap_or(0),
            })
            .collect();
        rows.sort_by(|a, b| b.minutes_played.cmp(&a.minutes_played));
        Ok(rows)
    }
}

// Inputs

#[derive(InputObject)]
pub struct CreateTournamentInput {
    pub season_id: uuid::Uuid,
    pub date: NaiveDate,
    pub place: String,
    pub team_name: String,
    pub roster: Vec<String>,
    pub opponents: Vec<String>,
    pub coach_notes: Option<String>,
}

#[derive(InputObject)]
pub struct UpdateTournamentInput {
    pub id: uuid::Uuid,
    pub season_id: uuid::Uuid,
    pub date: Option<NaiveDate>,
    pub place: Option<String>,
    pub team_name: Option<String>,
    pub roster: Option<Vec<String>>,
    pub opponents: Option<Vec<String>>,
    pub coach_notes: Option<String>,
}

#[derive(InputObject)]
pub struct UpdateCoachNotesInput {
    pub tournament_id: uuid::Uuid,
    pub season_id: uuid::Uuid,
    pub coach_notes: String,
}

/// One checked cell in the submitted participation form.
#[derive(InputObject, Clone)]
pub struct SlotFlagInput {
    pub opponent: String,
    pub period: i32,
    pub player: String,
}

#[derive(InputObject)]
pub struct ReconcileParticipationInput {
    pub tournament_id: uuid::Uuid,
    pub season_id: uuid::Uuid,
    /// The cells toggled "on"; every other visited cell becomes played=false.
    pub flags: Vec<SlotFlagInput>,
}

#[derive(InputObject)]
pub struct RemoveTournamentPlayerInput {
    pub tournament_id: uuid::Uuid,
    pub season_id: uuid::Uuid,
    pub player_name: String,
}

#[derive(InputObject)]
pub struct RemoveTournamentOpponentInput {
    pub tournament_id: uuid::Uuid,
    pub season_id: uuid::Uuid,
    pub opponent_name: String,
}
