use std::collections::{HashMap, HashSet};

use sqlx::PgPool;
use uuid::Uuid;

use infra::models::{MatrixEntryRow, TournamentRow};
use infra::repos::{matrix_entries, matrix_entries::NewMatrixEntry, tournaments};
use infra::Scope;

use crate::error::AppError;
use crate::stats::PERIODS;

/// Composite identity of one grid cell. A typed key rather than a joined
/// string, so names containing any separator cannot collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlotKey {
    pub opponent: String,
    pub period: i32,
    pub player: String,
}

impl SlotKey {
    pub fn new(opponent: impl Into<String>, period: i32, player: impl Into<String>) -> Self {
        Self {
            opponent: opponent.into(),
            period,
            player: player.into(),
        }
    }
}

/// The writes one reconcile pass needs: computed up front against a snapshot
/// of existing rows, then applied inside a single transaction.
#[derive(Debug, Default)]
pub struct ReconcilePlan {
    pub inserts: Vec<NewMatrixEntry>,
    /// (entry id, new played value) — update in place, never delete/reinsert.
    pub updates: Vec<(Uuid, bool)>,
    /// Redundant rows sharing an identity with an earlier row. The unique
    /// index makes these unlikely, but reconciliation owns the invariant.
    pub duplicate_ids: Vec<Uuid>,
}

impl ReconcilePlan {
    pub fn is_empty(&self) -> bool {
        self.inserts.is_empty() && self.updates.is_empty() && self.duplicate_ids.is_empty()
    }
}

pub fn validate_flags(flags: &[SlotKey]) -> Result<(), AppError> {
    for flag in flags {
        if !PERIODS.contains(&flag.period) {
            return Err(AppError::Validation(format!(
                "period must be between 1 and 4, got {}",
                flag.period
            )));
        }
        if flag.player.trim().is_empty() || flag.opponent.trim().is_empty() {
            return Err(AppError::Validation(
                "player and opponent names must not be empty".to_string(),
            ));
        }
    }
    Ok(())
}

/// Walk the full roster × opponents × periods cross product and decide, per
/// cell, whether to update the existing row or insert a fresh one. Cells
/// outside the current lists are left alone: removing a name from the
/// visible roster must not silently destroy per-period history.
pub fn plan_reconcile(
    tournament: &TournamentRow,
    existing: &[MatrixEntryRow],
    flags: &HashSet<SlotKey>,
) -> ReconcilePlan {
    let mut plan = ReconcilePlan::default();

    // First row per identity wins; later ones are dropped.
    let mut by_key: HashMap<SlotKey, (Uuid, bool)> = HashMap::new();
    for entry in existing {
        let key = SlotKey::new(
            entry.opponent_name.clone(),
            entry.period,
            entry.player_name.clone(),
        );
        if by_key.contains_key(&key) {
            plan.duplicate_ids.push(entry.id);
        } else {
            by_key.insert(key, (entry.id, entry.played));
        }
    }

    for opponent in &tournament.opponents {
        for period in PERIODS {
            for player in &tournament.roster {
                let key = SlotKey::new(opponent.clone(), period, player.clone());
                let desired = flags.contains(&key);
                match by_key.get(&key) {
                    Some(&(id, played)) => {
                        if played != desired {
                            plan.updates.push((id, desired));
                        }
                    }
                    None => plan.inserts.push(NewMatrixEntry {
                        tournament_id: tournament.id,
                        player_name: player.clone(),
                        opponent_name: opponent.clone(),
                        period,
                        played: desired,
                    }),
                }
            }
        }
    }

    plan
}

pub fn ensure_owner(tournament: &TournamentRow, scope: Scope) -> Result<(), AppError> {
    if tournament.user_id != scope.user_id || tournament.season_id != scope.season_id {
        return Err(AppError::Forbidden(
            "tournament belongs to another coach or season".to_string(),
        ));
    }
    Ok(())
}

/// Fetch a tournament and verify it sits inside the caller's scope.
pub async fn load_owned(
    pool: &PgPool,
    scope: Scope,
    tournament_id: Uuid,
) -> Result<TournamentRow, AppError> {
    let tournament = tournaments::get_by_id(pool, tournament_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("tournament {tournament_id}")))?;
    ensure_owner(&tournament, scope)?;
    Ok(tournament)
}

/// Bulk upsert of the full grid slice from a submitted form state. All
/// writes commit together or not at all; afterwards the grid restricted to
/// the current roster × opponents × periods equals `flags` exactly.
pub async fn reconcile(
    pool: &PgPool,
    scope: Scope,
    tournament_id: Uuid,
    flags: Vec<SlotKey>,
) -> Result<Vec<MatrixEntryRow>, AppError> {
    validate_flags(&flags)?;
    let tournament = load_owned(pool, scope, tournament_id).await?;
    let flag_set: HashSet<SlotKey> = flags.into_iter().collect();

    let mut tx = pool.begin().await?;

    let existing = matrix_entries::list_for_tournament(&mut *tx, tournament_id).await?;
    let plan = plan_reconcile(&tournament, &existing, &flag_set);

    matrix_entries::delete_by_ids(&mut *tx, &plan.duplicate_ids).await?;
    for (id, played) in &plan.updates {
        matrix_entries::update_played(&mut *tx, *id, *played).await?;
    }
    for entry in plan.inserts {
        matrix_entries::insert(&mut *tx, entry).await?;
    }

    tx.commit().await?;

    tracing::debug!(%tournament_id, "participation grid reconciled");
    Ok(matrix_entries::list_for_tournament(pool, tournament_id).await?)
}

/// Delete every matrix row for the player and drop the name from the roster
/// snapshot, atomically.
pub async fn remove_player(
    pool: &PgPool,
    scope: Scope,
    tournament_id: Uuid,
    player_name: &str,
) -> Result<TournamentRow, AppError> {
    if player_name.trim().is_empty() {
        return Err(AppError::Validation(
            "player name must not be empty".to_string(),
        ));
    }
    load_owned(pool, scope, tournament_id).await?;

    let mut tx = pool.begin().await?;
    matrix_entries::delete_for_player(&mut *tx, tournament_id, player_name).await?;
    let updated = tournaments::remove_from_roster(&mut *tx, tournament_id, player_name)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("tournament {tournament_id}")))?;
    tx.commit().await?;

    Ok(updated)
}

pub async fn remove_opponent(
    pool: &PgPool,
    scope: Scope,
    tournament_id: Uuid,
    opponent_name: &str,
) -> Result<TournamentRow, AppError> {
    if opponent_name.trim().is_empty() {
        return Err(AppError::Validation(
            "opponent name must not be empty".to_string(),
        ));
    }
    load_owned(pool, scope, tournament_id).await?;

    let mut tx = pool.begin().await?;
    matrix_entries::delete_for_opponent(&mut *tx, tournament_id, opponent_name).await?;
    let updated = tournaments::remove_from_opponents(&mut *tx, tournament_id, opponent_name)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("tournament {tournament_id}")))?;
    tx.commit().await?;

    Ok(updated)
}

/// Cascade delete: matrix rows go before the tournament row so no orphaned
/// entries can survive, whatever the FK setup.
pub async fn delete_tournament(
    pool: &PgPool,
    scope: Scope,
    tournament_id: Uuid,
) -> Result<(), AppError> {
    load_owned(pool, scope, tournament_id).await?;

    let mut tx = pool.begin().await?;
    matrix_entries::delete_for_tournament(&mut *tx, tournament_id).await?;
    tournaments::delete(&mut *tx, tournament_id).await?;
    tx.commit().await?;

    Ok(())
}
