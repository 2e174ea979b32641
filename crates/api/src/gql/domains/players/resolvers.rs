use async_graphql::{Context, Object, Result};
use uuid::Uuid;

use crate::gql::common::helpers::current_scope;
use crate::gql::error::GqlError;
use crate::state::AppState;
use infra::repos::players::{self, CreatePlayer, UpdatePlayer};
use infra::Scope;

use super::types::{CreatePlayerInput, Player, UpdatePlayerInput};

/// Fetch a player row and verify it sits inside the caller's scope.
async fn load_owned(
    db: &sqlx::PgPool,
    scope: Scope,
    id: Uuid,
) -> Result<infra::models::PlayerRow> {
    let row = players::get_by_id(db, id)
        .await
        .map_err(GqlError::from)?
        .ok_or_else(|| GqlError::new("Player not found"))?;
    if row.user_id != scope.user_id || row.season_id != scope.season_id {
        return Err(GqlError::new("Player belongs to another coach or season").into());
    }
    Ok(row)
}

#[derive(Default)]
pub struct PlayerQuery;

#[Object]
impl PlayerQuery {
    /// The selected season's roster, ordered by name.
    async fn players(&self, ctx: &Context<'_>, season_id: Uuid) -> Result<Vec<Player>> {
        let scope = current_scope(ctx, season_id)?;
        let state = ctx.data::<AppState>()?;

        let rows = players::list_for_scope(&state.db, scope)
            .await
            .map_err(GqlError::from)?;
        Ok(rows.into_iter().map(Player::from).collect())
    }

    async fn player(&self, ctx: &Context<'_>, season_id: Uuid, id: Uuid) -> Result<Player> {
        let scope = current_scope(ctx, season_id)?;
        let state = ctx.data::<AppState>()?;

        let row = load_owned(&state.db, scope, id).await?;
        Ok(row.into())
    }
}

#[derive(Default)]
pub struct PlayerMutation;

#[Object]
impl PlayerMutation {
    async fn create_player(&self, ctx: &Context<'_>, input: CreatePlayerInput) -> Result<Player> {
        let scope = current_scope(ctx, input.season_id)?;
        let state = ctx.data::<AppState>()?;

        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(GqlError::new("Player name must not be empty").into());
        }

        let row = players::create(
            &state.db,
            CreatePlayer {
                scope,
                name,
                alias: input.alias,
                age_group: input.age_group,
                membership_number: input.membership_number,
                dob: input.dob,
                mobile_phone: input.mobile_phone,
                email: input.email,
            },
        )
        .await
        .map_err(GqlError::from)?;

        Ok(row.into())
    }

    /// Renames apply to the current roster only; tournament snapshots keep
    /// the name the player had on the day.
    async fn update_player(&self, ctx: &Context<'_>, input: UpdatePlayerInput) -> Result<Player> {
        let scope = current_scope(ctx, input.season_id)?;
        let state = ctx.data::<AppState>()?;

        load_owned(&state.db, scope, input.id).await?;

        let row = players::update(
            &state.db,
            input.id,
            UpdatePlayer {
                name: input.name.map(|n| n.trim().to_string()),
                alias: input.alias,
                age_group: input.age_group,
                membership_number: input.membership_number,
                dob: input.dob,
                mobile_phone: input.mobile_phone,
                email: input.email,
            },
        )
        .await
        .map_err(GqlError::from)?
        .ok_or_else(|| GqlError::new("Player not found"))?;

        Ok(row.into())
    }

    async fn delete_player(&self, ctx: &Context<'_>, season_id: Uuid, id: Uuid) -> Result<bool> {
        let scope = current_scope(ctx, season_id)?;
        let state = ctx.data::<AppState>()?;

        load_owned(&state.db, scope, id).await?;
        players::delete(&state.db, id).await.map_err(GqlError::from)?;
        Ok(true)
    }
}
