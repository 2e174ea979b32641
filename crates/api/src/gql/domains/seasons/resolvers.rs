use async_graphql::{Context, Object, Result};

use crate::gql::common::helpers::current_user_id;
use crate::gql::error::GqlError;
use crate::state::AppState;
use infra::repos::seasons::{self, CreateSeason};

use super::types::{CreateSeasonInput, Season};

#[derive(Default)]
pub struct SeasonQuery;

#[Object]
impl SeasonQuery {
    /// The coach's seasons, newest first. Which one is "selected" is a
    /// client concern — every scoped operation takes a seasonId argument.
    async fn seasons(&self, ctx: &Context<'_>) -> Result<Vec<Season>> {
        let user_id = current_user_id(ctx)?;
        let state = ctx.data::<AppState>()?;

        let rows = seasons::list_for_user(&state.db, user_id)
            .await
            .map_err(GqlError::from)?;
        Ok(rows.into_iter().map(Season::from).collect())
    }
}

#[derive(Default)]
pub struct SeasonMutation;

#[Object]
impl SeasonMutation {
    async fn create_season(&self, ctx: &Context<'_>, input: CreateSeasonInput) -> Result<Season> {
        let user_id = current_user_id(ctx)?;
        let state = ctx.data::<AppState>()?;

        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(GqlError::new("Season name must not be empty").into());
        }

        let row = seasons::create(
            &state.db,
            CreateSeason {
                user_id,
                name,
                year: input.year,
            },
        )
        .await
        .map_err(GqlError::from)?;

        Ok(row.into())
    }
}
