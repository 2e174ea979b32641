use async_graphql::{Context, Object, Result};

use crate::gql::common::helpers::current_user_id;
use crate::gql::error::GqlError;
use crate::state::AppState;
use infra::repos::users;

use super::types::User;

#[derive(Default)]
pub struct AuthQuery;

#[Object]
impl AuthQuery {
    /// Get the current authenticated user's information
    async fn me(&self, ctx: &Context<'_>) -> Result<User> {
        let user_id = current_user_id(ctx)?;
        let state = ctx.data::<AppState>()?;

        let user = users::get_by_id(&state.db, user_id)
            .await
            .map_err(GqlError::from)?
            .ok_or_else(|| GqlError::new("User not found"))?;

        Ok(user.into())
    }
}
