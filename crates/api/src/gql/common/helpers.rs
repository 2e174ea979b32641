use async_graphql::{Context, Error, Result};
use uuid::Uuid;

use crate::auth::Claims;
use crate::gql::error::ResultExt;
use infra::Scope;

/// The authenticated coach, from the JWT claims the middleware injected.
pub fn current_user_id(ctx: &Context<'_>) -> Result<Uuid> {
    let claims = ctx
        .data::<Claims>()
        .map_err(|_| Error::new("Authentication required"))?;
    Uuid::parse_str(&claims.sub).gql_err("Invalid user ID")
}

/// Scope for season-bound operations. The season is an explicit argument on
/// every query/mutation rather than server-side session state.
pub fn current_scope(ctx: &Context<'_>, season_id: Uuid) -> Result<Scope> {
    Ok(Scope::new(current_user_id(ctx)?, season_id))
}

/// Trim whitespace from submitted name lists and drop blanks, preserving
/// order.
pub fn clean_names(names: Vec<String>) -> Vec<String> {
    names
        .into_iter()
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::clean_names;

    #[test]
    fn clean_names_trims_and_drops_blanks() {
        let cleaned = clean_names(vec![
            " Ana ".to_string(),
            "".to_string(),
            "  ".to_string(),
            "Bea".to_string(),
        ]);
        assert_eq!(cleaned, vec!["Ana".to_string(), "Bea".to_string()]);
    }
}
