use std::env;

use api::auth::Claims;
use api::AppState;
use async_graphql::{Request, Variables};
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

/// Connect to the test database named by TEST_DATABASE_URL, running the
/// migrations first. Returns None (and the test passes vacuously) when the
/// variable is unset, so the suite works in checkouts without Postgres.
pub async fn try_setup_test_db() -> Option<AppState> {
    let Ok(database_url) = env::var("TEST_DATABASE_URL") else {
        eprintln!("TEST_DATABASE_URL not set; skipping DB-backed test");
        return None;
    };

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("../../migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    Some(AppState::new(pool).expect("Failed to create AppState"))
}

/// Helper function to execute GraphQL queries and mutations
pub async fn execute_graphql(
    schema: &async_graphql::Schema<
        api::gql::QueryRoot,
        api::gql::MutationRoot,
        async_graphql::EmptySubscription,
    >,
    query: &str,
    variables: Option<Variables>,
    auth_claims: Option<Claims>,
) -> async_graphql::Response {
    let mut request = Request::new(query);

    if let Some(vars) = variables {
        request = request.variables(vars);
    }

    if let Some(claims) = auth_claims {
        request = request.data(claims);
    }

    schema.execute(request).await
}

/// Insert a coach and return their id plus ready-made JWT claims.
#[allow(dead_code)]
pub async fn create_test_user(state: &AppState) -> (Uuid, Claims) {
    let email = format!("coach-{}@test.com", Uuid::new_v4());

    let user_id: Uuid = sqlx::query_scalar(
        "INSERT INTO users (email, username, password_hash) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(&email)
    .bind("Test Coach")
    .bind("$2b$12$dummy.hash.for.testing")
    .fetch_one(&state.db)
    .await
    .expect("Failed to create test user");

    let claims = Claims {
        sub: user_id.to_string(),
        email,
        iat: chrono::Utc::now().timestamp(),
        exp: (chrono::Utc::now() + chrono::Duration::hours(1)).timestamp(),
    };

    (user_id, claims)
}

#[allow(dead_code)]
pub async fn create_test_season(state: &AppState, user_id: Uuid) -> Uuid {
    sqlx::query_scalar(
        "INSERT INTO seasons (user_id, name, year) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(user_id)
    .bind("Test Season")
    .bind("2024/25")
    .fetch_one(&state.db)
    .await
    .expect("Failed to create test season")
}

#[allow(dead_code)]
pub async fn create_test_tournament(
    state: &AppState,
    user_id: Uuid,
    season_id: Uuid,
    roster: &[&str],
    opponents: &[&str],
) -> Uuid {
    let roster: Vec<String> = roster.iter().map(|s| s.to_string()).collect();
    let opponents: Vec<String> = opponents.iter().map(|s| s.to_string()).collect();

    sqlx::query_scalar(
        r#"
        INSERT INTO tournaments (user_id, season_id, date, place, team_name, roster, opponents)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id
        "#,
    )
    .bind(user_id)
    .bind(season_id)
    .bind(chrono::NaiveDate::from_ymd_opt(2024, 5, 4).unwrap())
    .bind("Sports hall")
    .bind("Eagles U10")
    .bind(roster)
    .bind(opponents)
    .fetch_one(&state.db)
    .await
    .expect("Failed to create test tournament")
}

#[allow(dead_code)]
pub async fn matrix_row_count(state: &AppState, tournament_id: Uuid) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM tournament_matrix_entries WHERE tournament_id = $1")
        .bind(tournament_id)
        .fetch_one(&state.db)
        .await
        .expect("Failed to count matrix rows")
}
