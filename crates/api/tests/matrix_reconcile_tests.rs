mod common;

use api::gql::build_schema;
use async_graphql::Variables;
use common::*;
use serde_json::json;

const RECONCILE: &str = r#"
    mutation Reconcile($input: ReconcileParticipationInput!) {
        reconcileParticipation(input: $input) {
            playerName
            opponentName
            period
            played
        }
    }
"#;

const TOURNAMENT_WITH_MATRIX: &str = r#"
    query Tournament($seasonId: UUID!, $id: UUID!) {
        tournament(seasonId: $seasonId, id: $id) {
            roster
            opponents
            matrix {
                playerName
                opponentName
                period
                played
            }
        }
    }
"#;

#[tokio::test]
async fn reconcile_materializes_and_matches_submitted_flags() {
    let Some(state) = try_setup_test_db().await else {
        return;
    };
    let schema = build_schema(state.clone());

    let (user_id, claims) = create_test_user(&state).await;
    let season_id = create_test_season(&state, user_id).await;
    let tournament_id =
        create_test_tournament(&state, user_id, season_id, &["Ana", "Bea"], &["Team X"]).await;

    let variables = Variables::from_json(json!({
        "input": {
            "tournamentId": tournament_id.to_string(),
            "seasonId": season_id.to_string(),
            "flags": [
                { "opponent": "Team X", "period": 1, "player": "Ana" },
                { "opponent": "Team X", "period": 2, "player": "Ana" },
            ]
        }
    }));

    let response = execute_graphql(&schema, RECONCILE, Some(variables), Some(claims.clone())).await;
    assert!(
        response.errors.is_empty(),
        "reconcile should succeed: {:?}",
        response.errors
    );

    // 2 players × 1 opponent × 4 periods, every cell materialized.
    assert_eq!(matrix_row_count(&state, tournament_id).await, 8);

    let variables = Variables::from_json(json!({
        "seasonId": season_id.to_string(),
        "id": tournament_id.to_string(),
    }));
    let response =
        execute_graphql(&schema, TOURNAMENT_WITH_MATRIX, Some(variables), Some(claims)).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json().unwrap();
    let matrix = data["tournament"]["matrix"].as_array().unwrap();
    assert_eq!(matrix.len(), 8);

    let played: Vec<(&str, &str, i64)> = matrix
        .iter()
        .filter(|e| e["played"].as_bool().unwrap())
        .map(|e| {
            (
                e["playerName"].as_str().unwrap(),
                e["opponentName"].as_str().unwrap(),
                e["period"].as_i64().unwrap(),
            )
        })
        .collect();
    assert_eq!(played.len(), 2);
    assert!(played.contains(&("Ana", "Team X", 1)));
    assert!(played.contains(&("Ana", "Team X", 2)));
}

#[tokio::test]
async fn reconcile_twice_is_idempotent() {
    let Some(state) = try_setup_test_db().await else {
        return;
    };
    let schema = build_schema(state.clone());

    let (user_id, claims) = create_test_user(&state).await;
    let season_id = create_test_season(&state, user_id).await;
    let tournament_id =
        create_test_tournament(&state, user_id, season_id, &["Ana"], &["Team X", "Team Y"]).await;

    let variables = json!({
        "input": {
            "tournamentId": tournament_id.to_string(),
            "seasonId": season_id.to_string(),
            "flags": [{ "opponent": "Team Y", "period": 3, "player": "Ana" }]
        }
    });

    let first = execute_graphql(
        &schema,
        RECONCILE,
        Some(Variables::from_json(variables.clone())),
        Some(claims.clone()),
    )
    .await;
    assert!(first.errors.is_empty(), "{:?}", first.errors);
    let count_after_first = matrix_row_count(&state, tournament_id).await;

    let second = execute_graphql(
        &schema,
        RECONCILE,
        Some(Variables::from_json(variables)),
        Some(claims),
    )
    .await;
    assert!(second.errors.is_empty(), "{:?}", second.errors);

    // No duplicate rows on the second pass, and the grids agree.
    assert_eq!(matrix_row_count(&state, tournament_id).await, count_after_first);
    assert_eq!(first.data.into_json().unwrap(), second.data.into_json().unwrap());
}

#[tokio::test]
async fn reconcile_by_another_coach_is_rejected_without_mutation() {
    let Some(state) = try_setup_test_db().await else {
        return;
    };
    let schema = build_schema(state.clone());

    let (owner_id, _) = create_test_user(&state).await;
    let season_id = create_test_season(&state, owner_id).await;
    let tournament_id =
        create_test_tournament(&state, owner_id, season_id, &["Ana"], &["Team X"]).await;

    let (_, intruder_claims) = create_test_user(&state).await;

    let variables = Variables::from_json(json!({
        "input": {
            "tournamentId": tournament_id.to_string(),
            "seasonId": season_id.to_string(),
            "flags": [{ "opponent": "Team X", "period": 1, "player": "Ana" }]
        }
    }));

    let response = execute_graphql(&schema, RECONCILE, Some(variables), Some(intruder_claims)).await;

    assert!(!response.errors.is_empty(), "expected a scope error");
    assert_eq!(matrix_row_count(&state, tournament_id).await, 0);
}

#[tokio::test]
async fn invalid_period_is_rejected_without_mutation() {
    let Some(state) = try_setup_test_db().await else {
        return;
    };
    let schema = build_schema(state.clone());

    let (user_id, claims) = create_test_user(&state).await;
    let season_id = create_test_season(&state, user_id).await;
    let tournament_id =
        create_test_tournament(&state, user_id, season_id, &["Ana"], &["Team X"]).await;

    let variables = Variables::from_json(json!({
        "input": {
            "tournamentId": tournament_id.to_string(),
            "seasonId": season_id.to_string(),
            "flags": [{ "opponent": "Team X", "period": 5, "player": "Ana" }]
        }
    }));

    let response = execute_graphql(&schema, RECONCILE, Some(variables), Some(claims)).await;

    assert!(!response.errors.is_empty(), "expected a validation error");
    assert_eq!(matrix_row_count(&state, tournament_id).await, 0);
}

#[tokio::test]
async fn remove_player_clears_rows_and_roster_atomically() {
    let Some(state) = try_setup_test_db().await else {
        return;
    };
    let schema = build_schema(state.clone());

    let (user_id, claims) = create_test_user(&state).await;
    let season_id = create_test_season(&state, user_id).await;
    let tournament_id =
        create_test_tournament(&state, user_id, season_id, &["Ana", "Bea"], &["Team X"]).await;

    let variables = Variables::from_json(json!({
        "input": {
            "tournamentId": tournament_id.to_string(),
            "seasonId": season_id.to_string(),
            "flags": [{ "opponent": "Team X", "period": 1, "player": "Ana" }]
        }
    }));
    let response = execute_graphql(&schema, RECONCILE, Some(variables), Some(claims.clone())).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let mutation = r#"
        mutation Remove($input: RemoveTournamentPlayerInput!) {
            removeTournamentPlayer(input: $input) {
                roster
            }
        }
    "#;
    let variables = Variables::from_json(json!({
        "input": {
            "tournamentId": tournament_id.to_string(),
            "seasonId": season_id.to_string(),
            "playerName": "Ana"
        }
    }));
    let response = execute_graphql(&schema, mutation, Some(variables), Some(claims)).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json().unwrap();
    assert_eq!(data["removeTournamentPlayer"]["roster"], json!(["Bea"]));

    let ana_rows: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM tournament_matrix_entries WHERE tournament_id = $1 AND player_name = 'Ana'",
    )
    .bind(tournament_id)
    .fetch_one(&state.db)
    .await
    .unwrap();
    assert_eq!(ana_rows, 0);

    // Bea's slice of the grid survives.
    assert_eq!(matrix_row_count(&state, tournament_id).await, 4);
}

#[tokio::test]
async fn remove_opponent_clears_that_column_block() {
    let Some(state) = try_setup_test_db().await else {
        return;
    };
    let schema = build_schema(state.clone());

    let (user_id, claims) = create_test_user(&state).await;
    let season_id = create_test_season(&state, user_id).await;
    let tournament_id =
        create_test_tournament(&state, user_id, season_id, &["Ana"], &["Team X", "Team Y"]).await;

    let variables = Variables::from_json(json!({
        "input": {
            "tournamentId": tournament_id.to_string(),
            "seasonId": season_id.to_string(),
            "flags": []
        }
    }));
    let response = execute_graphql(&schema, RECONCILE, Some(variables), Some(claims.clone())).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert_eq!(matrix_row_count(&state, tournament_id).await, 8);

    let mutation = r#"
        mutation Remove($input: RemoveTournamentOpponentInput!) {
            removeTournamentOpponent(input: $input) {
                opponents
            }
        }
    "#;
    let variables = Variables::from_json(json!({
        "input": {
            "tournamentId": tournament_id.to_string(),
            "seasonId": season_id.to_string(),
            "opponentName": "Team X"
        }
    }));
    let response = execute_graphql(&schema, mutation, Some(variables), Some(claims)).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json().unwrap();
    assert_eq!(data["removeTournamentOpponent"]["opponents"], json!(["Team Y"]));
    assert_eq!(matrix_row_count(&state, tournament_id).await, 4);
}

#[tokio::test]
async fn delete_tournament_leaves_no_orphaned_entries() {
    let Some(state) = try_setup_test_db().await else {
        return;
    };
    let schema = build_schema(state.clone());

    let (user_id, claims) = create_test_user(&state).await;
    let season_id = create_test_season(&state, user_id).await;
    let tournament_id =
        create_test_tournament(&state, user_id, season_id, &["Ana"], &["Team X"]).await;

    let variables = Variables::from_json(json!({
        "input": {
            "tournamentId": tournament_id.to_string(),
            "seasonId": season_id.to_string(),
            "flags": [{ "opponent": "Team X", "period": 1, "player": "Ana" }]
        }
    }));
    let response = execute_graphql(&schema, RECONCILE, Some(variables), Some(claims.clone())).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let mutation = r#"
        mutation Delete($seasonId: UUID!, $id: UUID!) {
            deleteTournament(seasonId: $seasonId, id: $id)
        }
    "#;
    let variables = Variables::from_json(json!({
        "seasonId": season_id.to_string(),
        "id": tournament_id.to_string(),
    }));
    let response = execute_graphql(&schema, mutation, Some(variables), Some(claims)).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    assert_eq!(matrix_row_count(&state, tournament_id).await, 0);

    let tournaments: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tournaments WHERE id = $1")
        .bind(tournament_id)
        .fetch_one(&state.db)
        .await
        .unwrap();
    assert_eq!(tournaments, 0);
}
