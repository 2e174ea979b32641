use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::PasswordService;
use crate::error::AppError;
use crate::state::AppState;
use infra::repos::users::{self, CreateUser};

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct UserBody {
    pub id: Uuid,
    pub email: String,
    pub username: String,
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserBody,
}

pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let email = req.email.trim().to_lowercase();
    let username = req.username.trim().to_string();

    if email.is_empty() || !email.contains('@') {
        return Err(AppError::Validation("a valid email is required".to_string()));
    }
    if username.is_empty() {
        return Err(AppError::Validation("username is required".to_string()));
    }
    if req.password.len() < 8 {
        return Err(AppError::Validation(
            "password must be at least 8 characters".to_string(),
        ));
    }

    if users::get_by_email(&state.db, &email).await?.is_some() {
        return Err(AppError::BadRequest("email already registered".to_string()));
    }

    let password_hash = PasswordService::hash(&req.password)?;
    let user = users::create(
        &state.db,
        CreateUser {
            email,
            username,
            password_hash,
        },
    )
    .await?;

    let token = state.jwt_service().create_token(user.id, user.email.clone())?;
    tracing::info!(user_id = %user.id, "new coach registered");

    Ok(Json(AuthResponse {
        token,
        user: UserBody {
            id: user.id,
            email: user.email,
            username: user.username,
        },
    }))
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let email = req.email.trim().to_lowercase();

    // Same error for unknown email and wrong password.
    let invalid = || AppError::Unauthorized("invalid credentials".to_string());

    let user = users::get_by_email(&state.db, &email)
        .await?
        .ok_or_else(invalid)?;

    if !PasswordService::verify(&req.password, &user.password_hash)? {
        return Err(invalid());
    }

    let token = state.jwt_service().create_token(user.id, user.email.clone())?;

    Ok(Json(AuthResponse {
        token,
        user: UserBody {
            id: user.id,
            email: user.email,
            username: user.username,
        },
    }))
}
