//! Axum route handlers for registration, login and profile.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::{hash_password, verify_password, CurrentUser};
use crate::errors::AppError;
use crate::history::analytics::{averages, Averages};
use crate::models::user::{NewUser, PublicUser};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: &'static str,
    pub token: String,
    pub user: PublicUser,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user: PublicUser,
    pub stats: Option<Averages>,
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// POST /api/register
pub async fn handle_register(
    State(state): State<AppState>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    let Json(req) = body?;
    let name = req.name.trim().to_string();
    let email = normalize_email(&req.email);
    if name.is_empty() || email.is_empty() || req.password.is_empty() {
        return Err(AppError::Validation("All fields are required".to_string()));
    }

    let user = state
        .store
        .create_user(NewUser {
            name,
            email,
            password_hash: hash_password(&req.password),
        })
        .await?;
    let session = state.store.create_session(user.id).await?;
    info!("Registered user {}", user.id);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "Registration successful",
            token: session.token,
            user: PublicUser::from(&user),
        }),
    ))
}

/// POST /api/login
pub async fn handle_login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, AppError> {
    let Json(req) = body?;
    let email = normalize_email(&req.email);
    let user = state
        .store
        .find_by_email(&email)
        .await?
        .filter(|u| verify_password(&req.password, &u.password_hash))
        .ok_or(AppError::InvalidCredentials)?;
    let session = state.store.create_session(user.id).await?;

    Ok(Json(AuthResponse {
        message: "Login successful",
        token: session.token,
        user: PublicUser::from(&user),
    }))
}

/// GET /api/profile
pub async fn handle_profile(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<ProfileResponse>, AppError> {
    let records = state.store.list_predictions(user.id).await?;
    Ok(Json(ProfileResponse {
        user: PublicUser::from(&user),
        stats: averages(&records),
    }))
}
