pub mod handlers;

use axum::{async_trait, extract::FromRequestParts, http::header, http::request::Parts};
use sha2::{Digest, Sha256};

use crate::errors::AppError;
use crate::models::user::User;
use crate::state::AppState;

/// SHA-256 hex digest of the password.
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

pub fn verify_password(password: &str, password_hash: &str) -> bool {
    hash_password(password) == password_hash
}

/// Extracts the token from an `Authorization: Bearer <token>` header value.
pub fn bearer_token(header_value: &str) -> Option<&str> {
    header_value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// The user owning the request's session token. Rejects with 401.
pub struct CurrentUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, AppError> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(bearer_token)
            .ok_or(AppError::Unauthorized)?;

        state
            .store
            .resolve_session(token)
            .await?
            .map(CurrentUser)
            .ok_or(AppError::Unauthorized)
    }
}
