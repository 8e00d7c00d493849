pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::auth::handlers as auth;
use crate::history::handlers as history;
use crate::predict::handlers as predict;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/health", get(health::health_handler))
        // Accounts
        .route("/api/register", post(auth::handle_register))
        .route("/api/login", post(auth::handle_login))
        .route("/api/profile", get(auth::handle_profile))
        // Engine
        .route("/api/predict", post(predict::handle_predict))
        .route("/api/analyze", post(predict::handle_analyze))
        // History & analytics
        .route("/api/history", get(history::handle_history))
        .route("/api/history/:id", get(history::handle_history_entry))
        .route("/api/analytics", get(history::handle_analytics))
        .route(
            "/api/analytics/summary",
            get(history::handle_analytics_summary),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests;
