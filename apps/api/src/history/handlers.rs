//! Axum route handlers for prediction history and analytics.

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::auth::CurrentUser;
use crate::errors::AppError;
use crate::history::analytics::{
    analytics_report, analytics_summary, newest_first, AnalyticsReport, AnalyticsSummary,
};
use crate::models::prediction::PredictionRecord;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub status: &'static str,
    pub count: usize,
    pub data: Vec<PredictionRecord>,
}

#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub status: &'static str,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn success(data: T) -> Json<Self> {
        Json(Self {
            status: "success",
            data,
        })
    }
}

/// GET /api/history?limit=N
///
/// The caller's predictions, newest first. An unparseable or zero limit
/// falls back to the configured default.
pub async fn handle_history(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    query: Result<Query<HistoryQuery>, QueryRejection>,
) -> Result<Json<HistoryResponse>, AppError> {
    let requested = match query {
        Ok(Query(query)) => query.limit,
        Err(rejection) => {
            debug!("Ignoring history query: {}", rejection.body_text());
            None
        }
    };
    let limit = requested
        .filter(|l| *l > 0)
        .unwrap_or(state.config.history_limit);
    let records = state.store.list_predictions(user.id).await?;
    let data = newest_first(&records, limit);

    Ok(Json(HistoryResponse {
        status: "success",
        count: data.len(),
        data,
    }))
}

/// GET /api/history/:id
pub async fn handle_history_entry(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<DataResponse<PredictionRecord>>, AppError> {
    let record = state
        .store
        .find_prediction(user.id, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Prediction {id} not found")))?;
    Ok(DataResponse::success(record))
}

/// GET /api/analytics
pub async fn handle_analytics(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<DataResponse<AnalyticsReport>>, AppError> {
    let records = state.store.list_predictions(user.id).await?;
    Ok(DataResponse::success(analytics_report(&records)))
}

/// GET /api/analytics/summary
pub async fn handle_analytics_summary(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<DataResponse<AnalyticsSummary>>, AppError> {
    let records = state.store.list_predictions(user.id).await?;
    Ok(DataResponse::success(analytics_summary(&records)))
}
