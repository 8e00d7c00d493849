//! Axum route handlers for the readiness engine.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::auth::CurrentUser;
use crate::engine::{self, AnalysisReport, ReadinessReport};
use crate::errors::AppError;
use crate::models::prediction::PredictionRecord;
use crate::predict::validation::{parse_metrics, MissingMetric};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub status: &'static str,
    pub prediction_id: Uuid,
    #[serde(flatten)]
    pub report: ReadinessReport,
    pub saved_to_history: bool,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub status: &'static str,
    #[serde(flatten)]
    pub report: AnalysisReport,
}

/// POST /api/predict
///
/// Full pipeline: validate → classifier probability → engine → append to
/// the caller's history.
pub async fn handle_predict(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<PredictResponse>, AppError> {
    let metrics = parse_metrics(&body?.0, MissingMetric::Reject)?;

    let classifier = state
        .classifier
        .as_ref()
        .ok_or(AppError::ModelUnavailable)?;
    let probability = classifier.predict(&metrics).await?;
    let report = engine::assess(&metrics, probability);

    let record = PredictionRecord {
        id: Uuid::new_v4(),
        user_id: user.id,
        input_metrics: metrics,
        placement_probability: report.placement_probability,
        readiness_score: report.analysis.readiness_score,
        created_at: Utc::now(),
    };
    let prediction_id = record.id;
    let created_at = record.created_at;
    state.store.append_prediction(record).await?;

    info!(
        "Prediction {prediction_id} for user {}: probability {} readiness {}",
        user.id, report.placement_probability, report.analysis.readiness_score
    );

    Ok(Json(PredictResponse {
        status: "success",
        prediction_id,
        report,
        saved_to_history: true,
        timestamp: created_at,
    }))
}

/// POST /api/analyze
///
/// Engine output without a classifier call. Missing metrics count as 0 and
/// nothing is saved.
pub async fn handle_analyze(
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let metrics = parse_metrics(&body?.0, MissingMetric::DefaultToZero)?;
    Ok(Json(AnalyzeResponse {
        status: "success",
        report: engine::analyze(&metrics),
    }))
}
