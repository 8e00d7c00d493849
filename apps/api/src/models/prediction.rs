use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::engine::metrics::MetricSet;

/// One saved prediction. Append-only: never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub input_metrics: MetricSet,
    /// 0–100 scale.
    pub placement_probability: f64,
    pub readiness_score: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct PredictionRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub input_metrics: Json<MetricSet>,
    pub placement_probability: f64,
    pub readiness_score: f64,
    pub created_at: DateTime<Utc>,
}

impl From<PredictionRow> for PredictionRecord {
    fn from(row: PredictionRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            input_metrics: row.input_metrics.0,
            placement_probability: row.placement_probability,
            readiness_score: row.readiness_score,
            created_at: row.created_at,
        }
    }
}
