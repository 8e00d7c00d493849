use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::round_to;
use crate::models::prediction::PredictionRecord;

const TREND_POINTS: usize = 10;
const RECENT_PREDICTIONS: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendPoint {
    pub score: f64,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Averages {
    pub avg_placement_probability: f64,
    pub avg_readiness_score: f64,
    pub total_predictions: usize,
    pub latest_prediction: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
    Stable,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Improvement {
    pub value: f64,
    pub direction: Direction,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyticsReport {
    pub trend: Vec<TrendPoint>,
    pub averages: Option<Averages>,
    pub recent: Vec<PredictionRecord>,
    pub improvement: Improvement,
    pub total_predictions: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LatestPrediction {
    pub readiness_score: f64,
    pub placement_probability: f64,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyticsSummary {
    pub total_predictions: usize,
    pub average_readiness: f64,
    pub average_probability: f64,
    pub latest_prediction: Option<LatestPrediction>,
}

// All functions below take a user's records oldest first, as returned by
// `Store::list_predictions`.

/// Newest first, at most `limit` entries.
pub fn newest_first(records: &[PredictionRecord], limit: usize) -> Vec<PredictionRecord> {
    records.iter().rev().take(limit).cloned().collect()
}

pub fn averages(records: &[PredictionRecord]) -> Option<Averages> {
    let latest = records.iter().map(|r| r.created_at).max()?;
    let n = records.len() as f64;
    Some(Averages {
        avg_placement_probability: round_to(
            records.iter().map(|r| r.placement_probability).sum::<f64>() / n,
            2,
        ),
        avg_readiness_score: round_to(records.iter().map(|r| r.readiness_score).sum::<f64>() / n, 2),
        total_predictions: records.len(),
        latest_prediction: latest,
    })
}

/// Oldest first, capped at the first `TREND_POINTS` records.
pub fn trend(records: &[PredictionRecord]) -> Vec<TrendPoint> {
    records
        .iter()
        .take(TREND_POINTS)
        .map(|r| TrendPoint {
            score: r.readiness_score,
            date: r.created_at,
        })
        .collect()
}

/// Difference between the last and first point of a trend.
pub fn improvement(trend: &[TrendPoint]) -> Improvement {
    let value = match (trend.first(), trend.last()) {
        (Some(first), Some(last)) if trend.len() >= 2 => round_to(last.score - first.score, 2),
        _ => 0.0,
    };
    let direction = if value > 0.0 {
        Direction::Up
    } else if value < 0.0 {
        Direction::Down
    } else {
        Direction::Stable
    };
    Improvement { value, direction }
}

pub fn analytics_report(records: &[PredictionRecord]) -> AnalyticsReport {
    let trend = trend(records);
    let improvement = improvement(&trend);
    AnalyticsReport {
        averages: averages(records),
        recent: newest_first(records, RECENT_PREDICTIONS),
        improvement,
        total_predictions: records.len(),
        trend,
    }
}

pub fn analytics_summary(records: &[PredictionRecord]) -> AnalyticsSummary {
    let averages = averages(records);
    AnalyticsSummary {
        total_predictions: records.len(),
        average_readiness: averages.as_ref().map_or(0.0, |a| a.avg_readiness_score),
        average_probability: averages.as_ref().map_or(0.0, |a| a.avg_placement_probability),
        latest_prediction: records.last().map(|r| LatestPrediction {
            readiness_score: r.readiness_score,
            placement_probability: r.placement_probability,
            date: r.created_at,
        }),
    }
}
