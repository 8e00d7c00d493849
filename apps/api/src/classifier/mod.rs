//! Placement classifier — pluggable probability backend.
//!
//! Default: `LogisticClassifier`, a fitted logistic regression (with its
//! standard scaler) loaded from a JSON artifact. Training happens elsewhere.
//!
//! `AppState` holds an `Option<Arc<dyn PlacementClassifier>>`; `None` means
//! no artifact could be loaded and prediction is unavailable.

use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::metrics::{MetricKey, MetricSet};
use crate::errors::AppError;

const FEATURES: usize = MetricKey::ALL.len();

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("could not read model artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid model artifact: {0}")]
    Invalid(String),
}

/// Implement this to swap the probability backend without touching handlers.
#[async_trait]
pub trait PlacementClassifier: Send + Sync {
    /// Probability of placement in `[0, 1]`.
    async fn predict(&self, metrics: &MetricSet) -> Result<f64, AppError>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

/// Logistic regression over the five metrics in declaration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticClassifier {
    pub scaler: StandardScaler,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LogisticClassifier {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ModelError> {
        let model: LogisticClassifier = serde_json::from_str(raw)?;
        model.validate()?;
        Ok(model)
    }

    fn validate(&self) -> Result<(), ModelError> {
        for (name, len) in [
            ("scaler.mean", self.scaler.mean.len()),
            ("scaler.scale", self.scaler.scale.len()),
            ("coefficients", self.coefficients.len()),
        ] {
            if len != FEATURES {
                return Err(ModelError::Invalid(format!(
                    "{name} has {len} values, expected {FEATURES}"
                )));
            }
        }
        if self.scaler.scale.iter().any(|s| *s == 0.0 || !s.is_finite()) {
            return Err(ModelError::Invalid(
                "scaler.scale must be finite and non-zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn probability(&self, metrics: &MetricSet) -> f64 {
        let z = MetricKey::ALL
            .iter()
            .enumerate()
            .map(|(i, key)| {
                let scaled = (metrics.value(*key) - self.scaler.mean[i]) / self.scaler.scale[i];
                scaled * self.coefficients[i]
            })
            .sum::<f64>()
            + self.intercept;
        1.0 / (1.0 + (-z).exp())
    }
}

#[async_trait]
impl PlacementClassifier for LogisticClassifier {
    async fn predict(&self, metrics: &MetricSet) -> Result<f64, AppError> {
        let probability = self.probability(metrics);
        if !probability.is_finite() {
            return Err(AppError::Internal(anyhow::anyhow!(
                "classifier produced a non-finite probability"
            )));
        }
        Ok(probability)
    }
}
