use serde::{Deserialize, Serialize};

use super::metrics::{MetricKey, MetricSet};
use super::round_to;

/// Per-metric percentages (0–100), serialized as an object keyed by metric.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SkillScores {
    pub cgpa: f64,
    pub dsa_score: f64,
    pub projects: f64,
    pub communication: f64,
    pub internships: f64,
}

impl SkillScores {
    fn from_fn(f: impl Fn(MetricKey) -> f64) -> Self {
        Self {
            cgpa: f(MetricKey::Cgpa),
            dsa_score: f(MetricKey::DsaScore),
            projects: f(MetricKey::Projects),
            communication: f(MetricKey::Communication),
            internships: f(MetricKey::Internships),
        }
    }

    pub fn get(&self, key: MetricKey) -> f64 {
        match key {
            MetricKey::Cgpa => self.cgpa,
            MetricKey::DsaScore => self.dsa_score,
            MetricKey::Projects => self.projects,
            MetricKey::Communication => self.communication,
            MetricKey::Internships => self.internships,
        }
    }

    /// Iterates in metric declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (MetricKey, f64)> + '_ {
        MetricKey::ALL.into_iter().map(move |k| (k, self.get(k)))
    }

    pub fn mean(&self) -> f64 {
        self.iter().map(|(_, v)| v).sum::<f64>() / MetricKey::ALL.len() as f64
    }
}

/// Maps each raw metric to a percentage of its maximum, clamped to [0, 100]
/// and rounded to one decimal.
pub fn normalize(metrics: &MetricSet) -> SkillScores {
    SkillScores::from_fn(|key| percentage_of(metrics.value(key), key.spec().max_value))
}

/// Each ideal value as a percentage of the metric maximum.
pub fn ideal_scores() -> SkillScores {
    SkillScores::from_fn(|key| {
        let spec = key.spec();
        percentage_of(spec.ideal_value, spec.max_value)
    })
}

/// A non-positive maximum maps everything to 0.
fn percentage_of(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    round_to((value / max * 100.0).clamp(0.0, 100.0), 1)
}
