use super::metrics::{MetricKey, MetricSet, MetricSpec};
use super::round_to;

/// Composite readiness score on a 0–100 scale.
///
/// Each metric is divided by its scorer reference maximum, clamped to
/// [0, 1], then combined by the weights in the metric table:
/// `100 * Σ normalized_i * weight_i`, rounded to two decimals.
pub fn readiness_score(metrics: &MetricSet) -> f64 {
    let weighted: f64 = MetricKey::ALL
        .iter()
        .map(|key| weighted_term(key.spec(), metrics.value(*key)))
        .sum();

    round_to((weighted * 100.0).clamp(0.0, 100.0), 2)
}

/// One metric's contribution before scaling. A non-positive reference
/// maximum contributes nothing.
fn weighted_term(spec: &MetricSpec, value: f64) -> f64 {
    if spec.score_max <= 0.0 {
        return 0.0;
    }
    (value / spec.score_max).clamp(0.0, 1.0) * spec.weight
}
