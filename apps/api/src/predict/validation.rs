use serde_json::{Map, Value};

use crate::engine::metrics::{MetricKey, MetricSet};
use crate::errors::AppError;

/// What to do when a metric key is absent from the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingMetric {
    Reject,
    DefaultToZero,
}

/// Parses and range-checks the five metrics from a JSON payload.
///
/// `cgpa` coerces to a real; the others coerce to integers, truncating
/// fractional numbers. Numeric strings are accepted.
pub fn parse_metrics(payload: &Value, missing: MissingMetric) -> Result<MetricSet, AppError> {
    let object = payload
        .as_object()
        .ok_or_else(|| AppError::Validation("Request body must be a JSON object".to_string()))?;

    let metrics = MetricSet {
        cgpa: real_field(object, MetricKey::Cgpa, missing)?,
        dsa_score: int_field(object, MetricKey::DsaScore, missing)?,
        projects: int_field(object, MetricKey::Projects, missing)?,
        communication: int_field(object, MetricKey::Communication, missing)?,
        internships: int_field(object, MetricKey::Internships, missing)?,
    };
    check_ranges(&metrics)?;
    Ok(metrics)
}

fn lookup<'a>(
    object: &'a Map<String, Value>,
    key: MetricKey,
    missing: MissingMetric,
) -> Result<Option<&'a Value>, AppError> {
    match (object.get(key.as_str()), missing) {
        (Some(value), _) => Ok(Some(value)),
        (None, MissingMetric::DefaultToZero) => Ok(None),
        (None, MissingMetric::Reject) => Err(AppError::Validation(format!(
            "Missing field: {}",
            key.as_str()
        ))),
    }
}

fn real_field(
    object: &Map<String, Value>,
    key: MetricKey,
    missing: MissingMetric,
) -> Result<f64, AppError> {
    let Some(value) = lookup(object, key, missing)? else {
        return Ok(0.0);
    };
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed
        .filter(|v| v.is_finite())
        .ok_or_else(|| not_a_number(key, value))
}

fn int_field(
    object: &Map<String, Value>,
    key: MetricKey,
    missing: MissingMetric,
) -> Result<i32, AppError> {
    let Some(value) = lookup(object, key, missing)? else {
        return Ok(0);
    };
    let parsed = match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    parsed
        .and_then(|v| i32::try_from(v).ok())
        .ok_or_else(|| not_a_number(key, value))
}

fn not_a_number(key: MetricKey, value: &Value) -> AppError {
    AppError::Validation(format!("{} must be a number, got {value}", key.as_str()))
}

fn check_ranges(m: &MetricSet) -> Result<(), AppError> {
    let fail = |msg: &str| -> Result<(), AppError> {
        Err(AppError::Validation(msg.to_string()))
    };
    if !(0.0..=10.0).contains(&m.cgpa) {
        return fail("cgpa must be between 0 and 10");
    }
    if !(0..=100).contains(&m.dsa_score) {
        return fail("dsa_score must be between 0 and 100");
    }
    if m.projects < 0 {
        return fail("projects cannot be negative");
    }
    if !(0..=10).contains(&m.communication) {
        return fail("communication must be between 0 and 10");
    }
    if m.internships < 0 {
        return fail("internships cannot be negative");
    }
    Ok(())
}
