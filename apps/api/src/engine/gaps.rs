use serde::{Deserialize, Serialize};

use super::metrics::{MetricKey, MetricSet, MetricSpec};
use super::round_to;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Strict thresholds: above 30 is High, above 15 is Medium.
    pub fn from_gap_percentage(gap_percentage: f64) -> Self {
        if gap_percentage > 30.0 {
            Severity::High
        } else if gap_percentage > 15.0 {
            Severity::Medium
        } else {
            Severity::Low
        }
    }
}

/// Shortfall of one metric against its ideal value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillGap {
    pub skill_key: MetricKey,
    #[serde(rename = "skill")]
    pub display_label: String,
    pub current: f64,
    pub ideal: f64,
    #[serde(rename = "gap")]
    pub gap_absolute: f64,
    pub gap_percentage: f64,
    pub severity: Severity,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GapAnalysis {
    /// Labels of every metric below its ideal, in declaration order.
    pub weak_skills: Vec<String>,
    /// Gaps ranked by `gap_percentage`, largest first.
    pub skill_gaps: Vec<SkillGap>,
}

/// Compares each metric with its ideal value.
///
/// Metrics at or above the ideal produce nothing. Ranking is a stable sort,
/// so equal percentages keep declaration order.
pub fn analyze_gaps(metrics: &MetricSet) -> GapAnalysis {
    let mut skill_gaps: Vec<SkillGap> = MetricKey::ALL
        .iter()
        .filter_map(|key| gap_for(key.spec(), metrics.value(*key)))
        .collect();

    let weak_skills = skill_gaps.iter().map(|g| g.display_label.clone()).collect();

    skill_gaps.sort_by(|a, b| b.gap_percentage.total_cmp(&a.gap_percentage));

    GapAnalysis {
        weak_skills,
        skill_gaps,
    }
}

/// Gap of a single metric, or `None` when the ideal is met.
///
/// Severity is classified on the unrounded percentage, trimmed to nine
/// decimals so that float noise (`21/70` is `30.000000000000004`) does not
/// push an exact boundary over. The reported percentage is rounded to one
/// decimal.
fn gap_for(spec: &MetricSpec, current: f64) -> Option<SkillGap> {
    let ideal = spec.ideal_value;

    // A non-positive ideal is always satisfied.
    if ideal <= 0.0 || current >= ideal {
        return None;
    }

    let gap = ideal - current;
    let raw_percentage = gap / ideal * 100.0;

    Some(SkillGap {
        skill_key: spec.key,
        display_label: spec.label.to_string(),
        current,
        ideal,
        gap_absolute: round_to(gap, 2),
        gap_percentage: round_to(raw_percentage, 1),
        severity: Severity::from_gap_percentage(round_to(raw_percentage, 9)),
    })
}
