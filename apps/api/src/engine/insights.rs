use serde::{Deserialize, Serialize};

use super::catalog::{
    content_for, RecommendationTemplate, HIGH_RISK_TIPS, MODERATE_TIPS, STAY_UPDATED, STRONG_TIPS,
};
use super::gaps::{Severity, SkillGap};
use super::metrics::MetricKey;
use super::normalizer::SkillScores;

const MAX_RECOMMENDATIONS: usize = 3;
const MAX_AI_RECOMMENDATIONS: usize = 6;
const SKILL_TIP_GAPS: usize = 2;
const STAY_UPDATED_MIN_SCORE: f64 = 70.0;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    #[serde(rename = "priority")]
    pub severity: Severity,
    pub icon: String,
    pub action: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RiskTier {
    #[serde(rename = "High Risk")]
    HighRisk,
    Moderate,
    #[serde(rename = "Strong Candidate")]
    StrongCandidate,
}

impl RiskTier {
    /// `< 0.5` high risk, `0.5..=0.75` moderate, above that strong.
    pub fn from_probability(probability: f64) -> Self {
        if probability < 0.5 {
            RiskTier::HighRisk
        } else if probability <= 0.75 {
            RiskTier::Moderate
        } else {
            RiskTier::StrongCandidate
        }
    }

    fn tips(&self) -> &'static [&'static str; 4] {
        match self {
            RiskTier::HighRisk => &HIGH_RISK_TIPS,
            RiskTier::Moderate => &MODERATE_TIPS,
            RiskTier::StrongCandidate => &STRONG_TIPS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationLevel {
    pub level: RiskTier,
    pub color: String,
    pub icon: String,
    pub message: String,
    pub urgency: String,
}

impl RecommendationLevel {
    pub fn from_probability(probability: f64) -> Self {
        let level = RiskTier::from_probability(probability);
        let (color, icon, message, urgency) = match level {
            RiskTier::HighRisk => (
                "#f87171",
                "⚠️",
                "Immediate action required. Focus on skill improvement.",
                "Critical",
            ),
            RiskTier::Moderate => (
                "#fbbf24",
                "📈",
                "Good potential. Targeted improvements needed.",
                "Medium",
            ),
            RiskTier::StrongCandidate => (
                "#4ade80",
                "🎯",
                "Excellent profile. Focus on interview preparation.",
                "Low",
            ),
        };
        Self {
            level,
            color: color.to_string(),
            icon: icon.to_string(),
            message: message.to_string(),
            urgency: urgency.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillInsights {
    pub strongest_skill: String,
    pub strongest_score: f64,
    pub weakest_skill: String,
    pub weakest_score: f64,
    pub placement_category: String,
}

/// Turns the three largest gaps into templated recommendations. Profiles with
/// fewer than three gaps and a score of at least 70 get a "Stay Updated" filler.
pub fn build_recommendations(skill_gaps: &[SkillGap], readiness_score: f64) -> Vec<Recommendation> {
    let mut recommendations: Vec<Recommendation> = skill_gaps
        .iter()
        .take(MAX_RECOMMENDATIONS)
        .filter_map(|gap| {
            let content = content_for(gap.skill_key)?;
            Some(render(&content.recommendation, gap.severity, Some(gap)))
        })
        .collect();

    if readiness_score >= STAY_UPDATED_MIN_SCORE && recommendations.len() < MAX_RECOMMENDATIONS {
        recommendations.push(render(&STAY_UPDATED, Severity::Low, None));
    }

    recommendations
}

fn render(
    template: &RecommendationTemplate,
    severity: Severity,
    gap: Option<&SkillGap>,
) -> Recommendation {
    let description = match gap {
        Some(gap) => template
            .description
            .replace("{current}", &display_value(gap.current))
            .replace("{ideal}", &display_value(gap.ideal)),
        None => template.description.to_string(),
    };
    Recommendation {
        title: template.title.to_string(),
        description,
        severity,
        icon: template.icon.to_string(),
        action: template.action.to_string(),
    }
}

/// Whole numbers print without a fractional part.
fn display_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

/// Four tier tips followed by one tip per top-two gap, at most six entries.
pub fn ai_recommendations(skill_gaps: &[SkillGap], probability: f64) -> Vec<String> {
    RiskTier::from_probability(probability)
        .tips()
        .iter()
        .copied()
        .chain(
            skill_gaps
                .iter()
                .take(SKILL_TIP_GAPS)
                .filter_map(|gap| content_for(gap.skill_key).and_then(|c| c.tip)),
        )
        .take(MAX_AI_RECOMMENDATIONS)
        .map(str::to_string)
        .collect()
}

/// Strongest/weakest metric by normalized percentage (first declared wins a
/// tie) and a company tier from the mean percentage.
pub fn skill_insights(scores: &SkillScores) -> SkillInsights {
    let mut strongest = (MetricKey::ALL[0], scores.get(MetricKey::ALL[0]));
    let mut weakest = strongest;
    for (key, value) in scores.iter().skip(1) {
        if value > strongest.1 {
            strongest = (key, value);
        }
        if value < weakest.1 {
            weakest = (key, value);
        }
    }

    SkillInsights {
        strongest_skill: strongest.0.label().to_string(),
        strongest_score: strongest.1,
        weakest_skill: weakest.0.label().to_string(),
        weakest_score: weakest.1,
        placement_category: placement_category(scores.mean()).to_string(),
    }
}

pub fn placement_category(mean_percentage: f64) -> &'static str {
    match mean_percentage {
        m if m >= 75.0 => "Tier-1 Companies",
        m if m >= 60.0 => "Tier-2 Companies",
        m if m >= 45.0 => "Startups & Mid-size",
        _ => "Needs Significant Improvement",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::gaps::analyze_gaps;
    use crate::engine::metrics::MetricSet;
    use crate::engine::normalizer::normalize;

    fn metrics(cgpa: f64, dsa: i32, projects: i32, comm: i32, internships: i32) -> MetricSet {
        MetricSet {
            cgpa,
            dsa_score: dsa,
            projects,
            communication: comm,
            internships,
        }
    }

    #[test]
    fn test_recommendations_take_top_three_gaps() {
        let gaps = analyze_gaps(&metrics(6.0, 35, 1, 6, 0)).skill_gaps;
        let recs = build_recommendations(&gaps, 40.0);
        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0].title, "Gain Industry Experience");
        assert_eq!(recs[1].title, "Build More Projects");
        assert_eq!(recs[2].title, "Strengthen DSA Skills");
        assert_eq!(recs[0].severity, Severity::High);
    }

    #[test]
    fn test_recommendation_description_is_filled() {
        let gaps = analyze_gaps(&metrics(6.5, 80, 3, 7, 2)).skill_gaps;
        let recs = build_recommendations(&gaps, 60.0);
        assert_eq!(
            recs[0].description,
            "CGPA is 6.5, ideal is 7.5. Focus on core subjects and consistent study."
        );
    }

    #[test]
    fn test_stay_updated_added_for_strong_profiles() {
        let gaps = analyze_gaps(&metrics(9.0, 90, 5, 6, 3)).skill_gaps;
        let recs = build_recommendations(&gaps, 85.0);
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[1].title, "Stay Updated");
        assert_eq!(recs[1].severity, Severity::Low);
    }

    #[test]
    fn test_no_filler_below_seventy() {
        let recs = build_recommendations(&[], 69.99);
        assert!(recs.is_empty());
    }

    #[test]
    fn test_filler_at_exactly_seventy() {
        let recs = build_recommendations(&[], 70.0);
        assert_eq!(recs.len(), 1);
    }

    #[test]
    fn test_risk_tier_boundaries() {
        assert_eq!(RiskTier::from_probability(0.49), RiskTier::HighRisk);
        assert_eq!(RiskTier::from_probability(0.5), RiskTier::Moderate);
        assert_eq!(RiskTier::from_probability(0.75), RiskTier::Moderate);
        assert_eq!(RiskTier::from_probability(0.76), RiskTier::StrongCandidate);
    }

    #[test]
    fn test_level_bundle_serialization() {
        let level = RecommendationLevel::from_probability(0.9);
        let value = serde_json::to_value(&level).unwrap();
        assert_eq!(value["level"], "Strong Candidate");
        assert_eq!(value["urgency"], "Low");
        assert_eq!(value["color"], "#4ade80");
    }

    #[test]
    fn test_ai_recommendations_append_skill_tips() {
        let gaps = analyze_gaps(&metrics(8.0, 35, 3, 4, 2)).skill_gaps;
        // dsa 50%, communication 42.9%
        let tips = ai_recommendations(&gaps, 0.3);
        assert_eq!(tips.len(), 6);
        assert_eq!(tips[0], "Focus intensively on core skill gaps");
        assert_eq!(tips[4], "Solve 50+ LeetCode problems in next 30 days");
        assert_eq!(tips[5], "Join Toastmasters or similar speaking club");
    }

    #[test]
    fn test_ai_recommendations_skip_skills_without_tip() {
        let gaps = analyze_gaps(&metrics(5.0, 70, 3, 7, 2)).skill_gaps;
        let tips = ai_recommendations(&gaps, 0.6);
        assert_eq!(tips.len(), 4);
        assert_eq!(tips[0], "Improve DSA consistency with daily practice");
    }

    #[test]
    fn test_strongest_and_weakest() {
        let insights = skill_insights(&normalize(&metrics(9.0, 40, 3, 6, 1)));
        assert_eq!(insights.strongest_skill, "CGPA");
        assert_eq!(insights.weakest_skill, "Internships");
        assert_ne!(insights.strongest_skill, insights.weakest_skill);
    }

    #[test]
    fn test_all_equal_scores_tie_to_first_declared() {
        let scores = normalize(&metrics(10.0, 100, 6, 10, 4));
        let insights = skill_insights(&scores);
        assert_eq!(insights.strongest_skill, "CGPA");
        assert_eq!(insights.weakest_skill, "CGPA");
        assert_eq!(insights.placement_category, "Tier-1 Companies");
    }

    #[test]
    fn test_placement_category_thresholds() {
        assert_eq!(placement_category(75.0), "Tier-1 Companies");
        assert_eq!(placement_category(74.9), "Tier-2 Companies");
        assert_eq!(placement_category(60.0), "Tier-2 Companies");
        assert_eq!(placement_category(45.0), "Startups & Mid-size");
        assert_eq!(placement_category(44.9), "Needs Significant Improvement");
    }
}
