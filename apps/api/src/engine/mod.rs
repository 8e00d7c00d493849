//! Readiness engine: metrics → normalized scores → gaps → roadmap and
//! recommendations.
//!
//! Every function here is pure. Output depends only on the `MetricSet` and
//! the static tables, never on time or prior requests.

pub mod catalog;
pub mod gaps;
pub mod insights;
pub mod metrics;
pub mod normalizer;
pub mod roadmap;
pub mod scoring;

use serde::{Deserialize, Serialize};

use self::gaps::{analyze_gaps, SkillGap};
use self::insights::{
    ai_recommendations, build_recommendations, skill_insights, Recommendation,
    RecommendationLevel,
};
use self::metrics::{MetricKey, MetricSet};
use self::normalizer::{ideal_scores, normalize, SkillScores};
use self::roadmap::{generate_roadmap, RoadmapTask};
use self::scoring::readiness_score;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillSummary {
    pub total_skills: usize,
    pub weak_skills_count: usize,
    pub strong_skills_count: usize,
    pub overall_status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillAnalysis {
    pub scores: SkillScores,
    pub ideal_scores: SkillScores,
    pub skill_gaps: Vec<SkillGap>,
    pub recommendations: Vec<Recommendation>,
    pub summary: SkillSummary,
}

/// Everything the engine derives without a placement probability.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisReport {
    pub readiness_score: f64,
    pub weak_skills: Vec<String>,
    pub skill_analysis: SkillAnalysis,
    pub roadmap_tasks: Vec<RoadmapTask>,
    pub strongest_skill: String,
    pub weakest_skill: String,
    pub placement_category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionSummary {
    pub placement_probability: f64,
    pub will_be_placed: bool,
    pub confidence: String,
}

/// Full bundle: the analysis plus every probability-dependent field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReadinessReport {
    #[serde(flatten)]
    pub analysis: AnalysisReport,
    /// Probability on a 0–100 scale, two decimals.
    pub placement_probability: f64,
    pub prediction: PredictionSummary,
    pub recommendation_level: RecommendationLevel,
    pub ai_recommendations: Vec<String>,
}

/// Runs the probability-independent part of the engine.
pub fn analyze(metrics: &MetricSet) -> AnalysisReport {
    let scores = normalize(metrics);
    let readiness = readiness_score(metrics);
    let gap_analysis = analyze_gaps(metrics);
    let roadmap_tasks = generate_roadmap(&gap_analysis.skill_gaps);
    let recommendations = build_recommendations(&gap_analysis.skill_gaps, readiness);
    let insights = skill_insights(&scores);
    let summary = summarize(gap_analysis.weak_skills.len(), readiness);

    AnalysisReport {
        readiness_score: readiness,
        weak_skills: gap_analysis.weak_skills,
        skill_analysis: SkillAnalysis {
            scores,
            ideal_scores: ideal_scores(),
            skill_gaps: gap_analysis.skill_gaps,
            recommendations,
            summary,
        },
        roadmap_tasks,
        strongest_skill: insights.strongest_skill,
        weakest_skill: insights.weakest_skill,
        placement_category: insights.placement_category,
    }
}

/// Runs the whole engine given a classifier probability in `[0, 1]`.
pub fn assess(metrics: &MetricSet, probability: f64) -> ReadinessReport {
    let probability = probability.clamp(0.0, 1.0);
    let analysis = analyze(metrics);
    let ai_recommendations = ai_recommendations(&analysis.skill_analysis.skill_gaps, probability);
    let placement_probability = round_to(probability * 100.0, 2);

    ReadinessReport {
        analysis,
        placement_probability,
        prediction: PredictionSummary {
            placement_probability,
            // the decision boundary itself is not a placement
            will_be_placed: probability > 0.5,
            confidence: confidence(probability).to_string(),
        },
        recommendation_level: RecommendationLevel::from_probability(probability),
        ai_recommendations,
    }
}

fn summarize(weak_skills_count: usize, readiness_score: f64) -> SkillSummary {
    let total_skills = MetricKey::ALL.len();
    let overall_status = match readiness_score {
        s if s >= 70.0 => "Ready",
        s if s >= 50.0 => "Needs Improvement",
        _ => "At Risk",
    };
    SkillSummary {
        total_skills,
        weak_skills_count,
        strong_skills_count: total_skills.saturating_sub(weak_skills_count),
        overall_status: overall_status.to_string(),
    }
}

/// How far the probability sits from the 0.5 decision boundary.
fn confidence(probability: f64) -> &'static str {
    if probability > 0.8 || probability < 0.2 {
        "High"
    } else if probability > 0.6 || probability < 0.4 {
        "Medium"
    } else {
        "Low"
    }
}

pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
