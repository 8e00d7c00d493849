use serde::{Deserialize, Serialize};

use super::catalog::{content_for, GENERAL_TASKS};
use super::gaps::SkillGap;

/// Maximum number of tasks in a generated roadmap.
pub const MAX_ROADMAP_TASKS: usize = 7;
/// Tasks pulled from the catalog for each gap.
pub const TASKS_PER_GAP: usize = 3;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoadmapTask {
    pub day: u32,
    pub task: String,
    pub category: String,
    pub priority: u8,
    pub skill_focus: String,
    pub expected_improvement: String,
}

/// Builds a day-by-day plan from ranked gaps.
///
/// Walks `skill_gaps` in the given order, taking the first three catalog
/// tasks for each skill and numbering days 1, 2, 3… per task. The plan is
/// truncated to `MAX_ROADMAP_TASKS`. No gaps yields the general plan.
///
/// `expected_improvement` is formatted from the unrounded gap.
pub fn generate_roadmap(skill_gaps: &[SkillGap]) -> Vec<RoadmapTask> {
    if skill_gaps.is_empty() {
        return general_roadmap();
    }

    skill_gaps
        .iter()
        .filter_map(|gap| content_for(gap.skill_key).map(|content| (gap, content)))
        .flat_map(|(gap, content)| {
            content
                .tasks
                .iter()
                .take(TASKS_PER_GAP)
                .map(move |template| (gap, template))
        })
        .take(MAX_ROADMAP_TASKS)
        .zip(1u32..)
        .map(|((gap, template), day)| RoadmapTask {
            day,
            task: template.task.to_string(),
            category: template.category.to_string(),
            priority: template.priority,
            skill_focus: gap.display_label.clone(),
            expected_improvement: format!("+{:.0} points", gap.ideal - gap.current),
        })
        .collect()
}

fn general_roadmap() -> Vec<RoadmapTask> {
    GENERAL_TASKS
        .iter()
        .zip(1u32..)
        .map(|(&(task, category, improvement), day)| RoadmapTask {
            day,
            task: task.to_string(),
            category: category.to_string(),
            priority: day as u8,
            skill_focus: "General".to_string(),
            expected_improvement: improvement.to_string(),
        })
        .collect()
}
