//! Static content tables for the roadmap and recommendation composer.
//!
//! Text lives here as data keyed by `MetricKey`; control flow elsewhere only
//! looks entries up.

use super::metrics::MetricKey;

#[derive(Debug, Clone, Copy)]
pub struct TaskTemplate {
    pub task: &'static str,
    pub category: &'static str,
    pub priority: u8,
}

/// `{current}` and `{ideal}` in `description` are substituted at compose time.
#[derive(Debug, Clone, Copy)]
pub struct RecommendationTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub action: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct SkillContent {
    pub key: MetricKey,
    pub tasks: &'static [TaskTemplate],
    pub recommendation: RecommendationTemplate,
    pub tip: Option<&'static str>,
}

const fn task(task: &'static str, category: &'static str, priority: u8) -> TaskTemplate {
    TaskTemplate {
        task,
        category,
        priority,
    }
}

pub const SKILL_CATALOG: &[SkillContent] = &[
    SkillContent {
        key: MetricKey::DsaScore,
        tasks: &[
            task("Practice Arrays and Sorting Problems (2 hours)", "DSA", 1),
            task("Learn Linked Lists and solve 5 problems", "DSA", 1),
            task("Study Trees and Graph Traversals", "DSA", 1),
            task("Practice Dynamic Programming basics", "DSA", 1),
            task("Solve 10 medium LeetCode problems", "DSA", 1),
        ],
        recommendation: RecommendationTemplate {
            title: "Strengthen DSA Skills",
            description: "Your DSA score is {current}, ideal is {ideal}. Practice coding problems daily on LeetCode, HackerRank.",
            icon: "💻",
            action: "Start with Arrays and Strings",
        },
        tip: Some("Solve 50+ LeetCode problems in next 30 days"),
    },
    SkillContent {
        key: MetricKey::Communication,
        tasks: &[
            task("Daily English Speaking Practice (20 mins)", "Communication", 2),
            task("Record yourself explaining a technical concept", "Communication", 2),
            task("Practice mock interview with a friend", "Communication", 2),
            task("Write a technical blog post", "Communication", 2),
            task("Join a public speaking group or online community", "Communication", 2),
        ],
        recommendation: RecommendationTemplate {
            title: "Enhance Communication Skills",
            description: "Communication level is {current}/10, ideal is {ideal}/10. Practice speaking and presentations.",
            icon: "🗣️",
            action: "Join public speaking practice",
        },
        tip: Some("Join Toastmasters or similar speaking club"),
    },
    SkillContent {
        key: MetricKey::Projects,
        tasks: &[
            task("Build 1 Mini React Project (Todo App)", "Projects", 3),
            task("Create a REST API with Node.js", "Projects", 3),
            task("Deploy your project to Vercel/Heroku", "Projects", 3),
            task("Add authentication to your project", "Projects", 3),
            task("Write documentation and README", "Projects", 3),
        ],
        recommendation: RecommendationTemplate {
            title: "Build More Projects",
            description: "You have {current} projects, ideal is {ideal}. Create real-world projects to showcase skills.",
            icon: "🚀",
            action: "Build a full-stack application",
        },
        tip: Some("Deploy 2 projects with live demos"),
    },
    SkillContent {
        key: MetricKey::Cgpa,
        tasks: &[
            task("Review current semester subjects and identify weak areas", "Academic", 4),
            task("Create a study schedule with 2 hours daily", "Academic", 4),
            task("Focus on improving grades in one subject this week", "Academic", 4),
            task("Attend extra classes or seek faculty help", "Academic", 4),
            task("Practice previous year question papers", "Academic", 4),
        ],
        recommendation: RecommendationTemplate {
            title: "Improve Academic Performance",
            description: "CGPA is {current}, ideal is {ideal}. Focus on core subjects and consistent study.",
            icon: "📚",
            action: "Create a study schedule",
        },
        tip: None,
    },
    SkillContent {
        key: MetricKey::Internships,
        tasks: &[
            task("Update your resume and LinkedIn profile", "Career", 5),
            task("Apply to 5 internships on LinkedIn/Internshala", "Career", 5),
            task("Network with alumni and professionals", "Career", 5),
            task("Prepare for common interview questions", "Career", 5),
            task("Research companies you want to apply to", "Career", 5),
        ],
        recommendation: RecommendationTemplate {
            title: "Gain Industry Experience",
            description: "You have {current} internships, ideal is {ideal}. Apply for internships to gain practical experience.",
            icon: "💼",
            action: "Update LinkedIn and apply",
        },
        tip: Some("Apply to 10+ internships this month"),
    },
];

/// Roadmap used when a profile has no gaps at all.
/// Entries are `(task, category, expected_improvement)`.
pub const GENERAL_TASKS: &[(&str, &str, &str)] = &[
    ("Continue practicing advanced DSA problems", "DSA", "Maintain"),
    ("Work on a complex project with new technologies", "Projects", "Enhance"),
    ("Prepare for system design interviews", "Career", "Advanced"),
    ("Contribute to open source projects", "Projects", "Portfolio"),
    ("Practice mock interviews with peers", "Communication", "Confidence"),
];

pub const STAY_UPDATED: RecommendationTemplate = RecommendationTemplate {
    title: "Stay Updated",
    description: "Keep learning new technologies and stay updated with industry trends.",
    icon: "📰",
    action: "Follow tech blogs",
};

pub const HIGH_RISK_TIPS: [&str; 4] = [
    "Focus intensively on core skill gaps",
    "Consider additional certification courses",
    "Seek mentorship from placed seniors",
    "Practice daily coding challenges",
];

pub const MODERATE_TIPS: [&str; 4] = [
    "Improve DSA consistency with daily practice",
    "Build 2 advanced React projects",
    "Practice Mock Interviews weekly",
    "Enhance LinkedIn presence",
];

pub const STRONG_TIPS: [&str; 4] = [
    "Prepare for technical interviews",
    "Research target companies",
    "Practice system design questions",
    "Build a strong GitHub portfolio",
];

pub fn content_for(key: MetricKey) -> Option<&'static SkillContent> {
    SKILL_CATALOG.iter().find(|c| c.key == key)
}
