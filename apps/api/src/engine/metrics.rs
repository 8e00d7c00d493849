use serde::{Deserialize, Serialize};

/// The five self-reported metrics, in declaration order.
///
/// Declaration order matters: every tie-break in the engine (gap ranking,
/// strongest/weakest skill) falls back to the order of `MetricKey::ALL`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MetricKey {
    Cgpa,
    DsaScore,
    Projects,
    Communication,
    Internships,
}

impl MetricKey {
    pub const ALL: [MetricKey; 5] = [
        MetricKey::Cgpa,
        MetricKey::DsaScore,
        MetricKey::Projects,
        MetricKey::Communication,
        MetricKey::Internships,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKey::Cgpa => "cgpa",
            MetricKey::DsaScore => "dsa_score",
            MetricKey::Projects => "projects",
            MetricKey::Communication => "communication",
            MetricKey::Internships => "internships",
        }
    }

    pub fn spec(&self) -> &'static MetricSpec {
        // METRIC_SPECS is declared in the same order as ALL
        let spec = &METRIC_SPECS[*self as usize];
        debug_assert_eq!(spec.key, *self);
        spec
    }

    pub fn label(&self) -> &'static str {
        self.spec().label
    }
}

/// Static per-metric configuration.
#[derive(Debug, Clone, Copy)]
pub struct MetricSpec {
    pub key: MetricKey,
    pub label: &'static str,
    /// Upper bound used when normalizing to a 0–100 percentage.
    pub max_value: f64,
    /// Reference maximum used by the readiness scorer.
    pub score_max: f64,
    /// Target value considered sufficient; anything below is a gap.
    pub ideal_value: f64,
    pub weight: f64,
}

pub const METRIC_SPECS: [MetricSpec; 5] = [
    MetricSpec {
        key: MetricKey::Cgpa,
        label: "CGPA",
        max_value: 10.0,
        score_max: 10.0,
        ideal_value: 7.5,
        weight: 0.25,
    },
    MetricSpec {
        key: MetricKey::DsaScore,
        label: "DSA Skills",
        max_value: 100.0,
        score_max: 100.0,
        ideal_value: 70.0,
        weight: 0.25,
    },
    MetricSpec {
        key: MetricKey::Projects,
        label: "Projects",
        max_value: 6.0,
        score_max: 5.0,
        ideal_value: 3.0,
        weight: 0.20,
    },
    MetricSpec {
        key: MetricKey::Communication,
        label: "Communication",
        max_value: 10.0,
        score_max: 10.0,
        ideal_value: 7.0,
        weight: 0.15,
    },
    MetricSpec {
        key: MetricKey::Internships,
        label: "Internships",
        max_value: 4.0,
        score_max: 3.0,
        ideal_value: 2.0,
        weight: 0.15,
    },
];

/// Raw metrics as submitted by a student. Created per request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MetricSet {
    pub cgpa: f64,
    pub dsa_score: i32,
    pub projects: i32,
    pub communication: i32,
    pub internships: i32,
}

impl MetricSet {
    pub fn value(&self, key: MetricKey) -> f64 {
        match key {
            MetricKey::Cgpa => self.cgpa,
            MetricKey::DsaScore => self.dsa_score as f64,
            MetricKey::Projects => self.projects as f64,
            MetricKey::Communication => self.communication as f64,
            MetricKey::Internships => self.internships as f64,
        }
    }
}
