use serde::{Deserialize, Serialize};

use crate::core::types::{
    ClusterCategory, ClusterId, Course, CriteriaKind, Onset, Requirement, Urgency,
};

/// A named syndrome: a bundle of symptoms believed to co-occur
///
/// Only `symptoms` and `triggers` feed the matching algorithm. Everything else
/// is descriptive payload that is passed through to exploration results
/// unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyndromeCluster {
    /// Unique identifier
    pub cluster_id: ClusterId,

    /// Human-readable name
    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternate_names: Vec<String>,

    /// Body-system domain
    pub category: ClusterCategory,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icd_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prevalence: Option<String>,

    /// Defining symptoms, in declaration order
    pub symptoms: Vec<ClusterSymptom>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnostic_criteria: Option<DiagnosticCriteria>,

    #[serde(default)]
    pub pathophysiology: Pathophysiology,

    #[serde(default)]
    pub affected_systems: Vec<AffectedSystem>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub typical_presentation: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub atypical_presentations: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temporal_pattern: Option<TemporalPattern>,

    /// Trigger phrases; a match adds a small bonus to the score
    #[serde(default)]
    pub triggers: Vec<String>,

    #[serde(default)]
    pub red_flags: Vec<RedFlag>,

    #[serde(default)]
    pub when_to_seek_care: CareGuidance,

    /// IDs of related clusters (these may not all exist in the catalog)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_clusters: Vec<String>,

    #[serde(default)]
    pub explanations: Explanations,
}

/// One symptom within a cluster definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterSymptom {
    pub symptom: String,
    pub requirement: Requirement,

    /// Approximate frequency in affected patients, e.g. "~70%"
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub frequency: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub characteristic_features: Vec<String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub differentiating_value: String,
}

impl ClusterSymptom {
    pub fn new(symptom: impl Into<String>, requirement: Requirement) -> Self {
        Self {
            symptom: symptom.into(),
            requirement,
            frequency: String::new(),
            characteristic_features: Vec::new(),
            differentiating_value: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticCriteria {
    pub kind: CriteriaKind,
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_count: Option<RequiredCount>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formal_criteria: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclusions: Vec<String>,
}

/// Minimum number of symptoms per tier demanded by formal criteria
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RequiredCount {
    pub required: u32,
    pub major: u32,
    pub minor: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pathophysiology {
    #[serde(default)]
    pub mechanism: String,
    #[serde(default)]
    pub pathway_steps: Vec<String>,
    #[serde(default)]
    pub underlying_causes: Vec<String>,
    #[serde(default)]
    pub contributing_factors: Vec<String>,
}

/// A body system a cluster affects, with the structures a viewer should highlight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AffectedSystem {
    pub system: String,
    #[serde(default)]
    pub structures: Vec<String>,
    #[serde(default)]
    pub structure_ids: Vec<String>,
    #[serde(default)]
    pub manifestations: Vec<String>,
    /// Hex colour, e.g. "#E74C3C"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight_color: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemporalPattern {
    pub onset: Onset,
    pub duration: String,
    pub course: Course,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub periodicity: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedFlag {
    pub sign: String,
    pub concern: String,
    pub action: String,
    pub urgency: Urgency,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareGuidance {
    pub urgency: Urgency,
    #[serde(default)]
    pub provider_type: String,
    #[serde(default)]
    pub reasoning: String,
    #[serde(default)]
    pub initial_evaluation: Vec<String>,
}

impl Default for CareGuidance {
    fn default() -> Self {
        Self {
            urgency: Urgency::Routine,
            provider_type: String::new(),
            reasoning: String::new(),
            initial_evaluation: Vec::new(),
        }
    }
}

/// The same explanation written at five reading levels, from plain-language
/// (level 1) to specialist (level 5)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Explanations {
    #[serde(default)]
    pub level1: String,
    #[serde(default)]
    pub level2: String,
    #[serde(default)]
    pub level3: String,
    #[serde(default)]
    pub level4: String,
    #[serde(default)]
    pub level5: String,
}

impl Explanations {
    /// Explanation for a reading level, clamped to 1..=5
    #[must_use]
    pub fn at_level(&self, level: u8) -> &str {
        match level {
            0 | 1 => &self.level1,
            2 => &self.level2,
            3 => &self.level3,
            4 => &self.level4,
            _ => &self.level5,
        }
    }
}

impl SyndromeCluster {
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: ClusterCategory) -> Self {
        Self {
            cluster_id: ClusterId::new(id),
            name: name.into(),
            alternate_names: Vec::new(),
            category,
            icd_code: None,
            prevalence: None,
            symptoms: Vec::new(),
            diagnostic_criteria: None,
            pathophysiology: Pathophysiology::default(),
            affected_systems: Vec::new(),
            typical_presentation: String::new(),
            atypical_presentations: Vec::new(),
            temporal_pattern: None,
            triggers: Vec::new(),
            red_flags: Vec::new(),
            when_to_seek_care: CareGuidance::default(),
            related_clusters: Vec::new(),
            explanations: Explanations::default(),
        }
    }

    #[must_use]
    pub fn with_symptoms(mut self, symptoms: Vec<ClusterSymptom>) -> Self {
        self.symptoms = symptoms;
        self
    }

    #[must_use]
    pub fn with_triggers<I, S>(mut self, triggers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.triggers = triggers.into_iter().map(Into::into).collect();
        self
    }

    /// Number of symptoms in a given requirement tier
    #[must_use]
    pub fn count_by_requirement(&self, requirement: Requirement) -> usize {
        self.symptoms
            .iter()
            .filter(|s| s.requirement == requirement)
            .count()
    }

    /// Required and major symptoms, in declaration order
    pub fn key_symptoms(&self) -> impl Iterator<Item = &ClusterSymptom> {
        self.symptoms
            .iter()
            .filter(|s| s.requirement.is_distinguishing())
    }
}
