use serde::{Deserialize, Serialize};

/// Unique identifier for a cluster in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClusterId(pub String);

impl ClusterId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ClusterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Body-system domain a cluster belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClusterCategory {
    Cardiovascular,
    Respiratory,
    Gastrointestinal,
    Neurologic,
    Musculoskeletal,
    Metabolic,
    Endocrine,
    Immunologic,
    Hematologic,
    Renal,
    Dermatologic,
    Psychiatric,
    Multisystem,
}

impl ClusterCategory {
    pub const ALL: [Self; 13] = [
        Self::Cardiovascular,
        Self::Respiratory,
        Self::Gastrointestinal,
        Self::Neurologic,
        Self::Musculoskeletal,
        Self::Metabolic,
        Self::Endocrine,
        Self::Immunologic,
        Self::Hematologic,
        Self::Renal,
        Self::Dermatologic,
        Self::Psychiatric,
        Self::Multisystem,
    ];

    /// Lowercase identifier as it appears in catalog files
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cardiovascular => "cardiovascular",
            Self::Respiratory => "respiratory",
            Self::Gastrointestinal => "gastrointestinal",
            Self::Neurologic => "neurologic",
            Self::Musculoskeletal => "musculoskeletal",
            Self::Metabolic => "metabolic",
            Self::Endocrine => "endocrine",
            Self::Immunologic => "immunologic",
            Self::Hematologic => "hematologic",
            Self::Renal => "renal",
            Self::Dermatologic => "dermatologic",
            Self::Psychiatric => "psychiatric",
            Self::Multisystem => "multisystem",
        }
    }
}

impl std::fmt::Display for ClusterCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ClusterCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| format!("Unknown cluster category: {s}"))
    }
}

/// How diagnostically essential a symptom is to its cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    Required,
    Major,
    Minor,
    Supportive,
}

impl Requirement {
    /// Required and major symptoms are the ones that tell clusters apart
    #[must_use]
    pub fn is_distinguishing(self) -> bool {
        matches!(self, Self::Required | Self::Major)
    }
}

impl std::fmt::Display for Requirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Required => write!(f, "required"),
            Self::Major => write!(f, "major"),
            Self::Minor => write!(f, "minor"),
            Self::Supportive => write!(f, "supportive"),
        }
    }
}

/// Quality of a single symptom pairing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchQuality {
    /// Identical text, or one contains the other
    Exact,
    /// Substantial word overlap
    Related,
    /// Some word overlap above the match floor
    Partial,
}

impl std::fmt::Display for MatchQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact => write!(f, "exact"),
            Self::Related => write!(f, "related"),
            Self::Partial => write!(f, "partial"),
        }
    }
}

/// Confidence level for a cluster match
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    Possible,
    Low,
    Moderate,
    High,
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Possible => write!(f, "possible"),
            Self::Low => write!(f, "low"),
            Self::Moderate => write!(f, "moderate"),
            Self::High => write!(f, "high"),
        }
    }
}

/// How quickly care should be sought
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Routine,
    Soon,
    Urgent,
    Emergency,
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Routine => write!(f, "routine"),
            Self::Soon => write!(f, "soon"),
            Self::Urgent => write!(f, "urgent"),
            Self::Emergency => write!(f, "emergency"),
        }
    }
}

/// Onset of a cluster's symptoms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Onset {
    Sudden,
    Gradual,
    Variable,
}

/// Course a cluster typically follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Course {
    Acute,
    Chronic,
    Episodic,
    Progressive,
    RelapsingRemitting,
}

/// Basis of a cluster's diagnostic criteria
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CriteriaKind {
    /// Clinical judgement from history and examination
    Clinical,
    /// Published, named criteria (ACR, Rome IV, ICHD-3, ...)
    FormalCriteria,
    /// Defined by laboratory findings
    Laboratory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_str() {
        assert_eq!(
            "Metabolic".parse::<ClusterCategory>().unwrap(),
            ClusterCategory::Metabolic
        );
        assert_eq!(
            " neurologic ".parse::<ClusterCategory>().unwrap(),
            ClusterCategory::Neurologic
        );
        assert!("cardiac".parse::<ClusterCategory>().is_err());
    }

    #[test]
    fn test_category_serde_matches_as_str() {
        for category in ClusterCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
    }

    #[test]
    fn test_confidence_ordering() {
        assert!(Confidence::High > Confidence::Moderate);
        assert!(Confidence::Moderate > Confidence::Low);
        assert!(Confidence::Low > Confidence::Possible);
    }

    #[test]
    fn test_requirement_is_distinguishing() {
        assert!(Requirement::Required.is_distinguishing());
        assert!(Requirement::Major.is_distinguishing());
        assert!(!Requirement::Minor.is_distinguishing());
        assert!(!Requirement::Supportive.is_distinguishing());
    }

    #[test]
    fn test_course_kebab_case() {
        let course: Course = serde_json::from_str("\"relapsing-remitting\"").unwrap();
        assert_eq!(course, Course::RelapsingRemitting);
    }
}
