use crate::core::cluster::SyndromeCluster;
use crate::core::types::{Confidence, Requirement};
use crate::matching::diagnosis::SymptomDiagnosis;
use crate::matching::engine::{MatchThresholds, MatchingConfig};

/// Safely convert usize to f64 for ratio calculations
#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Score components for one cluster
#[derive(Debug, Clone, PartialEq)]
pub struct MatchScore {
    /// Matched required / total required
    pub required_ratio: f64,

    /// Matched major / total major (0.0 when the cluster has no major symptoms)
    pub major_ratio: f64,

    /// Matched symptoms / all cluster symptoms
    pub overall_ratio: f64,

    /// Flat bonus applied when a user trigger matched a cluster trigger
    pub trigger_bonus: f64,

    /// Weighted sum plus bonus, capped at 1.0
    pub composite: f64,

    /// Confidence level derived from the composite and missing required symptoms
    pub confidence: Confidence,
}

impl MatchScore {
    /// Calculate the aggregate score from a symptom diagnosis.
    ///
    /// A cluster without required symptoms counts its required ratio as 1.0
    /// for any non-empty symptom list. An empty list scores 0.0 everywhere.
    #[must_use]
    pub fn calculate(
        diagnosis: &SymptomDiagnosis,
        cluster: &SyndromeCluster,
        config: &MatchingConfig,
    ) -> Self {
        let total_required = cluster.count_by_requirement(Requirement::Required);
        let total_major = cluster.count_by_requirement(Requirement::Major);

        let required_ratio = if total_required > 0 {
            count_to_f64(diagnosis.matched_count(Requirement::Required))
                / count_to_f64(total_required)
        } else if diagnosis.symptoms_reported {
            1.0
        } else {
            0.0
        };

        let major_ratio = if total_major > 0 {
            count_to_f64(diagnosis.matched_count(Requirement::Major)) / count_to_f64(total_major)
        } else {
            0.0
        };

        let overall_ratio = if cluster.symptoms.is_empty() {
            0.0
        } else {
            count_to_f64(diagnosis.matched.len()) / count_to_f64(cluster.symptoms.len())
        };

        let trigger_bonus = if diagnosis.matching_triggers.is_empty() {
            0.0
        } else {
            config.thresholds.trigger_bonus
        };

        let weights = config.weights.normalized();
        let weighted = weights.required * required_ratio
            + weights.major * major_ratio
            + weights.overall * overall_ratio;
        let composite = (weighted + trigger_bonus).clamp(0.0, 1.0);

        let confidence = classify_confidence(
            composite,
            !diagnosis.missing_required.is_empty(),
            &config.thresholds,
        );

        Self {
            required_ratio,
            major_ratio,
            overall_ratio,
            trigger_bonus,
            composite,
            confidence,
        }
    }
}

/// Confidence band for a score.
///
/// Any missing required symptom caps confidence at `Low` regardless of score.
#[must_use]
pub fn classify_confidence(
    score: f64,
    missing_required: bool,
    thresholds: &MatchThresholds,
) -> Confidence {
    if missing_required {
        Confidence::Low
    } else if score >= thresholds.high_confidence {
        Confidence::High
    } else if score >= thresholds.moderate_confidence {
        Confidence::Moderate
    } else if score >= thresholds.low_confidence {
        Confidence::Low
    } else {
        Confidence::Possible
    }
}
