use serde::{Deserialize, Serialize};

use crate::core::cluster::SyndromeCluster;
use crate::core::symptoms::UserSymptomSet;
use crate::core::types::{Confidence, MatchQuality, Requirement};
use crate::matching::engine::MatchThresholds;
use crate::matching::similarity::{normalize, similarity};

/// Most missing major symptoms the explanation will list
pub const MAX_LISTED_MISSING_MAJOR: usize = 3;

/// A user symptom paired with the catalog symptom it best matched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedSymptom {
    pub user_symptom: String,
    pub cluster_symptom: String,
    pub requirement: Requirement,
    pub match_quality: MatchQuality,
    /// Raw similarity score of the pairing
    pub similarity: f64,
}

/// Symptom-by-symptom comparison of a user's symptoms with one cluster
#[derive(Debug, Clone)]
pub struct SymptomDiagnosis {
    /// Cluster symptoms that found a user symptom above the match floor,
    /// in cluster declaration order
    pub matched: Vec<MatchedSymptom>,

    /// Unmatched `required` cluster symptoms
    pub missing_required: Vec<String>,

    /// Unmatched `major` cluster symptoms
    pub missing_major: Vec<String>,

    /// User triggers that matched one of the cluster's triggers
    pub matching_triggers: Vec<String>,

    /// Whether the user reported any symptoms at all
    pub symptoms_reported: bool,
}

impl SymptomDiagnosis {
    /// Compare every cluster symptom against every user symptom.
    ///
    /// Each cluster symptom keeps its best-scoring user symptom; on equal scores
    /// the earlier user symptom wins. Pairings at or below the match floor are
    /// treated as unmatched. Minor and supportive misses are not tracked.
    #[must_use]
    pub fn analyze(
        symptoms: &UserSymptomSet,
        cluster: &SyndromeCluster,
        thresholds: &MatchThresholds,
    ) -> Self {
        let mut matched = Vec::new();
        let mut missing_required = Vec::new();
        let mut missing_major = Vec::new();

        for cluster_symptom in &cluster.symptoms {
            match best_match(&symptoms.symptoms, &cluster_symptom.symptom) {
                Some((user_symptom, score)) if score > thresholds.match_floor => {
                    matched.push(MatchedSymptom {
                        user_symptom: user_symptom.to_string(),
                        cluster_symptom: cluster_symptom.symptom.clone(),
                        requirement: cluster_symptom.requirement,
                        match_quality: classify_quality(score, thresholds),
                        similarity: score,
                    });
                }
                _ => match cluster_symptom.requirement {
                    Requirement::Required => missing_required.push(cluster_symptom.symptom.clone()),
                    Requirement::Major => missing_major.push(cluster_symptom.symptom.clone()),
                    Requirement::Minor | Requirement::Supportive => {}
                },
            }
        }

        let matching_triggers = matching_triggers(&symptoms.triggers, &cluster.triggers);

        Self {
            matched,
            missing_required,
            missing_major,
            matching_triggers,
            symptoms_reported: !symptoms.symptoms.is_empty(),
        }
    }

    /// Number of matched symptoms in a requirement tier
    #[must_use]
    pub fn matched_count(&self, requirement: Requirement) -> usize {
        self.matched
            .iter()
            .filter(|m| m.requirement == requirement)
            .count()
    }

    /// Supporting-factor notes for display
    #[must_use]
    pub fn supporting_factors(&self) -> Vec<String> {
        if self.matching_triggers.is_empty() {
            Vec::new()
        } else {
            vec![format!(
                "Matching triggers: {}",
                self.matching_triggers.join(", ")
            )]
        }
    }
}

/// Highest-scoring user symptom for one cluster symptom, ignoring zero scores
fn best_match<'a>(user_symptoms: &'a [String], cluster_symptom: &str) -> Option<(&'a str, f64)> {
    let mut best: Option<(&str, f64)> = None;
    for user_symptom in user_symptoms {
        let score = similarity(user_symptom, cluster_symptom);
        if score > 0.0 && best.map_or(true, |(_, s)| score > s) {
            best = Some((user_symptom.as_str(), score));
        }
    }
    best
}

fn classify_quality(score: f64, thresholds: &MatchThresholds) -> MatchQuality {
    if score >= thresholds.exact_quality {
        MatchQuality::Exact
    } else if score >= thresholds.related_quality {
        MatchQuality::Related
    } else {
        MatchQuality::Partial
    }
}

/// User triggers that match a cluster trigger, case-insensitively, when either
/// text contains the other
fn matching_triggers(user_triggers: &[String], cluster_triggers: &[String]) -> Vec<String> {
    let cluster_normalized: Vec<String> = cluster_triggers
        .iter()
        .map(|t| normalize(t))
        .filter(|t| !t.is_empty())
        .collect();

    user_triggers
        .iter()
        .filter(|trigger| {
            let user = normalize(trigger);
            !user.is_empty()
                && cluster_normalized
                    .iter()
                    .any(|ct| ct.contains(&user) || user.contains(ct.as_str()))
        })
        .cloned()
        .collect()
}

/// Templated explanation of a cluster match.
///
/// Opens with a confidence-dependent sentence, then lists every missing
/// required symptom and, when there are no more than
/// [`MAX_LISTED_MISSING_MAJOR`] of them, the missing major symptoms.
#[must_use]
pub fn explain(
    cluster_name: &str,
    confidence: Confidence,
    missing_required: &[String],
    missing_major: &[String],
) -> String {
    let mut sentences = vec![match confidence {
        Confidence::High => format!("Symptoms strongly match {cluster_name} pattern."),
        Confidence::Moderate => format!("Symptoms partially match {cluster_name} pattern."),
        Confidence::Low | Confidence::Possible => {
            format!("Limited match to {cluster_name} pattern.")
        }
    }];

    if !missing_required.is_empty() {
        sentences.push(format!(
            "Missing key symptoms: {}.",
            missing_required.join(", ")
        ));
    }
    if !missing_major.is_empty() && missing_major.len() <= MAX_LISTED_MISSING_MAJOR {
        sentences.push(format!("Could also have: {}.", missing_major.join(", ")));
    }

    sentences.join(" ")
}
