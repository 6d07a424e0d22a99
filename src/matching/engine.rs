use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::catalog::store::ClusterCatalog;
use crate::core::cluster::SyndromeCluster;
use crate::core::symptoms::UserSymptomSet;
use crate::core::types::{ClusterId, Confidence};
use crate::exploration::result::ExplorationResult;
use crate::matching::diagnosis::{explain, MatchedSymptom, SymptomDiagnosis};
use crate::matching::scoring::MatchScore;

/// Result of matching a user's symptoms against one cluster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterMatchResult {
    pub cluster_id: ClusterId,
    pub cluster_name: String,
    pub confidence: Confidence,

    /// Aggregate score in `[0, 1]`
    pub match_score: f64,

    pub matched_symptoms: Vec<MatchedSymptom>,
    pub missing_required: Vec<String>,
    pub missing_major: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub supporting_factors: Vec<String>,

    pub explanation: String,
}

impl ClusterMatchResult {
    /// Match a symptom set against one cluster. Never fails: an empty symptom
    /// list yields no matches and every required symptom listed as missing.
    #[must_use]
    pub fn calculate(
        symptoms: &UserSymptomSet,
        cluster: &SyndromeCluster,
        config: &MatchingConfig,
    ) -> Self {
        let diagnosis = SymptomDiagnosis::analyze(symptoms, cluster, &config.thresholds);
        let score = MatchScore::calculate(&diagnosis, cluster, config);
        let explanation = explain(
            &cluster.name,
            score.confidence,
            &diagnosis.missing_required,
            &diagnosis.missing_major,
        );
        let supporting_factors = diagnosis.supporting_factors();

        Self {
            cluster_id: cluster.cluster_id.clone(),
            cluster_name: cluster.name.clone(),
            confidence: score.confidence,
            match_score: score.composite,
            matched_symptoms: diagnosis.matched,
            missing_required: diagnosis.missing_required,
            missing_major: diagnosis.missing_major,
            supporting_factors,
            explanation,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid value for {name}: {value} (must be between 0 and 1)")]
    InvalidThreshold { name: &'static str, value: f64 },
}

/// Configuration for the matching engine
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Cut-offs for matching, inclusion, and confidence bands
    pub thresholds: MatchThresholds,
    /// Weights of the score components
    pub weights: ScoringWeights,
}

impl MatchingConfig {
    /// Load a config from a JSON file; absent fields keep their defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or holds
    /// a value outside `[0, 1]`.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every threshold and weight lies in `[0, 1]`
    ///
    /// # Errors
    ///
    /// Returns the first out-of-range value found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.thresholds;
        let w = &self.weights;
        let values = [
            ("match_floor", t.match_floor),
            ("exact_quality", t.exact_quality),
            ("related_quality", t.related_quality),
            ("inclusion_floor", t.inclusion_floor),
            ("high_confidence", t.high_confidence),
            ("moderate_confidence", t.moderate_confidence),
            ("low_confidence", t.low_confidence),
            ("trigger_bonus", t.trigger_bonus),
            ("weights.required", w.required),
            ("weights.major", w.major),
            ("weights.overall", w.overall),
        ];

        for (name, value) in values {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidThreshold { name, value });
            }
        }
        Ok(())
    }
}

/// Cut-offs used by matching and classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchThresholds {
    /// A pairing must score above this to count as a match
    pub match_floor: f64,
    /// Pairings at or above this are `exact`
    pub exact_quality: f64,
    /// Pairings at or above this are `related`, below it `partial`
    pub related_quality: f64,
    /// Ranked results keep clusters scoring above this (or with any match)
    pub inclusion_floor: f64,
    pub high_confidence: f64,
    pub moderate_confidence: f64,
    pub low_confidence: f64,
    /// Added once when any trigger matches
    pub trigger_bonus: f64,
}

impl Default for MatchThresholds {
    fn default() -> Self {
        Self {
            match_floor: 0.3,
            exact_quality: 0.8,
            related_quality: 0.5,
            inclusion_floor: 0.2,
            high_confidence: 0.7,
            moderate_confidence: 0.5,
            low_confidence: 0.3,
            trigger_bonus: 0.05,
        }
    }
}

/// Configurable weights for the score components
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Weight for the fraction of required symptoms matched
    pub required: f64,
    /// Weight for the fraction of major symptoms matched
    pub major: f64,
    /// Weight for the fraction of all cluster symptoms matched
    pub overall: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            required: 0.5, // 50%
            major: 0.3,    // 30%
            overall: 0.2,  // 20%
        }
    }
}

impl ScoringWeights {
    /// Normalize weights to sum to 1.0
    #[must_use]
    pub fn normalized(&self) -> Self {
        let total = self.required + self.major + self.overall;

        if total <= 0.0 {
            return Self::default();
        }

        Self {
            required: self.required / total,
            major: self.major / total,
            overall: self.overall / total,
        }
    }
}

/// The main matching engine
pub struct MatchingEngine<'a> {
    catalog: &'a ClusterCatalog,
    /// Configuration including scoring weights and thresholds
    config: MatchingConfig,
}

impl<'a> MatchingEngine<'a> {
    /// Create a new matching engine with default configuration
    pub fn new(catalog: &'a ClusterCatalog) -> Self {
        Self {
            catalog,
            config: MatchingConfig::default(),
        }
    }

    /// Create a new matching engine with custom configuration
    pub fn with_config(catalog: &'a ClusterCatalog, config: MatchingConfig) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &'a ClusterCatalog {
        self.catalog
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// Match a symptom set against a single cluster
    pub fn match_cluster(
        &self,
        symptoms: &UserSymptomSet,
        cluster: &SyndromeCluster,
    ) -> ClusterMatchResult {
        ClusterMatchResult::calculate(symptoms, cluster, &self.config)
    }

    /// Match a symptom set against every cluster in the catalog.
    ///
    /// Keeps results scoring above the inclusion floor or with at least one
    /// matched symptom, sorted by score descending. Equal scores keep catalog
    /// order.
    pub fn match_all(&self, symptoms: &UserSymptomSet) -> Vec<ClusterMatchResult> {
        let floor = self.config.thresholds.inclusion_floor;

        let mut results: Vec<ClusterMatchResult> = self
            .catalog
            .clusters()
            .iter()
            .map(|cluster| {
                let result = self.match_cluster(symptoms, cluster);
                tracing::trace!(
                    "{}: score {:.3} ({})",
                    cluster.cluster_id,
                    result.match_score,
                    result.confidence
                );
                result
            })
            .filter(|r| r.match_score > floor || !r.matched_symptoms.is_empty())
            .collect();

        // Stable sort keeps catalog order on ties
        results.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        tracing::debug!(
            "Scored {} clusters against {} symptoms, kept {}",
            self.catalog.len(),
            symptoms.symptoms.len(),
            results.len()
        );

        results
    }

    /// Ranked matches, limited to the best `limit`
    pub fn find_matches(&self, symptoms: &UserSymptomSet, limit: usize) -> Vec<ClusterMatchResult> {
        let mut results = self.match_all(symptoms);
        results.truncate(limit);
        results
    }

    /// Find the single best match
    pub fn find_best_match(&self, symptoms: &UserSymptomSet) -> Option<ClusterMatchResult> {
        self.find_matches(symptoms, 1).into_iter().next()
    }

    /// Compose the exploration view of a cluster, re-matching when symptoms are
    /// given. Returns `None` for an unknown cluster ID.
    pub fn explore(
        &self,
        cluster_id: &ClusterId,
        symptoms: Option<&UserSymptomSet>,
    ) -> Option<ExplorationResult> {
        let cluster = self.catalog.get(cluster_id)?;
        let match_result = symptoms.map(|s| self.match_cluster(s, cluster));
        Some(ExplorationResult::new(cluster, match_result))
    }
}
