//! Convenience functions over the embedded catalog.
//!
//! These cover the common calls without building a catalog or engine by hand.
//! They all read the shared [`ClusterCatalog::embedded`] instance and use the
//! default [`MatchingConfig`](crate::matching::engine::MatchingConfig); build a
//! [`MatchingEngine`] directly for a custom catalog or configuration.
//!
//! None of these functions fail. Unknown IDs give `None`, and a symptom set
//! with nothing in it gives results with no matched symptoms.

use crate::catalog::store::ClusterCatalog;
use crate::core::cluster::SyndromeCluster;
use crate::core::symptoms::UserSymptomSet;
use crate::core::types::ClusterId;
use crate::exploration::result::ExplorationResult;
use crate::matching::engine::{ClusterMatchResult, MatchingEngine};

fn engine() -> MatchingEngine<'static> {
    MatchingEngine::new(ClusterCatalog::embedded())
}

/// Every cluster in the embedded catalog, in catalog order
pub fn get_all_symptom_clusters() -> &'static [SyndromeCluster] {
    ClusterCatalog::embedded().clusters()
}

/// Look up a cluster by ID
pub fn get_symptom_cluster(cluster_id: &str) -> Option<&'static SyndromeCluster> {
    ClusterCatalog::embedded().get_str(cluster_id)
}

/// Match a symptom set against one cluster
pub fn match_symptoms_to_cluster(
    symptoms: &UserSymptomSet,
    cluster: &SyndromeCluster,
) -> ClusterMatchResult {
    engine().match_cluster(symptoms, cluster)
}

/// Match a symptom set against every cluster, best first
pub fn match_symptoms_to_all_clusters(symptoms: &UserSymptomSet) -> Vec<ClusterMatchResult> {
    engine().match_all(symptoms)
}

/// Exploration view of a cluster, with a match result when symptoms are given
pub fn create_cluster_exploration_result(
    cluster_id: &str,
    symptoms: Option<&UserSymptomSet>,
) -> Option<ExplorationResult> {
    engine().explore(&ClusterId::new(cluster_id), symptoms)
}
