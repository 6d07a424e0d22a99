use serde::Serialize;

use crate::core::cluster::AffectedSystem;
use crate::core::symptoms::UserSymptomSet;
use crate::core::types::ClusterId;
use crate::matching::engine::{ClusterMatchResult, MatchingEngine};

/// State of an interactive cluster-exploration session
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExplorerState {
    pub user_symptoms: UserSymptomSet,
    pub match_results: Vec<ClusterMatchResult>,
    pub selected_cluster: Option<ClusterId>,
    pub anatomy_highlights: Vec<AffectedSystem>,
    pub showing_pathophysiology: bool,
}

impl ExplorerState {
    /// Replace the symptoms and re-rank every cluster
    pub fn run_match(&mut self, engine: &MatchingEngine<'_>, symptoms: UserSymptomSet) {
        self.match_results = engine.match_all(&symptoms);
        self.user_symptoms = symptoms;
    }

    /// Select a cluster and highlight its affected systems.
    ///
    /// Returns `false` and leaves the state unchanged for an unknown ID.
    pub fn select_cluster(&mut self, engine: &MatchingEngine<'_>, cluster_id: &ClusterId) -> bool {
        let Some(cluster) = engine.catalog().get(cluster_id) else {
            return false;
        };
        self.selected_cluster = Some(cluster.cluster_id.clone());
        self.anatomy_highlights = cluster.affected_systems.clone();
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected_cluster = None;
        self.anatomy_highlights.clear();
        self.showing_pathophysiology = false;
    }

    pub fn toggle_pathophysiology(&mut self) -> bool {
        self.showing_pathophysiology = !self.showing_pathophysiology;
        self.showing_pathophysiology
    }

    /// Match result for the selected cluster, if it was ranked
    #[must_use]
    pub fn selected_result(&self) -> Option<&ClusterMatchResult> {
        let selected = self.selected_cluster.as_ref()?;
        self.match_results.iter().find(|r| &r.cluster_id == selected)
    }
}
