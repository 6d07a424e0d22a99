use serde::Serialize;

use crate::core::cluster::{AffectedSystem, SyndromeCluster};
use crate::matching::engine::ClusterMatchResult;

/// Default camera distance for the anatomy viewer
pub const DEFAULT_CAMERA_DISTANCE: f64 = 2.5;

/// Display-ready bundle of a cluster's content plus an optional match result
#[derive(Debug, Clone, Serialize)]
pub struct ExplorationResult {
    pub cluster: SyndromeCluster,
    pub match_result: Option<ClusterMatchResult>,
    pub pathophysiology_steps: Vec<String>,
    pub anatomy_highlights: Vec<AffectedSystem>,
    pub educational_content: EducationalContent,
    pub view_settings: ViewSettings,
}

#[derive(Debug, Clone, Serialize)]
pub struct EducationalContent {
    /// Level-2 explanation
    pub overview: String,
    pub mechanism: String,
    /// "Key features: ..." listing required and major symptoms
    pub recognition: String,
    /// Where to seek care and the initial tests
    pub management: String,
}

/// Hints for a downstream 3D anatomy viewer
#[derive(Debug, Clone, Serialize)]
pub struct ViewSettings {
    pub camera_position: CameraPosition,
    pub highlighted_systems: Vec<String>,
    pub animation_enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraPosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Default for CameraPosition {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: DEFAULT_CAMERA_DISTANCE,
        }
    }
}

impl ExplorationResult {
    /// Compose the exploration view. No scoring happens here; pass the match
    /// result in if there is one.
    #[must_use]
    pub fn new(cluster: &SyndromeCluster, match_result: Option<ClusterMatchResult>) -> Self {
        let key_features: Vec<&str> = cluster.key_symptoms().map(|s| s.symptom.as_str()).collect();
        let care = &cluster.when_to_seek_care;

        let educational_content = EducationalContent {
            overview: cluster.explanations.level2.clone(),
            mechanism: cluster.pathophysiology.mechanism.clone(),
            recognition: format!("Key features: {}", key_features.join(", ")),
            management: format!(
                "Seek care: {}. Initial tests: {}",
                care.provider_type,
                care.initial_evaluation.join(", ")
            ),
        };

        let view_settings = ViewSettings {
            camera_position: CameraPosition::default(),
            highlighted_systems: cluster
                .affected_systems
                .iter()
                .map(|s| s.system.clone())
                .collect(),
            animation_enabled: true,
        };

        Self {
            cluster: cluster.clone(),
            match_result,
            pathophysiology_steps: cluster.pathophysiology.pathway_steps.clone(),
            anatomy_highlights: cluster.affected_systems.clone(),
            educational_content,
            view_settings,
        }
    }
}
