use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::OnceLock;
use thiserror::Error;

use crate::core::cluster::SyndromeCluster;
use crate::core::types::{ClusterCategory, ClusterId};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Duplicate cluster id: {0}")]
    DuplicateCluster(ClusterId),

    #[error("Cluster '{cluster}' lists symptom '{symptom}' more than once")]
    DuplicateSymptom { cluster: ClusterId, symptom: String },

    #[error("Cluster '{0}' has no symptoms")]
    NoSymptoms(ClusterId),

    #[error("Cluster '{0}' has no required or major symptom and can never be distinguished")]
    Indistinguishable(ClusterId),
}

/// Catalog version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// Serializable catalog format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,
    pub created_at: String,
    pub clusters: Vec<SyndromeCluster>,
}

/// The cluster catalog
///
/// Clusters are kept in load order; matching iterates them in that order, so
/// ties in the ranked output follow it too.
#[derive(Debug)]
pub struct ClusterCatalog {
    /// All known clusters; only `add_cluster` appends, so the index stays valid
    clusters: Vec<SyndromeCluster>,

    /// Index: cluster ID -> index in clusters vec
    id_to_index: HashMap<ClusterId, usize>,
}

impl ClusterCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            clusters: Vec::new(),
            id_to_index: HashMap::new(),
        }
    }

    /// Load the embedded default catalog
    pub fn load_embedded() -> Result<Self, CatalogError> {
        // Embedded at compile time, validated by build.rs
        const EMBEDDED_CATALOG: &str = include_str!("../../catalogs/symptom_clusters.json");
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Shared, read-only instance of the embedded catalog, built on first use
    #[allow(clippy::missing_panics_doc)] // The embedded file is checked by build.rs
    pub fn embedded() -> &'static Self {
        static EMBEDDED: OnceLock<ClusterCatalog> = OnceLock::new();
        EMBEDDED.get_or_init(|| {
            Self::load_embedded().expect("embedded catalog is validated at build time")
        })
    }

    /// Load catalog from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse catalog from JSON string
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != CATALOG_VERSION {
            tracing::warn!(
                "Catalog version mismatch (expected {}, found {})",
                CATALOG_VERSION,
                data.version
            );
        }

        let mut catalog = Self::new();
        for cluster in data.clusters {
            catalog.add_cluster(cluster)?;
        }

        tracing::debug!("Loaded catalog with {} clusters", catalog.len());
        Ok(catalog)
    }

    /// Add a cluster to the catalog after checking its invariants
    ///
    /// # Errors
    ///
    /// Returns an error if the ID is already present, the cluster has no
    /// symptoms, repeats a symptom, or has no required/major symptom.
    pub fn add_cluster(&mut self, cluster: SyndromeCluster) -> Result<(), CatalogError> {
        if self.id_to_index.contains_key(&cluster.cluster_id) {
            return Err(CatalogError::DuplicateCluster(cluster.cluster_id));
        }
        validate_cluster(&cluster)?;

        self.id_to_index
            .insert(cluster.cluster_id.clone(), self.clusters.len());
        self.clusters.push(cluster);
        Ok(())
    }

    /// All clusters, in load order
    pub fn clusters(&self) -> &[SyndromeCluster] {
        &self.clusters
    }

    /// Get a cluster by ID
    pub fn get(&self, id: &ClusterId) -> Option<&SyndromeCluster> {
        self.id_to_index.get(id).map(|&idx| &self.clusters[idx])
    }

    /// Get a cluster by its string ID
    pub fn get_str(&self, id: &str) -> Option<&SyndromeCluster> {
        self.get(&ClusterId::new(id))
    }

    /// All clusters in a body-system category, in catalog order
    pub fn by_category(&self, category: ClusterCategory) -> Vec<&SyndromeCluster> {
        self.clusters
            .iter()
            .filter(|c| c.category == category)
            .collect()
    }

    /// Cluster IDs in catalog order
    pub fn ids(&self) -> impl Iterator<Item = &ClusterId> {
        self.clusters.iter().map(|c| &c.cluster_id)
    }

    /// Export catalog to JSON
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = CatalogData {
            version: CATALOG_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            clusters: self.clusters.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Number of clusters in catalog
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }
}

impl Default for ClusterCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_cluster(cluster: &SyndromeCluster) -> Result<(), CatalogError> {
    if cluster.symptoms.is_empty() {
        return Err(CatalogError::NoSymptoms(cluster.cluster_id.clone()));
    }

    let mut seen: HashSet<&str> = HashSet::new();
    for symptom in &cluster.symptoms {
        if !seen.insert(symptom.symptom.as_str()) {
            return Err(CatalogError::DuplicateSymptom {
                cluster: cluster.cluster_id.clone(),
                symptom: symptom.symptom.clone(),
            });
        }
    }

    if cluster.key_symptoms().next().is_none() {
        return Err(CatalogError::Indistinguishable(cluster.cluster_id.clone()));
    }

    Ok(())
}
