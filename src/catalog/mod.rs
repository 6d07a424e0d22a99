//! Symptom cluster catalog storage.
//!
//! The catalog contains the definitions of known symptom clusters (syndromes)
//! with their tiered symptoms, triggers, and educational payload. An embedded
//! catalog is compiled into the binary, but custom catalogs can also be loaded
//! from JSON files.
//!
//! The catalog is reference data: once built it is only read. The embedded
//! catalog is additionally available as a process-wide shared instance through
//! [`ClusterCatalog::embedded`](store::ClusterCatalog::embedded).
//!
//! ## Embedded Catalog
//!
//! - **Metabolic**: metabolic syndrome
//! - **Musculoskeletal**: fibromyalgia
//! - **Gastrointestinal**: irritable bowel syndrome
//! - **Neurologic**: migraine
//! - **Multisystem**: chronic fatigue syndrome (ME/CFS)
//! - **Cardiovascular**: heart failure syndrome
//!
//! ## Example
//!
//! ```rust,no_run
//! use symptom_cluster::ClusterCatalog;
//! use symptom_cluster::core::types::ClusterId;
//!
//! let catalog = ClusterCatalog::load_embedded().unwrap();
//!
//! for cluster in catalog.clusters() {
//!     println!("{}: {}", cluster.cluster_id, cluster.name);
//! }
//!
//! let fibro = catalog.get(&ClusterId::new("fibromyalgia-syndrome"));
//! ```
//!
//! ## Custom Catalogs
//!
//! ```rust,no_run
//! use symptom_cluster::ClusterCatalog;
//! use std::path::Path;
//!
//! let catalog = ClusterCatalog::load_embedded().unwrap();
//! let json = catalog.to_json().unwrap();
//!
//! let custom = ClusterCatalog::load_from_file(Path::new("my_clusters.json")).unwrap();
//! ```

pub mod store;
