//! # symptom-cluster
//!
//! A library for matching free-text symptoms against a catalog of named symptom
//! clusters (syndromes).
//!
//! Each cluster defines a set of symptoms tagged by how essential they are
//! (`required`, `major`, `minor`, `supportive`). Given the symptoms a person
//! reports, `symptom-cluster` pairs each cluster symptom with its best matching
//! report, weighs the pairings into a score in `[0, 1]`, and labels the result
//! with a coarse confidence.
//!
//! ## Features
//!
//! - **Lightweight text matching**: case-insensitive equality, containment,
//!   and word-overlap scoring
//! - **Tiered scoring**: required symptoms outweigh major ones, which outweigh
//!   overall coverage
//! - **Trigger bonus**: reported triggers that match a cluster's triggers nudge
//!   the score up
//! - **Plain-language explanations**: every result says what was missing
//! - **Exploration views**: pathophysiology, affected systems, and care
//!   guidance bundled for display
//!
//! ## Example
//!
//! ```rust
//! use symptom_cluster::{ClusterCatalog, MatchingEngine, UserSymptomSet};
//!
//! // Load the embedded catalog of known clusters
//! let catalog = ClusterCatalog::load_embedded().unwrap();
//!
//! let symptoms = UserSymptomSet::new(["central obesity", "elevated blood pressure", "fatigue"]);
//!
//! let engine = MatchingEngine::new(&catalog);
//! for m in engine.find_matches(&symptoms, 3) {
//!     println!("{}: {:.1}% ({})", m.cluster_name, m.match_score * 100.0, m.confidence);
//! }
//! ```
//!
//! This crate is for education only and does not provide medical diagnosis;
//! see [`exploration::DISCLAIMER`].
//!
//! ## Modules
//!
//! - [`api`]: One-call functions over the embedded catalog
//! - [`catalog`]: Cluster catalog storage and validation
//! - [`core`]: Core data types for clusters and reported symptoms
//! - [`matching`]: Similarity, per-symptom analysis, scoring, and ranking
//! - [`exploration`]: Display-ready views of a single cluster
//! - [`cli`]: Command-line interface implementation

pub mod api;
pub mod catalog;
pub mod cli;
pub mod core;
pub mod exploration;
pub mod matching;
pub mod utils;

// Re-export commonly used types for convenience
pub use catalog::store::ClusterCatalog;
pub use core::cluster::SyndromeCluster;
pub use core::symptoms::UserSymptomSet;
pub use core::types::*;
pub use exploration::result::ExplorationResult;
pub use matching::engine::{ClusterMatchResult, MatchingConfig, MatchingEngine};
