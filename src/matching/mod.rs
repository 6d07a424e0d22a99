//! Symptom cluster matching engine and scoring algorithms.
//!
//! This module provides the core matching functionality:
//!
//! - [`MatchingEngine`]: Main entry point for ranking clusters against a symptom set
//! - [`ClusterMatchResult`]: Score, confidence, and explanation for one cluster
//! - [`SymptomDiagnosis`]: Symptom-by-symptom pairing and missing-symptom analysis
//! - [`MatchScore`]: Weighted score components and confidence classification
//!
//! ## Matching Algorithm
//!
//! For every symptom a cluster defines, the best-scoring user symptom is
//! found with [`similarity`](similarity::similarity):
//!
//! 1. **Exact**: identical after lowercasing and trimming (1.0)
//! 2. **Contains**: one text contains the other (0.8)
//! 3. **Word overlap**: shared words over the longer word set, scaled to 0.5
//!
//! A pairing counts as a match when it scores above the match floor (0.3).
//!
//! ## Scoring
//!
//! The composite score combines:
//!
//! - **Required ratio** (50%): fraction of required symptoms matched
//! - **Major ratio** (30%): fraction of major symptoms matched
//! - **Overall ratio** (20%): fraction of all cluster symptoms matched
//! - **Trigger bonus** (+0.05): any user trigger matched a cluster trigger
//!
//! All cut-offs live in [`MatchingConfig`] so they can be recalibrated
//! without touching the algorithm.
//!
//! ## Example
//!
//! ```rust,no_run
//! use symptom_cluster::{ClusterCatalog, MatchingEngine, UserSymptomSet};
//!
//! let catalog = ClusterCatalog::load_embedded().unwrap();
//! let symptoms = UserSymptomSet::new(["fatigue", "sleep disturbance", "headaches"]);
//!
//! let engine = MatchingEngine::new(&catalog);
//! for m in engine.find_matches(&symptoms, 3) {
//!     println!("{}: {} ({:.1}%)", m.cluster_name, m.confidence, m.match_score * 100.0);
//! }
//! ```
//!
//! [`MatchingEngine`]: engine::MatchingEngine
//! [`ClusterMatchResult`]: engine::ClusterMatchResult
//! [`MatchingConfig`]: engine::MatchingConfig
//! [`SymptomDiagnosis`]: diagnosis::SymptomDiagnosis
//! [`MatchScore`]: scoring::MatchScore

pub mod diagnosis;
pub mod engine;
pub mod scoring;
pub mod similarity;
