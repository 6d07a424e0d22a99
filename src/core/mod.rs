//! Core data types for symptom cluster matching.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`SyndromeCluster`]: A catalog-defined syndrome with its tiered symptoms
//! - [`ClusterSymptom`]: One symptom within a cluster, tagged with a [`Requirement`]
//! - [`UserSymptomSet`]: The free-text symptoms a user reports for one matching call
//! - [`ClusterId`], [`ClusterCategory`]: Cluster metadata types
//! - [`MatchQuality`], [`Confidence`]: Result classification types
//!
//! ## Requirement tiers
//!
//! | Tier       | Meaning                                   | Scored as         |
//! |------------|-------------------------------------------|-------------------|
//! | required   | Must be present for the pattern to hold   | 50% weight        |
//! | major      | Strongly characteristic                   | 30% weight        |
//! | minor      | Common but not characteristic             | overall 20% only  |
//! | supportive | Adds weight when present                  | overall 20% only  |
//!
//! [`SyndromeCluster`]: cluster::SyndromeCluster
//! [`ClusterSymptom`]: cluster::ClusterSymptom
//! [`UserSymptomSet`]: symptoms::UserSymptomSet
//! [`Requirement`]: types::Requirement
//! [`ClusterId`]: types::ClusterId
//! [`ClusterCategory`]: types::ClusterCategory
//! [`MatchQuality`]: types::MatchQuality
//! [`Confidence`]: types::Confidence

pub mod cluster;
pub mod symptoms;
pub mod types;
