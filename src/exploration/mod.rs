//! Exploration views of a single cluster.
//!
//! [`ExplorationResult`](result::ExplorationResult) composes a cluster's
//! static content, an optional match result, and viewer hints into one
//! display-ready value. [`ExplorerState`](state::ExplorerState) tracks an
//! interactive session across several matching calls.

pub mod result;
pub mod state;

/// Shown alongside any cluster match output
pub const DISCLAIMER: &str = "\
This symptom cluster recognition tool is for educational purposes only and does not
provide medical diagnosis. Symptom patterns can suggest possibilities to discuss with
your healthcare provider, but many conditions share similar symptoms. Only a qualified
healthcare professional can properly diagnose medical conditions through examination,
testing, and clinical judgment. Do not use this tool to self-diagnose or delay
seeking appropriate medical care.";
