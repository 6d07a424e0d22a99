//! Command-line interface for symptom-cluster.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **identify**: Rank symptom clusters against a set of reported symptoms
//! - **explore**: Show the exploration view of one cluster
//! - **catalog**: List, show, or export clusters from the catalog
//!
//! ## Usage
//!
//! ```text
//! # Rank clusters for a few symptoms
//! symptom-cluster identify fatigue "sleep disturbance" headaches
//!
//! # Symptoms from a file or stdin, with a trigger
//! symptom-cluster identify --symptoms-file intake.txt --trigger stress
//! echo "nausea, photophobia" | symptom-cluster identify --symptoms-file -
//!
//! # JSON output for scripting
//! symptom-cluster identify nausea aura --format json
//!
//! # Explore a cluster, scored against symptoms
//! symptom-cluster explore migraine-syndrome nausea photophobia
//! ```

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::catalog::store::ClusterCatalog;
use crate::core::symptoms::UserSymptomSet;
use crate::matching::engine::MatchingConfig;
use crate::utils::validation::{clean_symptoms, parse_symptom_list};

pub mod catalog;
pub mod explore;
pub mod identify;

#[derive(Parser)]
#[command(name = "symptom-cluster")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Match reported symptoms against a catalog of symptom clusters")]
#[command(
    long_about = "symptom-cluster compares free-text symptoms against a catalog of named symptom clusters (syndromes).\n\nFor each cluster it reports:\n- Which reported symptoms matched which cluster symptoms\n- Missing required and major symptoms\n- A weighted match score and a confidence label\n\nThis tool is for education only and does not provide medical diagnosis."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank symptom clusters against reported symptoms
    Identify(identify::IdentifyArgs),

    /// Show one cluster in detail, optionally scored against symptoms
    Explore(explore::ExploreArgs),

    /// Inspect the cluster catalog
    Catalog(catalog::CatalogArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Load a custom catalog, or the embedded one when no path is given
pub(crate) fn load_catalog(path: Option<&Path>, verbose: bool) -> anyhow::Result<ClusterCatalog> {
    let catalog = match path {
        Some(path) => ClusterCatalog::load_from_file(path)?,
        None => ClusterCatalog::load_embedded()?,
    };

    if verbose {
        eprintln!("Loaded catalog with {} clusters", catalog.len());
    }

    Ok(catalog)
}

/// Load a matching config file (or defaults) and apply a `--min-score` override
pub(crate) fn load_config(
    path: Option<&Path>,
    min_score: Option<f64>,
) -> anyhow::Result<MatchingConfig> {
    let mut config = match path {
        Some(path) => MatchingConfig::load_from_file(path)?,
        None => MatchingConfig::default(),
    };

    if let Some(min_score) = min_score {
        config.thresholds.inclusion_floor = min_score;
        config.validate()?;
    }

    Ok(config)
}

/// Gather a symptom set from positional arguments, a symptoms file (or `-`
/// for stdin), or a JSON symptom set
pub(crate) fn read_symptom_set(
    symptoms: &[String],
    symptoms_file: Option<&PathBuf>,
    input_json: Option<&PathBuf>,
    triggers: &[String],
) -> anyhow::Result<UserSymptomSet> {
    let mut set = if let Some(path) = input_json {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str::<UserSymptomSet>(&content)?
    } else {
        UserSymptomSet::default()
    };

    let mut collected = clean_symptoms(&set.symptoms)?;
    collected.extend(clean_symptoms(symptoms)?);

    if let Some(path) = symptoms_file {
        let text = if path.to_string_lossy() == "-" {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        } else {
            std::fs::read_to_string(path)?
        };
        collected.extend(parse_symptom_list(&text)?);
    }

    set.symptoms = clean_symptoms(&collected)?;
    set.triggers.extend(clean_symptoms(triggers)?);
    Ok(set)
}
