use std::path::PathBuf;

use clap::Args;

use crate::cli::{load_catalog, load_config, read_symptom_set, OutputFormat};
use crate::core::symptoms::UserSymptomSet;
use crate::core::types::Confidence;
use crate::exploration::DISCLAIMER;
use crate::matching::engine::{ClusterMatchResult, MatchingEngine};

#[derive(Args)]
pub struct IdentifyArgs {
    /// Reported symptoms (quote multi-word symptoms)
    pub symptoms: Vec<String>,

    /// Read symptoms from a file, one per line or comma separated.
    /// Use '-' for stdin
    #[arg(long)]
    pub symptoms_file: Option<PathBuf>,

    /// Read a full symptom set (symptoms, triggers, duration, ...) from JSON
    #[arg(long)]
    pub input_json: Option<PathBuf>,

    /// Known trigger; may be given more than once
    #[arg(short, long = "trigger")]
    pub triggers: Vec<String>,

    /// Number of matches to show
    #[arg(short = 'n', long, default_value = "5")]
    pub max_matches: usize,

    /// Path to custom catalog file
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Path to a matching config (thresholds and weights) in JSON
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Minimum score for a cluster with no matched symptoms to be listed
    #[arg(long)]
    pub min_score: Option<f64>,
}

pub fn run(args: IdentifyArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let symptoms = read_symptom_set(
        &args.symptoms,
        args.symptoms_file.as_ref(),
        args.input_json.as_ref(),
        &args.triggers,
    )?;

    if verbose {
        eprintln!(
            "Read {} symptoms and {} triggers",
            symptoms.symptoms.len(),
            symptoms.triggers.len()
        );
    }

    let catalog = load_catalog(args.catalog.as_deref(), verbose)?;
    if catalog.is_empty() {
        eprintln!("Warning: Catalog is empty, no clusters to match against.");
        return Ok(());
    }

    let config = load_config(args.config.as_deref(), args.min_score)?;
    let engine = MatchingEngine::with_config(&catalog, config);
    let matches = engine.find_matches(&symptoms, args.max_matches);

    match format {
        OutputFormat::Text => {
            if matches.is_empty() {
                println!("No matching symptom clusters found.");
            } else {
                print_text_results(&matches, &symptoms, verbose);
            }
            println!("\n{DISCLAIMER}");
        }
        OutputFormat::Json => print_json_results(&matches)?,
        OutputFormat::Tsv => print_tsv_results(&matches),
    }

    Ok(())
}

fn confidence_label(confidence: Confidence) -> &'static str {
    match confidence {
        Confidence::High => "HIGH",
        Confidence::Moderate => "MODERATE",
        Confidence::Low => "LOW",
        Confidence::Possible => "POSSIBLE",
    }
}

fn print_text_results(matches: &[ClusterMatchResult], symptoms: &UserSymptomSet, verbose: bool) {
    for (i, result) in matches.iter().enumerate() {
        if i > 0 {
            println!("\n{}", "─".repeat(60));
        }

        println!(
            "\n#{} {} ({})",
            i + 1,
            result.cluster_name,
            confidence_label(result.confidence)
        );
        println!("   ID: {}", result.cluster_id);
        println!("   Score: {:.1}%", result.match_score * 100.0);

        if !result.matched_symptoms.is_empty() {
            println!("\n   Matched symptoms:");
            for m in &result.matched_symptoms {
                if verbose {
                    println!(
                        "     + {} -> {} ({}, {}, {:.2})",
                        m.user_symptom, m.cluster_symptom, m.requirement, m.match_quality, m.similarity
                    );
                } else {
                    println!(
                        "     + {} -> {} ({}, {})",
                        m.user_symptom, m.cluster_symptom, m.requirement, m.match_quality
                    );
                }
            }
        }

        if !result.missing_required.is_empty() {
            println!("\n   Missing required:");
            for s in &result.missing_required {
                println!("     - {s}");
            }
        }

        if !result.missing_major.is_empty() {
            println!("\n   Missing major:");
            for s in &result.missing_major {
                println!("     - {s}");
            }
        }

        for factor in &result.supporting_factors {
            println!("\n   {factor}");
        }

        println!("\n   {}", result.explanation);
    }

    if verbose {
        let matched: usize = matches.iter().map(|m| m.matched_symptoms.len()).sum();
        eprintln!(
            "\n{} clusters shown, {} symptom pairings across {} reported symptoms",
            matches.len(),
            matched,
            symptoms.symptoms.len()
        );
    }
}

fn print_json_results(matches: &[ClusterMatchResult]) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "matches": matches,
        "disclaimer": DISCLAIMER,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_results(matches: &[ClusterMatchResult]) {
    println!("rank\tcluster_id\tname\tconfidence\tscore\tmatched\tmissing_required\tmissing_major");
    for (i, m) in matches.iter().enumerate() {
        println!(
            "{}\t{}\t{}\t{}\t{:.4}\t{}\t{}\t{}",
            i + 1,
            m.cluster_id,
            m.cluster_name,
            m.confidence,
            m.match_score,
            m.matched_symptoms.len(),
            m.missing_required.join("; "),
            m.missing_major.join("; ")
        );
    }
}
