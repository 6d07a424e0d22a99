use std::path::PathBuf;

use clap::Args;

use crate::cli::{load_catalog, load_config, read_symptom_set, OutputFormat};
use crate::core::types::ClusterId;
use crate::exploration::result::ExplorationResult;
use crate::exploration::DISCLAIMER;
use crate::matching::engine::MatchingEngine;

#[derive(Args)]
pub struct ExploreArgs {
    /// Cluster ID (e.g. "migraine-syndrome")
    #[arg(required = true)]
    pub cluster_id: String,

    /// Reported symptoms to score against the cluster
    pub symptoms: Vec<String>,

    /// Read symptoms from a file, one per line or comma separated.
    /// Use '-' for stdin
    #[arg(long)]
    pub symptoms_file: Option<PathBuf>,

    /// Known trigger; may be given more than once
    #[arg(short, long = "trigger")]
    pub triggers: Vec<String>,

    /// Reading level of the explanation, 1 (plain) to 5 (specialist)
    #[arg(long, default_value = "2", value_parser = clap::value_parser!(u8).range(1..=5))]
    pub level: u8,

    /// Path to custom catalog file
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Path to a matching config (thresholds and weights) in JSON
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: ExploreArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = load_catalog(args.catalog.as_deref(), verbose)?;
    let config = load_config(args.config.as_deref(), None)?;
    let engine = MatchingEngine::with_config(&catalog, config);

    let symptoms = if args.symptoms.is_empty()
        && args.symptoms_file.is_none()
        && args.triggers.is_empty()
    {
        None
    } else {
        Some(read_symptom_set(
            &args.symptoms,
            args.symptoms_file.as_ref(),
            None,
            &args.triggers,
        )?)
    };

    let result = engine
        .explore(&ClusterId::new(&args.cluster_id), symptoms.as_ref())
        .ok_or_else(|| anyhow::anyhow!("Cluster '{}' not found", args.cluster_id))?;

    match format {
        OutputFormat::Text => {
            print_text(&result, args.level);
            println!("\n{DISCLAIMER}");
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Tsv => print_tsv(&result),
    }

    Ok(())
}

fn print_text(result: &ExplorationResult, level: u8) {
    let cluster = &result.cluster;

    println!("Cluster: {}\n", cluster.name);
    println!("ID:       {}", cluster.cluster_id);
    println!("Category: {}", cluster.category);
    if let Some(icd) = &cluster.icd_code {
        println!("ICD:      {icd}");
    }
    if let Some(prevalence) = &cluster.prevalence {
        println!("Prevalence: {prevalence}");
    }
    if !cluster.alternate_names.is_empty() {
        println!("Also known as: {}", cluster.alternate_names.join(", "));
    }

    println!("\n{}", cluster.explanations.at_level(level));

    if let Some(m) = &result.match_result {
        println!("\n{}", "─".repeat(60));
        println!(
            "Your match: {:.1}% ({} confidence)",
            m.match_score * 100.0,
            m.confidence
        );
        for s in &m.matched_symptoms {
            println!("  + {} -> {} ({})", s.user_symptom, s.cluster_symptom, s.match_quality);
        }
        for s in &m.missing_required {
            println!("  - {s} (required)");
        }
        for s in &m.missing_major {
            println!("  - {s} (major)");
        }
        println!("{}", m.explanation);
        println!("{}", "─".repeat(60));
    }

    let content = &result.educational_content;
    if !content.mechanism.is_empty() {
        println!("\nMechanism: {}", content.mechanism);
    }

    if !result.pathophysiology_steps.is_empty() {
        println!("\nPathway:");
        for (i, step) in result.pathophysiology_steps.iter().enumerate() {
            println!("  {}. {}", i + 1, step);
        }
    }

    println!("\n{}", content.recognition);

    if !result.anatomy_highlights.is_empty() {
        println!("\nAffected systems:");
        for system in &result.anatomy_highlights {
            if system.manifestations.is_empty() {
                println!("  {}", system.system);
            } else {
                println!("  {}: {}", system.system, system.manifestations.join(", "));
            }
        }
    }

    if !cluster.red_flags.is_empty() {
        println!("\nRed flags:");
        for flag in &cluster.red_flags {
            println!("  [{}] {}: {}", flag.urgency, flag.sign, flag.action);
        }
    }

    println!(
        "\nWhen to seek care ({}): {}",
        cluster.when_to_seek_care.urgency, content.management
    );
}

fn print_tsv(result: &ExplorationResult) {
    let cluster = &result.cluster;
    println!("field\tvalue");
    println!("cluster_id\t{}", cluster.cluster_id);
    println!("name\t{}", cluster.name);
    println!("category\t{}", cluster.category);
    println!("urgency\t{}", cluster.when_to_seek_care.urgency);
    println!(
        "highlighted_systems\t{}",
        result.view_settings.highlighted_systems.join("; ")
    );
    for (i, step) in result.pathophysiology_steps.iter().enumerate() {
        println!("pathway_step_{}\t{}", i + 1, step);
    }
    if let Some(m) = &result.match_result {
        println!("match_score\t{:.4}", m.match_score);
        println!("confidence\t{}", m.confidence);
    }
}
