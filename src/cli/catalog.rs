use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::{load_catalog, OutputFormat};
use crate::core::types::{ClusterCategory, Requirement};

#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommands,
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List all clusters in the catalog
    List {
        /// Path to custom catalog file
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Filter by category (e.g., "neurologic")
        #[arg(long)]
        category: Option<String>,
    },

    /// Show details of a specific cluster
    Show {
        /// Cluster ID
        #[arg(required = true)]
        id: String,

        /// Path to custom catalog file
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Export the catalog to a file
    Export {
        /// Output file path
        #[arg(required = true)]
        output: PathBuf,

        /// Path to custom catalog file to export (defaults to embedded)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

pub fn run(args: CatalogArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    match args.command {
        CatalogCommands::List { catalog, category } => {
            run_list(catalog, category.as_deref(), format, verbose)
        }
        CatalogCommands::Show { id, catalog } => run_show(&id, catalog, format),
        CatalogCommands::Export { output, catalog } => run_export(output, catalog, verbose),
    }
}

fn run_list(
    catalog_path: Option<PathBuf>,
    category_filter: Option<&str>,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path.as_deref(), verbose)?;

    let filtered = match category_filter {
        Some(category) => {
            let category: ClusterCategory = category.parse().map_err(|e| anyhow::anyhow!("{e}"))?;
            catalog.by_category(category)
        }
        None => catalog.clusters().iter().collect(),
    };

    match format {
        OutputFormat::Text => {
            let id_width = column_width(filtered.iter().map(|c| c.cluster_id.as_str()), 2, usize::MAX);
            let name_width = column_width(filtered.iter().map(|c| c.name.as_str()), 4, 35);
            let category_width = column_width(filtered.iter().map(|c| c.category.as_str()), 8, usize::MAX);

            let total_width = id_width + name_width + category_width + 3 + 9;

            println!("Symptom Cluster Catalog ({} clusters)\n", filtered.len());
            println!(
                "{:<id_w$} {:<name_w$} {:<cat_w$} {:>9}",
                "ID",
                "Name",
                "Category",
                "Symptoms",
                id_w = id_width,
                name_w = name_width,
                cat_w = category_width
            );
            println!("{}", "-".repeat(total_width));

            for c in &filtered {
                println!(
                    "{:<id_w$} {:<name_w$} {:<cat_w$} {:>9}",
                    c.cluster_id.as_str(),
                    truncate(&c.name, name_width),
                    c.category.as_str(),
                    c.symptoms.len(),
                    id_w = id_width,
                    name_w = name_width,
                    cat_w = category_width
                );
                if verbose {
                    println!(
                        "  └─ required: {}, major: {}, minor: {}, supportive: {}",
                        c.count_by_requirement(Requirement::Required),
                        c.count_by_requirement(Requirement::Major),
                        c.count_by_requirement(Requirement::Minor),
                        c.count_by_requirement(Requirement::Supportive)
                    );
                }
            }
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = filtered
                .iter()
                .map(|c| {
                    serde_json::json!({
                        "cluster_id": c.cluster_id,
                        "name": c.name,
                        "category": c.category,
                        "icd_code": c.icd_code,
                        "symptom_count": c.symptoms.len(),
                        "required_count": c.count_by_requirement(Requirement::Required),
                        "major_count": c.count_by_requirement(Requirement::Major),
                        "urgency": c.when_to_seek_care.urgency,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("cluster_id\tname\tcategory\ticd_code\tsymptom_count\trequired_count\tmajor_count");
            for c in &filtered {
                println!(
                    "{}\t{}\t{}\t{}\t{}\t{}\t{}",
                    c.cluster_id,
                    c.name,
                    c.category,
                    c.icd_code.as_deref().unwrap_or(""),
                    c.symptoms.len(),
                    c.count_by_requirement(Requirement::Required),
                    c.count_by_requirement(Requirement::Major)
                );
            }
        }
    }

    Ok(())
}

fn run_show(id: &str, catalog_path: Option<PathBuf>, format: OutputFormat) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path.as_deref(), false)?;

    let cluster = catalog
        .get_str(id)
        .ok_or_else(|| anyhow::anyhow!("Cluster '{}' not found", id))?;

    match format {
        OutputFormat::Text => {
            println!("Cluster: {}\n", cluster.name);
            println!("ID:       {}", cluster.cluster_id);
            println!("Category: {}", cluster.category);
            if let Some(icd) = &cluster.icd_code {
                println!("ICD:      {icd}");
            }
            if let Some(prevalence) = &cluster.prevalence {
                println!("Prevalence: {prevalence}");
            }
            if let Some(pattern) = &cluster.temporal_pattern {
                println!(
                    "Onset:    {:?}, course {:?} ({})",
                    pattern.onset, pattern.course, pattern.duration
                );
            }

            if !cluster.typical_presentation.is_empty() {
                println!("\nTypical presentation: {}", cluster.typical_presentation);
            }

            println!("\nSymptoms:");
            println!("{:<50} {:<12} Frequency", "Symptom", "Requirement");
            println!("{}", "-".repeat(75));
            for s in &cluster.symptoms {
                println!(
                    "{:<50} {:<12} {}",
                    truncate(&s.symptom, 50),
                    s.requirement.to_string(),
                    if s.frequency.is_empty() { "-" } else { s.frequency.as_str() }
                );
            }

            if !cluster.triggers.is_empty() {
                println!("\nTriggers: {}", cluster.triggers.join(", "));
            }

            if !cluster.related_clusters.is_empty() {
                println!("\nRelated: {}", cluster.related_clusters.join(", "));
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(cluster)?);
        }
        OutputFormat::Tsv => {
            println!("symptom\trequirement\tfrequency");
            for s in &cluster.symptoms {
                println!("{}\t{}\t{}", s.symptom, s.requirement, s.frequency);
            }
        }
    }

    Ok(())
}

fn run_export(output: PathBuf, catalog_path: Option<PathBuf>, verbose: bool) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path.as_deref(), verbose)?;

    let json = catalog.to_json()?;
    std::fs::write(&output, json)?;

    println!(
        "Exported {} clusters to {}",
        catalog.len(),
        output.display()
    );

    Ok(())
}

/// Widest value in characters, at least `min` and at most `cap`
fn column_width<'a>(values: impl Iterator<Item = &'a str>, min: usize, cap: usize) -> usize {
    values
        .map(|v| v.chars().count().min(cap))
        .max()
        .unwrap_or(min)
        .max(min)
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
