//! GradPlan command-line planner.
//!
//! Plans a degree from a directory of catalog JSON files and prints the
//! term-by-term placement. With `--digest`, also prints the plain-data plan
//! summary an external advisor service can consume.

use std::collections::HashSet;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use gradplan_rust::catalogs::LocalRepository;
use gradplan_rust::services::{self, PlanRequest};

#[derive(Debug, Parser)]
#[command(name = "gradplan")]
#[command(about = "Degree plan scheduler - CLI")]
struct Cli {
    /// Major identifier, e.g. CS_BS_2021_2022
    #[arg(long)]
    major: String,

    /// Start term label, e.g. Fall-2025 or Spring-2026
    #[arg(long)]
    start: String,

    /// Comma-separated completed course codes
    #[arg(long, value_delimiter = ',')]
    completed: Vec<String>,

    /// Max credits per term
    #[arg(long = "max", default_value = "15")]
    max_credits: u32,

    /// Number of terms to plan into
    #[arg(long, default_value = "8")]
    horizon: usize,

    /// Directory of *.json degree catalogs
    #[arg(long, default_value = "data/maps")]
    data_dir: String,

    /// Print the advisor digest JSON after the plan
    #[arg(long)]
    digest: bool,

    /// Enable verbose output
    #[arg(long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "gradplan_rust=debug,info" } else { "gradplan_rust=info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let repository = LocalRepository::from_dir(&cli.data_dir)?;

    let completed: HashSet<String> = cli
        .completed
        .iter()
        .map(|code| code.trim().to_string())
        .filter(|code| !code.is_empty())
        .collect();

    let request = PlanRequest {
        major_id: cli.major,
        start: cli.start,
        completed,
        max_credits_per_term: cli.max_credits,
        horizon: cli.horizon,
    };

    let outcome = services::generate_plan(&repository, &request).await?;

    // Print the plan
    println!(
        "Plan for {} {}, start {}",
        outcome.major_id, outcome.catalog_year, outcome.start
    );
    println!("{}", "=".repeat(60));
    for term in &outcome.result.terms {
        println!("{}: {} credits", term.label, term.credits());
        for course in &term.courses {
            println!("  - {} ({})", course.code, course.credits);
        }
    }
    println!("{}", "=".repeat(60));
    println!("Planned credits: {}", outcome.result.total_credits);
    if !outcome.result.warnings.is_empty() {
        println!("Warnings:");
        for warning in &outcome.result.warnings {
            println!("  * {}", warning);
        }
    }

    if cli.digest {
        let digest = services::plan_digest(outcome.start, &outcome.result);
        println!("\nAdvisor digest:");
        println!("{}", serde_json::to_string_pretty(&digest)?);
    }

    Ok(())
}
