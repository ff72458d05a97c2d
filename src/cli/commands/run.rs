//! Run command implementation.
//!
//! Fetches the current top-10 list, resolves every entry against Overseerr,
//! submits the missing requests, and prints the run summary.

use std::path::Path;
use std::time::Duration;

use crate::core::orchestrator::Orchestrator;
use crate::generators::collection;
use crate::models::config::load_config;
use crate::models::media::{OutcomeKind, RunSummary};
use crate::services::netflix::NetflixClient;
use crate::services::overseerr::OverseerrClient;
use crate::Result;
use colored::Colorize;

/// Execute the run command.
pub async fn run(
    dry_run: bool,
    country: Option<&str>,
    limit: Option<usize>,
    delay_secs: Option<u64>,
    collections_dir: Option<&Path>,
) -> Result<()> {
    let config = load_config();
    let country = country.unwrap_or(&config.source.country).to_string();
    let delay = delay_secs.unwrap_or(config.request_delay_secs);

    if dry_run {
        println!("{}", "🔍 Dry run - no requests will be submitted".bold().yellow());
        println!();
    }

    let overseerr = OverseerrClient::from_env()?;
    let netflix = NetflixClient::new(&config.source.url);

    println!(
        "{} {}",
        "📡 Fetching Netflix top 10 for".bold().cyan(),
        country.bold()
    );
    let mut entries = netflix.fetch_top10(&country).await?;
    if let Some(limit) = limit {
        entries.truncate(limit);
    }
    println!("  {} {}", "Entries to process:".bold(), entries.len());
    println!();

    let orchestrator =
        Orchestrator::new(&overseerr, dry_run).with_delay(Duration::from_secs(delay));
    let summary = orchestrator.run(&entries).await?;

    print_summary(&summary, dry_run);

    if let Some(dir) = collections_dir {
        let written = collection::write_collection_files(&summary, &country, dir)?;
        println!(
            "  {} {} -> {}",
            "Collection manifests:".bold(),
            written,
            dir.display()
        );
    }

    Ok(())
}

/// Print the per-entry outcomes and the final counts.
fn print_summary(summary: &RunSummary, dry_run: bool) {
    println!();
    println!("{}", "📋 Run Summary".bold().green());

    for outcome in &summary.outcomes {
        let kind = match outcome.kind {
            OutcomeKind::Requested if dry_run => "would request".yellow(),
            OutcomeKind::Requested => "requested".green(),
            OutcomeKind::AlreadySatisfied => "already satisfied".blue(),
            OutcomeKind::NotFound => "not found".yellow(),
            OutcomeKind::Error => "error".red(),
        };
        let season = outcome
            .season_number
            .map(|n| format!(" (season {})", n))
            .unwrap_or_default();
        println!(
            "  {:>2}. {} [{}] {}{}",
            outcome.entry.rank,
            outcome.entry.title.bold(),
            outcome.entry.media_type,
            kind,
            season
        );
    }

    println!();
    println!("  {} {}", "Processed:".bold(), summary.total());
    println!("  {} {}", "Requested:".bold(), summary.requested);
    println!("  {} {}", "Already satisfied:".bold(), summary.already_satisfied);
    println!("  {} {}", "Not found:".bold(), summary.not_found);
    println!("  {} {}", "Errors:".bold(), summary.errors);
}
