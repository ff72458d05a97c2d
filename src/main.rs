//! Trendarr CLI
//!
//! A command-line bridge that requests Netflix top-10 titles in Overseerr.

use clap::Parser;
use trendarr::cli::{
    args::{Cli, Commands},
    commands::{check, fetch, run},
};
use trendarr::preflight;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    // Run the appropriate command
    match cli.command {
        Commands::Run {
            dry_run,
            country,
            limit,
            delay_secs,
            collections_dir,
        } => {
            // Run preflight checks unless skipped
            if !cli.skip_preflight {
                run_preflight_checks().await?;
            }

            run::run(
                dry_run,
                country.as_deref(),
                limit,
                delay_secs,
                collections_dir.as_deref(),
            )
            .await?;
        }

        Commands::Fetch { country } => {
            fetch::fetch(country.as_deref()).await?;
        }

        Commands::Check => {
            check::check().await?;
        }
    }

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("trendarr=debug")
    } else {
        EnvFilter::new("trendarr=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}

/// Run preflight checks and exit if any fail.
async fn run_preflight_checks() -> anyhow::Result<()> {
    use colored::Colorize;

    println!("{}", "Running preflight checks...".bold());
    println!();

    let results = preflight::run_preflight_checks().await?;
    preflight::print_results(&results);

    println!();

    if !preflight::all_passed(&results) {
        anyhow::bail!("Preflight checks failed. Fix the issues above and try again.");
    }

    Ok(())
}
