//! Command line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Trendarr - Request Netflix top-10 titles in Overseerr
#[derive(Parser, Debug)]
#[command(name = "trendarr")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Skip preflight checks
    #[arg(long, global = true)]
    pub skip_preflight: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch the current top 10 and request it in Overseerr
    Run {
        /// Dry run - resolve and report without submitting requests
        #[arg(long)]
        dry_run: bool,

        /// Country name as it appears in the dataset (e.g. "United States")
        #[arg(short, long)]
        country: Option<String>,

        /// Only process the first N entries
        #[arg(short, long, value_name = "N")]
        limit: Option<usize>,

        /// Seconds to wait between Overseerr requests
        #[arg(long, value_name = "SECS")]
        delay_secs: Option<u64>,

        /// Write Kometa collection manifests into this directory
        #[arg(long, value_name = "DIR")]
        collections_dir: Option<PathBuf>,
    },

    /// Fetch and print the current top 10 without touching Overseerr
    Fetch {
        /// Country name as it appears in the dataset
        #[arg(short, long)]
        country: Option<String>,
    },

    /// Run preflight checks only
    Check,
}
