//! Check command implementation.

use crate::preflight;
use crate::{Error, Result};
use colored::Colorize;

/// Run preflight checks and report the results.
pub async fn check() -> Result<()> {
    println!("{}", "Running preflight checks...".bold());
    println!();

    let results = preflight::run_preflight_checks().await?;
    preflight::print_results(&results);

    println!();

    if !preflight::all_passed(&results) {
        return Err(Error::other("preflight checks failed"));
    }

    println!("{}", "All checks passed".green());
    Ok(())
}
