//! Fetch command implementation.
//!
//! Prints the current top-10 list without touching Overseerr.

use crate::models::config::load_config;
use crate::models::media::MediaType;
use crate::services::netflix::NetflixClient;
use crate::Result;
use colored::Colorize;

/// Execute the fetch command.
pub async fn fetch(country: Option<&str>) -> Result<()> {
    let config = load_config();
    let country = country.unwrap_or(&config.source.country);

    let netflix = NetflixClient::new(&config.source.url);
    let entries = netflix.fetch_top10(country).await?;

    println!(
        "{} {}",
        "📡 Netflix top 10 for".bold().cyan(),
        country.bold()
    );
    println!();

    for media_type in [MediaType::Movie, MediaType::Tv] {
        let label = match media_type {
            MediaType::Movie => "Movies",
            MediaType::Tv => "TV Shows",
        };
        println!("{}", label.bold());
        for entry in entries.iter().filter(|e| e.media_type == media_type) {
            println!("  {:>2}. {}", entry.rank, entry.title);
        }
        println!();
    }

    Ok(())
}
