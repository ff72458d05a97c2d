//! Netflix weekly top-10 source client.

use crate::models::media::{MediaType, SourceEntry};
use crate::{Error, Result};

/// Published Tudum dataset with weekly top-10 rankings per country.
pub const NETFLIX_TOP10_URL: &str =
    "https://www.netflix.com/tudum/top10/data/all-weeks-countries.tsv";

/// Entries kept per media type.
const TOP_N: usize = 10;

/// Netflix top-10 client.
pub struct NetflixClient {
    url: String,
    client: reqwest::Client,
}

impl NetflixClient {
    /// Create a client for the given dataset URL.
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Fetch the current top-10 entries for a country, movies first then
    /// shows, each in weekly-rank order.
    pub async fn fetch_top10(&self, country: &str) -> Result<Vec<SourceEntry>> {
        // The dataset endpoint rejects default client user agents.
        let resp = self
            .client
            .get(&self.url)
            .header(
                "User-Agent",
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
            )
            .header("Accept", "text/tab-separated-values")
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Error::SourceList(format!(
                "dataset fetch failed: {}",
                resp.status()
            )));
        }

        let text = resp.text().await?;
        parse_top10(&text, country)
    }
}

/// Parse the weekly top-10 TSV for one country.
///
/// Keeps only the most recent week, splits `Films` from `TV`, caps each list
/// at ten entries, and returns movies before shows. Rows that fail to parse
/// are skipped.
pub fn parse_top10(tsv: &str, country: &str) -> Result<Vec<SourceEntry>> {
    let mut lines = tsv.lines();
    let header = lines
        .next()
        .ok_or_else(|| Error::SourceList("empty dataset".to_string()))?;

    let columns: Vec<&str> = header.split('\t').collect();
    let col = |name: &str| -> Result<usize> {
        columns
            .iter()
            .position(|c| *c == name)
            .ok_or_else(|| Error::SourceList(format!("missing column: {}", name)))
    };

    let country_col = col("country_name")?;
    let week_col = col("week")?;
    let category_col = col("category")?;
    let title_col = col("show_title")?;
    let rank_col = col("weekly_rank")?;

    // (week, category, rank, title) rows for the requested country.
    let mut rows: Vec<(String, String, u32, String)> = Vec::new();
    for line in lines {
        let fields: Vec<&str> = line.split('\t').collect();
        let get = |i: usize| fields.get(i).copied().unwrap_or_default();

        if get(country_col) != country {
            continue;
        }
        let Ok(rank) = get(rank_col).parse::<u32>() else {
            continue;
        };
        rows.push((
            get(week_col).to_string(),
            get(category_col).to_string(),
            rank,
            get(title_col).to_string(),
        ));
    }

    if rows.is_empty() {
        return Err(Error::SourceList(format!("no data for country: {}", country)));
    }

    // Weeks are ISO dates, so lexicographic max is the most recent.
    let latest_week = rows.iter().map(|r| r.0.clone()).max().unwrap_or_default();
    tracing::info!("processing top-10 data for week {}", latest_week);

    let mut movies = Vec::new();
    let mut shows = Vec::new();
    for (week, category, rank, title) in rows {
        if week != latest_week || title.is_empty() {
            continue;
        }
        match category.as_str() {
            "Films" => movies.push(SourceEntry::new(&title, MediaType::Movie, rank, country)),
            "TV" => shows.push(SourceEntry::new(&title, MediaType::Tv, rank, country)),
            _ => {}
        }
    }

    movies.sort_by_key(|e| e.rank);
    shows.sort_by_key(|e| e.rank);
    movies.truncate(TOP_N);
    shows.truncate(TOP_N);

    tracing::info!(
        "found {} movies and {} shows for the most recent week",
        movies.len(),
        shows.len()
    );

    movies.extend(shows);
    Ok(movies)
}
