//! Collection manifest generator (Kometa/Plex Meta Manager compatible).

use std::path::Path;

use crate::models::media::{MediaType, OutcomeKind, RunSummary};
use crate::Result;

/// Generate a collection manifest for one media type from a run summary.
///
/// Lists the catalog (TMDB) ids of every entry that matched, keeping rank
/// order. Returns `None` when no entry of that type matched.
pub fn generate_collection_yaml(
    summary: &RunSummary,
    country: &str,
    media_type: MediaType,
) -> Option<String> {
    let ids: Vec<u64> = summary
        .outcomes
        .iter()
        .filter(|o| o.entry.media_type == media_type && o.kind != OutcomeKind::NotFound)
        .filter_map(|o| o.catalog_id)
        .collect();

    if ids.is_empty() {
        return None;
    }

    let (label, key) = match media_type {
        MediaType::Movie => ("Movies", "tmdb_movie"),
        MediaType::Tv => ("Shows", "tmdb_show"),
    };

    let mut yaml = String::new();
    yaml.push_str("collections:\n");
    yaml.push_str(&format!("  Netflix Top 10 {} ({}):\n", label, country));
    yaml.push_str(&format!("    {}:\n", key));
    for id in ids {
        yaml.push_str(&format!("      - {}\n", id));
    }
    yaml.push_str("    sync_mode: sync\n");

    Some(yaml)
}

/// Write per-media-type collection manifests into a directory.
///
/// Returns the number of files written.
pub fn write_collection_files(summary: &RunSummary, country: &str, dir: &Path) -> Result<usize> {
    std::fs::create_dir_all(dir)?;

    let mut written = 0;
    let files = [
        (MediaType::Movie, "netflix-top10-movies.yml"),
        (MediaType::Tv, "netflix-top10-shows.yml"),
    ];

    for (media_type, filename) in files {
        if let Some(yaml) = generate_collection_yaml(summary, country, media_type) {
            let path = dir.join(filename);
            std::fs::write(&path, yaml)?;
            tracing::info!("wrote collection manifest {}", path.display());
            written += 1;
        }
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::summary::summarize;
    use crate::models::media::{RequestOutcome, SourceEntry};

    fn entry(title: &str, media_type: MediaType, rank: u32) -> SourceEntry {
        SourceEntry::new(title, media_type, rank, "United States")
    }

    #[test]
    fn test_generate_movie_collection() {
        let outcomes = vec![
            RequestOutcome::requested(&entry("Alpha", MediaType::Movie, 1), 100, None, "Alpha"),
            RequestOutcome::already_satisfied(&entry("Beta", MediaType::Movie, 2), 200, "present"),
            RequestOutcome::not_found(&entry("Gamma", MediaType::Movie, 3)),
            RequestOutcome::requested(&entry("Delta", MediaType::Tv, 1), 300, Some(1), "Delta"),
        ];
        let summary = summarize(outcomes);

        let yaml = generate_collection_yaml(&summary, "United States", MediaType::Movie).unwrap();
        assert!(yaml.contains("Netflix Top 10 Movies (United States)"));
        assert!(yaml.contains("tmdb_movie:"));
        assert!(yaml.contains("- 100"));
        assert!(yaml.contains("- 200"));
        // TV ids and unmatched entries stay out of the movie manifest
        assert!(!yaml.contains("- 300"));
        assert!(yaml.contains("sync_mode: sync"));
    }

    #[test]
    fn test_no_manifest_without_matches() {
        let outcomes = vec![RequestOutcome::not_found(&entry(
            "Gamma",
            MediaType::Movie,
            1,
        ))];
        let summary = summarize(outcomes);

        assert!(generate_collection_yaml(&summary, "United States", MediaType::Movie).is_none());
        assert!(generate_collection_yaml(&summary, "United States", MediaType::Tv).is_none());
    }
}
