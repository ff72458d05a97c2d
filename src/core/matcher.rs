//! Title matching against the catalog.
//!
//! Resolves a bare title + media type from the trending list to a canonical
//! catalog entry:
//!
//! 1. Exact match on the normalized title (and media type) wins.
//! 2. Otherwise fall back to the most recently released candidate of the
//!    right media type.
//! 3. Ties are broken by release date, then by lower catalog id, so the
//!    choice is reproducible across runs.
//!
//! "No match" is a normal, reportable result, not a failure.

use crate::models::media::{MatchCandidate, MatchResult, MediaType, SourceEntry};
use crate::services::CatalogClient;
use crate::Result;

/// Normalize a title for comparison: lowercase, whitespace collapsed.
pub fn normalize_title(title: &str) -> String {
    title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Pick the best candidate for a query among search results.
///
/// Pure selection logic; candidates of the wrong media type are ignored.
pub fn pick_candidate(
    query: &str,
    media_type: MediaType,
    candidates: &[MatchCandidate],
) -> Option<MatchCandidate> {
    let query_norm = normalize_title(query);

    let mut typed: Vec<&MatchCandidate> = candidates
        .iter()
        .filter(|c| c.media_type == media_type)
        .collect();

    // Most recent release first; undated candidates sort oldest; lower
    // catalog id wins when dates tie.
    typed.sort_by(|a, b| {
        b.release_date
            .cmp(&a.release_date)
            .then(a.catalog_id.cmp(&b.catalog_id))
    });

    let exact = typed
        .iter()
        .find(|c| normalize_title(&c.title) == query_norm)
        .copied();

    exact.or_else(|| typed.first().copied()).cloned()
}

/// Matches source entries against the catalog via a [`CatalogClient`].
pub struct TitleMatcher<'a, C: CatalogClient + ?Sized> {
    client: &'a C,
}

impl<'a, C: CatalogClient + ?Sized> TitleMatcher<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// Match one source entry. Returns an unmatched result when the search
    /// yields no usable candidate.
    pub async fn match_entry(&self, entry: &SourceEntry) -> Result<MatchResult> {
        let query = normalize_title(&entry.title);
        let candidates = self.client.search(&query, entry.media_type).await?;
        let candidate = pick_candidate(&entry.title, entry.media_type, &candidates);

        match &candidate {
            Some(c) => tracing::debug!(
                "matched '{}' ({}) -> catalog id {} '{}'",
                entry.title,
                entry.media_type,
                c.catalog_id,
                c.title
            ),
            None => tracing::debug!("no match for '{}' ({})", entry.title, entry.media_type),
        }

        Ok(MatchResult {
            entry: entry.clone(),
            candidate,
        })
    }
}
