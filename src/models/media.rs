//! Media-related data models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Media type enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Movie,
    Tv,
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaType::Movie => write!(f, "movie"),
            MediaType::Tv => write!(f, "tv"),
        }
    }
}

/// One ranked title from the trending-list provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceEntry {
    /// Title as published by the provider.
    pub title: String,
    /// Movie or TV show.
    pub media_type: MediaType,
    /// Weekly rank (1 = top).
    pub rank: u32,
    /// Country the ranking applies to.
    pub country: String,
}

impl SourceEntry {
    pub fn new(title: &str, media_type: MediaType, rank: u32, country: &str) -> Self {
        Self {
            title: title.to_string(),
            media_type,
            rank,
            country: country.to_string(),
        }
    }
}

/// A possible catalog match returned by the request service's search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCandidate {
    /// Catalog id (TMDB id in Overseerr).
    pub catalog_id: u64,
    pub media_type: MediaType,
    pub title: String,
    pub release_date: Option<NaiveDate>,
}

/// Result of matching one source entry against the catalog.
#[derive(Debug, Clone)]
pub struct MatchResult {
    pub entry: SourceEntry,
    pub candidate: Option<MatchCandidate>,
}

impl MatchResult {
    /// Whether a catalog candidate was found.
    pub fn matched(&self) -> bool {
        self.candidate.is_some()
    }
}

/// Per-season availability/request state as known to the request service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonState {
    /// Fully or partially available in the library.
    Available,
    /// A request exists or the season is being processed.
    RequestedOrProcessing,
    /// Not available and not requested.
    Unavailable,
}

/// Status of one season of a matched show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonStatus {
    pub season_number: u16,
    pub state: SeasonState,
}

impl SeasonStatus {
    pub fn new(season_number: u16, state: SeasonState) -> Self {
        Self {
            season_number,
            state,
        }
    }
}

/// Terminal classification of one source entry's processing for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    /// A new request was submitted (or would be, under dry-run).
    Requested,
    /// Matched, but nothing new to request.
    AlreadySatisfied,
    /// No matching catalog candidate; informational, not an error.
    NotFound,
    /// The catalog service failed while checking or submitting.
    Error,
}

impl std::fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutcomeKind::Requested => write!(f, "requested"),
            OutcomeKind::AlreadySatisfied => write!(f, "already satisfied"),
            OutcomeKind::NotFound => write!(f, "not found"),
            OutcomeKind::Error => write!(f, "error"),
        }
    }
}

/// Outcome of processing one source entry. Written once, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestOutcome {
    pub entry: SourceEntry,
    pub kind: OutcomeKind,
    /// Human-readable detail (chosen candidate, error message, ...).
    pub detail: String,
    pub catalog_id: Option<u64>,
    pub season_number: Option<u16>,
}

impl RequestOutcome {
    pub fn requested(
        entry: &SourceEntry,
        catalog_id: u64,
        season_number: Option<u16>,
        detail: &str,
    ) -> Self {
        Self {
            entry: entry.clone(),
            kind: OutcomeKind::Requested,
            detail: detail.to_string(),
            catalog_id: Some(catalog_id),
            season_number,
        }
    }

    pub fn already_satisfied(entry: &SourceEntry, catalog_id: u64, detail: &str) -> Self {
        Self {
            entry: entry.clone(),
            kind: OutcomeKind::AlreadySatisfied,
            detail: detail.to_string(),
            catalog_id: Some(catalog_id),
            season_number: None,
        }
    }

    pub fn not_found(entry: &SourceEntry) -> Self {
        Self {
            entry: entry.clone(),
            kind: OutcomeKind::NotFound,
            detail: "no catalog match".to_string(),
            catalog_id: None,
            season_number: None,
        }
    }

    pub fn error(entry: &SourceEntry, detail: String) -> Self {
        Self {
            entry: entry.clone(),
            kind: OutcomeKind::Error,
            detail,
            catalog_id: None,
            season_number: None,
        }
    }
}

/// Finalized result of one run: outcomes in processing order plus counts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSummary {
    /// One outcome per source entry, in processing (rank) order.
    pub outcomes: Vec<RequestOutcome>,
    pub requested: usize,
    pub already_satisfied: usize,
    pub not_found: usize,
    pub errors: usize,
}

impl RunSummary {
    /// Total number of entries processed.
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }
}
