//! External service clients.

pub mod netflix;
pub mod overseerr;

use crate::models::media::{MatchCandidate, MediaType, SeasonStatus};
use crate::Result;

/// Catalog/request service operations used by the engine.
///
/// [`overseerr::OverseerrClient`] is the production implementation; tests
/// substitute an in-memory mock.
#[async_trait::async_trait]
pub trait CatalogClient: Send + Sync {
    /// Search the catalog for candidates of the given media type.
    async fn search(&self, title: &str, media_type: MediaType) -> Result<Vec<MatchCandidate>>;

    /// Current status of seasons 1..=3 of a show, fetched live.
    ///
    /// Seasons unknown to the catalog may be absent from the result.
    async fn season_statuses(&self, catalog_id: u64) -> Result<Vec<SeasonStatus>>;

    /// Whether a movie is already requested or available.
    async fn movie_satisfied(&self, catalog_id: u64) -> Result<bool>;

    /// Submit a request for a movie.
    async fn request_movie(&self, catalog_id: u64) -> Result<()>;

    /// Submit a request for one season of a show.
    async fn request_season(&self, catalog_id: u64, season_number: u16) -> Result<()>;
}
