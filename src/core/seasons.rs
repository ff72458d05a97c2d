//! Season selection for matched shows.

use crate::models::media::{SeasonState, SeasonStatus};
use crate::services::overseerr::MAX_SEASON;
use crate::services::CatalogClient;
use crate::Result;

/// Decide which season of a show to request, if any.
///
/// Walks season numbers 1..=3 in order: a season that is unknown or
/// unavailable is the one to request; a season that is already available or
/// requested advances the walk. When every attempted season is covered there
/// is nothing left to request.
///
/// Pure function over the current statuses; a season absent from the list
/// counts as unknown.
pub fn select_season(statuses: &[SeasonStatus]) -> Option<u16> {
    for number in 1..=MAX_SEASON {
        let state = statuses
            .iter()
            .find(|s| s.season_number == number)
            .map(|s| s.state);

        match state {
            Some(SeasonState::Available) | Some(SeasonState::RequestedOrProcessing) => continue,
            Some(SeasonState::Unavailable) | None => return Some(number),
        }
    }
    None
}

/// Fetches live season statuses and applies [`select_season`].
pub struct SeasonSelector<'a, C: CatalogClient + ?Sized> {
    client: &'a C,
}

impl<'a, C: CatalogClient + ?Sized> SeasonSelector<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// Season number to request for this show, or `None` when all attempted
    /// seasons are already available or requested.
    ///
    /// Statuses are fetched at decision time, never reused from a previous
    /// run.
    pub async fn select(&self, catalog_id: u64) -> Result<Option<u16>> {
        let statuses = self.client.season_statuses(catalog_id).await?;
        Ok(select_season(&statuses))
    }
}
