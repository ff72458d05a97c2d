//! Request orchestration.
//!
//! Drives one pass over the ranked source entries: match each title against
//! the catalog, decide what (if anything) to request, submit the request, and
//! record exactly one outcome per entry. One entry's failure never aborts the
//! run; only an authentication failure does, since no later entry can succeed
//! under the same credentials.

use std::time::Duration;

use crate::core::matcher::TitleMatcher;
use crate::core::seasons::SeasonSelector;
use crate::core::summary::summarize;
use crate::models::media::{MediaType, RequestOutcome, RunSummary, SourceEntry};
use crate::services::CatalogClient;
use crate::Result;

/// Orchestrates one resolution-and-request pass.
pub struct Orchestrator<'a, C: CatalogClient + ?Sized> {
    client: &'a C,
    dry_run: bool,
    delay: Duration,
}

impl<'a, C: CatalogClient + ?Sized> Orchestrator<'a, C> {
    /// Create an orchestrator with the default 1s inter-request delay.
    pub fn new(client: &'a C, dry_run: bool) -> Self {
        Self {
            client,
            dry_run,
            delay: Duration::from_secs(1),
        }
    }

    /// Override the inter-request delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Process all entries in order and produce the run summary.
    ///
    /// Entries are processed strictly sequentially, in the given (rank)
    /// order, which is preserved in the summary. Returns `Err` only on a
    /// fatal authentication failure.
    pub async fn run(&self, entries: &[SourceEntry]) -> Result<RunSummary> {
        let mut outcomes = Vec::with_capacity(entries.len());

        for (i, entry) in entries.iter().enumerate() {
            tracing::info!(
                "processing {} #{}: {}",
                entry.media_type,
                entry.rank,
                entry.title
            );

            let outcome = match self.process_entry(entry).await {
                Ok(outcome) => outcome,
                Err(e) if e.is_auth() => return Err(e),
                Err(e) => {
                    tracing::warn!("'{}' failed: {}", entry.title, e);
                    RequestOutcome::error(entry, e.to_string())
                }
            };

            tracing::info!("'{}': {} ({})", entry.title, outcome.kind, outcome.detail);
            outcomes.push(outcome);

            // Be nice to the API. No delay needed after the last entry.
            if i + 1 < entries.len() {
                tokio::time::sleep(self.delay).await;
            }
        }

        Ok(summarize(outcomes))
    }

    /// Process a single entry. Any error returned here is classified by the
    /// caller; this function itself never writes an `Error` outcome.
    async fn process_entry(&self, entry: &SourceEntry) -> Result<RequestOutcome> {
        let matched = TitleMatcher::new(self.client).match_entry(entry).await?;

        let Some(candidate) = matched.candidate else {
            return Ok(RequestOutcome::not_found(entry));
        };
        let catalog_id = candidate.catalog_id;

        match entry.media_type {
            MediaType::Movie => {
                if self.client.movie_satisfied(catalog_id).await? {
                    return Ok(RequestOutcome::already_satisfied(
                        entry,
                        catalog_id,
                        "already requested or available",
                    ));
                }
                if !self.dry_run {
                    self.client.request_movie(catalog_id).await?;
                }
                Ok(RequestOutcome::requested(
                    entry,
                    catalog_id,
                    None,
                    &candidate.title,
                ))
            }
            MediaType::Tv => {
                match SeasonSelector::new(self.client).select(catalog_id).await? {
                    None => Ok(RequestOutcome::already_satisfied(
                        entry,
                        catalog_id,
                        "all seasons available or requested",
                    )),
                    Some(season) => {
                        if !self.dry_run {
                            self.client.request_season(catalog_id, season).await?;
                        }
                        Ok(RequestOutcome::requested(
                            entry,
                            catalog_id,
                            Some(season),
                            &format!("{} season {}", candidate.title, season),
                        ))
                    }
                }
            }
        }
    }
}
