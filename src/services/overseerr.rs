//! Overseerr API client.

use crate::models::media::{MatchCandidate, MediaType, SeasonState, SeasonStatus};
use crate::{Error, Result};
use chrono::NaiveDate;
use reqwest::StatusCode;
use serde::Deserialize;

/// Highest season number the engine will look at for a show.
///
/// Matches the shallow per-show metadata the trending provider carries and
/// bounds worst-case calls per entry.
pub const MAX_SEASON: u16 = 3;

/// Overseerr client configuration.
#[derive(Debug, Clone)]
pub struct OverseerrConfig {
    /// Base URL, no trailing slash.
    pub url: String,
    pub api_key: String,
}

impl OverseerrConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Result<Self> {
        let url = std::env::var("OVERSEERR_URL").map_err(|_| Error::OverseerrUrlMissing)?;
        let api_key =
            std::env::var("OVERSEERR_API_KEY").map_err(|_| Error::OverseerrApiKeyMissing)?;

        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            api_key,
        })
    }
}

/// Overseerr API client.
pub struct OverseerrClient {
    config: OverseerrConfig,
    client: reqwest::Client,
}

/// Search response.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<SearchItem>,
}

/// One search result. Movies carry `title`/`releaseDate`, shows carry
/// `name`/`firstAirDate`; `mediaType` may also be "person".
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchItem {
    id: u64,
    media_type: String,
    title: Option<String>,
    name: Option<String>,
    release_date: Option<String>,
    first_air_date: Option<String>,
}

/// Known media state, nested in details responses.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MediaInfo {
    status: Option<u8>,
    seasons: Option<Vec<MediaSeason>>,
}

/// Per-season request state.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MediaSeason {
    season_number: u16,
    status: Option<u8>,
}

/// Movie details (only the fields the engine needs).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MovieDetails {
    media_info: Option<MediaInfo>,
}

/// TV show details (only the fields the engine needs).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TvDetails {
    media_info: Option<MediaInfo>,
}

/// Server status, used by preflight.
#[derive(Debug, Deserialize)]
pub struct ServerStatus {
    pub version: Option<String>,
}

/// Error body returned by Overseerr on failures.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Map an Overseerr media status code to a season state.
///
/// Overseerr codes: 1 unknown, 2 pending, 3 processing, 4 partially
/// available, 5 available.
fn season_state_from_code(code: Option<u8>) -> SeasonState {
    match code {
        Some(4) | Some(5) => SeasonState::Available,
        Some(2) | Some(3) => SeasonState::RequestedOrProcessing,
        _ => SeasonState::Unavailable,
    }
}

/// Whether a movie status code counts as already requested or available.
fn movie_satisfied_from_code(code: Option<u8>) -> bool {
    matches!(code, Some(c) if c >= 2)
}

/// Parse an Overseerr date string (YYYY-MM-DD), tolerating absent/empty values.
fn parse_date(raw: Option<&str>) -> Option<NaiveDate> {
    raw.filter(|s| !s.is_empty())
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
}

impl OverseerrClient {
    /// Create a new Overseerr client.
    pub fn new(config: OverseerrConfig) -> Self {
        let client = reqwest::Client::new();
        Self { config, client }
    }

    /// Create a new Overseerr client from environment.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(OverseerrConfig::from_env()?))
    }

    /// Base URL of the configured server.
    pub fn base_url(&self) -> &str {
        &self.config.url
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api/v1/{}", self.config.url, path)
    }

    /// Build a request with API key authentication.
    fn build_request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("X-Api-Key", &self.config.api_key)
            .header("Accept", "application/json")
    }

    /// Check a response status, translating auth failures and error bodies.
    async fn ensure_success(
        &self,
        resp: reqwest::Response,
        what: &str,
    ) -> Result<reqwest::Response> {
        let status = resp.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(Error::Unauthorized);
        }
        if !status.is_success() {
            let message = resp
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|b| b.message)
                .unwrap_or_else(|| "unknown error".to_string());
            return Err(Error::Catalog(format!("{}: {} - {}", what, status, message)));
        }
        Ok(resp)
    }

    /// Get server status. Used by preflight to verify connectivity.
    pub async fn status(&self) -> Result<ServerStatus> {
        let url = self.api_url("status");
        let resp = self.build_request(self.client.get(&url)).send().await?;
        let resp = self.ensure_success(resp, "status").await?;
        Ok(resp.json().await?)
    }

    /// Submit a request body to the request endpoint.
    ///
    /// HTTP 409 means the request already exists and is treated as success so
    /// that re-runs stay idempotent even when the status check lagged.
    async fn submit_request(&self, body: serde_json::Value, what: &str) -> Result<()> {
        let url = self.api_url("request");
        let resp = self
            .build_request(self.client.post(&url))
            .json(&body)
            .send()
            .await?;

        if resp.status() == StatusCode::CONFLICT {
            tracing::debug!("{}: request already exists", what);
            return Ok(());
        }
        self.ensure_success(resp, what).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl crate::services::CatalogClient for OverseerrClient {
    async fn search(&self, title: &str, media_type: MediaType) -> Result<Vec<MatchCandidate>> {
        let url = format!(
            "{}?query={}&page=1",
            self.api_url("search"),
            urlencoding::encode(title)
        );
        let resp = self.build_request(self.client.get(&url)).send().await?;
        let resp = self.ensure_success(resp, "search").await?;
        let body: SearchResponse = resp.json().await?;

        let wanted = media_type.to_string();
        let candidates = body
            .results
            .into_iter()
            .filter(|item| item.media_type == wanted)
            .map(|item| MatchCandidate {
                catalog_id: item.id,
                media_type,
                title: item.title.or(item.name).unwrap_or_default(),
                release_date: parse_date(
                    item.release_date.as_deref().or(item.first_air_date.as_deref()),
                ),
            })
            .collect();

        Ok(candidates)
    }

    async fn season_statuses(&self, catalog_id: u64) -> Result<Vec<SeasonStatus>> {
        let url = self.api_url(&format!("tv/{}", catalog_id));
        let resp = self.build_request(self.client.get(&url)).send().await?;
        let resp = self.ensure_success(resp, "tv details").await?;
        let details: TvDetails = resp.json().await?;

        // Seasons Overseerr has never seen a request for are absent here;
        // the selector treats absence as unknown.
        let seasons = details
            .media_info
            .and_then(|info| info.seasons)
            .unwrap_or_default();

        Ok(seasons
            .into_iter()
            .filter(|s| s.season_number >= 1 && s.season_number <= MAX_SEASON)
            .map(|s| SeasonStatus::new(s.season_number, season_state_from_code(s.status)))
            .collect())
    }

    async fn movie_satisfied(&self, catalog_id: u64) -> Result<bool> {
        let url = self.api_url(&format!("movie/{}", catalog_id));
        let resp = self.build_request(self.client.get(&url)).send().await?;
        let resp = self.ensure_success(resp, "movie details").await?;
        let details: MovieDetails = resp.json().await?;

        Ok(movie_satisfied_from_code(
            details.media_info.and_then(|info| info.status),
        ))
    }

    async fn request_movie(&self, catalog_id: u64) -> Result<()> {
        let body = serde_json::json!({
            "mediaId": catalog_id,
            "mediaType": "movie",
            "is4k": false,
        });
        self.submit_request(body, "movie request").await
    }

    async fn request_season(&self, catalog_id: u64, season_number: u16) -> Result<()> {
        let body = serde_json::json!({
            "mediaId": catalog_id,
            "mediaType": "tv",
            "is4k": false,
            "seasons": [season_number],
        });
        self.submit_request(body, "season request").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_state_mapping() {
        assert_eq!(season_state_from_code(Some(5)), SeasonState::Available);
        assert_eq!(season_state_from_code(Some(4)), SeasonState::Available);
        assert_eq!(
            season_state_from_code(Some(3)),
            SeasonState::RequestedOrProcessing
        );
        assert_eq!(
            season_state_from_code(Some(2)),
            SeasonState::RequestedOrProcessing
        );
        assert_eq!(season_state_from_code(Some(1)), SeasonState::Unavailable);
        assert_eq!(season_state_from_code(None), SeasonState::Unavailable);
    }

    #[test]
    fn test_movie_satisfied_mapping() {
        assert!(!movie_satisfied_from_code(None));
        assert!(!movie_satisfied_from_code(Some(1)));
        assert!(movie_satisfied_from_code(Some(2)));
        assert!(movie_satisfied_from_code(Some(5)));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date(Some("2024-03-15")),
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
        assert_eq!(parse_date(Some("")), None);
        assert_eq!(parse_date(None), None);
    }
}
