//! Error types for trendarr.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for trendarr.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Overseerr URL not configured. Set OVERSEERR_URL environment variable")]
    OverseerrUrlMissing,

    #[error("Overseerr API key not configured. Set OVERSEERR_API_KEY environment variable")]
    OverseerrApiKeyMissing,

    // Authentication errors (fatal for the whole run)
    #[error("Overseerr rejected the API key (check OVERSEERR_API_KEY)")]
    Unauthorized,

    // Source list errors
    #[error("Top-10 source error: {0}")]
    SourceList(String),

    // Catalog/request service errors
    #[error("Overseerr error: {0}")]
    Catalog(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Generic errors
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a generic error from a string.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }

    /// Whether this error is an authentication failure.
    ///
    /// Auth failures abort the run: further entries cannot succeed under the
    /// same bad credentials.
    pub fn is_auth(&self) -> bool {
        matches!(self, Error::Unauthorized)
    }
}
