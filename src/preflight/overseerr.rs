//! Overseerr preflight check.

use super::CheckResult;
use crate::services::overseerr::OverseerrClient;
use crate::Error;

/// Check if Overseerr is configured and reachable.
pub async fn check() -> CheckResult {
    let client = match OverseerrClient::from_env() {
        Ok(client) => client,
        Err(Error::OverseerrUrlMissing) => {
            return CheckResult::fail(
                "Overseerr",
                "URL not configured",
                "Set OVERSEERR_URL, e.g. export OVERSEERR_URL='http://192.168.0.115:5055'",
            )
        }
        Err(_) => {
            return CheckResult::fail(
                "Overseerr",
                "API key not configured",
                "Set OVERSEERR_API_KEY environment variable",
            )
        }
    };

    match client.status().await {
        Ok(status) => {
            let message = match status.version {
                Some(version) => format!("connected ({})", version),
                None => "connected".to_string(),
            };
            CheckResult::ok("Overseerr", &message)
        }
        Err(Error::Unauthorized) => CheckResult::fail(
            "Overseerr",
            "invalid API key",
            "Check your OVERSEERR_API_KEY environment variable",
        ),
        Err(_) => CheckResult::fail(
            "Overseerr",
            "connection failed",
            "Check your Overseerr URL and network connection",
        ),
    }
}
