//! Error types

use thiserror::Error;

/// Failure of one bundle request.
///
/// `Clone + PartialEq` so it can ride inside [`Action::BundleDidError`](crate::Action).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The service did not recognize the city (HTTP 404).
    #[error("city not found: {city}")]
    NotFound { city: String },

    /// Transport failure, non-success status, or an undecodable body.
    #[error("request failed: {reason}")]
    RequestFailed { reason: String },
}

impl FetchError {
    pub fn request_failed(reason: impl Into<String>) -> Self {
        FetchError::RequestFailed {
            reason: reason.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound { .. })
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::request_failed(err.to_string())
    }
}

/// Invalid client configuration, reported before the UI starts.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid service url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("failed to build http client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Failure reading or writing the saved theme preference.
#[derive(Error, Debug)]
pub enum ThemeStoreError {
    #[error("no platform config directory available")]
    NoConfigDir,

    #[error("theme file i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("theme file is not valid json: {0}")]
    Json(#[from] serde_json::Error),
}
