//! Client for the weather-and-activities service
//!
//! One `POST /weather` per submission. The response status decides the
//! outcome: 2xx carries a [`Bundle`], 404 means the city is unknown, anything
//! else is a generic failure.

use reqwest::{Client, StatusCode, Url};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{ConfigError, FetchError};
use crate::model::Bundle;

/// Default service location (the backend's development address).
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

const MAX_DETAIL_LEN: usize = 200;

#[derive(Debug, Serialize)]
struct BundleRequest<'a> {
    city: &'a str,
}

/// FastAPI-style error body: `{"detail": "..."}`
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct Banner {
    message: String,
}

/// HTTP client bound to one service base URL.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct BundleClient {
    base_url: Url,
    http: Client,
}

impl BundleClient {
    /// Build a client for `base_url` (e.g. `http://localhost:8000`).
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let mut url = Url::parse(base_url).map_err(|e| ConfigError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if url.cannot_be_a_base() {
            return Err(ConfigError::InvalidUrl {
                url: base_url.to_string(),
                reason: "not a base url".into(),
            });
        }
        // Treat the path as a directory so joins append instead of replace.
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        let http = Client::builder().build()?;
        Ok(Self {
            base_url: url,
            http,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, FetchError> {
        self.base_url
            .join(path)
            .map_err(|e| FetchError::request_failed(format!("bad endpoint {path:?}: {e}")))
    }

    /// Request the weather-and-activities bundle for `city`.
    ///
    /// The caller is expected to pass already-trimmed text.
    pub async fn fetch_bundle(&self, city: &str) -> Result<Bundle, FetchError> {
        let url = self.endpoint("weather")?;
        info!(%url, city, "Requesting weather bundle");

        let response = self
            .http
            .post(url)
            .json(&BundleRequest { city })
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            info!(city, "Service reported city not found");
            return Err(FetchError::NotFound {
                city: city.to_string(),
            });
        }

        let body = response.text().await?;
        if !status.is_success() {
            let detail = error_detail(&body);
            warn!(%status, detail = %detail, "Bundle request failed");
            return Err(FetchError::request_failed(format!(
                "service returned {status}: {detail}"
            )));
        }

        let bundle: Bundle = serde_json::from_str(&body)
            .map_err(|e| FetchError::request_failed(format!("invalid bundle json: {e}")))?;

        debug!(
            city = %bundle.weather.city,
            activities = bundle.activities.len(),
            "Bundle received"
        );
        Ok(bundle)
    }

    /// Probe the service root and return its banner message.
    pub async fn ping(&self) -> Result<String, FetchError> {
        let url = self.endpoint("")?;
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::request_failed(format!(
                "service returned {status}"
            )));
        }

        let banner: Banner = response.json().await?;
        Ok(banner.message)
    }
}

/// Pull a readable message out of an error body, falling back to the raw text.
fn error_detail(body: &str) -> String {
    let detail = match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            detail: serde_json::Value::String(s),
        }) => s,
        Ok(ErrorBody { detail }) => detail.to_string(),
        Err(_) => body.trim().to_string(),
    };
    truncate(&detail)
}

fn truncate(text: &str) -> String {
    if text.chars().count() > MAX_DETAIL_LEN {
        let cut: String = text.chars().take(MAX_DETAIL_LEN).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_garbage_url() {
        let err = BundleClient::new("not a url").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { .. }));
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let client = BundleClient::new("http://example.com/api").unwrap();
        assert_eq!(client.base_url().as_str(), "http://example.com/api/");
        assert_eq!(
            client.endpoint("weather").unwrap().as_str(),
            "http://example.com/api/weather"
        );
    }

    #[test]
    fn test_error_detail_prefers_fastapi_detail() {
        assert_eq!(
            error_detail(r#"{"detail": "Internal server error: boom"}"#),
            "Internal server error: boom"
        );
        assert_eq!(error_detail("  plain text  "), "plain text");
    }

    #[test]
    fn test_error_detail_truncates_long_bodies() {
        let body = "x".repeat(500);
        let detail = error_detail(&body);
        assert!(detail.ends_with("..."));
        assert_eq!(detail.chars().count(), MAX_DETAIL_LEN + 3);
    }
}
