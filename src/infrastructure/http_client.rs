//! HTTP client for page fetching
//!
//! Thin wrapper over a configured reqwest client. The pipeline issues exactly
//! two GET requests per run, so there is no retry loop or rate limiting here;
//! callers receive the raw response and apply their own status-code handling.

use anyhow::{Result, anyhow};
use reqwest::{Client, ClientBuilder, Response};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Configuration for HTTP client behavior
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string
    pub user_agent: String,
    /// Whether to follow redirects
    pub follow_redirects: bool,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            user_agent: concat!("drug-reviews/", env!("CARGO_PKG_VERSION")).to_string(),
            follow_redirects: true,
        }
    }
}

/// HTTP client owning a reqwest connection pool
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(&config.user_agent)
            .cookie_store(true)
            .gzip(true)
            .redirect(if config.follow_redirects {
                reqwest::redirect::Policy::limited(10)
            } else {
                reqwest::redirect::Policy::none()
            })
            .build()
            .map_err(|e| anyhow!("Failed to create HTTP client: {}", e))?;

        Ok(Self { client })
    }

    /// Fetch a URL with a single GET request.
    ///
    /// Returns the response regardless of status code so callers can treat
    /// non-success statuses as data (silent miss, sentinel row). Only
    /// transport-level failures (DNS, connect, timeout) surface as errors.
    pub async fn get(&self, url: &str) -> Result<Response> {
        let url = Url::parse(url).map_err(|e| anyhow!("Invalid URL '{}': {}", url, e))?;
        debug!("HTTP GET: {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| anyhow!("HTTP request failed for {}: {}", url, e))?;

        debug!("HTTP {} for {}", response.status(), url);
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = HttpClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = HttpClientConfig {
            timeout_seconds: 10,
            user_agent: "Test Agent".to_string(),
            follow_redirects: false,
        };
        let client = HttpClient::with_config(config);
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_invalid_url_rejected() {
        let client = HttpClient::new().unwrap();
        let result = client.get("not a url").await;
        assert!(result.is_err());
    }
}
