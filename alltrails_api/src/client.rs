//! HTTP fetcher for AllTrails HTML pages.

use std::time::Duration;

use url::Url;

use crate::{
    types::{ParkSlug, TrailSlug},
    user_agent::get_user_agent,
    FetchError,
};

/// Production site root.
pub const DEFAULT_BASE_URL: &str = "https://www.alltrails.com";

/// Upper bound on a single request, including the body read.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Immutable settings for a [`Fetcher`].
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Site root. Defaults to `https://www.alltrails.com`.
    pub base_url: String,
    /// Request timeout. Defaults to 10 seconds.
    pub timeout: Duration,
    /// Fixed user agent. When `None`, one is drawn from the browser pool.
    pub user_agent: Option<String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }
}

/// Fetches park and trail pages as raw HTML.
///
/// Requests carry browser-like headers so the site serves the regular page
/// rather than a bot wall. Nothing is retried: a timeout, a non-success
/// status or a transport failure is returned to the caller as-is.
///
/// The fetcher holds no mutable state and can be shared across tasks.
#[derive(Debug, Clone)]
pub struct Fetcher {
    base_url: String,
    timeout: Duration,
    http: reqwest::Client,
}

impl Fetcher {
    /// Creates a fetcher pointing at the production site.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_config(FetchConfig::default())
    }

    /// Creates a fetcher with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, FetchError> {
        Self::with_config(FetchConfig {
            base_url: base_url.to_string(),
            ..FetchConfig::default()
        })
    }

    pub fn with_config(config: FetchConfig) -> Result<Self, FetchError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| FetchError::InvalidUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;

        let user_agent = config
            .user_agent
            .unwrap_or_else(|| get_user_agent().to_string());
        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                FetchError::Network {
                    url: base_url.clone(),
                    message: e.to_string(),
                }
            })?;

        Ok(Self {
            base_url,
            timeout: config.timeout,
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// `{base}/parks/{park_slug}`
    pub fn park_url(&self, park: &ParkSlug) -> String {
        format!("{}/parks/{}", self.base_url, park.as_str())
    }

    /// `{base}/trail/{trail_slug}`
    pub fn trail_url(&self, trail: &TrailSlug) -> String {
        format!("{}/trail/{}", self.base_url, trail.as_str())
    }

    /// Fetches the park page that lists the park's trails.
    pub async fn fetch_park_page(&self, park: &ParkSlug) -> Result<String, FetchError> {
        let url = self.park_url(park);
        tracing::info!("Fetching trails from: {}", url);
        self.fetch(&url).await
    }

    /// Fetches a single trail page.
    pub async fn fetch_trail_page(&self, trail: &TrailSlug) -> Result<String, FetchError> {
        let url = self.trail_url(trail);
        tracing::info!("Fetching trail details from: {}", url);
        self.fetch(&url).await
    }

    /// Issues one GET for `url` and returns the body on a 2xx status.
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let resp = self
            .http
            .get(url)
            .header(
                "accept",
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .header("accept-language", "en-US,en;q=0.9")
            .header("upgrade-insecure-requests", "1")
            .header("cache-control", "no-cache")
            .header("pragma", "no-cache")
            .send()
            .await
            .map_err(|e| self.classify(url, e))?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!("Request to {} failed with status {}", url, status);
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = resp.text().await.map_err(|e| self.classify(url, e))?;
        tracing::debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }

    fn classify(&self, url: &str, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            tracing::error!("Request to {} timed out after {:?}", url, self.timeout);
            FetchError::Timeout {
                url: url.to_string(),
                timeout: self.timeout,
            }
        } else {
            tracing::error!("Failed to get resource {}: {}", url, err);
            FetchError::Network {
                url: url.to_string(),
                message: err.to_string(),
            }
        }
    }
}
