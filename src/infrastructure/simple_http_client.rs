//! HTTP client for fetching documents in URL mode
//!
//! One GET per run. No retries and no rate limiting; the only guard is the
//! configurable request timeout.

use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::infrastructure::config::HttpSettings;
use crate::infrastructure::grader_error::{GraderError, GraderResult};

/// Configuration for HTTP client behavior
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Request timeout, `None` waits indefinitely
    pub timeout: Option<Duration>,
    /// User agent string
    pub user_agent: String,
    /// Whether to follow redirects
    pub follow_redirects: bool,
    /// Redirect hop limit
    pub max_redirects: usize,
}

impl HttpClientConfig {
    /// Create HttpClientConfig from the `[http]` settings section
    pub fn from_settings(settings: &HttpSettings) -> Self {
        Self {
            timeout: (settings.timeout_seconds > 0)
                .then(|| Duration::from_secs(settings.timeout_seconds)),
            user_agent: settings.user_agent.clone(),
            follow_redirects: settings.follow_redirects,
            max_redirects: settings.max_redirects,
        }
    }
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self::from_settings(&HttpSettings::default())
    }
}

#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    pub fn from_settings(settings: &HttpSettings) -> GraderResult<Self> {
        Self::with_config(HttpClientConfig::from_settings(settings))
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> GraderResult<Self> {
        let mut builder = ClientBuilder::new()
            .user_agent(&config.user_agent)
            .gzip(true)
            .brotli(true)
            .redirect(if config.follow_redirects {
                reqwest::redirect::Policy::limited(config.max_redirects)
            } else {
                reqwest::redirect::Policy::none()
            });

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| GraderError::HttpClient {
            message: e.to_string(),
        })?;

        Ok(Self { client, config })
    }

    /// Fetch the body of `url` as text.
    ///
    /// Non-success status codes still return the body; only transport
    /// failures (DNS, connect, timeout, broken body) are errors.
    pub async fn fetch_html_string(&self, url: &str) -> GraderResult<String> {
        info!("🌐 HTTP GET: {}", url);
        debug!(timeout = ?self.config.timeout, user_agent = %self.config.user_agent, "Request settings");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| GraderError::fetch_failed(url, describe(&e)))?;

        let status = response.status();
        if status.is_success() {
            debug!("HTTP {} from {}", status, url);
        } else {
            warn!("⚠️ HTTP {} from {}, grading the returned body anyway", status, url);
        }

        let body = response
            .text()
            .await
            .map_err(|e| GraderError::fetch_failed(url, describe(&e)))?;

        debug!("Received {} bytes from {}", body.len(), url);
        Ok(body)
    }
}

fn describe(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        format!("request timed out: {err}")
    } else if err.is_connect() {
        format!("connection failed: {err}")
    } else {
        err.to_string()
    }
}
