//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the harvester, including:
//! - Building the HTTP client with a user agent and explicit timeouts
//! - Building page URLs from the catalog base URL
//! - Retry logic for transient failures
//! - Error classification

use crate::config::{SourceConfig, UserAgentConfig};
use crate::{PageError, PageResult};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use url::Url;

/// Source of catalog page documents
///
/// The paginator only needs the HTML of page `n`; tests substitute an
/// in-memory source for the HTTP one.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Returns the HTML of the 1-based page `page`
    async fn fetch_page(&self, page: u32) -> PageResult<String>;
}

/// When and how often a failed request is repeated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Extra attempts after the first one
    pub max_retries: u32,

    /// Pause before each extra attempt
    pub delay: Duration,
}

impl RetryPolicy {
    /// A single attempt, no retry
    pub const fn none() -> Self {
        Self {
            max_retries: 0,
            delay: Duration::ZERO,
        }
    }

    pub fn from_config(config: &SourceConfig) -> Self {
        Self {
            max_retries: config.max_retries,
            delay: Duration::from_millis(config.retry_delay_ms),
        }
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Example
///
/// ```no_run
/// use dsa_harvest::config::{SourceConfig, UserAgentConfig};
/// use dsa_harvest::catalog::build_http_client;
///
/// let client = build_http_client(&SourceConfig::default(), &UserAgentConfig::default()).unwrap();
/// ```
pub fn build_http_client(
    source: &SourceConfig,
    user_agent: &UserAgentConfig,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent.header_value())
        .timeout(Duration::from_secs(source.request_timeout_secs))
        .connect_timeout(Duration::from_secs(source.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Builds the URL of a catalog page: `base?<param>=<page>`
///
/// Existing query parameters of the base URL are kept; a previous value of
/// the page parameter is replaced.
pub fn page_url(base: &Url, page_param: &str, page: u32) -> Url {
    let kept: Vec<(String, String)> = base
        .query_pairs()
        .filter(|(key, _)| key != page_param)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let mut url = base.clone();
    url.query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .append_pair(page_param, &page.to_string());
    url
}

/// Catalog pages served over HTTP
#[derive(Debug, Clone)]
pub struct HttpPageSource {
    client: Client,
    base_url: Url,
    page_param: String,
    retry: RetryPolicy,
}

impl HttpPageSource {
    pub fn new(client: Client, base_url: Url, page_param: impl Into<String>, retry: RetryPolicy) -> Self {
        Self {
            client,
            base_url,
            page_param: page_param.into(),
            retry,
        }
    }

    /// Builds the client and source from configuration
    pub fn from_config(source: &SourceConfig, user_agent: &UserAgentConfig) -> crate::Result<Self> {
        let client = build_http_client(source, user_agent)?;
        let base_url = Url::parse(&source.base_url)?;
        Ok(Self::new(
            client,
            base_url,
            source.page_param.clone(),
            RetryPolicy::from_config(source),
        ))
    }

    pub fn url_for(&self, page: u32) -> Url {
        page_url(&self.base_url, &self.page_param, page)
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn fetch_page(&self, page: u32) -> PageResult<String> {
        let url = self.url_for(page);
        fetch_with_retry(&self.client, url.as_str(), self.retry).await
    }
}

/// Fetches a URL, repeating transient failures per the retry policy
///
/// # Retry Logic
///
/// | Condition | Action |
/// |-----------|--------|
/// | HTTP 2xx, HTML | Success |
/// | HTTP 429 / 5xx | Retry, then fail |
/// | Timeout / connection error | Retry, then fail |
/// | Other HTTP status | Fail immediately |
/// | Non-HTML Content-Type | Fail immediately |
pub async fn fetch_with_retry(client: &Client, url: &str, retry: RetryPolicy) -> PageResult<String> {
    let mut attempt = 0;
    loop {
        match fetch_html(client, url).await {
            Ok(body) => return Ok(body),
            Err(e) if attempt < retry.max_retries && is_transient(&e) => {
                attempt += 1;
                tracing::warn!(
                    "Transient failure fetching {} ({}), retry {}/{} in {:?}",
                    url,
                    e,
                    attempt,
                    retry.max_retries,
                    retry.delay
                );
                tokio::time::sleep(retry.delay).await;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Performs a single GET and checks status and Content-Type
pub async fn fetch_html(client: &Client, url: &str) -> PageResult<String> {
    let response = client.get(url).send().await.map_err(|source| PageError::Http {
        url: url.to_string(),
        source,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(PageError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    // A missing header is accepted; an explicit non-HTML type is not.
    if let Some(content_type) = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    {
        if !content_type.contains("html") {
            return Err(PageError::ContentMismatch {
                url: url.to_string(),
                content_type: content_type.to_string(),
            });
        }
    }

    response.text().await.map_err(|source| PageError::Http {
        url: url.to_string(),
        source,
    })
}

/// Returns true for failures worth another attempt
fn is_transient(error: &PageError) -> bool {
    match error {
        PageError::Http { source, .. } => source.is_timeout() || source.is_connect(),
        PageError::Status { status, .. } => {
            *status == StatusCode::TOO_MANY_REQUESTS.as_u16() || (500..600).contains(status)
        }
        PageError::ContentMismatch { .. } | PageError::Markup(_) => false,
    }
}
