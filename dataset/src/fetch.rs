//! Transport seam for the tabular sources.
//!
//! The loader never talks to the network directly; it goes through
//! [`TableFetcher`], allowing for different implementations (live HTTP,
//! preloaded test double).

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::DatasetConfig;

/// Error types for source fetching.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Transport-level failure
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Source answered with a non-success status
    #[error("Source {url} answered {status}")]
    Status { url: String, status: u16 },

    /// The fetcher has no answer for this source
    #[error("Source not available: {0}")]
    Unavailable(String),
}

/// Trait for fetching one tabular source as text.
#[async_trait]
pub trait TableFetcher: Send + Sync {
    /// Fetch the raw table text behind a source URL.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Live HTTP fetcher.
pub struct HttpTableFetcher {
    client: Client,
}

impl HttpTableFetcher {
    /// Create a fetcher with the config's request timeout.
    pub fn new(config: &DatasetConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }
}

#[async_trait]
impl TableFetcher for HttpTableFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

/// Preloaded fetcher for tests.
///
/// Configurable responses and behavior for unit tests.
pub struct StaticTableFetcher {
    responses: HashMap<String, String>,
    available: AtomicBool,
    call_count: AtomicU32,
}

impl StaticTableFetcher {
    /// Create an empty fetcher; every fetch fails until responses are added.
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            available: AtomicBool::new(true),
            call_count: AtomicU32::new(0),
        }
    }

    /// Set the response for one source URL.
    pub fn with_response(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.responses.insert(url.into(), body.into());
        self
    }

    /// Set availability; an unavailable fetcher fails every fetch.
    pub fn with_available(self, available: bool) -> Self {
        self.available.store(available, Ordering::SeqCst);
        self
    }

    /// Get the number of times fetch was called.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::SeqCst)
    }
}

impl Default for StaticTableFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TableFetcher for StaticTableFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        if !self.available.load(Ordering::SeqCst) {
            return Err(FetchError::Unavailable("fetcher disabled".to_string()));
        }

        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Unavailable(url.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_static_fetcher_responses() {
        let fetcher = StaticTableFetcher::new().with_response("a.csv", "x,y\n1,2\n");

        assert_eq!(fetcher.fetch("a.csv").await.unwrap(), "x,y\n1,2\n");
        assert!(matches!(
            fetcher.fetch("b.csv").await,
            Err(FetchError::Unavailable(_))
        ));
        assert_eq!(fetcher.call_count(), 2);
    }

    #[tokio::test]
    async fn test_static_fetcher_unavailable() {
        let fetcher = StaticTableFetcher::new()
            .with_response("a.csv", "x\n")
            .with_available(false);

        assert!(fetcher.fetch("a.csv").await.is_err());
    }

    #[tokio::test]
    async fn test_http_fetcher_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/fields-data.csv"))
            .respond_with(ResponseTemplate::new(200).set_body_string("fieldName,module\nA,M\n"))
            .mount(&server)
            .await;

        let fetcher = HttpTableFetcher::new(&DatasetConfig::default());
        let body = fetcher
            .fetch(&format!("{}/data/fields-data.csv", server.uri()))
            .await
            .unwrap();
        assert_eq!(body, "fieldName,module\nA,M\n");
    }

    #[tokio::test]
    async fn test_http_fetcher_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing.csv"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let fetcher = HttpTableFetcher::new(&DatasetConfig::default());
        let err = fetcher
            .fetch(&format!("{}/missing.csv", server.uri()))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 404, .. }));
    }
}
