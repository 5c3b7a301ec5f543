//! # Network access
//!
//! The loader never talks to the network directly: it goes through a [`NeoTransport`], an
//! async capability returning the body of a GET request. [`HttpTransport`] is the production
//! implementation over a shared [`reqwest::Client`]; tests substitute scripted transports.
//!
//! ```text
//! NeoScenario ──► DetailFetcher ──► NeoTransport::get_text ──► HttpTransport (reqwest)
//! ```
//!
//! Requests are issued exactly once: no retry and no timeout are applied here.
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::neo_errors::NeoError;

/// Async GET capability used for the list feed and the detail records.
#[async_trait]
pub trait NeoTransport: Send + Sync {
    /// Perform one GET request and return the response body.
    ///
    /// Arguments
    /// ---------
    /// * `url`: the resource to fetch
    /// * `query`: query parameters appended to `url`
    ///
    /// Return
    /// ------
    /// * the body as text, or a [`NeoError::Http`] if the request failed or was rejected
    async fn get_text(&self, url: &str, query: &[(&str, &str)]) -> Result<String, NeoError>;
}

/// [`NeoTransport`] backed by reqwest
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    http_client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NeoTransport for HttpTransport {
    async fn get_text(&self, url: &str, query: &[(&str, &str)]) -> Result<String, NeoError> {
        // the query may hold the api key, keep it out of the logs
        debug!(url, "GET");

        let body = self
            .http_client
            .get(url)
            .query(query)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(body)
    }
}
