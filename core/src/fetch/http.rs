//! HTTP Fetcher
//!
//! Talks to the search endpoint. One GET per search:
//!
//! ```text
//! GET {base_url}{search_path}?{query_param}=<percent-encoded query>
//! User-Agent: <browser-like>
//! X-Requested-With: XMLHttpRequest
//! Accept: application/json, ...
//! ```
//!
//! The endpoint only answers with JSON when the request looks like a
//! browser AJAX call; otherwise it serves an HTML error page, which ends up
//! as a decode error here.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::Url;
use serde::Deserialize;

use super::traits::{FetchError, Fetcher};
use crate::config::{ConfigError, EndpointConfig};
use crate::extract::{extract, SearchResult};

/// The JSON wrapper around the HTML fragment
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    status: String,
    result: EnvelopeResult,
}

#[derive(Debug, Deserialize)]
struct EnvelopeResult {
    #[serde(default)]
    count: i64,
    html: String,
}

/// Fetcher backed by the real search endpoint
#[derive(Clone)]
pub struct HttpFetcher {
    /// Search endpoint without the query
    endpoint: Url,
    /// Name of the query parameter
    query_param: String,
    /// Request timeout (also reported in timeout errors)
    timeout: Duration,
    /// HTTP client
    http_client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher for `endpoint`
    pub fn new(
        endpoint: Url,
        query_param: impl Into<String>,
        user_agent: &str,
        accept: &str,
        timeout: Duration,
    ) -> Result<Self, ConfigError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, header_value(user_agent)?);
        headers.insert(ACCEPT, header_value(accept)?);
        headers.insert(
            HeaderName::from_static("x-requested-with"),
            HeaderValue::from_static("XMLHttpRequest"),
        );

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| ConfigError::Invalid(format!("could not build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint,
            query_param: query_param.into(),
            timeout,
            http_client,
        })
    }

    /// Create from the endpoint section of the configuration
    pub fn from_config(config: &EndpointConfig) -> Result<Self, ConfigError> {
        let endpoint = Url::parse(&config.base_url)
            .and_then(|base| base.join(&config.search_path))
            .map_err(|e| ConfigError::Invalid(format!("search endpoint: {}", e)))?;

        Self::new(
            endpoint,
            config.query_param.clone(),
            &config.user_agent,
            &config.accept,
            config.timeout(),
        )
    }

    /// The search endpoint (without query)
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn network_error(&self, e: reqwest::Error) -> FetchError {
        if e.is_timeout() {
            FetchError::Network(format!(
                "request timed out after {}s",
                self.timeout.as_secs_f32()
            ))
        } else if let Some(status) = e.status() {
            FetchError::Network(format!("server responded with {}", status))
        } else {
            FetchError::Network(e.to_string())
        }
    }
}

fn header_value(value: &str) -> Result<HeaderValue, ConfigError> {
    HeaderValue::from_str(value)
        .map_err(|_| ConfigError::Invalid(format!("invalid header value {:?}", value)))
}

/// Pull the HTML fragment out of a response body
fn decode_envelope(body: &str) -> Result<String, FetchError> {
    let envelope: Envelope =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;

    tracing::debug!(
        status = %envelope.status,
        count = envelope.result.count,
        html_len = envelope.result.html.len(),
        "decoded search envelope"
    );

    Ok(envelope.result.html)
}

/// Turn a response body into results, applying the empty-result policy
fn results_from_body(body: &str, query: &str) -> Result<Vec<SearchResult>, FetchError> {
    let html = decode_envelope(body)?;
    let results = extract(&html);
    if results.is_empty() {
        return Err(FetchError::NoResults(query.to_string()));
    }
    Ok(results)
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, query: &str) -> Result<Vec<SearchResult>, FetchError> {
        let response = self
            .http_client
            .get(self.endpoint.clone())
            .query(&[(self.query_param.as_str(), query)])
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| self.network_error(e))?;

        let body = response.text().await.map_err(|e| self.network_error(e))?;

        results_from_body(&body, query)
    }
}
