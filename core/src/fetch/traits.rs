//! Fetcher Traits
//!
//! Implement [`Fetcher`] to plug a different search source into the session.
//! The HTTP implementation talks to the real endpoint; tests script their own.

use async_trait::async_trait;
use thiserror::Error;

use crate::extract::SearchResult;

/// Why a search produced nothing to show
///
/// All three variants land the session in the Failed screen; only the
/// message differs.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FetchError {
    /// Connection failure, timeout or non-2xx status
    #[error("network error: {0}")]
    Network(String),

    /// Response body was not the expected JSON envelope
    #[error("could not decode response: {0}")]
    Decode(String),

    /// Well-formed response with nothing we could extract
    #[error("no results for \"{0}\"")]
    NoResults(String),
}

/// A source of search results
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Run one search for `query`
    ///
    /// Performs at most one request. An empty result set is reported as
    /// [`FetchError::NoResults`], never as `Ok(vec![])`.
    async fn fetch(&self, query: &str) -> Result<Vec<SearchResult>, FetchError>;
}
