//! Search Fetching
//!
//! The async seam between the session and the remote search endpoint.

mod dispatch;
mod http;
mod traits;

pub use dispatch::spawn_fetch;
pub use http::HttpFetcher;
pub use traits::{FetchError, Fetcher};
