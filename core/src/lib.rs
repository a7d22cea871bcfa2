//! movcli Core - Headless Search Session
//!
//! This crate holds everything about a movcli search session that does not
//! depend on a terminal. The TUI surface feeds it events and renders whatever
//! state it ends up in.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                      TUI surface                           │
//! │   keys / resize / tick              render(&Session)       │
//! └────────────┬──────────────────────────────▲────────────────┘
//!              │ SessionEvent                  │
//! ┌────────────▼──────────────────────────────┴────────────────┐
//! │                        Session                              │
//! │   Input ──submit──▶ Waiting ──▶ Showing / Failed ──back──▶  │
//! └────────────┬──────────────────────────────▲────────────────┘
//!              │ Command::Fetch(token)         │ FetchCompleted { token, .. }
//! ┌────────────▼──────────────────────────────┴────────────────┐
//! │        spawn_fetch ─▶ Fetcher ─▶ extract(html)              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`Session`]: the state machine; the only place state is mutated
//! - [`SessionEvent`]: everything the session reacts to
//! - [`Command`]: side effects the surface must carry out
//! - [`Fetcher`]: the async seam to the search endpoint
//! - [`SearchResult`]: one scraped item
//! - [`Config`]: endpoint and input settings

pub mod config;
pub mod events;
pub mod extract;
pub mod fetch;
pub mod input;
pub mod list;
pub mod messages;
pub mod session;

pub use config::{Config, ConfigError, ConfigOverrides};
pub use events::{Key, SessionEvent};
pub use extract::{extract, SearchResult};
pub use fetch::{spawn_fetch, FetchError, Fetcher, HttpFetcher};
pub use input::QueryInput;
pub use list::{Filter, ListState, Viewport};
pub use messages::Command;
pub use session::{Mode, PendingFetch, Session};
