//! Fetch Dispatch
//!
//! Runs a fetch off the session loop and hands the outcome back as a message.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::traits::Fetcher;
use crate::events::SessionEvent;
use crate::session::PendingFetch;

/// Launch a detached one-shot fetch for `token`
///
/// Exactly one `SessionEvent::FetchCompleted` carrying `token` is sent to
/// `tx` when the fetch finishes. If the receiving side is gone the outcome is
/// dropped.
pub fn spawn_fetch(
    fetcher: Arc<dyn Fetcher>,
    token: PendingFetch,
    tx: mpsc::Sender<SessionEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tracing::debug!(generation = token.generation, query = %token.query, "fetch started");
        let outcome = fetcher.fetch(&token.query).await;

        match &outcome {
            Ok(items) => tracing::info!(count = items.len(), query = %token.query, "fetch succeeded"),
            Err(e) => tracing::info!(error = %e, query = %token.query, "fetch failed"),
        }

        let event = SessionEvent::FetchCompleted { token, outcome };
        if tx.send(event).await.is_err() {
            tracing::debug!("session loop gone, dropping fetch outcome");
        }
    })
}
