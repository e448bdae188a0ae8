//! Background worker draining click events into the ledger.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::domain::entities::ClickEvent;
use crate::domain::repositories::ClickLedger;

/// Receives click events from the redirect handler and appends them to the
/// ledger. Runs until the sending side of the channel is dropped.
///
/// Insert failures are logged and swallowed: analytics are best-effort and
/// a lost row never propagates anywhere.
pub async fn run_click_worker(mut rx: mpsc::Receiver<ClickEvent>, ledger: Arc<dyn ClickLedger>) {
    while let Some(event) = rx.recv().await {
        if let Err(e) = ledger.record(&event).await {
            tracing::warn!(slug = %event.slug, error = %e, "failed to record click event");
        }
    }
}
