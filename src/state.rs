//! Shared application state injected into handlers.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::domain::counter::CounterRegistry;
use crate::domain::entities::ClickEvent;
use crate::domain::repositories::{ClickLedger, LinkRepository};

/// The three collaborators every handler works against, plus the click
/// worker channel. No process-wide singletons; everything is passed in.
#[derive(Clone)]
pub struct AppState {
    pub links: Arc<dyn LinkRepository>,
    pub ledger: Arc<dyn ClickLedger>,
    pub counters: Arc<CounterRegistry>,
    pub click_tx: mpsc::Sender<ClickEvent>,
}

impl AppState {
    pub fn new(
        links: Arc<dyn LinkRepository>,
        ledger: Arc<dyn ClickLedger>,
        counters: Arc<CounterRegistry>,
        click_tx: mpsc::Sender<ClickEvent>,
    ) -> Self {
        Self {
            links,
            ledger,
            counters,
            click_tx,
        }
    }
}
