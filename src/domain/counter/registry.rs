//! Name-based addressing of counter cells.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;

use crate::domain::counter::cell::{self, CounterHandle};
use crate::domain::repositories::CounterStore;

/// Default capacity of each cell's mailbox.
const DEFAULT_MAILBOX_CAPACITY: usize = 1024;

/// Lazily spawns and hands out counter cells, one per slug.
///
/// Addressing is deterministic: every call with the same slug reaches the
/// same cell for the lifetime of the process. A cell whose task has died is
/// respawned on next access; its state reloads from the [`CounterStore`].
pub struct CounterRegistry {
    store: Arc<dyn CounterStore>,
    cells: Mutex<HashMap<String, CounterHandle>>,
    mailbox_capacity: usize,
}

impl CounterRegistry {
    pub fn new(store: Arc<dyn CounterStore>) -> Self {
        Self::with_mailbox_capacity(store, DEFAULT_MAILBOX_CAPACITY)
    }

    pub fn with_mailbox_capacity(store: Arc<dyn CounterStore>, mailbox_capacity: usize) -> Self {
        Self {
            store,
            cells: Mutex::new(HashMap::new()),
            mailbox_capacity,
        }
    }

    /// Returns the cell for `slug`, spawning it on first access.
    pub fn cell(&self, slug: &str) -> CounterHandle {
        let mut cells = self.cells.lock().unwrap_or_else(|e| e.into_inner());

        if let Some(handle) = cells.get(slug)
            && !handle.is_closed()
        {
            return handle.clone();
        }

        let (tx, rx) = mpsc::channel(self.mailbox_capacity);
        tokio::spawn(cell::run_cell(
            slug.to_string(),
            self.store.clone(),
            rx,
        ));

        let handle = CounterHandle::new(slug.to_string(), tx);
        cells.insert(slug.to_string(), handle.clone());
        handle
    }
}
