//! Single-slug counter cell.
//!
//! A cell is a dedicated task owning the [`ClickCounter`] row for one slug.
//! All reads and increments for that slug go through the cell's mailbox, so
//! concurrent increments are serialized without any locking protocol and no
//! update is ever lost. Cells for distinct slugs run fully independently.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::{mpsc, oneshot};

use crate::domain::entities::ClickCounter;
use crate::domain::repositories::CounterStore;
use crate::error::AppError;

pub(super) enum Command {
    Increment {
        /// `None` for fire-and-forget increments from the redirect path.
        reply: Option<oneshot::Sender<Result<i64, AppError>>>,
    },
    Read {
        reply: oneshot::Sender<Result<i64, AppError>>,
    },
}

/// Client handle to one slug's counter cell.
///
/// Cheap to clone; all clones address the same cell task.
#[derive(Clone)]
pub struct CounterHandle {
    slug: String,
    tx: mpsc::Sender<Command>,
}

impl CounterHandle {
    pub(super) fn new(slug: String, tx: mpsc::Sender<Command>) -> Self {
        Self { slug, tx }
    }

    /// Applies one increment and waits for the new count.
    ///
    /// Concurrent calls against the same slug are serialized by the cell;
    /// a returned count reflects every increment applied before it.
    pub async fn increment(&self) -> Result<i64, AppError> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(Command::Increment { reply: Some(reply) })
            .await
            .map_err(|_| AppError::internal("Counter cell unavailable"))?;

        rx.await
            .map_err(|_| AppError::internal("Counter cell unavailable"))?
    }

    /// Enqueues one increment without waiting for the outcome.
    ///
    /// Used on the redirect path so the response is never blocked on counter
    /// I/O. A full mailbox drops the increment with a warning.
    pub fn increment_detached(&self) {
        if let Err(e) = self.tx.try_send(Command::Increment { reply: None }) {
            tracing::warn!(slug = %self.slug, error = %e, "failed to enqueue counter increment");
        }
    }

    /// Returns the latest applied count; 0 if the slug was never incremented.
    pub async fn read(&self) -> Result<i64, AppError> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(Command::Read { reply })
            .await
            .map_err(|_| AppError::internal("Counter cell unavailable"))?;

        rx.await
            .map_err(|_| AppError::internal("Counter cell unavailable"))?
    }

    pub(super) fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Cell task body. Runs until every handle to the cell is dropped.
pub(super) async fn run_cell(
    slug: String,
    store: Arc<dyn CounterStore>,
    mut rx: mpsc::Receiver<Command>,
) {
    // State loads on the first command, not at spawn.
    let mut state: Option<ClickCounter> = None;
    let mut loaded = false;

    while let Some(command) = rx.recv().await {
        match command {
            Command::Increment { reply } => {
                let result = apply_increment(&slug, store.as_ref(), &mut state, &mut loaded).await;

                match reply {
                    Some(tx) => {
                        let _ = tx.send(result);
                    }
                    None => {
                        if let Err(e) = result {
                            tracing::warn!(slug = %slug, error = %e, "dropped counter increment");
                        }
                    }
                }
            }
            Command::Read { reply } => {
                let result = ensure_loaded(&slug, store.as_ref(), &mut state, &mut loaded)
                    .await
                    .map(|state| state.as_ref().map(|c| c.count).unwrap_or(0));

                let _ = reply.send(result);
            }
        }
    }
}

/// Read-modify-write of the cell's counter row.
///
/// The in-memory state only advances after the store accepts the new row, so
/// a failed persist is not counted.
async fn apply_increment(
    slug: &str,
    store: &dyn CounterStore,
    state: &mut Option<ClickCounter>,
    loaded: &mut bool,
) -> Result<i64, AppError> {
    ensure_loaded(slug, store, state, loaded).await?;

    let now = Utc::now();
    let mut next = state
        .clone()
        .unwrap_or_else(|| ClickCounter::new(slug, now));
    next.count += 1;
    next.last_click_at = now;

    store.save(&next).await?;

    let count = next.count;
    *state = Some(next);
    Ok(count)
}

async fn ensure_loaded<'a>(
    slug: &str,
    store: &dyn CounterStore,
    state: &'a mut Option<ClickCounter>,
    loaded: &mut bool,
) -> Result<&'a mut Option<ClickCounter>, AppError> {
    if !*loaded {
        *state = store.load(slug).await?;
        *loaded = true;
    }

    Ok(state)
}
