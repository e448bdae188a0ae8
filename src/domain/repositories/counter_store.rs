//! Persistence trait backing the counter cells.

use crate::domain::entities::ClickCounter;
use crate::error::AppError;
use async_trait::async_trait;

/// Durable storage for per-slug counter rows.
///
/// Only ever called from inside a counter cell task, which serializes all
/// access to its slug's row. The store itself needs no atomicity beyond a
/// plain upsert.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Loads the persisted counter for `slug`, if one exists.
    async fn load(&self, slug: &str) -> Result<Option<ClickCounter>, AppError>;

    /// Upserts the counter row.
    async fn save(&self, counter: &ClickCounter) -> Result<(), AppError>;
}
