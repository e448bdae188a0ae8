//! Repository trait for the append-only click ledger.

use crate::domain::entities::ClickEvent;
use crate::error::AppError;
use async_trait::async_trait;

/// Maximum number of rows [`ClickLedger::recent_by_slug`] returns.
pub const RECENT_CLICKS_LIMIT: i64 = 100;

/// Append-only analytics log keyed by slug.
///
/// One row per click where recording succeeds. There is no uniqueness
/// constraint; duplicates under retry are acceptable. Record failures are
/// swallowed by callers - analytics never affect the redirect path.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickLedger: Send + Sync {
    /// Appends one click event row.
    async fn record(&self, event: &ClickEvent) -> Result<(), AppError>;

    /// Returns up to `limit` events for `slug`, newest first.
    ///
    /// `limit` is capped at [`RECENT_CLICKS_LIMIT`]. Returns an empty vec
    /// for slugs with no recorded clicks.
    async fn recent_by_slug(&self, slug: &str, limit: i64) -> Result<Vec<ClickEvent>, AppError>;
}
