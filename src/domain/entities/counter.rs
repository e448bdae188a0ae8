//! Per-slug click counter entity.

use chrono::{DateTime, Utc};

/// Exact click count for one slug.
///
/// Created lazily on the first increment and owned exclusively by the
/// counter cell addressed by `slug`; no other component mutates it.
/// `count` is monotonically non-decreasing.
///
/// The count equals the number of successfully applied increments. It is
/// not required to equal the number of ledger rows for the slug - the two
/// writes are independent and either may fail without the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickCounter {
    pub slug: String,
    pub count: i64,
    pub first_click_at: DateTime<Utc>,
    pub last_click_at: DateTime<Utc>,
}

impl ClickCounter {
    /// A fresh counter with zero clicks, timestamped at `now`.
    pub fn new(slug: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            slug: slug.into(),
            count: 0,
            first_click_at: now,
            last_click_at: now,
        }
    }
}
