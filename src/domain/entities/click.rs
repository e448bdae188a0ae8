//! Click event model for asynchronous click tracking.

use chrono::{DateTime, Utc};

/// A single click on a short link.
///
/// Created in the redirect handler with request metadata, sent over a
/// channel to the background click worker, and persisted as one ledger row.
/// All client metadata is optional; missing headers become `None`.
///
/// Duplicate rows are acceptable - the ledger has no uniqueness constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    pub slug: String,
    pub clicked_at: DateTime<Utc>,
    pub referrer: Option<String>,
    pub country: Option<String>,
    pub user_agent: Option<String>,
}

impl ClickEvent {
    /// A click event stamped with the current time.
    pub fn new(
        slug: impl Into<String>,
        referrer: Option<String>,
        country: Option<String>,
        user_agent: Option<String>,
    ) -> Self {
        Self {
            slug: slug.into(),
            clicked_at: Utc::now(),
            referrer,
            country,
            user_agent,
        }
    }
}
