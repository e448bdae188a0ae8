//! DTOs for the stats endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::ClickEvent;

/// Statistics for one short link.
///
/// Top-level keys are camelCase; click rows keep the snake_case column
/// names of the analytics store.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub slug: String,
    pub target_url: String,
    pub total_clicks: i64,
    pub recent_clicks: Vec<ClickInfo>,
}

/// One recorded click, as returned by the ledger.
#[derive(Debug, Serialize)]
pub struct ClickInfo {
    pub clicked_at: DateTime<Utc>,
    pub referrer: Option<String>,
    pub country: Option<String>,
    pub user_agent: Option<String>,
}

impl From<ClickEvent> for ClickInfo {
    fn from(event: ClickEvent) -> Self {
        Self {
            clicked_at: event.clicked_at,
            referrer: event.referrer,
            country: event.country,
            user_agent: event.user_agent,
        }
    }
}
