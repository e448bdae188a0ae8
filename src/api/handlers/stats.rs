//! Handler for per-link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::{ClickInfo, StatsResponse};
use crate::domain::repositories::RECENT_CLICKS_LIMIT;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::slug::is_valid_slug;

/// Returns the exact click count and recent click details for a slug.
///
/// # Endpoint
///
/// `GET /api/stats/{slug}`
///
/// The total comes from the slug's counter cell; the recent rows come from
/// the ledger (newest first, at most 100). The two sources are written
/// independently on the redirect path, so the row count may lag the total.
/// No side effects.
pub async fn stats_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, AppError> {
    if !is_valid_slug(&slug) {
        return Err(AppError::not_found("Short URL not found"));
    }

    let link = state
        .links
        .get(&slug)
        .await?
        .ok_or_else(|| AppError::not_found("Short URL not found"))?;

    let total_clicks = state.counters.cell(&slug).read().await?;

    let recent_clicks = state
        .ledger
        .recent_by_slug(&slug, RECENT_CLICKS_LIMIT)
        .await?
        .into_iter()
        .map(ClickInfo::from)
        .collect();

    Ok(Json(StatsResponse {
        slug: link.slug,
        target_url: link.target_url,
        total_clicks,
        recent_clicks,
    }))
}
