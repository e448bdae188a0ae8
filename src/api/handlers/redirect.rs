//! Handler for short link redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::domain::entities::ClickEvent;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::slug::is_valid_slug;

/// Redirects a slug to its target URL.
///
/// # Endpoint
///
/// `GET /{slug}`
///
/// # Request Flow
///
/// 1. Look up the slug; unknown or malformed slugs are 404
/// 2. Enqueue a fire-and-forget increment on the slug's counter cell
/// 3. Enqueue a click event for the background worker
/// 4. Respond 302 immediately
///
/// The response latency is bounded by the store lookup only. Both
/// background writes continue after the response is sent and are abandoned
/// only at process shutdown; their outcomes are not observable here. A full
/// queue drops the write with a warning.
pub async fn redirect_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    if !is_valid_slug(&slug) {
        return Err(AppError::not_found("Short URL not found"));
    }

    let link = state
        .links
        .get(&slug)
        .await?
        .ok_or_else(|| AppError::not_found("Short URL not found"))?;

    state.counters.cell(&slug).increment_detached();

    let event = ClickEvent::new(
        slug,
        header_string(&headers, header::REFERER.as_str()),
        header_string(&headers, "cf-ipcountry"),
        header_string(&headers, header::USER_AGENT.as_str()),
    );
    if let Err(e) = state.click_tx.try_send(event) {
        tracing::warn!(error = %e, "failed to enqueue click event");
    }

    Ok(found(&link.target_url))
}

/// Reads a header as a UTF-8 string; anything unreadable becomes `None`.
///
/// `cf-ipcountry` is injected by Cloudflare when the service runs behind
/// its proxy; without it, clicks simply record no country.
fn header_string(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
}

/// `302 Found` with a `Location` header.
///
/// Built by hand: the service contract is 302, while axum's `Redirect`
/// helpers only produce 303, 307, and 308.
fn found(location: &str) -> Response {
    (
        StatusCode::FOUND,
        [(header::LOCATION, location.to_owned())],
    )
        .into_response()
}
