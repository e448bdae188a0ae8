//! Router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`                  - embedded HTML page
//! - `POST /api/shorten`       - create a short link
//! - `GET  /api/stats/{slug}`  - click statistics for a slug
//! - `GET  /{slug}`            - redirect to the target URL
//! - anything else, including method mismatches - JSON 404

use axum::{Router, routing::get, routing::post};

use crate::api::handlers::{home_handler, redirect_handler, shorten_handler, stats_handler};
use crate::api::middleware::trace;
use crate::error::AppError;
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/api/shorten", post(shorten_handler))
        .route("/api/stats/{slug}", get(stats_handler))
        .route("/{slug}", get(redirect_handler))
        .fallback(not_found_handler)
        .method_not_allowed_fallback(not_found_handler)
        .with_state(state)
        .layer(trace::layer())
}

/// Everything outside the four routes above is a JSON 404, matching the
/// service's error body shape.
async fn not_found_handler() -> AppError {
    AppError::not_found("Not Found")
}
