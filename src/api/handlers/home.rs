//! Handler for the embedded HTML page.

use axum::response::Html;

/// Serves the single-page UI at `/`.
///
/// The page is compiled into the binary; there is nothing else to deploy.
pub async fn home_handler() -> Html<&'static str> {
    Html(include_str!("../../../assets/index.html"))
}
