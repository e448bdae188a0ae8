//! Target URL validation.

use url::Url;

use crate::error::AppError;

/// Validates that `input` is a syntactically valid absolute URL with an
/// `http` or `https` scheme.
///
/// The original string is stored as-is; parsing is only used for
/// validation.
pub fn validate_target_url(input: &str) -> Result<(), AppError> {
    let parsed = Url::parse(input).map_err(|_| invalid_url())?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(invalid_url()),
    }
}

fn invalid_url() -> AppError {
    AppError::invalid_input("Invalid URL format. Must be a valid http:// or https:// URL.")
}
