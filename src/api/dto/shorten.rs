//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};

/// Request to create a short link.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    /// The URL to shorten (must be absolute http/https).
    pub url: String,

    /// Optional custom slug; a random one is generated when omitted.
    pub slug: Option<String>,
}

/// Response for a created short link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_url: String,
    pub slug: String,
}
