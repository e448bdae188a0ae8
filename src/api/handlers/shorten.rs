//! Handler for short link creation.

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::domain::entities::ShortLink;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::slug::{generate_slug, validate_slug};
use crate::utils::url::validate_target_url;

/// Attempts at generating a collision-free random slug before giving up.
const MAX_GENERATION_ATTEMPTS: usize = 10;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/shorten` with body `{"url": "...", "slug": "..."}` (slug
/// optional).
///
/// # Validation order
///
/// 1. Body parses as JSON → else 400
/// 2. `url` is an absolute http/https URL → else 400
/// 3. Provided slug matches `[A-Za-z0-9-]{1,50}` → else 400
/// 4. Omitted slug: random 6-char generation with up to 10 retries on
///    collision → 500 when exhausted
/// 5. Slug free → else 409
///
/// The final write is conditional on the slug still being free, so two
/// concurrent creates for the same slug cannot overwrite each other; the
/// loser gets 409.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) =
        payload.map_err(|_| AppError::invalid_input("Invalid JSON body"))?;

    validate_target_url(&payload.url)?;

    let slug = match payload.slug {
        Some(custom) => {
            validate_slug(&custom)?;
            custom
        }
        None => generate_unique_slug(state.links.as_ref()).await?,
    };

    if state.links.exists(&slug).await? {
        return Err(AppError::slug_conflict("Slug already exists"));
    }

    let link = ShortLink::new(slug.clone(), payload.url);
    if !state.links.insert(&link).await? {
        return Err(AppError::slug_conflict("Slug already exists"));
    }

    tracing::info!(slug = %link.slug, "short link created");

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            short_url: format!("/{slug}"),
            slug,
        }),
    ))
}

/// Draws random slugs until one is free, aborting after
/// [`MAX_GENERATION_ATTEMPTS`] consecutive collisions.
async fn generate_unique_slug(links: &dyn LinkRepository) -> Result<String, AppError> {
    for attempt in 0..MAX_GENERATION_ATTEMPTS {
        let slug = generate_slug();

        if !links.exists(&slug).await? {
            return Ok(slug);
        }

        tracing::warn!(attempt, slug = %slug, "generated slug collided");
    }

    Err(AppError::SlugGenerationFailed)
}
