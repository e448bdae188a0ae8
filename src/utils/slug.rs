//! Slug generation and validation.

use std::sync::LazyLock;

use rand::Rng;
use rand::distr::Alphanumeric;
use regex::Regex;

use crate::error::AppError;

/// Length of generated random slugs.
pub const GENERATED_SLUG_LENGTH: usize = 6;

/// Valid slugs: 1-50 characters from `[A-Za-z0-9-]`.
static SLUG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9-]{1,50}$").expect("slug regex is valid"));

/// Generates a random 6-character slug from the 62-symbol alphanumeric
/// alphabet.
///
/// Collisions with existing slugs are possible and handled by the caller's
/// retry loop.
pub fn generate_slug() -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(GENERATED_SLUG_LENGTH)
        .map(char::from)
        .collect()
}

/// Returns whether `slug` matches the slug pattern.
pub fn is_valid_slug(slug: &str) -> bool {
    SLUG_REGEX.is_match(slug)
}

/// Validates a user-provided custom slug.
pub fn validate_slug(slug: &str) -> Result<(), AppError> {
    if !is_valid_slug(slug) {
        return Err(AppError::invalid_input(
            "Invalid slug format. Use only letters, numbers, and hyphens (1-50 chars).",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generated_slug_length() {
        assert_eq!(generate_slug().len(), GENERATED_SLUG_LENGTH);
    }

    #[test]
    fn test_generated_slug_is_alphanumeric() {
        let slug = generate_slug();
        assert!(slug.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generated_slugs_are_valid() {
        for _ in 0..100 {
            assert!(is_valid_slug(&generate_slug()));
        }
    }

    #[test]
    fn test_generated_slugs_vary() {
        let slugs: HashSet<String> = (0..1000).map(|_| generate_slug()).collect();
        // 62^6 possibilities; 1000 draws colliding would mean a broken RNG.
        assert!(slugs.len() > 990);
    }

    #[test]
    fn test_validate_accepts_single_char() {
        assert!(validate_slug("a").is_ok());
    }

    #[test]
    fn test_validate_accepts_hyphens() {
        assert!(validate_slug("my-custom-link").is_ok());
    }

    #[test]
    fn test_validate_accepts_mixed_case() {
        assert!(validate_slug("MyLink2024").is_ok());
    }

    #[test]
    fn test_validate_accepts_fifty_chars() {
        assert!(validate_slug(&"a".repeat(50)).is_ok());
    }

    #[test]
    fn test_validate_rejects_empty() {
        assert!(validate_slug("").is_err());
    }

    #[test]
    fn test_validate_rejects_over_fifty_chars() {
        assert!(validate_slug(&"a".repeat(51)).is_err());
    }

    #[test]
    fn test_validate_rejects_spaces_and_punctuation() {
        assert!(validate_slug("bad slug!").is_err());
        assert!(validate_slug("under_score").is_err());
        assert!(validate_slug("slash/slug").is_err());
        assert!(validate_slug("dot.slug").is_err());
    }

    #[test]
    fn test_validate_rejects_non_ascii() {
        assert!(validate_slug("héllo").is_err());
    }
}
