//! Repository trait for the slug store.

use crate::domain::entities::ShortLink;
use crate::error::AppError;
use async_trait::async_trait;

/// Key-unique mapping from slug to target URL.
///
/// Links are created once and never updated or deleted. Writes go through
/// [`insert`](LinkRepository::insert), which is conditional on the slug
/// being free - concurrent creates for the same slug cannot overwrite each
/// other.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteLinkRepository`]
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Point lookup by slug. No side effects.
    async fn get(&self, slug: &str) -> Result<Option<ShortLink>, AppError>;

    /// Returns whether a slug is already taken.
    async fn exists(&self, slug: &str) -> Result<bool, AppError>;

    /// Creates the mapping if the slug is free.
    ///
    /// Returns `false` when the slug already exists; the stored mapping is
    /// left untouched in that case.
    async fn insert(&self, link: &ShortLink) -> Result<bool, AppError>;
}
