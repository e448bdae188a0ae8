//! SQLite implementation of the slug store.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

pub struct SqliteLinkRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteLinkRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct LinkRow {
    slug: String,
    target_url: String,
}

#[async_trait]
impl LinkRepository for SqliteLinkRepository {
    async fn get(&self, slug: &str) -> Result<Option<ShortLink>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT slug, target_url
            FROM links
            WHERE slug = ?1
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(|r| ShortLink {
            slug: r.slug,
            target_url: r.target_url,
        }))
    }

    async fn exists(&self, slug: &str) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM links WHERE slug = ?1)
            "#,
        )
        .bind(slug)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn insert(&self, link: &ShortLink) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO links (slug, target_url)
            VALUES (?1, ?2)
            ON CONFLICT (slug) DO NOTHING
            "#,
        )
        .bind(&link.slug)
        .bind(&link.target_url)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() == 1)
    }
}
