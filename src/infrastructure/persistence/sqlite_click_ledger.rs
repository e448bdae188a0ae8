//! SQLite implementation of the click ledger.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::ClickEvent;
use crate::domain::repositories::{ClickLedger, RECENT_CLICKS_LIMIT};
use crate::error::AppError;

pub struct SqliteClickLedger {
    pool: Arc<SqlitePool>,
}

impl SqliteClickLedger {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ClickRow {
    slug: String,
    clicked_at: DateTime<Utc>,
    referrer: Option<String>,
    country: Option<String>,
    user_agent: Option<String>,
}

#[async_trait]
impl ClickLedger for SqliteClickLedger {
    async fn record(&self, event: &ClickEvent) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO clicks (slug, clicked_at, referrer, country, user_agent)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&event.slug)
        .bind(event.clicked_at)
        .bind(&event.referrer)
        .bind(&event.country)
        .bind(&event.user_agent)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn recent_by_slug(&self, slug: &str, limit: i64) -> Result<Vec<ClickEvent>, AppError> {
        let limit = limit.clamp(0, RECENT_CLICKS_LIMIT);

        let rows = sqlx::query_as::<_, ClickRow>(
            r#"
            SELECT slug, clicked_at, referrer, country, user_agent
            FROM clicks
            WHERE slug = ?1
            ORDER BY clicked_at DESC
            LIMIT ?2
            "#,
        )
        .bind(slug)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| ClickEvent {
                slug: r.slug,
                clicked_at: r.clicked_at,
                referrer: r.referrer,
                country: r.country,
                user_agent: r.user_agent,
            })
            .collect())
    }
}
