//! SQLite implementation of the counter store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::ClickCounter;
use crate::domain::repositories::CounterStore;
use crate::error::AppError;

pub struct SqliteCounterStore {
    pool: Arc<SqlitePool>,
}

impl SqliteCounterStore {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CounterRow {
    slug: String,
    count: i64,
    first_click_at: DateTime<Utc>,
    last_click_at: DateTime<Utc>,
}

#[async_trait]
impl CounterStore for SqliteCounterStore {
    async fn load(&self, slug: &str) -> Result<Option<ClickCounter>, AppError> {
        let row = sqlx::query_as::<_, CounterRow>(
            r#"
            SELECT slug, count, first_click_at, last_click_at
            FROM counters
            WHERE slug = ?1
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(|r| ClickCounter {
            slug: r.slug,
            count: r.count,
            first_click_at: r.first_click_at,
            last_click_at: r.last_click_at,
        }))
    }

    async fn save(&self, counter: &ClickCounter) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO counters (slug, count, first_click_at, last_click_at)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT (slug) DO UPDATE SET
                count = excluded.count,
                last_click_at = excluded.last_click_at
            "#,
        )
        .bind(&counter.slug)
        .bind(counter.count)
        .bind(counter.first_click_at)
        .bind(counter.last_click_at)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }
}
