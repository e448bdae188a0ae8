#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use sqlx::SqlitePool;
use tokio::sync::mpsc;

use linkcell::domain::click_worker::run_click_worker;
use linkcell::domain::counter::CounterRegistry;
use linkcell::domain::entities::ShortLink;
use linkcell::domain::repositories::ClickLedger;
use linkcell::infrastructure::persistence::{
    SqliteClickLedger, SqliteCounterStore, SqliteLinkRepository,
};
use linkcell::state::AppState;

/// Full application state over the given test database, with the click
/// worker running.
pub fn create_test_state(pool: SqlitePool) -> AppState {
    let pool = Arc::new(pool);

    let links = Arc::new(SqliteLinkRepository::new(pool.clone()));
    let ledger: Arc<dyn ClickLedger> = Arc::new(SqliteClickLedger::new(pool.clone()));
    let counters = Arc::new(CounterRegistry::new(Arc::new(SqliteCounterStore::new(
        pool.clone(),
    ))));

    let (click_tx, click_rx) = mpsc::channel(100);
    tokio::spawn(run_click_worker(click_rx, ledger.clone()));

    AppState::new(links, ledger, counters, click_tx)
}

pub async fn create_test_link(state: &AppState, slug: &str, url: &str) {
    let inserted = state
        .links
        .insert(&ShortLink::new(slug, url))
        .await
        .unwrap();
    assert!(inserted, "slug '{slug}' was already taken");
}

/// Polls the slug's counter until it reaches `expected`.
///
/// Background writes on the redirect path are fire-and-forget, so tests
/// wait for them to settle instead of asserting immediately.
pub async fn wait_for_count(state: &AppState, slug: &str, expected: i64) {
    for _ in 0..300 {
        if state.counters.cell(slug).read().await.unwrap() == expected {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    panic!("counter for '{slug}' never reached {expected}");
}

/// Polls the ledger until `slug` has at least `expected` rows.
pub async fn wait_for_clicks(state: &AppState, slug: &str, expected: usize) {
    for _ in 0..300 {
        let rows = state.ledger.recent_by_slug(slug, 100).await.unwrap();
        if rows.len() >= expected {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    panic!("ledger for '{slug}' never reached {expected} rows");
}
