//! Counter cell behavior over a real database.

use std::sync::Arc;
use std::time::Duration;

use sqlx::SqlitePool;
use tokio::task::JoinSet;

use linkcell::domain::counter::CounterRegistry;
use linkcell::infrastructure::persistence::SqliteCounterStore;

fn registry(pool: &SqlitePool) -> CounterRegistry {
    CounterRegistry::new(Arc::new(SqliteCounterStore::new(Arc::new(pool.clone()))))
}

#[sqlx::test]
async fn test_no_lost_updates_under_1000_concurrent_increments(pool: SqlitePool) {
    let registry = registry(&pool);

    let mut tasks = JoinSet::new();
    for _ in 0..1000 {
        let cell = registry.cell("hot");
        tasks.spawn(async move { cell.increment().await.unwrap() });
    }

    while let Some(result) = tasks.join_next().await {
        result.unwrap();
    }

    assert_eq!(registry.cell("hot").read().await.unwrap(), 1000);
}

#[sqlx::test]
async fn test_increments_to_distinct_slugs_never_interfere(pool: SqlitePool) {
    let registry = registry(&pool);

    let mut tasks = JoinSet::new();
    for _ in 0..3 {
        let cell = registry.cell("a");
        tasks.spawn(async move { cell.increment().await.unwrap() });
    }
    for _ in 0..5 {
        let cell = registry.cell("b");
        tasks.spawn(async move { cell.increment().await.unwrap() });
    }

    while let Some(result) = tasks.join_next().await {
        result.unwrap();
    }

    assert_eq!(registry.cell("a").read().await.unwrap(), 3);
    assert_eq!(registry.cell("b").read().await.unwrap(), 5);
}

#[sqlx::test]
async fn test_read_of_never_incremented_slug_is_zero(pool: SqlitePool) {
    let registry = registry(&pool);

    assert_eq!(registry.cell("untouched").read().await.unwrap(), 0);
}

#[sqlx::test]
async fn test_increment_returns_running_count(pool: SqlitePool) {
    let registry = registry(&pool);
    let cell = registry.cell("seq");

    assert_eq!(cell.increment().await.unwrap(), 1);
    assert_eq!(cell.increment().await.unwrap(), 2);
    assert_eq!(cell.increment().await.unwrap(), 3);
}

#[sqlx::test]
async fn test_counts_survive_a_registry_restart(pool: SqlitePool) {
    {
        let registry = registry(&pool);
        let cell = registry.cell("durable");
        cell.increment().await.unwrap();
        cell.increment().await.unwrap();
    }

    // A fresh registry has no in-memory state; it must reload from the
    // store.
    let registry = registry(&pool);
    assert_eq!(registry.cell("durable").read().await.unwrap(), 2);
}

#[sqlx::test]
async fn test_detached_increment_is_applied(pool: SqlitePool) {
    let registry = registry(&pool);
    let cell = registry.cell("detached");

    cell.increment_detached();

    for _ in 0..300 {
        if cell.read().await.unwrap() == 1 {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    panic!("detached increment never applied");
}
