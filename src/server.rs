//! HTTP server initialization and runtime setup.
//!
//! Opens the database, applies migrations, spawns the click worker, and
//! runs the Axum server until a shutdown signal arrives.

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use tokio::sync::mpsc;

use crate::config::Config;
use crate::domain::click_worker::run_click_worker;
use crate::domain::counter::CounterRegistry;
use crate::domain::repositories::ClickLedger;
use crate::infrastructure::persistence::{
    SqliteClickLedger, SqliteCounterStore, SqliteLinkRepository,
};
use crate::routes::app_router;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if the database cannot be opened or migrated, the bind
/// fails, or the server loop errors.
pub async fn run(config: Config) -> Result<()> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect_with(options)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let pool = Arc::new(pool);
    let links = Arc::new(SqliteLinkRepository::new(pool.clone()));
    let ledger: Arc<dyn ClickLedger> = Arc::new(SqliteClickLedger::new(pool.clone()));
    let counters = Arc::new(CounterRegistry::with_mailbox_capacity(
        Arc::new(SqliteCounterStore::new(pool.clone())),
        config.counter_mailbox_capacity,
    ));

    let (click_tx, click_rx) = mpsc::channel(config.click_queue_capacity);
    tokio::spawn(run_click_worker(click_rx, ledger.clone()));
    tracing::info!("Click worker started");

    let state = AppState::new(links, ledger, counters, click_tx);
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves on SIGINT or SIGTERM.
///
/// In-flight background writes past this point run until the process
/// exits; anything still queued is abandoned.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
