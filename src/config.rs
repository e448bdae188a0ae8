//! Application configuration loaded from environment variables.
//!
//! Loaded once at startup and validated before anything connects.
//!
//! ## Variables
//!
//! - `DATABASE_URL` - SQLite database (default: `sqlite://linkcell.db`)
//! - `LISTEN` - bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - log filter (default: `info`)
//! - `LOG_FORMAT` - `text` or `json` (default: `text`)
//! - `CLICK_QUEUE_CAPACITY` - click event buffer size (default: 10000, min: 100)
//! - `COUNTER_MAILBOX_CAPACITY` - per-slug counter mailbox size (default: 1024)
//! - `DB_MAX_CONNECTIONS` - connection pool size (default: 5)

use anyhow::Result;
use std::env;

/// Service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub click_queue_capacity: usize,
    pub counter_mailbox_capacity: usize,
    pub db_max_connections: u32,
}

impl Config {
    /// Loads configuration from environment variables, applying defaults.
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://linkcell.db".to_string()),
            listen_addr: env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            log_level: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            log_format: env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string()),
            click_queue_capacity: env_parse("CLICK_QUEUE_CAPACITY", 10_000),
            counter_mailbox_capacity: env_parse("COUNTER_MAILBOX_CAPACITY", 1024),
            db_max_connections: env_parse("DB_MAX_CONNECTIONS", 5),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when a value is outside its accepted range or the
    /// database URL is not a SQLite URL.
    pub fn validate(&self) -> Result<()> {
        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!("LISTEN must be in format 'host:port', got '{}'", self.listen_addr);
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!("LOG_FORMAT must be 'text' or 'json', got '{}'", self.log_format);
        }

        if self.click_queue_capacity < 100 {
            anyhow::bail!(
                "CLICK_QUEUE_CAPACITY must be at least 100, got {}",
                self.click_queue_capacity
            );
        }

        if self.counter_mailbox_capacity == 0 {
            anyhow::bail!("COUNTER_MAILBOX_CAPACITY must be at least 1");
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }

        Ok(())
    }

    /// Logs a startup summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Log level: {} ({})", self.log_level, self.log_format);
        tracing::info!("  Click queue capacity: {}", self.click_queue_capacity);
        tracing::info!(
            "  Counter mailbox capacity: {}",
            self.counter_mailbox_capacity
        );
    }
}

fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Loads and validates configuration from environment variables.
///
/// Expects `.env` to be already loaded (via `dotenvy::dotenv()` in main).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
