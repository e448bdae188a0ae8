//! # linkcell
//!
//! A URL shortening service built with Axum and SQLite: short slugs map to
//! target URLs, redirects are counted exactly once per click, and recent
//! click details are kept for analytics.
//!
//! ## Architecture
//!
//! - **Domain** ([`domain`]) - entities, repository traits, the per-slug
//!   counter cells, and the background click worker
//! - **Infrastructure** ([`infrastructure`]) - SQLite implementations of the
//!   repository traits
//! - **API** ([`api`]) - handlers, DTOs, and middleware
//!
//! ## Design
//!
//! The redirect path answers from a single store lookup and never waits on
//! analytics. Counting goes through one serialized cell per slug
//! ([`domain::counter`]), so concurrent clicks on the same slug are never
//! lost; click details flow over a bounded channel into an append-only
//! ledger, best-effort.
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional; defaults to sqlite://linkcell.db and 0.0.0.0:3000
//! export DATABASE_URL="sqlite://linkcell.db"
//! export LISTEN="0.0.0.0:3000"
//!
//! cargo run
//! ```
//!
//! Configuration is loaded from environment variables via
//! [`config::Config`].

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod routes;
pub mod server;
pub mod state;
pub mod utils;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers and integration tests.
pub mod prelude {
    pub use crate::domain::counter::{CounterHandle, CounterRegistry};
    pub use crate::domain::entities::{ClickCounter, ClickEvent, ShortLink};
    pub use crate::domain::repositories::{ClickLedger, CounterStore, LinkRepository};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
