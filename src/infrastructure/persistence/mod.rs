//! SQLite repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx with
//! runtime-bound queries.
//!
//! # Repositories
//!
//! - [`SqliteLinkRepository`] - slug to URL mappings
//! - [`SqliteClickLedger`] - append-only click rows
//! - [`SqliteCounterStore`] - per-slug counter rows

pub mod sqlite_click_ledger;
pub mod sqlite_counter_store;
pub mod sqlite_link_repository;

pub use sqlite_click_ledger::SqliteClickLedger;
pub use sqlite_counter_store::SqliteCounterStore;
pub use sqlite_link_repository::SqliteLinkRepository;
