//! Data access trait definitions.
//!
//! Repository traits define the contracts implemented by
//! [`crate::infrastructure::persistence`]. Handlers and workers depend on
//! these traits only, never on a concrete backend.

pub mod click_ledger;
pub mod counter_store;
pub mod link_repository;

pub use click_ledger::{ClickLedger, RECENT_CLICKS_LIMIT};
pub use counter_store::CounterStore;
pub use link_repository::LinkRepository;

#[cfg(test)]
pub use click_ledger::MockClickLedger;
#[cfg(test)]
pub use counter_store::MockCounterStore;
#[cfg(test)]
pub use link_repository::MockLinkRepository;
