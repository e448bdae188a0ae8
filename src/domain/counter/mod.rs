//! Per-slug counter cells.
//!
//! Exact click counting without a locking protocol: all mutations for a
//! given slug are routed through one serialized execution point, a cell
//! task owning that slug's [`crate::domain::entities::ClickCounter`] row.
//! Cells are addressed by slug through the [`CounterRegistry`] and persist
//! their state write-through via
//! [`crate::domain::repositories::CounterStore`].

pub mod cell;
pub mod registry;

pub use cell::CounterHandle;
pub use registry::CounterRegistry;
