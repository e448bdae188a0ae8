//! Core domain entities.
//!
//! Plain data structures without business logic:
//!
//! - [`ShortLink`] - a slug to target URL mapping
//! - [`ClickCounter`] - exact per-slug click count with first/last timestamps
//! - [`ClickEvent`] - one recorded click with client metadata

pub mod click;
pub mod counter;
pub mod link;

pub use click::ClickEvent;
pub use counter::ClickCounter;
pub use link::ShortLink;
