//! Domain layer: entities, repository traits, and the two background
//! processing pieces (counter cells and the click worker).
//!
//! # Click Processing Flow
//!
//! 1. The redirect handler looks up the slug and responds immediately
//! 2. A fire-and-forget increment is enqueued on the slug's counter cell
//! 3. A [`entities::ClickEvent`] is sent to the click worker channel
//! 4. [`click_worker::run_click_worker`] appends it to the ledger
//!
//! The two background writes are independent: either may fail or lag
//! without affecting the other or the redirect response.

pub mod click_worker;
pub mod counter;
pub mod entities;
pub mod repositories;
