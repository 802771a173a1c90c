//! Shared data models for the ordering core
//!
//! Pure value types consumed by `ordering-engine` and by whatever
//! application layer embeds it. Everything here is serde-serializable;
//! the order types double as the logical document shape the storage
//! backend must produce.

pub mod models;
pub mod order;

pub use models::*;
pub use order::*;
