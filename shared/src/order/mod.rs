//! Order types
//!
//! Session context, cart shapes, and the denormalized order records that
//! get persisted at submission time.

pub mod cart;
pub mod context;
pub mod lines;

pub use cart::*;
pub use context::*;
pub use lines::*;
