//! Catalog models
//!
//! Shared between the engine and the application layer. All monetary
//! values are integer cents; a missing price means the item is not sold
//! on that channel.

pub mod category;
pub mod menu;
pub mod product;

// Re-exports
pub use category::*;
pub use menu::*;
pub use product::*;
