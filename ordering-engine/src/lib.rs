//! Order-composition engine
//!
//! Library-style domain core for a food-ordering application. It owns:
//!
//! - the session fulfillment context (single-writer latest-value state),
//! - price resolution with per-channel fallback,
//! - menu option-group validation,
//! - cart-to-order translation (price/name snapshots, integer cents),
//! - atomic order submission and the past-orders read path,
//! - cart reconstruction for "repeat this order".
//!
//! Catalog, storage and identity are contracts ([`catalog::CatalogSource`],
//! [`store::OrderStore`], [`identity::IdentitySource`]); in-memory
//! implementations are provided for tests and embedding. Rendering,
//! navigation and localization of error reasons belong to the caller.

pub mod catalog;
pub mod checkout;
pub mod context;
pub mod error;
pub mod identity;
pub mod menu;
pub mod pricing;
pub mod reorder;
pub mod session;
pub mod store;


pub use checkout::{Checkout, TranslatedOrder, STATUS_SUBMITTED};
pub use context::SessionContext;
pub use error::CheckoutError;
pub use menu::MenuSelectionError;
pub use session::OrderingSession;
pub use store::StoreError;
