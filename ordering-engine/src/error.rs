//! Checkout errors
//!
//! One variant per distinct, localizable reason. Validation and state
//! errors are detected before any I/O; storage failures stay generic
//! because the atomic-write guarantee makes them safely retryable by
//! the caller.

use thiserror::Error;

use crate::menu::MenuSelectionError;
use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("cart is empty")]
    EmptyCart,

    #[error("no fulfillment mode selected")]
    MissingMode,

    #[error("delivery order requires an address")]
    MissingAddress,

    #[error("not signed in")]
    NotSignedIn,

    #[error("unknown product: {0}")]
    UnknownProduct(String),

    #[error("unknown menu: {0}")]
    UnknownMenu(String),

    #[error("item is not currently available: {0}")]
    ItemUnavailable(String),

    #[error("no resolvable price for item: {0}")]
    UnpricedItem(String),

    #[error("invalid quantity for item: {0}")]
    InvalidQuantity(String),

    #[error(transparent)]
    Selection(#[from] MenuSelectionError),

    #[error("order submission failed: {0}")]
    Store(#[from] StoreError),
}
