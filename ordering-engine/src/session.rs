//! Session wiring
//!
//! [`OrderingSession`] composes the context state machine, the identity
//! contract and the checkout pipeline for one user session. Submission
//! captures the context value at call time as plain parameters, so a
//! context change mid-flight never affects an in-flight submission.

use std::sync::Arc;

use shared::order::{Cart, OrderSummary};

use crate::checkout::Checkout;
use crate::context::SessionContext;
use crate::error::CheckoutError;
use crate::identity::IdentitySource;

pub struct OrderingSession {
    context: SessionContext,
    checkout: Checkout,
    identity: Arc<dyn IdentitySource>,
}

impl OrderingSession {
    pub fn new(checkout: Checkout, identity: Arc<dyn IdentitySource>) -> Self {
        Self {
            context: SessionContext::new(),
            checkout,
            identity,
        }
    }

    /// The session's fulfillment context (single writer: the caller).
    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    /// Submit the cart under the context current at this moment.
    ///
    /// Mode and address are read once here and passed by value; the
    /// checkout gate then enforces the same activity rule the context
    /// derives (`MissingMode`, `MissingAddress`).
    pub async fn submit_cart(&self, cart: &Cart) -> Result<String, CheckoutError> {
        let snapshot = self.context.current();
        let owner_id = self
            .identity
            .current_user_id()
            .ok_or(CheckoutError::NotSignedIn)?;
        self.checkout
            .submit(&owner_id, cart, snapshot.mode, snapshot.address_id)
            .await
    }

    /// The signed-in user's most recent orders, newest first.
    pub async fn my_orders(&self, limit: usize) -> Result<Vec<OrderSummary>, CheckoutError> {
        let owner_id = self
            .identity
            .current_user_id()
            .ok_or(CheckoutError::NotSignedIn)?;
        self.checkout.my_orders(&owner_id, limit).await
    }

    /// Session teardown (e.g. logout): resets the context to empty.
    pub fn end(&self) {
        self.context.clear();
    }
}
