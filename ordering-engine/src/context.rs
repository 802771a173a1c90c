//! Session context state machine
//!
//! Exactly one [`SessionContext`] is live per session. Transitions
//! always replace the whole [`OrderContext`] value, so `mode` and
//! `address_id` can never observably disagree. Readers get the latest
//! value synchronously, including subscribers that attach after a
//! transition already happened.

use shared::order::{OrderContext, OrderMode};
use tokio::sync::watch;

/// Single-writer holder for the session's fulfillment intent
///
/// Backed by a `watch` channel: the session owner writes, any number of
/// consumers read snapshots or subscribe for changes. No further locking
/// is needed because every write is a whole-value replacement.
#[derive(Debug)]
pub struct SessionContext {
    tx: watch::Sender<OrderContext>,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionContext {
    /// Start with the empty context (no mode, not browsing-only).
    pub fn new() -> Self {
        let (tx, _) = watch::channel(OrderContext::default());
        Self { tx }
    }

    /// Commit to a fulfillment mode, optionally with a delivery address.
    ///
    /// An address passed alongside pickup is kept but ignored for
    /// activity purposes; address format validation belongs to the
    /// address input layer.
    pub fn start_order(&self, mode: OrderMode, address_id: Option<String>) {
        self.tx.send_replace(OrderContext {
            mode: Some(mode),
            address_id,
            browsing_only: false,
        });
    }

    /// Switch to browsing-only: no fulfillment commitment, never active.
    pub fn set_browsing_only(&self) {
        self.tx.send_replace(OrderContext {
            mode: None,
            address_id: None,
            browsing_only: true,
        });
    }

    /// Reset to the empty context. Idempotent; also used on session
    /// teardown (e.g. logout).
    pub fn clear(&self) {
        self.tx.send_replace(OrderContext::default());
    }

    /// Snapshot of the current context.
    pub fn current(&self) -> OrderContext {
        self.tx.borrow().clone()
    }

    /// Subscribe to context changes; the receiver immediately holds the
    /// latest value.
    pub fn subscribe(&self) -> watch::Receiver<OrderContext> {
        self.tx.subscribe()
    }

    /// Whether the current context can back an order.
    pub fn is_active(&self) -> bool {
        self.tx.borrow().is_active()
    }
}
