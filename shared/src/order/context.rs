//! Session fulfillment context

use serde::{Deserialize, Serialize};

/// Fulfillment mode
///
/// Determines the pricing channel and whether an address is required.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderMode {
    Pickup,
    Delivery,
}

/// The session's current fulfillment intent
///
/// Replaced wholesale on every transition, never partially mutated, so
/// readers can never observe `mode` and `address_id` disagreeing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderContext {
    pub mode: Option<OrderMode>,
    pub address_id: Option<String>,
    /// Browsing-only sessions never produce an active order, regardless
    /// of mode or address.
    pub browsing_only: bool,
}

impl OrderContext {
    /// Whether the context can back an order.
    ///
    /// Pickup is active as soon as the mode is chosen; delivery
    /// additionally needs an address. An address passed alongside
    /// pickup is ignored here.
    pub fn is_active(&self) -> bool {
        if self.browsing_only {
            return false;
        }
        match self.mode {
            Some(OrderMode::Pickup) => true,
            Some(OrderMode::Delivery) => self.address_id.is_some(),
            None => false,
        }
    }
}
