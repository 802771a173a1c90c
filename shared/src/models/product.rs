//! Product Model

use serde::{Deserialize, Serialize};

use crate::order::OrderMode;

/// Per-channel price in cents
///
/// A product may be sold on only one channel; the absent side falls back
/// to the other at resolution time. Both sides absent means the item has
/// no resolvable price and must be treated as unorderable.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Prices {
    pub pickup_cents: Option<i64>,
    pub delivery_cents: Option<i64>,
}

impl Prices {
    /// Resolve the unit price for a fulfillment mode.
    ///
    /// Delivery prefers the delivery price and falls back to pickup;
    /// pickup (or no mode yet, e.g. while browsing) prefers pickup and
    /// falls back to delivery. Never substitutes zero.
    pub fn resolve(&self, mode: Option<OrderMode>) -> Option<i64> {
        match mode {
            Some(OrderMode::Delivery) => self.delivery_cents.or(self.pickup_cents),
            Some(OrderMode::Pickup) | None => self.pickup_cents.or(self.delivery_cents),
        }
    }
}

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    /// Category reference (String ID)
    pub category: String,
    pub sort_order: i32,
    /// Ingredient names, in display order
    #[serde(default)]
    pub ingredients: Vec<String>,
    pub prices: Prices,
    pub is_active: bool,
}
