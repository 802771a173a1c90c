//! Denormalized order records
//!
//! Everything here is a snapshot taken at submission time. Name, image
//! and price fields must never be re-resolved against the live catalog:
//! historical orders stay stable even if products are renamed, repriced
//! or deleted.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::OrderMode;

/// One selected option as stored with an order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredSelection {
    pub product_id: String,
    /// Removed ingredient names, order stable for display
    #[serde(default)]
    pub removed_ingredients: Vec<String>,
}

/// Durable, denormalized order line
///
/// Stored with the order and used to repeat the purchase later. Tagged
/// union; every consumption site matches exhaustively.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReorderLine {
    Product {
        product_id: String,
        name: Option<String>,
        image: Option<String>,
        unit_price_cents: i64,
        quantity: u32,
        #[serde(default)]
        removed_ingredients: Vec<String>,
    },
    Menu {
        menu_id: String,
        name: Option<String>,
        image: Option<String>,
        unit_price_cents: i64,
        quantity: u32,
        /// Group key -> selections, restored verbatim on reorder
        #[serde(default)]
        selections: BTreeMap<String, Vec<StoredSelection>>,
    },
}

impl ReorderLine {
    pub fn quantity(&self) -> u32 {
        match self {
            Self::Product { quantity, .. } | Self::Menu { quantity, .. } => *quantity,
        }
    }

    pub fn unit_price_cents(&self) -> i64 {
        match self {
            Self::Product {
                unit_price_cents, ..
            }
            | Self::Menu {
                unit_price_cents, ..
            } => *unit_price_cents,
        }
    }
}

/// Quantity + display label, used only for order listings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderLinePreview {
    pub quantity: u32,
    pub label: String,
}

/// The atomic write payload for a new order
///
/// The backend assigns the order ID and the creation timestamp; either
/// the entire record (header + all lines) is durably written or nothing
/// is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOrder {
    pub owner_id: String,
    pub status: String,
    pub total_cents: i64,
    pub mode: OrderMode,
    pub address_id: Option<String>,
    pub items_count: u32,
    pub items: Vec<OrderLinePreview>,
    pub reorder_lines: Vec<ReorderLine>,
}

/// Read model for a past order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderSummary {
    pub id: String,
    /// None only during the brief window before the server timestamp
    /// resolves.
    pub created_at: Option<DateTime<Utc>>,
    /// Status tag; the vocabulary beyond the initial status is owned by
    /// the external fulfillment process.
    pub status: String,
    pub total_cents: i64,
    pub mode: OrderMode,
    pub address_id: Option<String>,
    pub items_count: u32,
    pub items: Vec<OrderLinePreview>,
    pub reorder_lines: Vec<ReorderLine>,
}
