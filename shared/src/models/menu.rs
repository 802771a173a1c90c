//! Menu Model
//!
//! A menu is a composite catalog item: a fixed price plus a list of
//! option groups the customer picks from (e.g. "Main", "Side", "Drink").

use serde::{Deserialize, Serialize};

use super::Prices;

/// Option group within a menu
///
/// `options` is the allowed set of product IDs, kept in catalog order.
/// Selection counts are bounded by `[min, max]`, both inclusive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuGroup {
    /// Stable group key used in stored order lines
    pub key: String,
    pub name: String,
    pub min: u32,
    pub max: u32,
    pub options: Vec<String>,
}

impl MenuGroup {
    pub fn allows(&self, product_id: &str) -> bool {
        self.options.iter().any(|id| id == product_id)
    }
}

/// Menu entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Menu {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    /// Category reference (String ID)
    pub category: String,
    pub sort_order: i32,
    /// Groups in catalog order; validation reports the first violation
    /// in this order.
    pub groups: Vec<MenuGroup>,
    pub prices: Prices,
    pub is_active: bool,
}
