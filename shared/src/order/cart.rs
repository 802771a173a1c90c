//! Cart shapes
//!
//! The cart is transient composing state: it references catalog items by
//! ID and does not outlive submission. Denormalization (name, image,
//! price snapshots) happens at translation time, not here.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Per-item customization
///
/// The empty set is the canonical "no customization" value; check it
/// with [`ProductCustomization::is_plain`], never by identity.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductCustomization {
    #[serde(default)]
    pub removed_ingredients: BTreeSet<String>,
}

impl ProductCustomization {
    pub fn remove(ingredients: impl IntoIterator<Item = String>) -> Self {
        Self {
            removed_ingredients: ingredients.into_iter().collect(),
        }
    }

    pub fn is_plain(&self) -> bool {
        self.removed_ingredients.is_empty()
    }
}

/// One selected option inside a menu group
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectedProduct {
    pub product_id: String,
    #[serde(default)]
    pub customization: ProductCustomization,
}

/// A single cart line: a standalone product or a composed menu
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CartLine {
    Product {
        product_id: String,
        quantity: u32,
        #[serde(default)]
        customization: ProductCustomization,
    },
    Menu {
        menu_id: String,
        quantity: u32,
        /// Selections per group key, in group-internal pick order
        #[serde(default)]
        selections: BTreeMap<String, Vec<SelectedProduct>>,
    },
}

impl CartLine {
    pub fn quantity(&self) -> u32 {
        match self {
            Self::Product { quantity, .. } | Self::Menu { quantity, .. } => *quantity,
        }
    }

    /// Catalog ID the line refers to (product or menu).
    pub fn item_id(&self) -> &str {
        match self {
            Self::Product { product_id, .. } => product_id,
            Self::Menu { menu_id, .. } => menu_id,
        }
    }
}

/// Ordered collection of cart lines
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cart {
    pub lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: CartLine) {
        self.lines.push(line);
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_customization_is_plain() {
        assert!(ProductCustomization::default().is_plain());
        assert!(ProductCustomization::remove([]).is_plain());
        assert!(!ProductCustomization::remove(["lettuce".to_string()]).is_plain());
    }

    #[test]
    fn customization_deduplicates_ingredients() {
        let c = ProductCustomization::remove(["onion".to_string(), "onion".to_string()]);
        assert_eq!(c.removed_ingredients.len(), 1);
    }
}
