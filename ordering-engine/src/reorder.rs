//! Reorder reconstruction
//!
//! Turns a past order's stored lines back into a fresh cart. Prices are
//! never carried forward: the rebuilt cart is re-priced against the
//! current catalog on the next pricing pass, so a reorder reflects
//! current prices, not historical ones. Lines whose referent no longer
//! exists, or is deactivated, are excluded and reported instead of
//! being silently rebuilt from stale data.

use serde::Serialize;
use shared::order::{Cart, CartLine, ProductCustomization, ReorderLine, SelectedProduct};

use crate::catalog::CatalogSource;

/// Why a stored line could not be rebuilt
///
/// Serialized for the UI layer, which renders the excluded lines.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkipReason {
    /// The product/menu no longer exists in the catalog.
    Missing,
    /// It exists but is no longer active.
    Inactive,
}

/// A stored line excluded from the rebuilt cart
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SkippedLine {
    pub item_id: String,
    pub reason: SkipReason,
}

/// Result of rebuilding a cart from stored order lines
#[derive(Debug, Clone, Default)]
pub struct RebuiltCart {
    pub cart: Cart,
    pub skipped: Vec<SkippedLine>,
}

/// Rebuild a cart from a past order's reorder lines.
pub async fn rebuild_cart(catalog: &dyn CatalogSource, lines: &[ReorderLine]) -> RebuiltCart {
    let mut product_ids = Vec::new();
    let mut menu_ids = Vec::new();
    for line in lines {
        match line {
            ReorderLine::Product { product_id, .. } => product_ids.push(product_id.clone()),
            ReorderLine::Menu { menu_id, .. } => menu_ids.push(menu_id.clone()),
        }
    }
    let products = catalog.products_by_ids(&product_ids).await;
    let menus = catalog.menus_by_ids(&menu_ids).await;

    let mut result = RebuiltCart::default();

    for line in lines {
        match line {
            ReorderLine::Product {
                product_id,
                quantity,
                removed_ingredients,
                ..
            } => {
                match products.get(product_id) {
                    None => result.skip(product_id, SkipReason::Missing),
                    Some(p) if !p.is_active => result.skip(product_id, SkipReason::Inactive),
                    Some(_) => result.cart.push(CartLine::Product {
                        product_id: product_id.clone(),
                        quantity: *quantity,
                        customization: ProductCustomization::remove(
                            removed_ingredients.iter().cloned(),
                        ),
                    }),
                }
            }
            ReorderLine::Menu {
                menu_id,
                quantity,
                selections,
                ..
            } => {
                match menus.get(menu_id) {
                    None => result.skip(menu_id, SkipReason::Missing),
                    Some(m) if !m.is_active => result.skip(menu_id, SkipReason::Inactive),
                    Some(_) => {
                        // Selections restored verbatim; composition rules
                        // are re-checked at the next translation pass.
                        let restored = selections
                            .iter()
                            .map(|(key, picked)| {
                                let picked = picked
                                    .iter()
                                    .map(|s| SelectedProduct {
                                        product_id: s.product_id.clone(),
                                        customization: ProductCustomization::remove(
                                            s.removed_ingredients.iter().cloned(),
                                        ),
                                    })
                                    .collect();
                                (key.clone(), picked)
                            })
                            .collect();
                        result.cart.push(CartLine::Menu {
                            menu_id: menu_id.clone(),
                            quantity: *quantity,
                            selections: restored,
                        });
                    }
                }
            }
        }
    }

    result
}

impl RebuiltCart {
    fn skip(&mut self, item_id: &str, reason: SkipReason) {
        tracing::warn!(item_id = %item_id, reason = ?reason, "reorder line excluded");
        self.skipped.push(SkippedLine {
            item_id: item_id.to_string(),
            reason,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MemoryCatalog;
    use shared::models::{Menu, MenuGroup, Prices, Product};
    use shared::order::StoredSelection;
    use std::collections::BTreeMap;

    fn product(id: &str, active: bool) -> Product {
        Product {
            id: id.to_string(),
            name: id.to_string(),
            description: None,
            image: None,
            category: "cat-1".to_string(),
            sort_order: 0,
            ingredients: vec!["lettuce".to_string()],
            prices: Prices {
                pickup_cents: Some(350),
                delivery_cents: None,
            },
            is_active: active,
        }
    }

    fn menu(id: &str, active: bool) -> Menu {
        Menu {
            id: id.to_string(),
            name: id.to_string(),
            description: None,
            image: None,
            category: "cat-1".to_string(),
            sort_order: 0,
            groups: vec![MenuGroup {
                key: "mains".to_string(),
                name: "Main".to_string(),
                min: 1,
                max: 1,
                options: vec!["prod-1".to_string()],
            }],
            prices: Prices {
                pickup_cents: Some(990),
                delivery_cents: None,
            },
            is_active: active,
        }
    }

    fn stored_product_line(id: &str, removed: &[&str]) -> ReorderLine {
        ReorderLine::Product {
            product_id: id.to_string(),
            name: Some("old name".to_string()),
            image: None,
            unit_price_cents: 111, // historical price, must not be carried
            quantity: 2,
            removed_ingredients: removed.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn product_line_restores_customization_exactly() {
        let catalog = MemoryCatalog::new();
        catalog.set_products(vec![product("prod-1", true)]);

        let rebuilt = rebuild_cart(&catalog, &[stored_product_line("prod-1", &["lettuce"])]).await;
        assert!(rebuilt.skipped.is_empty());
        assert_eq!(rebuilt.cart.len(), 1);
        match &rebuilt.cart.lines[0] {
            CartLine::Product {
                product_id,
                quantity,
                customization,
            } => {
                assert_eq!(product_id, "prod-1");
                assert_eq!(*quantity, 2);
                assert_eq!(
                    customization,
                    &ProductCustomization::remove(["lettuce".to_string()])
                );
            }
            _ => panic!("expected product line"),
        }
    }

    #[tokio::test]
    async fn missing_and_inactive_referents_are_flagged() {
        let catalog = MemoryCatalog::new();
        catalog.set_products(vec![product("prod-old", false)]);

        let rebuilt = rebuild_cart(
            &catalog,
            &[
                stored_product_line("prod-404", &[]),
                stored_product_line("prod-old", &[]),
            ],
        )
        .await;

        assert!(rebuilt.cart.is_empty());
        assert_eq!(
            rebuilt.skipped,
            vec![
                SkippedLine {
                    item_id: "prod-404".to_string(),
                    reason: SkipReason::Missing,
                },
                SkippedLine {
                    item_id: "prod-old".to_string(),
                    reason: SkipReason::Inactive,
                },
            ]
        );
    }

    #[tokio::test]
    async fn menu_line_restores_selections_verbatim() {
        let catalog = MemoryCatalog::new();
        catalog.set_menus(vec![menu("menu-1", true)]);

        let mut selections = BTreeMap::new();
        selections.insert(
            "mains".to_string(),
            vec![StoredSelection {
                product_id: "prod-1".to_string(),
                removed_ingredients: vec!["onion".to_string()],
            }],
        );
        let line = ReorderLine::Menu {
            menu_id: "menu-1".to_string(),
            name: None,
            image: None,
            unit_price_cents: 990,
            quantity: 1,
            selections,
        };

        let rebuilt = rebuild_cart(&catalog, &[line]).await;
        match &rebuilt.cart.lines[0] {
            CartLine::Menu { selections, .. } => {
                let picked = &selections["mains"];
                assert_eq!(picked[0].product_id, "prod-1");
                assert_eq!(
                    picked[0].customization,
                    ProductCustomization::remove(["onion".to_string()])
                );
            }
            _ => panic!("expected menu line"),
        }
    }

    #[test]
    fn skip_reason_serializes_for_the_ui() {
        assert_eq!(
            serde_json::to_value(SkipReason::Inactive).unwrap(),
            "INACTIVE"
        );
        assert_eq!(
            serde_json::to_value(SkipReason::Missing).unwrap(),
            "MISSING"
        );
    }

    #[tokio::test]
    async fn inactive_menu_is_excluded() {
        let catalog = MemoryCatalog::new();
        catalog.set_menus(vec![menu("menu-1", false)]);

        let line = ReorderLine::Menu {
            menu_id: "menu-1".to_string(),
            name: None,
            image: None,
            unit_price_cents: 990,
            quantity: 1,
            selections: BTreeMap::new(),
        };
        let rebuilt = rebuild_cart(&catalog, &[line]).await;
        assert!(rebuilt.cart.is_empty());
        assert_eq!(rebuilt.skipped[0].reason, SkipReason::Inactive);
    }
}
