//! Cart-to-order translation and submission
//!
//! # Submission flow
//!
//! ```text
//! submit(owner, cart, mode, address)
//!     ├─ 1. Gate: non-empty cart, mode set, address present for delivery
//!     ├─ 2. translate(): price + validate every line, snapshot names/images
//!     ├─ 3. One atomic store write (server timestamp, initial status)
//!     └─ 4. Return the new order ID
//! ```
//!
//! All gating happens before any I/O; a failed write leaves no partial
//! order, so the caller may retry with the same payload.

use std::collections::BTreeMap;
use std::sync::Arc;

use shared::order::{
    Cart, CartLine, NewOrder, OrderLinePreview, OrderMode, OrderSummary, ReorderLine,
    SelectedProduct, StoredSelection,
};

use crate::catalog::CatalogSource;
use crate::error::CheckoutError;
use crate::menu::validate_selections;
use crate::pricing;
use crate::store::OrderStore;

/// Initial status written with every new order. Later statuses are
/// owned by the external fulfillment process and pass through
/// [`OrderSummary::status`] opaquely.
pub const STATUS_SUBMITTED: &str = "SUBMITTED";

/// Upper bound per line; a runaway quantity is a client bug, not an
/// order.
const MAX_QUANTITY: u32 = 9999;

/// A cart translated into its denormalized, price-snapshotted form
#[derive(Debug, Clone)]
pub struct TranslatedOrder {
    pub total_cents: i64,
    pub items_count: u32,
    /// Previews in cart-line order (the listing UI relies on it)
    pub items: Vec<OrderLinePreview>,
    pub reorder_lines: Vec<ReorderLine>,
}

/// Translator + submission pipeline over the catalog and store contracts
pub struct Checkout {
    catalog: Arc<dyn CatalogSource>,
    store: Arc<dyn OrderStore>,
}

impl Checkout {
    pub fn new(catalog: Arc<dyn CatalogSource>, store: Arc<dyn OrderStore>) -> Self {
        Self { catalog, store }
    }

    /// Translate a cart into order lines, pricing every line against
    /// the current catalog for `mode`.
    ///
    /// Hard failures: unknown/deactivated items, unpriceable lines,
    /// menu selection violations, zero or runaway quantities. Name and
    /// image are captured as-read; the stored line never references the
    /// live catalog entity.
    pub async fn translate(
        &self,
        cart: &Cart,
        mode: OrderMode,
    ) -> Result<TranslatedOrder, CheckoutError> {
        let mut product_ids = Vec::new();
        let mut menu_ids = Vec::new();
        for line in &cart.lines {
            match line {
                CartLine::Product { product_id, .. } => product_ids.push(product_id.clone()),
                CartLine::Menu { menu_id, .. } => menu_ids.push(menu_id.clone()),
            }
        }
        let products = self.catalog.products_by_ids(&product_ids).await;
        let menus = self.catalog.menus_by_ids(&menu_ids).await;

        let mut total_cents: i64 = 0;
        let mut items_count: u32 = 0;
        let mut items = Vec::with_capacity(cart.lines.len());
        let mut reorder_lines = Vec::with_capacity(cart.lines.len());

        for line in &cart.lines {
            let quantity = line.quantity();
            if quantity == 0 || quantity > MAX_QUANTITY {
                return Err(CheckoutError::InvalidQuantity(line.item_id().to_string()));
            }

            match line {
                CartLine::Product {
                    product_id,
                    customization,
                    ..
                } => {
                    let product = products
                        .get(product_id)
                        .ok_or_else(|| CheckoutError::UnknownProduct(product_id.clone()))?;
                    if !product.is_active {
                        return Err(CheckoutError::ItemUnavailable(product_id.clone()));
                    }
                    let unit = pricing::unit_price(&product.prices, Some(mode))
                        .ok_or_else(|| CheckoutError::UnpricedItem(product_id.clone()))?;

                    total_cents += pricing::line_total(unit, quantity);
                    items_count += quantity;
                    items.push(OrderLinePreview {
                        quantity,
                        label: product.name.clone(),
                    });
                    reorder_lines.push(ReorderLine::Product {
                        product_id: product_id.clone(),
                        name: Some(product.name.clone()),
                        image: product.image.clone(),
                        unit_price_cents: unit,
                        quantity,
                        removed_ingredients: customization
                            .removed_ingredients
                            .iter()
                            .cloned()
                            .collect(),
                    });
                }
                CartLine::Menu {
                    menu_id,
                    selections,
                    ..
                } => {
                    let menu = menus
                        .get(menu_id)
                        .ok_or_else(|| CheckoutError::UnknownMenu(menu_id.clone()))?;
                    if !menu.is_active {
                        return Err(CheckoutError::ItemUnavailable(menu_id.clone()));
                    }
                    validate_selections(menu, selections)?;
                    let unit = pricing::unit_price(&menu.prices, Some(mode))
                        .ok_or_else(|| CheckoutError::UnpricedItem(menu_id.clone()))?;

                    total_cents += pricing::line_total(unit, quantity);
                    items_count += quantity;
                    items.push(OrderLinePreview {
                        quantity,
                        label: menu.name.clone(),
                    });
                    reorder_lines.push(ReorderLine::Menu {
                        menu_id: menu_id.clone(),
                        name: Some(menu.name.clone()),
                        image: menu.image.clone(),
                        unit_price_cents: unit,
                        quantity,
                        selections: snapshot_selections(selections),
                    });
                }
            }
        }

        Ok(TranslatedOrder {
            total_cents,
            items_count,
            items,
            reorder_lines,
        })
    }

    /// Validate, translate and persist a cart as one atomic write.
    ///
    /// Mirrors the context activity rule: submission never proceeds for
    /// a combination that would be inactive (no mode, or delivery
    /// without an address). All checks run before any storage I/O.
    pub async fn submit(
        &self,
        owner_id: &str,
        cart: &Cart,
        mode: Option<OrderMode>,
        address_id: Option<String>,
    ) -> Result<String, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        let mode = mode.ok_or(CheckoutError::MissingMode)?;
        if mode == OrderMode::Delivery && address_id.is_none() {
            return Err(CheckoutError::MissingAddress);
        }

        let translated = self.translate(cart, mode).await?;
        let order = NewOrder {
            owner_id: owner_id.to_string(),
            status: STATUS_SUBMITTED.to_string(),
            total_cents: translated.total_cents,
            mode,
            address_id,
            items_count: translated.items_count,
            items: translated.items,
            reorder_lines: translated.reorder_lines,
        };

        let order_id = self.store.create_order(order).await.inspect_err(|e| {
            tracing::error!(owner_id = %owner_id, error = %e, "order submission failed");
        })?;
        tracing::info!(
            order_id = %order_id,
            owner_id = %owner_id,
            mode = ?mode,
            "order submitted"
        );
        Ok(order_id)
    }

    /// The owner's most recent orders, newest first.
    pub async fn my_orders(
        &self,
        owner_id: &str,
        limit: usize,
    ) -> Result<Vec<OrderSummary>, CheckoutError> {
        Ok(self.store.orders_for_owner(owner_id, limit).await?)
    }
}

fn snapshot_selections(
    selections: &BTreeMap<String, Vec<SelectedProduct>>,
) -> BTreeMap<String, Vec<StoredSelection>> {
    selections
        .iter()
        .map(|(key, picked)| {
            let stored = picked
                .iter()
                .map(|s| StoredSelection {
                    product_id: s.product_id.clone(),
                    removed_ingredients: s
                        .customization
                        .removed_ingredients
                        .iter()
                        .cloned()
                        .collect(),
                })
                .collect();
            (key.clone(), stored)
        })
        .collect()
}
