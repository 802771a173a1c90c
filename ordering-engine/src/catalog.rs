//! Catalog contract
//!
//! The engine reads the catalog, it never writes it. Live listing reads
//! are `watch` receivers (latest-value semantics, cheap to clone); point
//! lookups are async because real backends resolve them remotely.
//!
//! [`MemoryCatalog`] is the in-process implementation used by tests and
//! by embedders that sync the catalog themselves.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use shared::models::{Category, Menu, Product};
use tokio::sync::watch;

/// Read-side catalog contract
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Live sequence of active categories, in display order.
    fn observe_categories(&self) -> watch::Receiver<Vec<Category>>;

    /// Live sequence of active products, in display order. Use
    /// [`filter_by_category`] for per-category views.
    fn observe_products(&self) -> watch::Receiver<Vec<Product>>;

    /// Point lookup by ID. Does NOT filter on `is_active`, so callers
    /// (reorder in particular) can tell a deactivated item apart from a
    /// deleted one.
    async fn products_by_ids(&self, ids: &[String]) -> HashMap<String, Product>;

    /// Point lookup by ID; same `is_active` semantics as
    /// [`CatalogSource::products_by_ids`].
    async fn menus_by_ids(&self, ids: &[String]) -> HashMap<String, Menu>;
}

/// Per-category view over an active-product listing.
pub fn filter_by_category(products: &[Product], category_id: Option<&str>) -> Vec<Product> {
    match category_id {
        Some(cat) => products.iter().filter(|p| p.category == cat).cloned().collect(),
        None => products.to_vec(),
    }
}

/// In-memory catalog
///
/// Full entity maps for point lookups, plus published active-only
/// listings for the live sequences. Writers replace whole sets; readers
/// only ever see consistent snapshots.
pub struct MemoryCatalog {
    categories_tx: watch::Sender<Vec<Category>>,
    products_tx: watch::Sender<Vec<Product>>,
    products: RwLock<HashMap<String, Product>>,
    menus: RwLock<HashMap<String, Menu>>,
}

impl Default for MemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryCatalog {
    pub fn new() -> Self {
        let (categories_tx, _) = watch::channel(Vec::new());
        let (products_tx, _) = watch::channel(Vec::new());
        Self {
            categories_tx,
            products_tx,
            products: RwLock::new(HashMap::new()),
            menus: RwLock::new(HashMap::new()),
        }
    }

    /// Replace the category set and republish the active listing.
    pub fn set_categories(&self, mut categories: Vec<Category>) {
        categories.retain(|c| c.is_active);
        categories.sort_by(|a, b| a.sort_order.cmp(&b.sort_order).then_with(|| a.name.cmp(&b.name)));
        self.categories_tx.send_replace(categories);
    }

    /// Replace the product set and republish the active listing.
    pub fn set_products(&self, products: Vec<Product>) {
        let mut listing: Vec<Product> = products.iter().filter(|p| p.is_active).cloned().collect();
        listing.sort_by(|a, b| a.sort_order.cmp(&b.sort_order).then_with(|| a.name.cmp(&b.name)));

        *self.products.write() = products.into_iter().map(|p| (p.id.clone(), p)).collect();
        self.products_tx.send_replace(listing);
    }

    /// Replace the menu set.
    pub fn set_menus(&self, menus: Vec<Menu>) {
        *self.menus.write() = menus.into_iter().map(|m| (m.id.clone(), m)).collect();
    }
}

#[async_trait]
impl CatalogSource for MemoryCatalog {
    fn observe_categories(&self) -> watch::Receiver<Vec<Category>> {
        self.categories_tx.subscribe()
    }

    fn observe_products(&self) -> watch::Receiver<Vec<Product>> {
        self.products_tx.subscribe()
    }

    async fn products_by_ids(&self, ids: &[String]) -> HashMap<String, Product> {
        let products = self.products.read();
        ids.iter()
            .filter_map(|id| products.get(id).map(|p| (id.clone(), p.clone())))
            .collect()
    }

    async fn menus_by_ids(&self, ids: &[String]) -> HashMap<String, Menu> {
        let menus = self.menus.read();
        ids.iter()
            .filter_map(|id| menus.get(id).map(|m| (id.clone(), m.clone())))
            .collect()
    }
}
