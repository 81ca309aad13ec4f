//! Per-session application context.
//!
//! Exactly one catalog state and one cart state per session, visible to all
//! presentation code holding a clone. Sessions are explicitly owned values,
//! never process-wide globals, so independent sessions (tests, server-side
//! rendering) coexist freely.

use std::sync::{Arc, Mutex};

use storefront_cart::{CartEngine, CartTotals};
use storefront_catalog::{CatalogEngine, FilterUpdate, LoadToken};
use storefront_client::{FetchError, StoreApi};
use storefront_core::{Product, ProductId};

/// Session-level settings applied at construction.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Products shown per catalog page; fixed for the session.
    pub page_size: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            page_size: storefront_catalog::DEFAULT_PAGE_SIZE,
        }
    }
}

/// The per-session context: one catalog engine, one cart engine, and the
/// store API collaborator feeding the catalog.
///
/// Engine commands serialize behind a mutex, so no read ever observes a
/// partially applied recompute. The async load operations are the only
/// suspending points; dropping the session (or an in-flight load future)
/// abandons the fetch without writing anything.
#[derive(Clone)]
pub struct StoreSession {
    catalog: Arc<Mutex<CatalogEngine>>,
    cart: Arc<Mutex<CartEngine>>,
    api: Arc<dyn StoreApi>,
}

impl StoreSession {
    pub fn new(api: Arc<dyn StoreApi>) -> Self {
        Self::with_config(api, SessionConfig::default())
    }

    pub fn with_config(api: Arc<dyn StoreApi>, config: SessionConfig) -> Self {
        Self {
            catalog: Arc::new(Mutex::new(CatalogEngine::with_page_size(config.page_size))),
            cart: Arc::new(Mutex::new(CartEngine::new())),
            api,
        }
    }

    /// Fetch the full product collection and apply it to the catalog.
    ///
    /// Issuing a new load while one is in flight supersedes it: the older
    /// completion is discarded when it eventually settles (generation-counter
    /// last-write-wins). A fetch failure is recorded on the catalog status,
    /// never returned.
    pub async fn load_products(&self) {
        let token = self.catalog.lock().unwrap().begin_load();
        let outcome = self.api.fetch_all_products().await;
        self.apply_load(token, outcome);
    }

    /// Alternative load path: only the products of one category.
    pub async fn load_products_by_category(&self, category: &str) {
        let token = self.catalog.lock().unwrap().begin_load();
        let outcome = self.api.fetch_products_by_category(category).await;
        self.apply_load(token, outcome);
    }

    /// Fetch the distinct category list for the filter UI.
    ///
    /// Independent of product loading: a failure here is logged and dropped
    /// without touching catalog status.
    pub async fn load_categories(&self) {
        match self.api.fetch_categories().await {
            Ok(categories) => {
                tracing::debug!(count = categories.len(), "category list loaded");
                self.catalog.lock().unwrap().set_categories(categories);
            }
            Err(error) => {
                tracing::warn!(%error, "category fetch failed");
            }
        }
    }

    fn apply_load(&self, token: LoadToken, outcome: Result<Vec<Product>, FetchError>) {
        let mut catalog = self.catalog.lock().unwrap();
        match outcome {
            Ok(products) => {
                let count = products.len();
                if catalog.finish_load(token, Ok(products)) {
                    tracing::info!(count, "product catalog loaded");
                } else {
                    tracing::debug!(count, "superseded product fetch discarded");
                }
            }
            Err(error) => {
                if catalog.finish_load(token, Err(error.to_string())) {
                    tracing::warn!(%error, "product fetch failed");
                } else {
                    tracing::debug!(%error, "superseded product fetch discarded");
                }
            }
        }
    }

    pub fn update_filter(&self, update: FilterUpdate) {
        self.catalog.lock().unwrap().update_filter(update);
    }

    pub fn clear_filter(&self) {
        self.catalog.lock().unwrap().clear_filter();
    }

    pub fn set_page(&self, page: u32) {
        self.catalog.lock().unwrap().set_page(page);
    }

    pub fn add_to_cart(&self, product: &Product, quantity: u32) {
        self.cart.lock().unwrap().add_item(product, quantity);
    }

    pub fn set_cart_quantity(&self, product_id: ProductId, quantity: i64) {
        self.cart.lock().unwrap().set_quantity(product_id, quantity);
    }

    pub fn remove_from_cart(&self, product_id: ProductId) {
        self.cart.lock().unwrap().remove_item(product_id);
    }

    pub fn clear_cart(&self) {
        self.cart.lock().unwrap().clear();
    }

    /// Read the catalog under the session lock.
    pub fn with_catalog<R>(&self, read: impl FnOnce(&CatalogEngine) -> R) -> R {
        read(&self.catalog.lock().unwrap())
    }

    /// Read the cart under the session lock.
    pub fn with_cart<R>(&self, read: impl FnOnce(&CartEngine) -> R) -> R {
        read(&self.cart.lock().unwrap())
    }

    /// Owned copy of the currently visible catalog page.
    pub fn visible_page(&self) -> Vec<Product> {
        self.with_catalog(|catalog| catalog.visible_page().to_vec())
    }

    pub fn cart_totals(&self) -> CartTotals {
        self.with_cart(|cart| cart.totals())
    }
}
