//! Catalog service trait and in-memory implementation.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use cart::Product;

use crate::error::CheckoutError;

/// Lists the products available for sale.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Returns every product the backend knows about.
    async fn list_products(&self) -> Result<Vec<Product>, CheckoutError>;
}

#[async_trait]
impl<T: CatalogService + ?Sized> CatalogService for Arc<T> {
    async fn list_products(&self) -> Result<Vec<Product>, CheckoutError> {
        (**self).list_products().await
    }
}

/// Loads the catalog, falling back to an empty list on failure.
///
/// The failure is logged and counted; there is no retry.
pub async fn load_catalog<C: CatalogService + ?Sized>(catalog: &C) -> Vec<Product> {
    match catalog.list_products().await {
        Ok(products) => {
            tracing::info!(count = products.len(), "catalog loaded");
            products
        }
        Err(e) => {
            metrics::counter!("catalog_fetch_failures_total").increment(1);
            tracing::error!(error = %e, "error fetching catalog");
            Vec::new()
        }
    }
}

#[derive(Debug, Default)]
struct InMemoryCatalogState {
    products: Vec<Product>,
    fail_on_list: bool,
}

/// In-memory catalog for testing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalogService {
    state: Arc<RwLock<InMemoryCatalogState>>,
}

impl InMemoryCatalogService {
    /// Creates a catalog holding the given products.
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryCatalogState {
                products,
                fail_on_list: false,
            })),
        }
    }

    /// Configures the service to fail on list calls.
    pub fn set_fail_on_list(&self, fail: bool) {
        self.state
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .fail_on_list = fail;
    }

    /// Replaces the listed products.
    pub fn set_products(&self, products: Vec<Product>) {
        self.state
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .products = products;
    }
}

#[async_trait]
impl CatalogService for InMemoryCatalogService {
    async fn list_products(&self) -> Result<Vec<Product>, CheckoutError> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());

        if state.fail_on_list {
            return Err(CheckoutError::CatalogFetch(
                "Backend unavailable".to_string(),
            ));
        }

        Ok(state.products.clone())
    }
}
