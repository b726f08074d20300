//! Shared application state.

use cart::{CartStore, Product};
use checkout::{CatalogService, InventoryService, Reconciler, ToastQueue, load_catalog};
use common::ProductId;
use export::InvoiceExporter;
use tokio::sync::RwLock;

/// Shared application state accessible from all handlers.
///
/// One cart per process: the kiosk serves a single cashier.
pub struct AppState<C: CatalogService, I: InventoryService> {
    pub catalog_service: C,
    pub catalog: RwLock<Vec<Product>>,
    pub cart: CartStore,
    pub reconciler: Reconciler<I, ToastQueue>,
    pub toasts: ToastQueue,
    pub exporter: InvoiceExporter,
}

impl<C: CatalogService, I: InventoryService> AppState<C, I> {
    /// Creates state with an empty catalog and cart.
    pub fn new(catalog_service: C, inventory: I) -> Self {
        let toasts = ToastQueue::new();
        Self {
            catalog_service,
            catalog: RwLock::new(Vec::new()),
            cart: CartStore::new(),
            reconciler: Reconciler::new(inventory, toasts.clone()),
            toasts,
            exporter: InvoiceExporter::new(),
        }
    }

    /// Reloads the catalog from the backend.
    ///
    /// A failed fetch leaves an empty catalog.
    pub async fn refresh_catalog(&self) -> Vec<Product> {
        let products = load_catalog(&self.catalog_service).await;
        *self.catalog.write().await = products.clone();
        products
    }

    /// Looks up a product in the loaded catalog.
    pub async fn find_product(&self, product_id: ProductId) -> Option<Product> {
        self.catalog
            .read()
            .await
            .iter()
            .find(|p| p.id == product_id)
            .cloned()
    }
}
