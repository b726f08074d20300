//! Catalog endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use cart::Product;
use checkout::{CatalogService, InventoryService};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub flavor: String,
    pub price_cents: i64,
    pub quantity_available: u32,
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.get(),
            name: product.name.clone(),
            description: product.description.clone(),
            flavor: product.flavor.clone(),
            price_cents: product.price.cents(),
            quantity_available: product.quantity_available,
        }
    }
}

fn to_response(products: &[Product]) -> Json<Vec<ProductResponse>> {
    Json(products.iter().map(ProductResponse::from).collect())
}

/// GET /catalog: the products loaded at startup or last refresh.
pub async fn list<C, I>(State(state): State<Arc<AppState<C, I>>>) -> Json<Vec<ProductResponse>>
where
    C: CatalogService + 'static,
    I: InventoryService + 'static,
{
    to_response(&state.catalog.read().await)
}

/// POST /catalog/refresh: reload the catalog from the backend.
#[tracing::instrument(skip(state))]
pub async fn refresh<C, I>(State(state): State<Arc<AppState<C, I>>>) -> Json<Vec<ProductResponse>>
where
    C: CatalogService + 'static,
    I: InventoryService + 'static,
{
    to_response(&state.refresh_catalog().await)
}
