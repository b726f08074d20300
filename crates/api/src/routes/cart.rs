//! Cart endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use cart::{CartLine, CartSnapshot};
use checkout::{CatalogService, InventoryService};
use serde::Serialize;

use super::parse_product_id;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CartLineResponse {
    pub product_id: i64,
    pub name: String,
    pub unit_price_cents: i64,
    pub quantity: u32,
    pub total_cents: i64,
}

#[derive(Debug, Serialize)]
pub struct CartResponse {
    pub lines: Vec<CartLineResponse>,
    pub total_cents: i64,
}

impl From<&CartLine> for CartLineResponse {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.product_id().get(),
            name: line.product.name.clone(),
            unit_price_cents: line.unit_price().cents(),
            quantity: line.quantity,
            total_cents: line.total_price().cents(),
        }
    }
}

impl From<CartSnapshot> for CartResponse {
    fn from(snapshot: CartSnapshot) -> Self {
        Self {
            lines: snapshot.lines.iter().map(CartLineResponse::from).collect(),
            total_cents: snapshot.total_price.cents(),
        }
    }
}

/// GET /cart
pub async fn get<C, I>(State(state): State<Arc<AppState<C, I>>>) -> Json<CartResponse>
where
    C: CatalogService + 'static,
    I: InventoryService + 'static,
{
    Json(state.cart.snapshot().await.into())
}

/// POST /cart/items/{id}: add one unit of a catalog product.
#[tracing::instrument(skip(state))]
pub async fn add<C, I>(
    State(state): State<Arc<AppState<C, I>>>,
    Path(id): Path<String>,
) -> Result<Json<CartResponse>, ApiError>
where
    C: CatalogService + 'static,
    I: InventoryService + 'static,
{
    let product_id = parse_product_id(&id)?;
    let product = state
        .find_product(product_id)
        .await
        .ok_or_else(|| ApiError::NotFound(format!("Product {product_id} not in catalog")))?;

    let snapshot = state.cart.add_one(product).await;
    Ok(Json(snapshot.into()))
}

/// POST /cart/items/{id}/decrement: remove one unit.
#[tracing::instrument(skip(state))]
pub async fn decrement<C, I>(
    State(state): State<Arc<AppState<C, I>>>,
    Path(id): Path<String>,
) -> Result<Json<CartResponse>, ApiError>
where
    C: CatalogService + 'static,
    I: InventoryService + 'static,
{
    let product_id = parse_product_id(&id)?;
    let snapshot = state.cart.decrement_one(product_id).await;
    Ok(Json(snapshot.into()))
}

/// DELETE /cart/items/{id}: drop the whole line.
#[tracing::instrument(skip(state))]
pub async fn remove<C, I>(
    State(state): State<Arc<AppState<C, I>>>,
    Path(id): Path<String>,
) -> Result<Json<CartResponse>, ApiError>
where
    C: CatalogService + 'static,
    I: InventoryService + 'static,
{
    let product_id = parse_product_id(&id)?;
    let snapshot = state.cart.remove_all(product_id).await;
    Ok(Json(snapshot.into()))
}
