//! Toast notifications endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use checkout::{CatalogService, InventoryService, Toast};

use crate::state::AppState;

/// GET /notifications: drain pending toasts, oldest first.
pub async fn drain<C, I>(State(state): State<Arc<AppState<C, I>>>) -> Json<Vec<Toast>>
where
    C: CatalogService + 'static,
    I: InventoryService + 'static,
{
    Json(state.toasts.drain())
}
