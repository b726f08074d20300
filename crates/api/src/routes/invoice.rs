//! PDF export of the live view.

use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::IntoResponse;
use checkout::{CatalogService, InventoryService};
use export::PosView;

use super::session::session_from_headers;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /invoice.pdf: render what the cashier sees as a PDF download.
#[tracing::instrument(skip(state, headers))]
pub async fn export<C, I>(
    State(state): State<Arc<AppState<C, I>>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError>
where
    C: CatalogService + 'static,
    I: InventoryService + 'static,
{
    let session = session_from_headers(&headers);
    let catalog = state.catalog.read().await.clone();
    let view = PosView::capture(&session, &catalog, state.cart.snapshot().await);

    let worker = Arc::clone(&state);
    let document = tokio::task::spawn_blocking(move || worker.exporter.export_current_view(&view))
        .await
        .map_err(|e| ApiError::Internal(format!("Export task failed: {e}")))??;

    let disposition = format!("attachment; filename=\"{}\"", document.file_name);
    Ok((
        [
            (CONTENT_TYPE, "application/pdf".to_string()),
            (CONTENT_DISPOSITION, disposition),
        ],
        document.bytes,
    ))
}
