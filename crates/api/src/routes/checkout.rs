//! Checkout endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use chrono::{DateTime, Utc};
use checkout::{CatalogService, CheckoutReport, InventoryService, LineOutcome};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub checkout_id: String,
    pub invoice: String,
    pub lines: Vec<LineOutcome>,
    pub total_cents: i64,
    pub committed: usize,
    pub failed: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl From<CheckoutReport> for CheckoutResponse {
    fn from(report: CheckoutReport) -> Self {
        Self {
            checkout_id: report.checkout_id.to_string(),
            committed: report.committed_count(),
            failed: report.failed_count(),
            total_cents: report.total_price.cents(),
            invoice: report.invoice.into_string(),
            lines: report.lines,
            started_at: report.started_at,
            finished_at: report.finished_at,
        }
    }
}

/// POST /checkout: reconcile the cart against the backend and clear it.
///
/// Always 200; per-line failures are reported in the body and as toasts.
pub async fn run<C, I>(State(state): State<Arc<AppState<C, I>>>) -> Json<CheckoutResponse>
where
    C: CatalogService + 'static,
    I: InventoryService + 'static,
{
    let report = state.reconciler.checkout(&state.cart).await;
    Json(report.into())
}
