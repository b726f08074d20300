//! HTTP API server for the kiosk point of sale.
//!
//! Exposes the catalog, cart mutations, checkout, toast notifications and
//! the PDF invoice export, with structured logging (tracing) and
//! Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use checkout::{CatalogService, InventoryService};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use config::{Config, LogFormat};
pub use error::ApiError;
pub use state::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<C, I>(state: Arc<AppState<C, I>>, metrics_handle: PrometheusHandle) -> Router
where
    C: CatalogService + 'static,
    I: InventoryService + 'static,
{
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/catalog", get(routes::catalog::list::<C, I>))
        .route("/catalog/refresh", post(routes::catalog::refresh::<C, I>))
        .route("/cart", get(routes::cart::get::<C, I>))
        .route(
            "/cart/items/{id}",
            post(routes::cart::add::<C, I>).delete(routes::cart::remove::<C, I>),
        )
        .route(
            "/cart/items/{id}/decrement",
            post(routes::cart::decrement::<C, I>),
        )
        .route("/checkout", post(routes::checkout::run::<C, I>))
        .route("/notifications", get(routes::notifications::drain::<C, I>))
        .route("/session", get(routes::session::current))
        .route("/invoice.pdf", get(routes::invoice::export::<C, I>))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates application state and loads the catalog once.
pub async fn create_state<C, I>(catalog_service: C, inventory: I) -> Arc<AppState<C, I>>
where
    C: CatalogService + 'static,
    I: InventoryService + 'static,
{
    let state = AppState::new(catalog_service, inventory);
    state.refresh_catalog().await;
    Arc::new(state)
}
