//! Checkout error types.

use common::ProductId;
use thiserror::Error;

/// Errors raised by the checkout collaborators.
///
/// None of these abort a reconciliation run; they are turned into toasts,
/// log lines and per-line outcomes at the call site.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The product catalog could not be listed.
    #[error("Catalog fetch failed: {0}")]
    CatalogFetch(String),

    /// A single inventory update was rejected.
    #[error("Inventory update failed for product {product_id}: {reason}")]
    InventoryUpdate {
        product_id: ProductId,
        reason: String,
    },

    /// Transport-level HTTP failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("Backend error: {status} - {message}")]
    Backend { status: u16, message: String },

    /// A backend payload could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),
}

/// Convenience type alias for checkout results.
pub type Result<T> = std::result::Result<T, CheckoutError>;
