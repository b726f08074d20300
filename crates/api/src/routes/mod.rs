pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod health;
pub mod invoice;
pub mod metrics;
pub mod notifications;
pub mod session;

use common::ProductId;

use crate::error::ApiError;

/// Parses a product id path segment.
pub(crate) fn parse_product_id(raw: &str) -> Result<ProductId, ApiError> {
    raw.parse()
        .map_err(|e| ApiError::BadRequest(format!("Invalid product id {raw:?}: {e}")))
}
