//! Inventory service trait and in-memory implementation.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use cart::{CartLine, Money};
use common::ProductId;
use serde::Serialize;

use crate::error::CheckoutError;

/// Full product record sent to the backend with a new on-hand quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductUpdate {
    pub product_id: ProductId,
    pub name: String,
    pub description: String,
    pub flavor: String,
    pub price: Money,
    /// On-hand quantity after this sale. Negative when the sale exceeded
    /// the stock captured at add time.
    pub quantity_available: i64,
}

impl ProductUpdate {
    /// Builds the update for a sold cart line.
    ///
    /// Uses the on-hand quantity captured when the line was added. An
    /// oversell is sent as is, so the backend sees the shortfall.
    pub fn for_sold_line(line: &CartLine) -> Self {
        let product = &line.product;
        let remaining = i64::from(product.quantity_available) - i64::from(line.quantity);
        if remaining < 0 {
            tracing::warn!(
                product_id = %product.id,
                on_hand = product.quantity_available,
                sold = line.quantity,
                "cart quantity exceeds stock on hand"
            );
        }

        Self {
            product_id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            flavor: product.flavor.clone(),
            price: product.price,
            quantity_available: remaining,
        }
    }
}

/// Writes on-hand quantities back to the inventory backend.
#[async_trait]
pub trait InventoryService: Send + Sync {
    /// Replaces the product record, including its on-hand quantity.
    async fn update_product(&self, update: &ProductUpdate) -> Result<(), CheckoutError>;
}

#[async_trait]
impl<T: InventoryService + ?Sized> InventoryService for Arc<T> {
    async fn update_product(&self, update: &ProductUpdate) -> Result<(), CheckoutError> {
        (**self).update_product(update).await
    }
}

#[derive(Debug, Default)]
struct InMemoryInventoryState {
    on_hand: HashMap<ProductId, i64>,
    attempts: Vec<ProductUpdate>,
    failing: HashSet<ProductId>,
    fail_on_update: bool,
}

/// In-memory inventory service for testing.
///
/// Records every update attempt in order, including rejected ones.
#[derive(Debug, Clone, Default)]
pub struct InMemoryInventoryService {
    state: Arc<RwLock<InMemoryInventoryState>>,
}

impl InMemoryInventoryService {
    /// Creates a new in-memory inventory service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the service to fail every update.
    pub fn set_fail_on_update(&self, fail: bool) {
        self.write().fail_on_update = fail;
    }

    /// Configures the service to fail updates for one product.
    pub fn fail_for(&self, product_id: ProductId) {
        self.write().failing.insert(product_id);
    }

    /// Returns every update attempt, in the order received.
    pub fn attempts(&self) -> Vec<ProductUpdate> {
        self.read().attempts.clone()
    }

    /// Returns the number of update attempts.
    pub fn attempt_count(&self) -> usize {
        self.read().attempts.len()
    }

    /// Returns the last accepted on-hand quantity for a product.
    pub fn on_hand(&self, product_id: ProductId) -> Option<i64> {
        self.read().on_hand.get(&product_id).copied()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, InMemoryInventoryState> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, InMemoryInventoryState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl InventoryService for InMemoryInventoryService {
    async fn update_product(&self, update: &ProductUpdate) -> Result<(), CheckoutError> {
        let mut state = self.write();
        state.attempts.push(update.clone());

        if state.fail_on_update || state.failing.contains(&update.product_id) {
            return Err(CheckoutError::InventoryUpdate {
                product_id: update.product_id,
                reason: "Update rejected".to_string(),
            });
        }

        state
            .on_hand
            .insert(update.product_id, update.quantity_available);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cart::{Cart, Product};

    fn line(on_hand: u32, quantity: u32) -> CartLine {
        let mut cart = Cart::new();
        for _ in 0..quantity {
            cart.add_one(Product::new(
                4,
                "Bar",
                "Protein bar",
                "Peanut",
                Money::from_cents(250),
                on_hand,
            ));
        }
        cart.lines()[0].clone()
    }

    #[test]
    fn test_update_for_sold_line_subtracts_quantity() {
        let update = ProductUpdate::for_sold_line(&line(10, 3));
        assert_eq!(update.product_id, ProductId::new(4));
        assert_eq!(update.quantity_available, 7);
        assert_eq!(update.name, "Bar");
        assert_eq!(update.flavor, "Peanut");
        assert_eq!(update.price.cents(), 250);
    }

    #[test]
    fn test_update_for_oversold_line_goes_negative() {
        let update = ProductUpdate::for_sold_line(&line(1, 3));
        assert_eq!(update.quantity_available, -2);
    }

    #[tokio::test]
    async fn test_update_records_attempt_and_on_hand() {
        let service = InMemoryInventoryService::new();
        let update = ProductUpdate::for_sold_line(&line(10, 2));

        service.update_product(&update).await.unwrap();

        assert_eq!(service.attempt_count(), 1);
        assert_eq!(service.on_hand(ProductId::new(4)), Some(8));
    }

    #[tokio::test]
    async fn test_failing_product_is_recorded_but_not_applied() {
        let service = InMemoryInventoryService::new();
        service.fail_for(ProductId::new(4));
        let update = ProductUpdate::for_sold_line(&line(10, 2));

        let result = service.update_product(&update).await;

        assert!(matches!(
            result,
            Err(CheckoutError::InventoryUpdate { .. })
        ));
        assert_eq!(service.attempt_count(), 1);
        assert_eq!(service.on_hand(ProductId::new(4)), None);
    }
}
