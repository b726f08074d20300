//! Observable cart store.

use common::ProductId;
use tokio::sync::{Mutex, MutexGuard, watch};

use crate::cart::{Cart, CartChange, CartSnapshot};
use crate::value_objects::Product;

/// Shared cart with change notification.
///
/// Every mutation that changes the cart publishes a fresh [`CartSnapshot`]
/// to subscribers. No-op mutations publish nothing.
pub struct CartStore {
    cart: Mutex<Cart>,
    changes: watch::Sender<CartSnapshot>,
}

impl CartStore {
    /// Creates a store holding an empty cart.
    pub fn new() -> Self {
        let (changes, _) = watch::channel(CartSnapshot::default());
        Self {
            cart: Mutex::new(Cart::new()),
            changes,
        }
    }

    /// Subscribes to cart snapshots.
    pub fn subscribe(&self) -> watch::Receiver<CartSnapshot> {
        self.changes.subscribe()
    }

    /// Returns the current cart contents.
    pub async fn snapshot(&self) -> CartSnapshot {
        self.cart.lock().await.snapshot()
    }

    /// Adds one unit of a product.
    #[tracing::instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn add_one(&self, product: Product) -> CartSnapshot {
        let mut cart = self.cart.lock().await;
        let change = cart.add_one(product);
        self.publish(&cart, change)
    }

    /// Removes one unit of a product.
    #[tracing::instrument(skip(self))]
    pub async fn decrement_one(&self, product_id: ProductId) -> CartSnapshot {
        let mut cart = self.cart.lock().await;
        let change = cart.decrement_one(product_id);
        self.publish(&cart, change)
    }

    /// Removes a product's whole line.
    #[tracing::instrument(skip(self))]
    pub async fn remove_all(&self, product_id: ProductId) -> CartSnapshot {
        let mut cart = self.cart.lock().await;
        let change = cart.remove_all(product_id);
        self.publish(&cart, change)
    }

    /// Takes exclusive hold of the cart for a checkout run.
    ///
    /// Other mutations wait until the lease is dropped.
    pub async fn begin_checkout(&self) -> CheckoutLease<'_> {
        CheckoutLease {
            cart: self.cart.lock().await,
            changes: &self.changes,
        }
    }

    fn publish(&self, cart: &Cart, change: CartChange) -> CartSnapshot {
        let snapshot = cart.snapshot();
        if change.is_change() {
            tracing::debug!(?change, total = %snapshot.total_price, "cart changed");
            self.changes.send_replace(snapshot.clone());
        }
        snapshot
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Exclusive access to the cart for the duration of a checkout.
pub struct CheckoutLease<'a> {
    cart: MutexGuard<'a, Cart>,
    changes: &'a watch::Sender<CartSnapshot>,
}

impl CheckoutLease<'_> {
    /// Returns the cart contents being checked out.
    pub fn snapshot(&self) -> CartSnapshot {
        self.cart.snapshot()
    }

    /// Empties the cart and notifies subscribers.
    pub fn clear(&mut self) {
        if self.cart.clear().is_change() {
            self.changes.send_replace(self.cart.snapshot());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::value_objects::Money;

    fn product(id: i64) -> Product {
        Product::new(id, "Shake", "Protein shake", "Chocolate", Money::from_dollars(5), 10)
    }

    #[tokio::test]
    async fn test_mutations_publish_snapshots() {
        let store = CartStore::new();
        let mut rx = store.subscribe();

        store.add_one(product(1)).await;
        assert!(rx.has_changed().unwrap());
        let seen = rx.borrow_and_update().clone();
        assert_eq!(seen.lines.len(), 1);
        assert_eq!(seen.total_price.cents(), 500);

        store.add_one(product(1)).await;
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().total_price.cents(), 1000);
    }

    #[tokio::test]
    async fn test_noop_mutations_do_not_publish() {
        let store = CartStore::new();
        let mut rx = store.subscribe();

        store.decrement_one(ProductId::new(1)).await;
        store.remove_all(ProductId::new(1)).await;

        assert!(!rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_empty());
    }

    #[tokio::test]
    async fn test_checkout_lease_clear_publishes_empty_cart() {
        let store = CartStore::new();
        store.add_one(product(1)).await;
        let mut rx = store.subscribe();
        rx.borrow_and_update();

        {
            let mut lease = store.begin_checkout().await;
            assert_eq!(lease.snapshot().lines.len(), 1);
            lease.clear();
        }

        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_empty());
        assert!(store.snapshot().await.is_empty());
    }

    #[tokio::test]
    async fn test_mutation_waits_for_checkout_lease() {
        let store = Arc::new(CartStore::new());
        store.add_one(product(1)).await;

        let mut lease = store.begin_checkout().await;

        let writer = {
            let store = store.clone();
            tokio::spawn(async move { store.add_one(product(2)).await })
        };

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!writer.is_finished());

        lease.clear();
        drop(lease);

        let after = writer.await.unwrap();
        assert_eq!(after.lines.len(), 1);
        assert_eq!(after.lines[0].product_id(), ProductId::new(2));
    }
}
