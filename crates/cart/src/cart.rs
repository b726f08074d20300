//! Cart engine.

use common::ProductId;
use serde::{Deserialize, Serialize};

use crate::value_objects::{CartLine, Money, Product};

/// What a cart mutation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartChange {
    /// A new line was appended with quantity 1.
    LineAdded,
    /// An existing line's quantity changed.
    QuantityChanged { quantity: u32 },
    /// A line was removed.
    LineRemoved,
    /// Every line was removed.
    Cleared,
    /// The operation was a no-op.
    Unchanged,
}

impl CartChange {
    /// Returns true if the cart differs from before the operation.
    pub fn is_change(&self) -> bool {
        !matches!(self, CartChange::Unchanged)
    }
}

/// Read-only view of the cart at a point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSnapshot {
    pub lines: Vec<CartLine>,
    pub total_price: Money,
}

impl CartSnapshot {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// The cashier's in-progress selection.
///
/// Lines are kept in first-add order with at most one line per product.
/// The total is recomputed after every mutation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Cart {
    lines: Vec<CartLine>,
    total_price: Money,
}

// Query methods
impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the lines in cart order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Returns the line for a product, if present.
    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id() == product_id)
    }

    /// Returns the number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Returns the cart total.
    pub fn total_price(&self) -> Money {
        self.total_price
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns a copy of the current lines and total.
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            lines: self.lines.clone(),
            total_price: self.total_price,
        }
    }
}

// Mutations
impl Cart {
    /// Adds one unit of a product.
    ///
    /// Merges into the existing line if there is one; otherwise appends a new
    /// line holding this product snapshot.
    pub fn add_one(&mut self, product: Product) -> CartChange {
        let change = match self.position(product.id) {
            Some(index) => {
                let line = &mut self.lines[index];
                line.quantity += 1;
                CartChange::QuantityChanged {
                    quantity: line.quantity,
                }
            }
            None => {
                self.lines.push(CartLine::new(product));
                CartChange::LineAdded
            }
        };

        self.recompute_total();
        change
    }

    /// Removes one unit of a product, dropping the line when it reaches zero.
    pub fn decrement_one(&mut self, product_id: ProductId) -> CartChange {
        let Some(index) = self.position(product_id) else {
            return CartChange::Unchanged;
        };

        let line = &mut self.lines[index];
        line.quantity -= 1;
        let change = if line.quantity == 0 {
            self.lines.remove(index);
            CartChange::LineRemoved
        } else {
            CartChange::QuantityChanged {
                quantity: line.quantity,
            }
        };

        self.recompute_total();
        change
    }

    /// Removes a product's line regardless of quantity.
    pub fn remove_all(&mut self, product_id: ProductId) -> CartChange {
        let Some(index) = self.position(product_id) else {
            return CartChange::Unchanged;
        };

        self.lines.remove(index);
        self.recompute_total();
        CartChange::LineRemoved
    }

    /// Removes every line.
    pub fn clear(&mut self) -> CartChange {
        if self.lines.is_empty() {
            return CartChange::Unchanged;
        }

        self.lines.clear();
        self.recompute_total();
        CartChange::Cleared
    }

    fn position(&self, product_id: ProductId) -> Option<usize> {
        self.lines
            .iter()
            .position(|line| line.product_id() == product_id)
    }

    fn recompute_total(&mut self) {
        self.total_price = self.lines.iter().map(CartLine::total_price).sum();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, cents: i64) -> Product {
        Product::new(
            id,
            format!("Product {id}"),
            "Test product",
            "Vanilla",
            Money::from_cents(cents),
            20,
        )
    }

    fn expected_total(cart: &Cart) -> Money {
        cart.lines()
            .iter()
            .map(|line| line.unit_price().multiply(line.quantity))
            .sum()
    }

    #[test]
    fn test_add_new_product_creates_line() {
        let mut cart = Cart::new();
        let change = cart.add_one(product(1, 500));

        assert_eq!(change, CartChange::LineAdded);
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.line(ProductId::new(1)).unwrap().quantity, 1);
        assert_eq!(cart.total_price().cents(), 500);
    }

    #[test]
    fn test_add_same_product_twice_merges() {
        let mut cart = Cart::new();
        cart.add_one(product(1, 500));
        let change = cart.add_one(product(1, 500));

        assert_eq!(change, CartChange::QuantityChanged { quantity: 2 });
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.line(ProductId::new(1)).unwrap().quantity, 2);
        assert_eq!(cart.total_price().cents(), 1000);
    }

    #[test]
    fn test_price_is_frozen_at_first_add() {
        let mut cart = Cart::new();
        cart.add_one(product(1, 500));
        cart.add_one(product(1, 900));

        let line = cart.line(ProductId::new(1)).unwrap();
        assert_eq!(line.unit_price().cents(), 500);
        assert_eq!(cart.total_price().cents(), 1000);
    }

    #[test]
    fn test_lines_keep_first_add_order() {
        let mut cart = Cart::new();
        cart.add_one(product(3, 100));
        cart.add_one(product(1, 100));
        cart.add_one(product(3, 100));

        let ids: Vec<_> = cart.lines().iter().map(|l| l.product_id().get()).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_decrement_quantity_one_removes_line() {
        let mut cart = Cart::new();
        cart.add_one(product(1, 500));

        let change = cart.decrement_one(ProductId::new(1));

        assert_eq!(change, CartChange::LineRemoved);
        assert!(cart.is_empty());
        assert!(cart.total_price().is_zero());
    }

    #[test]
    fn test_decrement_keeps_line_above_zero() {
        let mut cart = Cart::new();
        cart.add_one(product(1, 500));
        cart.add_one(product(1, 500));

        let change = cart.decrement_one(ProductId::new(1));

        assert_eq!(change, CartChange::QuantityChanged { quantity: 1 });
        assert_eq!(cart.total_price().cents(), 500);
    }

    #[test]
    fn test_decrement_absent_product_is_noop() {
        let mut cart = Cart::new();
        cart.add_one(product(1, 500));

        let change = cart.decrement_one(ProductId::new(99));

        assert_eq!(change, CartChange::Unchanged);
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_price().cents(), 500);
    }

    #[test]
    fn test_remove_all_drops_whole_line() {
        let mut cart = Cart::new();
        cart.add_one(product(1, 500));
        cart.add_one(product(1, 500));
        cart.add_one(product(2, 300));

        let change = cart.remove_all(ProductId::new(1));

        assert_eq!(change, CartChange::LineRemoved);
        assert!(cart.line(ProductId::new(1)).is_none());
        assert_eq!(cart.total_price().cents(), 300);
    }

    #[test]
    fn test_remove_all_absent_product_is_noop() {
        let mut cart = Cart::new();
        assert_eq!(cart.remove_all(ProductId::new(5)), CartChange::Unchanged);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_one(product(1, 500));
        cart.add_one(product(2, 300));

        assert_eq!(cart.clear(), CartChange::Cleared);
        assert!(cart.is_empty());
        assert!(cart.total_price().is_zero());
        assert_eq!(cart.clear(), CartChange::Unchanged);
    }

    #[test]
    fn test_total_tracks_every_mutation_sequence() {
        let mut cart = Cart::new();
        // Deterministic pseudo-random walk over add/decrement/remove_all.
        let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
        for _ in 0..500 {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            let id = (seed % 5) as i64;
            match (seed >> 8) % 3 {
                0 => {
                    cart.add_one(product(id, 100 + id * 37));
                }
                1 => {
                    cart.decrement_one(ProductId::new(id));
                }
                _ => {
                    cart.remove_all(ProductId::new(id));
                }
            }

            assert_eq!(cart.total_price(), expected_total(&cart));
            assert!(cart.lines().iter().all(|line| line.quantity > 0));
            let mut ids: Vec<_> = cart.lines().iter().map(|l| l.product_id()).collect();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), cart.line_count());
        }
    }

    #[test]
    fn test_snapshot_copies_lines_and_total() {
        let mut cart = Cart::new();
        cart.add_one(product(1, 250));
        let snapshot = cart.snapshot();
        cart.add_one(product(1, 250));

        assert_eq!(snapshot.lines.len(), 1);
        assert_eq!(snapshot.lines[0].quantity, 1);
        assert_eq!(snapshot.total_price.cents(), 250);
    }

    #[test]
    fn test_serialized_cart_reads_back_as_snapshot() {
        let mut cart = Cart::new();
        cart.add_one(product(1, 250));
        cart.add_one(product(1, 250));
        cart.add_one(product(2, 100));

        let json = serde_json::to_value(&cart).unwrap();
        let restored: CartSnapshot = serde_json::from_value(json).unwrap();

        assert_eq!(restored, cart.snapshot());
        assert_eq!(restored.total_price, expected_total(&cart));
    }

    #[test]
    fn test_total_quantity() {
        let mut cart = Cart::new();
        cart.add_one(product(1, 100));
        cart.add_one(product(1, 100));
        cart.add_one(product(2, 100));
        assert_eq!(cart.total_quantity(), 3);
    }
}
