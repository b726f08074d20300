//! Value objects for the cart domain.

use common::ProductId;
use serde::{Deserialize, Serialize};

/// Money amount represented in cents to avoid floating point issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money {
    /// Amount in cents (e.g., 1000 = $10.00)
    cents: i64,
}

impl Money {
    /// Creates a new Money amount from cents.
    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Creates a new Money amount from a whole dollar value.
    pub fn from_dollars(dollars: i64) -> Self {
        Self {
            cents: dollars * 100,
        }
    }

    /// Converts a decimal amount (as sent by the backend) to cents,
    /// rounding to the nearest cent.
    pub fn from_major(amount: f64) -> Self {
        Self {
            cents: (amount * 100.0).round() as i64,
        }
    }

    /// Returns the amount as a decimal number of dollars.
    pub fn to_major(&self) -> f64 {
        self.cents as f64 / 100.0
    }

    /// Returns zero money.
    pub fn zero() -> Self {
        Self { cents: 0 }
    }

    /// Returns the amount in cents.
    pub fn cents(&self) -> i64 {
        self.cents
    }

    /// Returns the dollar portion (whole number).
    pub fn dollars(&self) -> i64 {
        self.cents / 100
    }

    /// Returns the cents portion (remainder after dollars).
    pub fn cents_part(&self) -> i64 {
        self.cents.abs() % 100
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Multiplies by a quantity.
    pub fn multiply(&self, quantity: u32) -> Money {
        Money {
            cents: self.cents * i64::from(quantity),
        }
    }

    /// Formats the amount as a bare decimal without trailing zeros,
    /// the way receipts print it: `13`, `4.99`, `12.5`.
    pub fn plain(&self) -> String {
        let sign = if self.cents < 0 { "-" } else { "" };
        let whole = self.cents.abs() / 100;
        match self.cents_part() {
            0 => format!("{sign}{whole}"),
            part if part % 10 == 0 => format!("{sign}{whole}.{}", part / 10),
            part => format!("{sign}{whole}.{part:02}"),
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.cents < 0 {
            write!(f, "-${}.{:02}", self.dollars().abs(), self.cents_part())
        } else {
            write!(f, "${}.{:02}", self.dollars(), self.cents_part())
        }
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Self::Output {
        Money {
            cents: self.cents + rhs.cents,
        }
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// A product as listed in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Backend identity.
    pub id: ProductId,

    /// Display name.
    pub name: String,

    pub description: String,

    pub flavor: String,

    /// Unit price.
    pub price: Money,

    /// Units on hand, as last reported by the backend.
    pub quantity_available: u32,
}

impl Product {
    /// Creates a new product.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        description: impl Into<String>,
        flavor: impl Into<String>,
        price: Money,
        quantity_available: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            flavor: flavor.into(),
            price,
            quantity_available,
        }
    }
}

/// One product entry in the cart.
///
/// The product is a snapshot taken when the line was created; later catalog
/// refreshes do not change its price or description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,

    /// Always at least one while the line exists.
    pub quantity: u32,
}

impl CartLine {
    pub(crate) fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Returns the product identity of this line.
    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    /// Returns the unit price frozen at add time.
    pub fn unit_price(&self) -> Money {
        self.product.price
    }

    /// Returns the total price for this line (quantity * unit price).
    pub fn total_price(&self) -> Money {
        self.product.price.multiply(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_cents() {
        let money = Money::from_cents(1234);
        assert_eq!(money.cents(), 1234);
        assert_eq!(money.dollars(), 12);
        assert_eq!(money.cents_part(), 34);
    }

    #[test]
    fn test_money_from_major_rounds_to_cents() {
        assert_eq!(Money::from_major(4.99).cents(), 499);
        assert_eq!(Money::from_major(0.1 + 0.2).cents(), 30);
        assert_eq!(Money::from_major(5.0).cents(), 500);
        assert!((Money::from_cents(1250).to_major() - 12.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::from_cents(1234).to_string(), "$12.34");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
        assert_eq!(Money::from_cents(-1234).to_string(), "-$12.34");
    }

    #[test]
    fn test_money_plain() {
        assert_eq!(Money::from_dollars(13).plain(), "13");
        assert_eq!(Money::from_cents(499).plain(), "4.99");
        assert_eq!(Money::from_cents(1250).plain(), "12.5");
        assert_eq!(Money::from_cents(5).plain(), "0.05");
        assert_eq!(Money::zero().plain(), "0");
        assert_eq!(Money::from_cents(-150).plain(), "-1.5");
    }

    #[test]
    fn test_money_sum() {
        let total: Money = [Money::from_cents(100), Money::from_cents(250)]
            .into_iter()
            .sum();
        assert_eq!(total.cents(), 350);
    }

    #[test]
    fn test_line_total_price() {
        let product = Product::new(1, "Mango", "Shake", "Mango", Money::from_dollars(5), 10);
        let mut line = CartLine::new(product);
        line.quantity = 3;
        assert_eq!(line.total_price(), Money::from_dollars(15));
        assert_eq!(line.product_id(), ProductId::new(1));
    }

    #[test]
    fn test_product_serialization() {
        let product = Product::new(3, "Berry", "Protein bar", "Berry", Money::from_cents(399), 4);
        let json = serde_json::to_string(&product).unwrap();
        let deserialized: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(product, deserialized);
    }
}
