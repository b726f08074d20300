//! Plain-text invoice produced by a checkout run.

use cart::{CartLine, Money};
use serde::Serialize;

/// Finished invoice text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Invoice(String);

impl Invoice {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Invoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Accumulates invoice text one line item at a time.
#[derive(Debug, Clone)]
pub struct InvoiceBuilder {
    text: String,
}

impl InvoiceBuilder {
    pub fn new() -> Self {
        Self {
            text: String::from("Invoice:\n\n"),
        }
    }

    /// Appends the detail block for one cart line.
    pub fn push_line(&mut self, line: &CartLine) {
        let block = format!(
            "Item:\nName: {}\nPrice per unit: {}$\nQuantity: {}\nTotal price for this item: {}$\n\n",
            line.product.name,
            line.unit_price().plain(),
            line.quantity,
            line.total_price().plain(),
        );
        self.text.push_str(&block);
    }

    /// Appends the grand total and returns the invoice.
    pub fn finish(mut self, total: Money) -> Invoice {
        self.text.push_str(&format!("Total Price: {}$", total.plain()));
        Invoice(self.text)
    }
}

impl Default for InvoiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}
