//! Per-run checkout results.

use cart::Money;
use chrono::{DateTime, Utc};
use common::{CheckoutId, ProductId};
use serde::Serialize;

use crate::invoice::Invoice;

/// What happened to one line's inventory update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LineStatus {
    /// The backend accepted the new on-hand quantity.
    Committed,
    /// The update was rejected or never reached the backend.
    Failed { reason: String },
}

/// Outcome of reconciling one cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineOutcome {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: u32,
    /// On-hand quantity that was sent to the backend.
    pub remaining_quantity: i64,
    #[serde(flatten)]
    pub status: LineStatus,
}

impl LineOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self.status, LineStatus::Committed)
    }
}

/// Result of one checkout run.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutReport {
    pub checkout_id: CheckoutId,
    pub invoice: Invoice,
    /// One entry per cart line, in cart order.
    pub lines: Vec<LineOutcome>,
    pub total_price: Money,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl CheckoutReport {
    /// Number of update requests issued.
    pub fn request_count(&self) -> usize {
        self.lines.len()
    }

    pub fn committed_count(&self) -> usize {
        self.lines.iter().filter(|l| l.is_committed()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.lines.len() - self.committed_count()
    }
}
