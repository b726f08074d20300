//! Checkout reconciler: drains the cart against the inventory backend.

use cart::{CartSnapshot, CartStore};
use chrono::Utc;
use common::CheckoutId;

use crate::invoice::{Invoice, InvoiceBuilder};
use crate::report::{CheckoutReport, LineOutcome, LineStatus};
use crate::services::inventory::{InventoryService, ProductUpdate};
use crate::services::notifier::{Notifier, Toast};

/// Commits cart quantities to the inventory backend and clears the cart.
///
/// Updates are sent one line at a time, in cart order. Each line stands on
/// its own: a rejected update raises a failure toast and the run moves on.
/// The cart is emptied once every line has been attempted, whatever the
/// individual outcomes were.
pub struct Reconciler<I, N>
where
    I: InventoryService,
    N: Notifier,
{
    inventory: I,
    notifier: N,
}

impl<I, N> Reconciler<I, N>
where
    I: InventoryService,
    N: Notifier,
{
    /// Creates a new reconciler.
    pub fn new(inventory: I, notifier: N) -> Self {
        Self {
            inventory,
            notifier,
        }
    }

    /// Runs a checkout over the store's cart.
    ///
    /// Holds the cart exclusively for the whole run; concurrent cart
    /// mutations wait and then apply to the emptied cart.
    #[tracing::instrument(skip(self, store), fields(checkout_id))]
    pub async fn checkout(&self, store: &CartStore) -> CheckoutReport {
        metrics::counter!("checkout_runs_total").increment(1);
        let run_start = std::time::Instant::now();
        let started_at = Utc::now();

        let checkout_id = CheckoutId::new();
        tracing::Span::current().record("checkout_id", tracing::field::display(checkout_id));

        let mut lease = store.begin_checkout().await;
        let snapshot = lease.snapshot();
        tracing::info!(
            lines = snapshot.lines.len(),
            total = %snapshot.total_price,
            "checkout started"
        );

        let (invoice, lines) = self.reconcile(&snapshot).await;

        lease.clear();
        drop(lease);

        tracing::info!(%invoice, "invoice generated");

        let report = CheckoutReport {
            checkout_id,
            invoice,
            lines,
            total_price: snapshot.total_price,
            started_at,
            finished_at: Utc::now(),
        };

        let duration = run_start.elapsed().as_secs_f64();
        metrics::histogram!("checkout_duration_seconds").record(duration);
        tracing::info!(
            committed = report.committed_count(),
            failed = report.failed_count(),
            duration,
            "checkout finished"
        );

        report
    }

    /// Sends one update per line and builds the invoice text.
    async fn reconcile(&self, snapshot: &CartSnapshot) -> (Invoice, Vec<LineOutcome>) {
        let mut invoice = InvoiceBuilder::new();
        let mut outcomes = Vec::with_capacity(snapshot.lines.len());

        for line in &snapshot.lines {
            invoice.push_line(line);

            let update = ProductUpdate::for_sold_line(line);
            let status = match self.inventory.update_product(&update).await {
                Ok(()) => {
                    metrics::counter!("inventory_updates_total", "outcome" => "committed")
                        .increment(1);
                    tracing::info!(
                        product_id = %update.product_id,
                        name = %update.name,
                        remaining = update.quantity_available,
                        "quantity updated"
                    );
                    self.notifier.notify(Toast::order_completed(update.product_id));
                    LineStatus::Committed
                }
                Err(e) => {
                    metrics::counter!("inventory_updates_total", "outcome" => "failed")
                        .increment(1);
                    tracing::error!(
                        product_id = %update.product_id,
                        error = %e,
                        "error updating quantity"
                    );
                    self.notifier.notify(Toast::order_failed(update.product_id));
                    LineStatus::Failed {
                        reason: e.to_string(),
                    }
                }
            };

            outcomes.push(LineOutcome {
                product_id: update.product_id,
                name: update.name,
                quantity: line.quantity,
                remaining_quantity: update.quantity_available,
                status,
            });
        }

        (invoice.finish(snapshot.total_price), outcomes)
    }
}
