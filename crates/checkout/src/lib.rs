//! Checkout reconciliation for the kiosk POS.
//!
//! A checkout walks the cart in order and, for every line:
//! 1. Computes the new on-hand quantity for the product
//! 2. Sends one inventory update to the backend
//! 3. Appends the line to the invoice text and raises a toast
//!
//! Lines are independent: a failed update does not stop the run, and the
//! cart is cleared once every line has been attempted.

pub mod error;
pub mod invoice;
pub mod reconciler;
pub mod report;
pub mod services;

pub use error::{CheckoutError, Result};
pub use invoice::{Invoice, InvoiceBuilder};
pub use reconciler::Reconciler;
pub use report::{CheckoutReport, LineOutcome, LineStatus};
pub use services::{
    BackendClient, CatalogService, InMemoryCatalogService, InMemoryInventoryService,
    InventoryService, Notifier, ProductRecord, ProductUpdate, Toast, ToastLevel, ToastQueue,
    load_catalog,
};
