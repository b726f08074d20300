//! Backend collaborators used by checkout, with in-memory implementations.

pub mod catalog;
pub mod http;
pub mod inventory;
pub mod notifier;

pub use catalog::{CatalogService, InMemoryCatalogService, load_catalog};
pub use http::{BackendClient, ProductRecord};
pub use inventory::{InMemoryInventoryService, InventoryService, ProductUpdate};
pub use notifier::{Notifier, Toast, ToastLevel, ToastQueue};
