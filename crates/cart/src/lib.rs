//! Cart engine for the kiosk POS.
//!
//! This crate provides:
//! - Value objects (`Money`, `Product`, `CartLine`)
//! - The `Cart` engine with merge-on-add and remove-at-zero semantics
//! - `CartStore`, an observable wrapper that publishes snapshots on change
//!   and hands out an exclusive lease for checkout

pub mod cart;
pub mod store;
pub mod value_objects;

pub use cart::{Cart, CartChange, CartSnapshot};
pub use common::ProductId;
pub use store::{CartStore, CheckoutLease};
pub use value_objects::{CartLine, Money, Product};
