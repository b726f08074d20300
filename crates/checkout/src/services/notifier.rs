//! Transient cashier notifications.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use common::ProductId;
use serde::Serialize;

/// Message shown when a line's inventory update succeeds.
pub const ORDER_COMPLETED: &str = "Order Completed";

/// Message shown when a line's inventory update fails.
pub const ORDER_FAILED: &str = "Order Failed";

const DEFAULT_CAPACITY: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastLevel {
    Success,
    Error,
}

/// A short-lived notification for the cashier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
    pub product_id: Option<ProductId>,
}

impl Toast {
    pub fn order_completed(product_id: ProductId) -> Self {
        Self {
            level: ToastLevel::Success,
            message: ORDER_COMPLETED.to_string(),
            product_id: Some(product_id),
        }
    }

    pub fn order_failed(product_id: ProductId) -> Self {
        Self {
            level: ToastLevel::Error,
            message: ORDER_FAILED.to_string(),
            product_id: Some(product_id),
        }
    }
}

/// Delivers toasts to whatever is showing them.
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}

impl<T: Notifier + ?Sized> Notifier for Arc<T> {
    fn notify(&self, toast: Toast) {
        (**self).notify(toast);
    }
}

/// Bounded queue of pending toasts.
///
/// The front end drains it; when full, the oldest toast is dropped.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    pending: Arc<Mutex<VecDeque<Toast>>>,
    capacity: usize,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pending: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity: capacity.max(1),
        }
    }

    /// Removes and returns every pending toast, oldest first.
    pub fn drain(&self) -> Vec<Toast> {
        self.pending
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .drain(..)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.pending.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, toast: Toast) {
        match toast.level {
            ToastLevel::Success => {
                tracing::info!(message = %toast.message, product_id = ?toast.product_id, "toast")
            }
            ToastLevel::Error => {
                tracing::warn!(message = %toast.message, product_id = ?toast.product_id, "toast")
            }
        }

        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        if pending.len() == self.capacity {
            pending.pop_front();
        }
        pending.push_back(toast);
    }
}
