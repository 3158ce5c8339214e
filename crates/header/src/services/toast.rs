//! Transient notifications

use log::info;
use std::sync::{PoisonError, RwLock};

/// A toast to display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastRequest {
    pub open: bool,
    pub message: String,
    /// Secondary line shown under the message (may be empty)
    pub extra: String,
}

impl ToastRequest {
    /// An open toast with no secondary line
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            open: true,
            message: message.into(),
            extra: String::new(),
        }
    }
}

/// Displays toasts; no acknowledgement is expected
pub trait ToastService: Send + Sync {
    fn show(&self, toast: ToastRequest);
}

/// Toast service that logs and keeps every request
#[derive(Debug, Default)]
pub struct ToastLog {
    shown: RwLock<Vec<ToastRequest>>,
}

impl ToastLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// All toasts shown so far, oldest first
    pub fn shown(&self) -> Vec<ToastRequest> {
        self.shown
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ToastService for ToastLog {
    fn show(&self, toast: ToastRequest) {
        info!("Toast: {}", toast.message);
        self.shown
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(toast);
    }
}
