//! Deferred "install app" prompt capture
//!
//! The host fires a one-time signal when the app becomes installable. The
//! signal carries a handle whose `prompt()` shows the platform dialog and
//! later reports the user's choice.

use anyhow::Result;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tokio::sync::oneshot;

/// How the user answered the install dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallOutcome {
    Accepted,
    Dismissed,
}

/// Resolved value of the install dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserChoice {
    pub outcome: InstallOutcome,
    /// Platform the app was installed on, when the host reports one
    pub platform: Option<String>,
}

impl UserChoice {
    pub fn accepted() -> Self {
        Self {
            outcome: InstallOutcome::Accepted,
            platform: None,
        }
    }

    pub fn dismissed() -> Self {
        Self {
            outcome: InstallOutcome::Dismissed,
            platform: None,
        }
    }
}

/// Host handle behind a deferred install signal
pub trait DeferredInstallPrompt: Send + Sync {
    /// Show the install dialog; the receiver resolves with the user's choice
    fn prompt(&self) -> Result<oneshot::Receiver<UserChoice>>;
}

/// The one-time "app install available" signal
pub struct InstallPromptEvent {
    handle: Arc<dyn DeferredInstallPrompt>,
    default_prevented: bool,
}

impl InstallPromptEvent {
    pub fn new(handle: Arc<dyn DeferredInstallPrompt>) -> Self {
        Self {
            handle,
            default_prevented: false,
        }
    }

    /// Stop the host from showing its own install banner
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn handle(&self) -> Arc<dyn DeferredInstallPrompt> {
        self.handle.clone()
    }
}

/// Observable state of an [`InstallSlot`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallPhase {
    Absent,
    Captured,
    Consumed,
}

/// Owner of at most one deferred install handle
#[derive(Default)]
pub enum InstallSlot {
    #[default]
    Absent,
    Captured(Arc<dyn DeferredInstallPrompt>),
    Consumed,
}

impl InstallSlot {
    pub fn phase(&self) -> InstallPhase {
        match self {
            Self::Absent => InstallPhase::Absent,
            Self::Captured(_) => InstallPhase::Captured,
            Self::Consumed => InstallPhase::Consumed,
        }
    }

    /// Whether an "Install" menu entry should be offered
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Captured(_))
    }

    /// Store a handle, replacing any previous one
    pub fn capture(&mut self, handle: Arc<dyn DeferredInstallPrompt>) {
        if self.is_available() {
            debug!("Replacing captured install handle");
        }
        *self = Self::Captured(handle);
    }

    /// Show the install dialog if a handle is captured
    ///
    /// Returns `None` when there is nothing to prompt.
    pub fn prompt(&self) -> Option<Result<oneshot::Receiver<UserChoice>>> {
        match self {
            Self::Captured(handle) => Some(handle.prompt()),
            _ => None,
        }
    }

    /// Apply the user's choice
    ///
    /// Acceptance consumes the handle. A dismissal keeps it so the user can
    /// retry from the menu.
    pub fn settle(&mut self, choice: &UserChoice) {
        match (choice.outcome, self.is_available()) {
            (InstallOutcome::Accepted, true) => {
                info!("App install accepted");
                *self = Self::Consumed;
            }
            (InstallOutcome::Dismissed, true) => {
                info!("App install dismissed; keeping prompt for retry");
            }
            (_, false) => debug!("Ignoring install choice with no captured handle"),
        }
    }

    /// Drop the handle on teardown
    pub fn discard(&mut self) {
        *self = Self::Absent;
    }
}

impl fmt::Debug for InstallSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("InstallSlot").field(&self.phase()).finish()
    }
}
