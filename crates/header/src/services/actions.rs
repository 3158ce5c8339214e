//! App-level actions triggered from the settings menu
//!
//! Theme changes and the backup dialog belong to the host application; the
//! header only asks for them.

use anyhow::{Context, Result};
use log::info;
use std::sync::{PoisonError, RwLock};
use tokio::sync::mpsc::UnboundedSender;
use url::Url;

/// An action the header asked the host to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    ChangeTheme,
    OpenBackupDialog,
    OpenExternal(Url),
}

/// Host actions reachable from the header
pub trait AppActions: Send + Sync {
    /// Cycle to the next color theme
    fn change_theme(&self) -> Result<()>;

    /// Show the backup/restore dialog
    fn open_backup_dialog(&self) -> Result<()>;

    /// Open a link outside the app
    fn open_external(&self, url: &Url) -> Result<()>;
}

/// Actions for a desktop host
///
/// External links open in the system browser. Theme and backup requests are
/// forwarded to the host event loop over a channel.
pub struct SystemAppActions {
    host: UnboundedSender<AppAction>,
}

impl SystemAppActions {
    pub fn new(host: UnboundedSender<AppAction>) -> Self {
        Self { host }
    }

    fn forward(&self, action: AppAction) -> Result<()> {
        self.host
            .send(action)
            .map_err(|e| anyhow::anyhow!("Host event loop is gone: {:?}", e.0))
    }
}

impl AppActions for SystemAppActions {
    fn change_theme(&self) -> Result<()> {
        self.forward(AppAction::ChangeTheme)
    }

    fn open_backup_dialog(&self) -> Result<()> {
        self.forward(AppAction::OpenBackupDialog)
    }

    fn open_external(&self, url: &Url) -> Result<()> {
        info!("Opening {} in the system browser", url);
        open::that(url.as_str()).with_context(|| format!("Failed to open {}", url))
    }
}

/// Actions implementation that records requests instead of performing them
#[derive(Debug, Default)]
pub struct RecordingAppActions {
    requested: RwLock<Vec<AppAction>>,
}

impl RecordingAppActions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every requested action, oldest first
    pub fn requested(&self) -> Vec<AppAction> {
        self.requested
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, action: AppAction) -> Result<()> {
        info!("App action requested: {:?}", action);
        self.requested
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(action);
        Ok(())
    }
}

impl AppActions for RecordingAppActions {
    fn change_theme(&self) -> Result<()> {
        self.record(AppAction::ChangeTheme)
    }

    fn open_backup_dialog(&self) -> Result<()> {
        self.record(AppAction::OpenBackupDialog)
    }

    fn open_external(&self, url: &Url) -> Result<()> {
        self.record(AppAction::OpenExternal(url.clone()))
    }
}
