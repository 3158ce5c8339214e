//! Header crate - Navigation bar logic for the ZinZen goals app
//!
//! This crate provides the platform-independent header controller:
//! - Navigation models (history entry state, locations, shared header flags)
//! - History service abstraction with an in-memory stack
//! - Reconciliation of header flags against the active history entry
//! - Icon-button controllers (search, inbox, settings, hints)
//! - Settings menu and dark-mode toggling
//! - Deferred install-prompt capture
//!
//! This crate has zero UI dependencies; views draw the [`HeaderModel`] it
//! produces.

pub mod button;
pub mod context;
pub mod header;
pub mod history;
pub mod install;
pub mod menu;
pub mod models;
pub mod reconcile;
pub mod services;

pub use button::{ButtonRole, ClickOutcome, HINTS_MESSAGE, HeaderButton, Selection};
pub use context::HeaderContext;
pub use header::{ButtonModel, GOALS_TITLES, Header, HeaderModel, INBOX_TITLE, Icon};
pub use history::{
    FEEDBACK_PATH, GOALS_PATH, HistoryError, HistoryService, InMemoryHistory, Navigator,
};
pub use install::{
    DeferredInstallPrompt, InstallOutcome, InstallPhase, InstallPromptEvent, InstallSlot,
    UserChoice,
};
pub use menu::{BLOG_URL, DONATE_URL, MenuEntry, MenuItem};
pub use models::{GoalId, HeaderUiState, Location, LocationKey, NavigationState, SharedHeaderState};
pub use reconcile::{Reconciliation, reconcile};
pub use services::{
    AppAction, AppActions, DARK_MODE_KEY, FileFlagStore, FlagStore, InMemoryFlagStore,
    RecordingAppActions, StaticTranslator, SystemAppActions, ToastLog, ToastRequest, ToastService,
    Translator,
};
