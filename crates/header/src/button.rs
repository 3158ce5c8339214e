//! Header icon controller
//!
//! One [`HeaderButton`] per icon. The role decides what a click does; every
//! button also listens for the install-available signal while mounted.

use log::{debug, error, info, warn};
use tokio::sync::oneshot;

use crate::context::HeaderContext;
use crate::history::Navigator;
use crate::install::{InstallOutcome, InstallPhase, InstallPromptEvent, InstallSlot, UserChoice};
use crate::menu::{self, MenuEntry, MenuItem};
use crate::services::ToastRequest;

/// Message shown by the hints icon
pub const HINTS_MESSAGE: &str = "Coming soon...";

/// Which icon a button controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonRole {
    Search,
    Inbox,
    Settings,
    Hints,
}

impl ButtonRole {
    /// Accessible label of the icon
    pub fn alt(self) -> &'static str {
        match self {
            ButtonRole::Search => "zinzen search",
            ButtonRole::Inbox => "zinzen inbox",
            ButtonRole::Settings => "zinzen settings",
            ButtonRole::Hints => "zinzen hints",
        }
    }
}

/// What a click did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    OpenedSearch,
    OpenedInbox,
    ClosedInbox { steps: usize },
    ShowedMenu,
    ShowedHint,
    /// The button is not rendered, so the click never happened
    Ignored,
    /// A collaborator rejected the request; already logged
    Failed,
}

/// Result of picking a settings menu entry
#[derive(Debug)]
pub enum Selection {
    Done,
    /// The install dialog is showing; pass its choice to `settle_install`
    InstallPending(oneshot::Receiver<UserChoice>),
    /// Nothing to do (no install handle, unknown key, collaborator failure)
    Ignored,
}

/// Controller for one header icon
pub struct HeaderButton {
    role: ButtonRole,
    ctx: HeaderContext,
    install: InstallSlot,
    mounted: bool,
}

impl HeaderButton {
    pub fn new(role: ButtonRole, ctx: HeaderContext) -> Self {
        Self {
            role,
            ctx,
            install: InstallSlot::default(),
            mounted: false,
        }
    }

    pub fn role(&self) -> ButtonRole {
        self.role
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Start listening for the install-available signal
    pub fn mount(&mut self) {
        self.mounted = true;
        debug!("{} mounted", self.role.alt());
    }

    /// Stop listening and drop any captured install handle
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.install.discard();
        debug!("{} unmounted", self.role.alt());
    }

    /// Handle the install-available signal
    ///
    /// Returns whether the handle was captured; signals reaching an unmounted
    /// button are ignored.
    pub fn on_install_available(&mut self, event: &mut InstallPromptEvent) -> bool {
        if !self.mounted {
            return false;
        }
        event.prevent_default();
        self.install.capture(event.handle());
        info!("App install available");
        true
    }

    pub fn install_phase(&self) -> InstallPhase {
        self.install.phase()
    }

    /// Perform the icon's click action
    pub fn click(&mut self) -> ClickOutcome {
        match self.role {
            ButtonRole::Search => self.open_search(),
            ButtonRole::Inbox if self.ctx.state.inbox_open() => self.close_inbox(),
            ButtonRole::Inbox => self.open_inbox(),
            ButtonRole::Settings => ClickOutcome::ShowedMenu,
            ButtonRole::Hints => {
                self.ctx.toasts.show(ToastRequest::message(HINTS_MESSAGE));
                ClickOutcome::ShowedHint
            }
        }
    }

    fn open_search(&self) -> ClickOutcome {
        let state = self.ctx.navigator.current_state().with_display_search();
        match self.ctx.navigator.open_goals(state) {
            Ok(()) => ClickOutcome::OpenedSearch,
            Err(e) => {
                error!("Failed to open search: {:#}", e);
                ClickOutcome::Failed
            }
        }
    }

    fn open_inbox(&self) -> ClickOutcome {
        let state = self.ctx.navigator.current_state().inbox_branch();
        match self.ctx.navigator.open_goals(state) {
            Ok(()) => ClickOutcome::OpenedInbox,
            Err(e) => {
                error!("Failed to open inbox: {:#}", e);
                ClickOutcome::Failed
            }
        }
    }

    fn close_inbox(&self) -> ClickOutcome {
        let steps = Navigator::inbox_checkpoint_distance(&self.ctx.navigator.current_state());
        match self.ctx.navigator.unwind_to_checkpoint(steps) {
            Ok(()) => ClickOutcome::ClosedInbox { steps },
            Err(e) => {
                error!("Failed to close inbox: {:#}", e);
                ClickOutcome::Failed
            }
        }
    }

    /// Rows of the settings dropdown
    pub fn menu_items(&self) -> Vec<MenuItem> {
        menu::settings_items(
            self.ctx.translator.as_ref(),
            self.install.is_available(),
            self.ctx.state.dark_mode(),
        )
    }

    /// Pick a settings menu entry
    pub fn select(&mut self, entry: MenuEntry) -> Selection {
        if entry == MenuEntry::Install {
            return match self.prompt_install() {
                Some(receiver) => Selection::InstallPending(receiver),
                None => Selection::Ignored,
            };
        }

        match menu::activate(&self.ctx, entry) {
            Ok(()) => Selection::Done,
            Err(e) => {
                error!("Menu action {:?} failed: {:#}", entry, e);
                Selection::Ignored
            }
        }
    }

    /// Pick a settings menu entry by its row key
    pub fn select_key(&mut self, key: &str) -> Selection {
        let entry = self
            .menu_items()
            .into_iter()
            .find(|item| item.key == key)
            .map(|item| item.entry);
        match entry {
            Some(entry) => self.select(entry),
            None => {
                warn!("No settings menu entry with key {}", key);
                Selection::Ignored
            }
        }
    }

    /// Show the captured install dialog
    ///
    /// Returns `None` when no handle was captured.
    pub fn prompt_install(&mut self) -> Option<oneshot::Receiver<UserChoice>> {
        match self.install.prompt()? {
            Ok(receiver) => Some(receiver),
            Err(e) => {
                error!("Failed to show install prompt: {:#}", e);
                None
            }
        }
    }

    /// Apply the user's install choice
    ///
    /// Choices that resolve after the button was unmounted are ignored.
    pub fn settle_install(&mut self, choice: &UserChoice) {
        if !self.mounted {
            debug!("Ignoring install choice after teardown");
            return;
        }
        self.install.settle(choice);
    }

    /// Prompt, wait for the user's choice and apply it
    ///
    /// Returns `None` when there was nothing to prompt or the choice never
    /// resolved; in the latter case the handle stays captured.
    pub async fn install(&mut self) -> Option<InstallOutcome> {
        let receiver = self.prompt_install()?;
        match receiver.await {
            Ok(choice) => {
                self.settle_install(&choice);
                Some(choice.outcome)
            }
            Err(_) => {
                warn!("Install prompt closed without a choice");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::{GOALS_PATH, HistoryService, InMemoryHistory};
    use crate::models::{GoalId, NavigationState};
    use crate::services::{InMemoryFlagStore, RecordingAppActions, StaticTranslator, ToastLog};
    use std::sync::Arc;

    struct Fixture {
        history: Arc<InMemoryHistory>,
        toasts: Arc<ToastLog>,
        ctx: HeaderContext,
    }

    fn fixture(state: Option<NavigationState>) -> Fixture {
        let history = Arc::new(InMemoryHistory::with_state(GOALS_PATH, state));
        let toasts = Arc::new(ToastLog::new());
        let ctx = HeaderContext::new(
            history.clone(),
            Arc::new(StaticTranslator::new()),
            Arc::new(InMemoryFlagStore::new()),
            toasts.clone(),
            Arc::new(RecordingAppActions::new()),
        );
        Fixture {
            history,
            toasts,
            ctx,
        }
    }

    fn goals(ids: &[&str]) -> Option<Vec<GoalId>> {
        Some(ids.iter().map(|id| GoalId::from(*id)).collect())
    }

    #[test]
    fn test_search_merges_display_search() {
        let f = fixture(Some(NavigationState {
            goals_history: goals(&["g1"]),
            ..Default::default()
        }));
        let mut button = HeaderButton::new(ButtonRole::Search, f.ctx.clone());

        assert_eq!(button.click(), ClickOutcome::OpenedSearch);

        let location = f.history.current_location();
        assert_eq!(location.path, GOALS_PATH);
        let state = location.state.unwrap();
        assert_eq!(state.display_search, Some(true));
        assert_eq!(state.goals_history, goals(&["g1"]));
    }

    #[test]
    fn test_open_inbox_starts_fresh_branch() {
        let f = fixture(Some(NavigationState {
            goals_history: goals(&["g1", "g2", "g3"]),
            active_goal_id: Some(GoalId::new("g3")),
            ..Default::default()
        }));
        let mut button = HeaderButton::new(ButtonRole::Inbox, f.ctx.clone());

        assert_eq!(button.click(), ClickOutcome::OpenedInbox);

        let state = f.history.current_location().state.unwrap();
        assert_eq!(state.goals_history, Some(Vec::new()));
        assert_eq!(state.is_inbox_open, Some(true));
        assert_eq!(state.active_goal_id, None);
    }

    #[test]
    fn test_close_inbox_unwinds_goal_steps() {
        let f = fixture(None);
        for _ in 0..3 {
            f.history.navigate("/filler", None).unwrap();
        }
        f.history
            .navigate(
                GOALS_PATH,
                Some(NavigationState {
                    goals_history: goals(&["g1", "g2"]),
                    is_inbox_open: Some(true),
                    ..Default::default()
                }),
            )
            .unwrap();
        f.ctx.state.update(|s| s.inbox_open = true);
        let mut button = HeaderButton::new(ButtonRole::Inbox, f.ctx.clone());

        assert_eq!(button.click(), ClickOutcome::ClosedInbox { steps: 3 });
        assert_eq!(f.history.index(), 1);
    }

    #[test]
    fn test_close_inbox_failure_is_reported() {
        let f = fixture(Some(NavigationState {
            goals_history: goals(&["g1"]),
            ..Default::default()
        }));
        f.ctx.state.update(|s| s.inbox_open = true);
        let mut button = HeaderButton::new(ButtonRole::Inbox, f.ctx.clone());

        assert_eq!(button.click(), ClickOutcome::Failed);
        assert_eq!(f.history.index(), 0);
    }

    #[test]
    fn test_hints_shows_toast() {
        let f = fixture(None);
        let mut button = HeaderButton::new(ButtonRole::Hints, f.ctx.clone());

        assert_eq!(button.click(), ClickOutcome::ShowedHint);
        assert_eq!(
            f.toasts.shown(),
            vec![ToastRequest {
                open: true,
                message: "Coming soon...".to_string(),
                extra: String::new(),
            }]
        );
        assert_eq!(f.history.entry_count(), 1);
    }

    #[test]
    fn test_settings_click_does_not_navigate() {
        let f = fixture(None);
        let mut button = HeaderButton::new(ButtonRole::Settings, f.ctx.clone());
        assert_eq!(button.click(), ClickOutcome::ShowedMenu);
        assert_eq!(f.history.entry_count(), 1);
    }

    #[test]
    fn test_install_without_handle_is_noop() {
        let f = fixture(None);
        let mut button = HeaderButton::new(ButtonRole::Settings, f.ctx.clone());
        button.mount();

        assert!(button.prompt_install().is_none());
        assert!(matches!(button.select(MenuEntry::Install), Selection::Ignored));
        assert_eq!(tokio_test::block_on(button.install()), None);
    }

    #[test]
    fn test_unknown_menu_key_is_ignored() {
        let f = fixture(None);
        let mut button = HeaderButton::new(ButtonRole::Settings, f.ctx.clone());
        assert!(matches!(button.select_key("5"), Selection::Ignored));
        assert!(matches!(button.select_key("1"), Selection::Done));
        assert_eq!(f.history.current_location().path, "/Feedback");
    }
}
