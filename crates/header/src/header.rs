//! The header bar: title, icon row and the reconciler driving them

use log::debug;

use crate::button::{ButtonRole, ClickOutcome, HeaderButton, Selection};
use crate::context::HeaderContext;
use crate::install::{InstallOutcome, InstallPhase, InstallPromptEvent, UserChoice};
use crate::menu::{MenuEntry, MenuItem};
use crate::models::{HeaderUiState, LocationKey};
use crate::reconcile::reconcile;

/// Page titles that host the goals list and get the search/inbox icons
pub const GOALS_TITLES: [&str; 2] = ["mygoals", "Inbox"];

/// Title shown while the inbox branch is open
pub const INBOX_TITLE: &str = "Inbox";

/// Icon asset a button renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Search,
    Inbox,
    OpenEnvelope,
    VerticalDots,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonModel {
    pub role: ButtonRole,
    pub icon: Icon,
    pub alt: &'static str,
}

impl ButtonModel {
    fn new(role: ButtonRole, icon: Icon) -> Self {
        Self {
            role,
            icon,
            alt: role.alt(),
        }
    }
}

/// What the view layer should draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderModel {
    /// The search input replaces the whole bar
    SearchBar { dark_mode: bool },
    Bar {
        title: String,
        buttons: Vec<ButtonModel>,
        dark_mode: bool,
    },
}

/// Header controller for one page
pub struct Header {
    title: String,
    has_search: bool,
    ctx: HeaderContext,
    search: HeaderButton,
    inbox: HeaderButton,
    settings: HeaderButton,
    last_location: Option<LocationKey>,
}

impl Header {
    /// Create a header for the page whose title key is `title`
    pub fn new(title: impl Into<String>, ctx: HeaderContext) -> Self {
        Self {
            title: title.into(),
            has_search: false,
            search: HeaderButton::new(ButtonRole::Search, ctx.clone()),
            inbox: HeaderButton::new(ButtonRole::Inbox, ctx.clone()),
            settings: HeaderButton::new(ButtonRole::Settings, ctx.clone()),
            ctx,
            last_location: None,
        }
    }

    /// Builder method: the page handles search queries, so an active search
    /// shows the search bar
    pub fn with_search(mut self, has_search: bool) -> Self {
        self.has_search = has_search;
        self
    }

    /// Current header flags
    pub fn state(&self) -> HeaderUiState {
        self.ctx.state.snapshot()
    }

    pub fn context(&self) -> &HeaderContext {
        &self.ctx
    }

    /// Reconcile with the current location and start the install listener
    ///
    /// Only the settings icon listens: its menu is the one place the
    /// "Install" entry appears, so it owns the single captured handle.
    pub fn mount(&mut self) {
        self.reconcile_current();
        self.settings.mount();
    }

    /// Stop listening for install signals and drop any captured handle
    pub fn unmount(&mut self) {
        self.settings.unmount();
    }

    /// Reconcile if the location changed since the last pass
    ///
    /// Returns whether a reconciliation ran.
    pub fn sync_location(&mut self) -> bool {
        let key = self.ctx.navigator.current_location().key;
        if self.last_location == Some(key) {
            return false;
        }
        self.reconcile_current();
        true
    }

    fn reconcile_current(&mut self) {
        let location = self.ctx.navigator.current_location();
        let result = self
            .ctx
            .state
            .update(|ui| reconcile(ui, location.state.as_ref()));
        if result.changed() {
            debug!(
                "Reconciled {} ({:?}): {:?}",
                location.path,
                location.key,
                self.ctx.state.snapshot()
            );
        }
        self.last_location = Some(location.key);
    }

    fn shows_goal_icons(&self) -> bool {
        GOALS_TITLES.contains(&self.title.as_str())
    }

    /// Icons in display order
    pub fn visible_buttons(&self) -> Vec<ButtonModel> {
        let ui = self.ctx.state.snapshot();
        let mut buttons = Vec::with_capacity(3);

        if self.shows_goal_icons() && !ui.inbox_open {
            buttons.push(ButtonModel::new(ButtonRole::Search, Icon::Search));
        }
        if self.shows_goal_icons() && ui.show_inbox {
            let icon = if ui.inbox_open {
                Icon::OpenEnvelope
            } else {
                Icon::Inbox
            };
            buttons.push(ButtonModel::new(ButtonRole::Inbox, icon));
        }
        buttons.push(ButtonModel::new(ButtonRole::Settings, Icon::VerticalDots));

        buttons
    }

    /// Title text shown on the bar
    pub fn title_text(&self) -> String {
        if self.ctx.state.inbox_open() {
            INBOX_TITLE.to_string()
        } else {
            self.ctx.translator.translate(&self.title)
        }
    }

    /// Build the render model from the current flags
    pub fn render_model(&self) -> HeaderModel {
        let ui = self.ctx.state.snapshot();
        if ui.search_active && self.has_search {
            return HeaderModel::SearchBar {
                dark_mode: ui.dark_mode,
            };
        }
        HeaderModel::Bar {
            title: self.title_text(),
            buttons: self.visible_buttons(),
            dark_mode: ui.dark_mode,
        }
    }

    /// Click an icon; clicks on icons that are not rendered are ignored
    ///
    /// The header reconciles before dispatching and again after the click,
    /// so navigation the click performs is reflected in the flags on return.
    /// Two clicks on the inbox icon therefore open and then close the inbox,
    /// even if the host has not called [`Header::sync_location`] in between.
    pub fn click(&mut self, role: ButtonRole) -> ClickOutcome {
        self.sync_location();
        let visible = self.visible_buttons().iter().any(|b| b.role == role);
        if !visible || matches!(self.render_model(), HeaderModel::SearchBar { .. }) {
            return ClickOutcome::Ignored;
        }
        let outcome = match role {
            ButtonRole::Search => self.search.click(),
            ButtonRole::Inbox => self.inbox.click(),
            ButtonRole::Settings => self.settings.click(),
            ButtonRole::Hints => ClickOutcome::Ignored,
        };
        self.sync_location();
        outcome
    }

    /// Rows of the settings dropdown
    pub fn settings_menu(&self) -> Vec<MenuItem> {
        self.settings.menu_items()
    }

    pub fn select_menu(&mut self, entry: MenuEntry) -> Selection {
        self.settings.select(entry)
    }

    pub fn select_menu_key(&mut self, key: &str) -> Selection {
        self.settings.select_key(key)
    }

    /// Deliver the install-available signal to the settings icon
    pub fn on_install_available(&mut self, event: &mut InstallPromptEvent) {
        self.settings.on_install_available(event);
    }

    pub fn install_phase(&self) -> InstallPhase {
        self.settings.install_phase()
    }

    /// Apply an install choice that resolved after `select_menu(Install)`
    pub fn settle_install(&mut self, choice: &UserChoice) {
        self.settings.settle_install(choice);
    }

    /// Run the install flow from the settings menu
    pub async fn install(&mut self) -> Option<InstallOutcome> {
        self.settings.install().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::{GOALS_PATH, HistoryService, InMemoryHistory};
    use crate::models::NavigationState;
    use crate::services::{InMemoryFlagStore, RecordingAppActions, StaticTranslator, ToastLog};
    use std::sync::Arc;

    fn context(history: Arc<InMemoryHistory>) -> HeaderContext {
        HeaderContext::new(
            history,
            Arc::new(StaticTranslator::new().with("mygoals", "My Goals")),
            Arc::new(InMemoryFlagStore::new()),
            Arc::new(ToastLog::new()),
            Arc::new(RecordingAppActions::new()),
        )
    }

    fn roles(header: &Header) -> Vec<ButtonRole> {
        header.visible_buttons().iter().map(|b| b.role).collect()
    }

    #[test]
    fn test_goals_page_shows_search_and_settings() {
        let history = Arc::new(InMemoryHistory::new(GOALS_PATH));
        let mut header = Header::new("mygoals", context(history));
        header.mount();

        assert_eq!(roles(&header), vec![ButtonRole::Search, ButtonRole::Settings]);
        assert_eq!(header.title_text(), "My Goals");
    }

    #[test]
    fn test_inbox_icon_requires_show_inbox() {
        let history = Arc::new(InMemoryHistory::new(GOALS_PATH));
        let ctx = context(history);
        ctx.state.set_show_inbox(true);
        let header = Header::new("mygoals", ctx);

        let buttons = header.visible_buttons();
        assert_eq!(buttons[1].role, ButtonRole::Inbox);
        assert_eq!(buttons[1].icon, Icon::Inbox);
    }

    #[test]
    fn test_other_pages_only_show_settings() {
        let history = Arc::new(InMemoryHistory::new("/Feedback"));
        let ctx = context(history);
        ctx.state.set_show_inbox(true);
        let mut header = Header::new("feedback", ctx);
        header.mount();

        assert_eq!(roles(&header), vec![ButtonRole::Settings]);
        assert_eq!(header.click(ButtonRole::Search), ClickOutcome::Ignored);
        assert_eq!(header.title_text(), "feedback");
    }

    #[test]
    fn test_open_inbox_swaps_icons_and_title() {
        let history = Arc::new(InMemoryHistory::new(GOALS_PATH));
        let ctx = context(history.clone());
        ctx.state.set_show_inbox(true);
        let mut header = Header::new("mygoals", ctx);
        header.mount();

        assert_eq!(header.click(ButtonRole::Inbox), ClickOutcome::OpenedInbox);
        assert!(!header.sync_location());

        assert!(header.state().inbox_open);
        assert_eq!(header.title_text(), INBOX_TITLE);
        let buttons = header.visible_buttons();
        assert_eq!(
            buttons.iter().map(|b| b.icon).collect::<Vec<_>>(),
            vec![Icon::OpenEnvelope, Icon::VerticalDots]
        );
    }

    #[test]
    fn test_sync_location_runs_once_per_entry() {
        let history = Arc::new(InMemoryHistory::new(GOALS_PATH));
        let mut header = Header::new("mygoals", context(history.clone()));
        header.mount();
        assert!(!header.sync_location());

        history
            .navigate(
                GOALS_PATH,
                Some(NavigationState {
                    display_search: Some(true),
                    ..Default::default()
                }),
            )
            .unwrap();
        assert!(header.sync_location());
        assert!(!header.sync_location());
        assert!(header.state().search_active);
    }

    #[test]
    fn test_search_bar_replaces_bar_only_with_handler() {
        let history = Arc::new(InMemoryHistory::with_state(
            GOALS_PATH,
            Some(NavigationState {
                display_search: Some(true),
                ..Default::default()
            }),
        ));
        let ctx = context(history);

        let mut without = Header::new("mygoals", ctx.clone());
        without.mount();
        assert!(matches!(without.render_model(), HeaderModel::Bar { .. }));

        let mut with = Header::new("mygoals", ctx).with_search(true);
        with.mount();
        assert_eq!(
            with.render_model(),
            HeaderModel::SearchBar { dark_mode: false }
        );
        assert_eq!(with.click(ButtonRole::Settings), ClickOutcome::Ignored);
    }

    #[test]
    fn test_second_inbox_click_closes_without_host_sync() {
        let history = Arc::new(InMemoryHistory::new(GOALS_PATH));
        let ctx = context(history.clone());
        ctx.state.set_show_inbox(true);
        let mut header = Header::new("mygoals", ctx);
        header.mount();

        assert_eq!(header.click(ButtonRole::Inbox), ClickOutcome::OpenedInbox);
        assert!(header.state().inbox_open);
        assert_eq!(header.title_text(), INBOX_TITLE);

        assert_eq!(
            header.click(ButtonRole::Inbox),
            ClickOutcome::ClosedInbox { steps: 1 }
        );
        assert!(!header.state().inbox_open);
        assert_eq!(history.index(), 0);
        assert_eq!(history.entry_count(), 2);
    }

    #[test]
    fn test_click_catches_up_with_pending_navigation() {
        let history = Arc::new(InMemoryHistory::new(GOALS_PATH));
        let ctx = context(history.clone());
        ctx.state.set_show_inbox(true);
        let mut header = Header::new("mygoals", ctx);
        header.mount();

        // Another view opened the inbox; the host has not synced yet
        history
            .navigate(
                GOALS_PATH,
                Some(NavigationState {
                    goals_history: Some(Vec::new()),
                    is_inbox_open: Some(true),
                    ..Default::default()
                }),
            )
            .unwrap();

        assert_eq!(
            header.click(ButtonRole::Inbox),
            ClickOutcome::ClosedInbox { steps: 1 }
        );
        assert_eq!(history.index(), 0);
    }
}
