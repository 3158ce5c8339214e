//! Settings dropdown entries and their actions

use anyhow::{Context, Result};
use log::{error, info};
use url::Url;

use crate::context::HeaderContext;
use crate::services::{DARK_MODE_KEY, Translator, flag_value};

/// Donation page opened from the menu
pub const DONATE_URL: &str = "https://donate.stripe.com/6oE4jK1iPcPT1m89AA";

/// Project blog opened from the menu
pub const BLOG_URL: &str = "https://blog.zinzen.me";

/// Menu key of the dark-mode switch row
pub const DARK_MODE_MENU_KEY: &str = "7";

/// One selectable entry of the settings menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuEntry {
    Donate,
    Feedback,
    Blog,
    Backup,
    ChangeTheme,
    Install,
    DarkMode,
}

impl MenuEntry {
    /// Entries that are always listed, in display order
    pub const FIXED: [MenuEntry; 5] = [
        MenuEntry::Donate,
        MenuEntry::Feedback,
        MenuEntry::Blog,
        MenuEntry::Backup,
        MenuEntry::ChangeTheme,
    ];

    /// Translation key of the entry label
    pub fn label_key(self) -> &'static str {
        match self {
            MenuEntry::Donate => "donate",
            MenuEntry::Feedback => "feedback",
            MenuEntry::Blog => "blog",
            MenuEntry::Backup => "backup",
            MenuEntry::ChangeTheme => "changeTheme",
            MenuEntry::Install => "Install",
            MenuEntry::DarkMode => "Dark Mode",
        }
    }
}

/// A rendered menu row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub key: String,
    pub label: String,
    pub entry: MenuEntry,
    /// Switch position, for toggle rows only
    pub checked: Option<bool>,
}

/// Build the settings menu rows
///
/// The fixed entries come first, then "Install" while an install prompt is
/// captured, then the dark-mode switch.
pub fn settings_items(
    translator: &dyn Translator,
    install_available: bool,
    dark_mode: bool,
) -> Vec<MenuItem> {
    let install = install_available.then_some(MenuEntry::Install);

    let mut items: Vec<MenuItem> = MenuEntry::FIXED
        .into_iter()
        .chain(install)
        .enumerate()
        .map(|(index, entry)| MenuItem {
            key: index.to_string(),
            label: translator.translate(entry.label_key()),
            entry,
            checked: None,
        })
        .collect();

    items.push(MenuItem {
        key: DARK_MODE_MENU_KEY.to_string(),
        label: translator.translate(MenuEntry::DarkMode.label_key()),
        entry: MenuEntry::DarkMode,
        checked: Some(dark_mode),
    });

    items
}

/// Flip the dark-mode preference
///
/// The inverted value is persisted first, then the session flag flips. A
/// failed write is logged and the session flag still flips. Returns the new
/// value.
pub fn toggle_dark_mode(ctx: &HeaderContext) -> bool {
    let next = !ctx.state.dark_mode();
    if let Err(e) = ctx.flags.set_flag(DARK_MODE_KEY, flag_value(next)) {
        error!("Failed to persist dark mode preference: {:#}", e);
    }
    ctx.state.update(|state| state.dark_mode = next);
    info!("Dark mode {}", flag_value(next));
    next
}

/// Run the action behind a non-install menu entry
pub fn activate(ctx: &HeaderContext, entry: MenuEntry) -> Result<()> {
    match entry {
        MenuEntry::Donate => ctx.actions.open_external(&parse_link(DONATE_URL)?),
        MenuEntry::Feedback => ctx.navigator.open_feedback(),
        MenuEntry::Blog => ctx.actions.open_external(&parse_link(BLOG_URL)?),
        MenuEntry::Backup => ctx.actions.open_backup_dialog(),
        MenuEntry::ChangeTheme => ctx.actions.change_theme(),
        MenuEntry::DarkMode => {
            toggle_dark_mode(ctx);
            Ok(())
        }
        MenuEntry::Install => anyhow::bail!("install entry is handled by the header button"),
    }
}

fn parse_link(link: &str) -> Result<Url> {
    Url::parse(link).with_context(|| format!("Invalid link: {}", link))
}
