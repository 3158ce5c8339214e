//! Scripted header sessions
//!
//! A script names the page, seeds the shared flags and lists the user and
//! browser events to replay.

use anyhow::{Context, Result};
use header::{ButtonRole, InstallOutcome, NavigationState};
use serde::Deserialize;
use std::path::Path;

/// Session played when no script is given
const DEMO_SCRIPT: &str = r#"{
    "title": "mygoals",
    "show_inbox": true,
    "steps": [
        { "click": "search" },
        { "back": 1 },
        { "navigate": { "path": "/MyGoals", "state": { "goalsHistory": ["g1"], "activeGoalId": "g1" } } },
        { "click": "inbox" },
        { "navigate": { "path": "/MyGoals", "state": { "goalsHistory": ["g7"], "isInboxOpen": true } } },
        { "click": "inbox" },
        { "click": "hints" },
        { "install_available": "dismissed" },
        "install",
        { "install_available": "accepted" },
        "install",
        { "menu": "7" },
        { "menu": "7" }
    ]
}"#;

#[derive(Debug, Deserialize)]
pub struct Script {
    /// Translation key of the page title
    pub title: String,
    #[serde(default)]
    pub show_inbox: bool,
    /// Whether the page handles search queries
    #[serde(default = "default_true")]
    pub has_search: bool,
    pub steps: Vec<Step>,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Search,
    Inbox,
    Settings,
    Hints,
}

impl From<Role> for ButtonRole {
    fn from(role: Role) -> Self {
        match role {
            Role::Search => ButtonRole::Search,
            Role::Inbox => ButtonRole::Inbox,
            Role::Settings => ButtonRole::Settings,
            Role::Hints => ButtonRole::Hints,
        }
    }
}

/// One replayed event
#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Click a header icon
    Click(Role),
    /// Another view pushed an entry
    Navigate {
        path: String,
        #[serde(default)]
        state: Option<NavigationState>,
    },
    /// Browser back button, `n` entries
    Back(usize),
    /// Browser forward button, `n` entries
    Forward(usize),
    /// Pick a settings menu row by key
    Menu(String),
    /// The host signals the app is installable; the prompt answers with the
    /// given outcome
    InstallAvailable(InstallOutcome),
    /// Pick "Install" and wait for the answer
    Install,
    /// Sibling views toggle the inbox icon
    ShowInbox(bool),
}

impl Script {
    /// Load a script from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        config::load_json_file(path)
    }

    /// The built-in demo session
    pub fn demo() -> Result<Self> {
        serde_json::from_str(DEMO_SCRIPT).context("Failed to parse demo script")
    }
}
