//! History entry payloads and locations

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Unique identifier for a goal
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoalId(pub String);

impl GoalId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for GoalId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for GoalId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// State payload attached to one history entry
///
/// Every field is optional: an absent field means "inherit / default false".
/// Fields written by other views are kept in `extra` and survive every
/// transformation the header applies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationState {
    /// Goals visited since the current branch started, oldest first
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goals_history: Option<Vec<GoalId>>,
    /// Goal currently expanded in the goals view
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_goal_id: Option<GoalId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_inbox_open: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_search: Option<bool>,
    /// Fields owned by sibling views
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NavigationState {
    /// Number of goal steps recorded in this entry (0 when absent)
    pub fn goals_history_len(&self) -> usize {
        self.goals_history.as_ref().map_or(0, Vec::len)
    }

    /// Copy of this state with the search panel requested
    pub fn with_display_search(&self) -> Self {
        Self {
            display_search: Some(true),
            ..self.clone()
        }
    }

    /// Copy of this state that starts a fresh inbox branch
    ///
    /// Prior goal navigation is dropped so the inbox records its own
    /// independent history.
    pub fn inbox_branch(&self) -> Self {
        Self {
            goals_history: Some(Vec::new()),
            active_goal_id: None,
            is_inbox_open: Some(true),
            ..self.clone()
        }
    }
}

/// Identifier the history service assigns to each entry it creates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LocationKey(pub u64);

/// One entry of the navigation stack
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    /// Route path (e.g., "/MyGoals")
    pub path: String,
    /// State payload, if the entry was pushed with one
    pub state: Option<NavigationState>,
    pub key: LocationKey,
}

impl Location {
    pub fn new(path: impl Into<String>, state: Option<NavigationState>, key: LocationKey) -> Self {
        Self {
            path: path.into(),
            state,
            key,
        }
    }

    /// The entry state, or an empty state when none was pushed
    pub fn state_or_default(&self) -> NavigationState {
        self.state.clone().unwrap_or_default()
    }
}
