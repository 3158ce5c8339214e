//! Route-level navigation helpers over a [`HistoryService`]

use anyhow::Result;
use log::debug;
use std::sync::Arc;

use super::HistoryService;
use crate::models::{Location, NavigationState};

/// Route of the goals view (also hosts the inbox and search panels)
pub const GOALS_PATH: &str = "/MyGoals";

/// Route of the feedback form
pub const FEEDBACK_PATH: &str = "/Feedback";

/// Navigation operations the header performs
///
/// All history pointer arithmetic lives here so callers never compute
/// `go_back` distances themselves.
#[derive(Clone)]
pub struct Navigator {
    history: Arc<dyn HistoryService>,
}

impl Navigator {
    pub fn new(history: Arc<dyn HistoryService>) -> Self {
        Self { history }
    }

    pub fn current_location(&self) -> Location {
        self.history.current_location()
    }

    /// State of the active entry, empty when the entry carries none
    pub fn current_state(&self) -> NavigationState {
        self.history.current_location().state_or_default()
    }

    /// Push the goals view with the given state
    pub fn open_goals(&self, state: NavigationState) -> Result<()> {
        self.history.navigate(GOALS_PATH, Some(state))
    }

    /// Push the feedback route
    pub fn open_feedback(&self) -> Result<()> {
        self.history.navigate(FEEDBACK_PATH, None)
    }

    /// Number of entries between an inbox entry and the entry it was opened from
    ///
    /// Every goal visited inside the inbox pushed one entry on top of the
    /// entry that opened the inbox.
    pub fn inbox_checkpoint_distance(state: &NavigationState) -> usize {
        state.goals_history_len() + 1
    }

    /// Move back exactly `steps` entries to a known checkpoint
    pub fn unwind_to_checkpoint(&self, steps: usize) -> Result<()> {
        debug!("Unwinding {} history entries", steps);
        self.history.go_back(steps)
    }
}
