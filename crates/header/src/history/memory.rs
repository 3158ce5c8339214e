//! In-memory history stack
//!
//! Mirrors browser session history: navigating truncates forward entries,
//! and moving past either end is rejected without touching the pointer.

use anyhow::Result;
use log::debug;
use std::sync::{PoisonError, RwLock};

use super::HistoryService;
use crate::models::{Location, LocationKey, NavigationState};

/// Error returned when a pointer move would leave the stack
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HistoryError {
    #[error("cannot go back {requested} entries: only {available} behind the current entry")]
    BackOutOfRange { requested: usize, available: usize },

    #[error("cannot go forward {requested} entries: only {available} ahead of the current entry")]
    ForwardOutOfRange { requested: usize, available: usize },
}

struct Stack {
    entries: Vec<Location>,
    cursor: usize,
    next_key: u64,
}

impl Stack {
    fn allocate_key(&mut self) -> LocationKey {
        let key = LocationKey(self.next_key);
        self.next_key += 1;
        key
    }
}

/// In-memory implementation of HistoryService
pub struct InMemoryHistory {
    stack: RwLock<Stack>,
}

impl InMemoryHistory {
    /// Create a history holding a single entry for `path` with no state
    pub fn new(path: impl Into<String>) -> Self {
        Self::with_state(path, None)
    }

    /// Create a history holding a single entry with the given state
    pub fn with_state(path: impl Into<String>, state: Option<NavigationState>) -> Self {
        let mut stack = Stack {
            entries: Vec::new(),
            cursor: 0,
            next_key: 0,
        };
        let key = stack.allocate_key();
        stack.entries.push(Location::new(path, state, key));
        Self {
            stack: RwLock::new(stack),
        }
    }

    /// Move the pointer forward by `steps` entries
    pub fn go_forward(&self, steps: usize) -> Result<()> {
        let mut stack = self.stack.write().unwrap_or_else(PoisonError::into_inner);
        let available = stack.entries.len() - 1 - stack.cursor;
        if steps > available {
            return Err(HistoryError::ForwardOutOfRange {
                requested: steps,
                available,
            }
            .into());
        }
        stack.cursor += steps;
        debug!("History forward {} -> entry {}", steps, stack.cursor);
        Ok(())
    }

    /// Total number of entries, including those ahead of the pointer
    pub fn entry_count(&self) -> usize {
        self.stack
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .len()
    }

    /// Zero-based position of the pointer
    pub fn index(&self) -> usize {
        self.stack
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .cursor
    }
}

impl HistoryService for InMemoryHistory {
    fn navigate(&self, path: &str, state: Option<NavigationState>) -> Result<()> {
        let mut stack = self.stack.write().unwrap_or_else(PoisonError::into_inner);
        let keep = stack.cursor + 1;
        stack.entries.truncate(keep);
        let key = stack.allocate_key();
        stack.entries.push(Location::new(path, state, key));
        stack.cursor = keep;
        debug!("History push {} -> entry {}", path, stack.cursor);
        Ok(())
    }

    fn current_location(&self) -> Location {
        let stack = self.stack.read().unwrap_or_else(PoisonError::into_inner);
        stack.entries[stack.cursor].clone()
    }

    fn go_back(&self, steps: usize) -> Result<()> {
        let mut stack = self.stack.write().unwrap_or_else(PoisonError::into_inner);
        if steps > stack.cursor {
            return Err(HistoryError::BackOutOfRange {
                requested: steps,
                available: stack.cursor,
            }
            .into());
        }
        stack.cursor -= steps;
        debug!("History back {} -> entry {}", steps, stack.cursor);
        Ok(())
    }
}
