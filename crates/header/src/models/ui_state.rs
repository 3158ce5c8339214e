//! Process-wide header flags shared between the header and sibling views

use std::sync::{Arc, PoisonError, RwLock};

/// Flags that decide which header icons and panels render
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderUiState {
    /// The inbox branch is the active view
    pub inbox_open: bool,
    /// The search bar replaces the title row
    pub search_active: bool,
    /// Mirrors the persisted dark-mode flag
    pub dark_mode: bool,
    /// Set by sibling views when the inbox icon should be offered at all
    pub show_inbox: bool,
}

impl HeaderUiState {
    /// Initial session state with the persisted dark-mode preference applied
    pub fn with_dark_mode(dark_mode: bool) -> Self {
        Self {
            dark_mode,
            ..Self::default()
        }
    }
}

/// Cloneable handle to the session's [`HeaderUiState`]
///
/// Every consumer receives a clone of the same handle instead of reaching for
/// a global. Writes go through [`SharedHeaderState::update`].
#[derive(Debug, Clone, Default)]
pub struct SharedHeaderState {
    inner: Arc<RwLock<HeaderUiState>>,
}

impl SharedHeaderState {
    pub fn new(state: HeaderUiState) -> Self {
        Self {
            inner: Arc::new(RwLock::new(state)),
        }
    }

    /// Copy of the current flags
    pub fn snapshot(&self) -> HeaderUiState {
        *self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Mutate the flags under the write lock
    pub fn update<R>(&self, f: impl FnOnce(&mut HeaderUiState) -> R) -> R {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut *guard)
    }

    pub fn inbox_open(&self) -> bool {
        self.snapshot().inbox_open
    }

    pub fn search_active(&self) -> bool {
        self.snapshot().search_active
    }

    pub fn dark_mode(&self) -> bool {
        self.snapshot().dark_mode
    }

    pub fn set_show_inbox(&self, show: bool) {
        self.update(|state| state.show_inbox = show);
    }
}
