//! Collaborators and shared state handed to every header component

use std::sync::Arc;

use crate::history::{HistoryService, Navigator};
use crate::models::{HeaderUiState, SharedHeaderState};
use crate::services::{AppActions, FlagStore, ToastService, Translator, load_dark_mode};

/// Everything a header component needs from the rest of the app
///
/// Cloning is cheap; all clones share the same [`SharedHeaderState`].
#[derive(Clone)]
pub struct HeaderContext {
    pub state: SharedHeaderState,
    pub navigator: Navigator,
    pub translator: Arc<dyn Translator>,
    pub flags: Arc<dyn FlagStore>,
    pub toasts: Arc<dyn ToastService>,
    pub actions: Arc<dyn AppActions>,
}

impl HeaderContext {
    /// Create a context with fresh session state
    ///
    /// The dark-mode flag is mirrored from `flags`; every other header flag
    /// starts cleared.
    pub fn new(
        history: Arc<dyn HistoryService>,
        translator: Arc<dyn Translator>,
        flags: Arc<dyn FlagStore>,
        toasts: Arc<dyn ToastService>,
        actions: Arc<dyn AppActions>,
    ) -> Self {
        let state = SharedHeaderState::new(HeaderUiState::with_dark_mode(load_dark_mode(
            flags.as_ref(),
        )));
        Self {
            state,
            navigator: Navigator::new(history),
            translator,
            flags,
            toasts,
            actions,
        }
    }

    /// Replace the session state with one owned by the caller
    ///
    /// Used when sibling views already hold the handle.
    pub fn with_state(mut self, state: SharedHeaderState) -> Self {
        self.state = state;
        self
    }
}
