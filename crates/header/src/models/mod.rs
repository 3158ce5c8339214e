//! Domain models for header navigation state

mod navigation;
mod ui_state;

pub use navigation::{GoalId, Location, LocationKey, NavigationState};
pub use ui_state::{HeaderUiState, SharedHeaderState};
