//! History service trait definition

use crate::models::{Location, NavigationState};
use anyhow::Result;

/// Trait for navigation history operations
///
/// Implementations must move the pointer by exactly the requested number of
/// entries. The inbox close path unwinds a known number of steps and relies
/// on entries never being skipped or coalesced.
pub trait HistoryService: Send + Sync {
    /// Push a new entry, discarding any entries ahead of the pointer
    fn navigate(&self, path: &str, state: Option<NavigationState>) -> Result<()>;

    /// The entry the pointer currently rests on
    fn current_location(&self) -> Location;

    /// Move the pointer backward by `steps` entries
    fn go_back(&self, steps: usize) -> Result<()>;
}
