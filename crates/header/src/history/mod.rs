//! Routing/history abstraction
//!
//! The header only needs to push entries, read the active entry and move the
//! pointer backward. The trait-based design lets a browser binding and the
//! in-memory stack used by tests and the simulator share one controller.

mod memory;
mod navigator;
mod traits;

pub use memory::{HistoryError, InMemoryHistory};
pub use navigator::{GOALS_PATH, FEEDBACK_PATH, Navigator};
pub use traits::HistoryService;
