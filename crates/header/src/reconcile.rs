//! Bring the header flags back in line with the active history entry
//!
//! Runs once per navigation. Back/forward moves land on entries that were
//! pushed by the header itself, so replaying their fields reproduces the
//! header exactly as it looked when the entry was created.

use crate::models::{HeaderUiState, NavigationState};

/// Which flags a reconciliation pass changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reconciliation {
    pub inbox_changed: bool,
    pub search_changed: bool,
}

impl Reconciliation {
    pub fn changed(&self) -> bool {
        self.inbox_changed || self.search_changed
    }
}

/// Apply the entry's `isInboxOpen` / `displaySearch` fields to `ui`
///
/// A flag is only rewritten when it is currently set or the entry carries the
/// field; entries without either field never clobber a cleared flag. Absent
/// fields read as false.
pub fn reconcile(ui: &mut HeaderUiState, entry: Option<&NavigationState>) -> Reconciliation {
    let (is_inbox_open, display_search) =
        entry.map_or((None, None), |state| (state.is_inbox_open, state.display_search));

    let mut result = Reconciliation::default();

    if ui.inbox_open || is_inbox_open.is_some() {
        let next = is_inbox_open.unwrap_or(false);
        result.inbox_changed = ui.inbox_open != next;
        ui.inbox_open = next;
    }

    if ui.search_active || display_search.is_some() {
        let next = display_search.unwrap_or(false);
        result.search_changed = ui.search_active != next;
        ui.search_active = next;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GoalId;

    fn ui(inbox_open: bool, search_active: bool) -> HeaderUiState {
        HeaderUiState {
            inbox_open,
            search_active,
            ..Default::default()
        }
    }

    #[test]
    fn test_entry_without_fields_is_noop_when_flags_clear() {
        let entries = [
            None,
            Some(NavigationState::default()),
            Some(NavigationState {
                goals_history: Some(vec![GoalId::new("g1")]),
                active_goal_id: Some(GoalId::new("g1")),
                ..Default::default()
            }),
        ];

        for entry in &entries {
            let mut state = HeaderUiState {
                dark_mode: true,
                show_inbox: true,
                ..Default::default()
            };
            let before = state;
            let result = reconcile(&mut state, entry.as_ref());
            assert_eq!(state, before);
            assert!(!result.changed());
        }
    }

    #[test]
    fn test_entry_without_fields_clears_set_flags() {
        let mut state = ui(true, true);
        let result = reconcile(&mut state, Some(&NavigationState::default()));

        assert_eq!(state, ui(false, false));
        assert!(result.inbox_changed);
        assert!(result.search_changed);
    }

    #[test]
    fn test_entry_fields_are_applied() {
        let entry = NavigationState {
            is_inbox_open: Some(true),
            display_search: Some(true),
            ..Default::default()
        };
        let mut state = ui(false, false);
        reconcile(&mut state, Some(&entry));
        assert_eq!(state, ui(true, true));
    }

    #[test]
    fn test_explicit_false_closes() {
        let entry = NavigationState {
            is_inbox_open: Some(false),
            ..Default::default()
        };
        let mut state = ui(true, false);
        let result = reconcile(&mut state, Some(&entry));
        assert!(!state.inbox_open);
        assert!(result.inbox_changed);
        assert!(!result.search_changed);
    }

    #[test]
    fn test_flags_are_independent() {
        let entry = NavigationState {
            display_search: Some(true),
            ..Default::default()
        };
        let mut state = ui(false, false);
        reconcile(&mut state, Some(&entry));
        assert_eq!(state, ui(false, true));
    }

    #[test]
    fn test_reapplying_same_entry_reports_no_change() {
        let entry = NavigationState {
            is_inbox_open: Some(true),
            ..Default::default()
        };
        let mut state = ui(false, false);
        assert!(reconcile(&mut state, Some(&entry)).changed());
        assert!(!reconcile(&mut state, Some(&entry)).changed());
    }
}
