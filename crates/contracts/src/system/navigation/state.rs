use super::{NavigationError, NavigationItem, DASHBOARD_ID};

/// Currently active destination of the primary menu.
///
/// The active id always names an item of the list resolved for the current
/// role: [`select`](Self::select) refuses ids outside that list and
/// [`reconcile`](Self::reconcile) resets a stale id after a role change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    active: String,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationState {
    pub fn new() -> Self {
        Self {
            active: DASHBOARD_ID.to_string(),
        }
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active == id
    }

    /// Handle a user selection; state is unchanged on error.
    pub fn select(&mut self, items: &[NavigationItem], id: &str) -> Result<(), NavigationError> {
        if !items.iter().any(|item| item.id == id) {
            log::warn!("rejected navigation selection {:?}", id);
            return Err(NavigationError::InvalidSelection { id: id.to_string() });
        }
        self.active = id.to_string();
        Ok(())
    }

    /// Bring the state in line with a freshly resolved menu.
    ///
    /// Returns `true` when the active id was not part of `items` and was reset
    /// to the dashboard.
    pub fn reconcile(&mut self, items: &[NavigationItem]) -> bool {
        if items.iter().any(|item| item.id == self.active) {
            return false;
        }
        log::info!(
            "navigation item {:?} unavailable after role change, back to {:?}",
            self.active,
            DASHBOARD_ID
        );
        self.active = DASHBOARD_ID.to_string();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::user_role::UserRole;
    use crate::system::navigation::NavigationPolicy;

    fn menu(role: UserRole) -> Vec<NavigationItem> {
        NavigationPolicy::embedded().unwrap().resolve(role)
    }

    #[test]
    fn test_starts_on_dashboard() {
        let state = NavigationState::new();
        assert_eq!(state.active(), "dashboard");
        assert!(state.is_active(DASHBOARD_ID));
        assert_eq!(NavigationState::default(), state);
    }

    #[test]
    fn test_select_present_item() {
        let items = menu(UserRole::Administrator);
        let mut state = NavigationState::new();
        state.select(&items, "permissions").unwrap();
        assert_eq!(state.active(), "permissions");
        state.select(&items, "dashboard").unwrap();
        assert_eq!(state.active(), "dashboard");
    }

    #[test]
    fn test_select_absent_item_keeps_state() {
        let items = menu(UserRole::Client);
        let mut state = NavigationState::new();
        state.select(&items, "settings").unwrap();

        let err = state.select(&items, "permissions").unwrap_err();
        assert_eq!(
            err,
            NavigationError::InvalidSelection {
                id: "permissions".to_string()
            }
        );
        assert_eq!(state.active(), "settings");

        assert!(state.select(&items, "").is_err());
        assert_eq!(state.active(), "settings");
    }

    #[test]
    fn test_reconcile_resets_stale_selection() {
        let mut state = NavigationState::new();
        state.select(&menu(UserRole::Administrator), "personnel").unwrap();

        assert!(state.reconcile(&menu(UserRole::Employee)));
        assert_eq!(state.active(), "dashboard");
    }

    #[test]
    fn test_reconcile_keeps_shared_selection() {
        let mut state = NavigationState::new();
        state.select(&menu(UserRole::Administrator), "stock").unwrap();

        assert!(!state.reconcile(&menu(UserRole::Employee)));
        assert_eq!(state.active(), "stock");
    }
}
