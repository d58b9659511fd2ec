use contracts::enums::user_role::UserRole;
use contracts::system::navigation::{
    NavigationError, NavigationItem, NavigationPolicy, NavigationState,
};
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Value of the `active` parameter of a location search string.
pub fn active_from_query(search: &str) -> Option<String> {
    let mut params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.remove("active").filter(|id| !id.is_empty())
}

/// Navigation state shared by the sidebar, the header and the content area.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub policy: StoredValue<NavigationPolicy>,
    pub role: RwSignal<Option<UserRole>>,
    pub navigation: RwSignal<NavigationState>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new(policy: NavigationPolicy) -> Self {
        Self {
            policy: StoredValue::new(policy),
            role: RwSignal::new(None),
            navigation: RwSignal::new(NavigationState::new()),
            left_open: RwSignal::new(true),
        }
    }

    /// Menu for the current role, resolved on every call.
    pub fn items(&self) -> Vec<NavigationItem> {
        match self.role.get() {
            Some(role) => self.policy.with_value(|p| p.resolve(role)),
            None => vec![],
        }
    }

    fn items_untracked(&self) -> Vec<NavigationItem> {
        match self.role.get_untracked() {
            Some(role) => self.policy.with_value(|p| p.resolve(role)),
            None => vec![],
        }
    }

    /// Switch to a new role, dropping an active item the role may not see.
    pub fn set_role(&self, role: UserRole) {
        if self.role.get_untracked() == Some(role) {
            return;
        }
        log::info!("navigation role set to {}", role);
        self.role.set(Some(role));

        let items = self.items_untracked();
        let mut next = self.navigation.get_untracked();
        if next.reconcile(&items) {
            self.navigation.set(next);
        }
    }

    pub fn clear_role(&self) {
        self.role.set(None);
        self.navigation.set(NavigationState::new());
    }

    /// Selection event from the sidebar or the URL.
    pub fn select(&self, id: &str) -> Result<(), NavigationError> {
        let items = self.items_untracked();
        let mut next = self.navigation.get_untracked();
        next.select(&items, id)?;
        self.navigation.set(next);
        Ok(())
    }

    pub fn active_id(&self) -> String {
        self.navigation.with(|state| state.active().to_string())
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.navigation.with(|state| state.is_active(id))
    }

    /// Label of a menu entry, falling back to the id itself.
    pub fn label_for(&self, id: &str) -> String {
        self.policy
            .with_value(|p| p.item(id).map(|item| item.label.clone()))
            .unwrap_or_else(|| id.to_string())
    }

    pub fn icon_for(&self, id: &str) -> String {
        self.policy
            .with_value(|p| p.item(id).map(|item| item.icon.clone()))
            .unwrap_or_default()
    }

    /// Apply `?active=` from a location search string, if present.
    pub fn restore_active(&self, search: &str) {
        if let Some(active_key) = active_from_query(search) {
            if let Err(e) = self.select(&active_key) {
                log::warn!("ignoring ?active from URL: {}", e);
            }
        }
    }

    /// Keeps the active item in `?active=` and restores it on load.
    ///
    /// The restored id goes through [`select`](Self::select), so an id the
    /// current role may not see is rejected.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        self.restore_active(&search);

        let this = *self;
        Effect::new(move |_| {
            let active_key = this.active_id();
            let query_string =
                serde_qs::to_string(&HashMap::from([("active".to_string(), active_key)]))
                    .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_context(f: impl FnOnce(AppGlobalContext)) {
        Owner::new().with(|| {
            let policy = NavigationPolicy::embedded().unwrap();
            f(AppGlobalContext::new(policy));
        });
    }

    #[test]
    fn test_active_from_query() {
        assert_eq!(active_from_query("?active=sales"), Some("sales".to_string()));
        assert_eq!(
            active_from_query("?tab=1&active=my_commissions"),
            Some("my_commissions".to_string())
        );
        assert_eq!(active_from_query("active=stock"), Some("stock".to_string()));
        assert_eq!(active_from_query(""), None);
        assert_eq!(active_from_query("?"), None);
        assert_eq!(active_from_query("?active="), None);
        assert_eq!(active_from_query("?tab=1"), None);
    }

    #[test]
    fn test_select_rejects_item_hidden_from_role() {
        with_context(|ctx| {
            ctx.set_role(UserRole::Client);

            let err = ctx.select("personnel").unwrap_err();
            assert_eq!(
                err,
                NavigationError::InvalidSelection {
                    id: "personnel".to_string()
                }
            );
            assert_eq!(ctx.active_id(), "dashboard");

            ctx.select("settings").unwrap();
            assert_eq!(ctx.active_id(), "settings");
            assert!(ctx.is_active("settings"));
        });
    }

    #[test]
    fn test_select_without_role_is_rejected() {
        with_context(|ctx| {
            assert!(ctx.select("dashboard").is_err());
            assert_eq!(ctx.active_id(), "dashboard");
        });
    }

    #[test]
    fn test_every_menu_item_is_selectable() {
        with_context(|ctx| {
            for role in UserRole::all() {
                ctx.set_role(role);
                for item in ctx.items_untracked() {
                    ctx.select(&item.id).unwrap();
                    assert_eq!(ctx.active_id(), item.id);
                }
            }
        });
    }

    #[test]
    fn test_restore_active_goes_through_select() {
        with_context(|ctx| {
            ctx.set_role(UserRole::Employee);

            ctx.restore_active("?active=permissions");
            assert_eq!(ctx.active_id(), "dashboard");

            ctx.restore_active("?active=stock");
            assert_eq!(ctx.active_id(), "stock");

            ctx.restore_active("");
            assert_eq!(ctx.active_id(), "stock");
        });
    }

    #[test]
    fn test_role_change_reconciles_active_item() {
        with_context(|ctx| {
            ctx.set_role(UserRole::Administrator);
            ctx.select("personnel").unwrap();

            ctx.set_role(UserRole::Employee);
            assert_eq!(ctx.active_id(), "dashboard");

            ctx.select("stock").unwrap();
            ctx.set_role(UserRole::Administrator);
            assert_eq!(ctx.active_id(), "stock");
        });
    }

    #[test]
    fn test_clear_role_resets_navigation() {
        with_context(|ctx| {
            ctx.set_role(UserRole::Administrator);
            ctx.select("suppliers").unwrap();

            ctx.clear_role();
            assert_eq!(ctx.role.get_untracked(), None);
            assert!(ctx.items_untracked().is_empty());
            assert_eq!(ctx.active_id(), "dashboard");
        });
    }

    #[test]
    fn test_label_and_icon_lookup() {
        with_context(|ctx| {
            assert_eq!(ctx.label_for("my_commissions"), "My Commissions");
            assert_eq!(ctx.label_for("unknown"), "unknown");
            assert_eq!(ctx.icon_for("stock"), "inventory");
            assert_eq!(ctx.icon_for("unknown"), "");
        });
    }
}
