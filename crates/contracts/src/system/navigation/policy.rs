use serde::Deserialize;
use std::collections::HashSet;

use super::{NavigationError, NavigationItem, DASHBOARD_ID};
use crate::enums::user_role::UserRole;

/// Policy table embedded in the binary
const EMBEDDED_POLICY: &str = include_str!("navigation.toml");

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PolicyDocument {
    items: Vec<NavigationItem>,
    menus: RoleMenus,
}

/// Ordered item ids per role, not including the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
struct RoleMenus {
    administrator: Vec<String>,
    employee: Vec<String>,
    client: Vec<String>,
}

impl RoleMenus {
    fn for_role(&self, role: UserRole) -> &[String] {
        match role {
            UserRole::Administrator => &self.administrator,
            UserRole::Employee => &self.employee,
            UserRole::Client => &self.client,
        }
    }
}

/// Declarative role → menu table.
///
/// Built once from a TOML document and validated on load, so that
/// [`NavigationPolicy::resolve`] cannot fail for a known role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationPolicy {
    catalog: Vec<NavigationItem>,
    menus: RoleMenus,
}

impl NavigationPolicy {
    /// Load the policy shipped with the application
    pub fn embedded() -> Result<Self, NavigationError> {
        Self::from_toml(EMBEDDED_POLICY)
    }

    /// Parse and validate a policy document
    pub fn from_toml(source: &str) -> Result<Self, NavigationError> {
        let document: PolicyDocument = toml::from_str(source)
            .map_err(|e| NavigationError::InvalidPolicy(e.message().to_string()))?;

        let mut seen = HashSet::new();
        for item in &document.items {
            if !seen.insert(item.id.as_str()) {
                return Err(NavigationError::InvalidPolicy(format!(
                    "duplicate item id {:?}",
                    item.id
                )));
            }
        }
        if !seen.contains(DASHBOARD_ID) {
            return Err(NavigationError::InvalidPolicy(format!(
                "catalog has no {:?} item",
                DASHBOARD_ID
            )));
        }

        for role in UserRole::all() {
            let mut listed = HashSet::new();
            for id in document.menus.for_role(role) {
                if id == DASHBOARD_ID {
                    return Err(NavigationError::InvalidPolicy(format!(
                        "menu {:?} lists {:?}, which is always first",
                        role.code(),
                        DASHBOARD_ID
                    )));
                }
                if !seen.contains(id.as_str()) {
                    return Err(NavigationError::InvalidPolicy(format!(
                        "menu {:?} references unknown item {:?}",
                        role.code(),
                        id
                    )));
                }
                if !listed.insert(id.as_str()) {
                    return Err(NavigationError::InvalidPolicy(format!(
                        "menu {:?} lists {:?} twice",
                        role.code(),
                        id
                    )));
                }
            }
        }

        Ok(Self {
            catalog: document.items,
            menus: document.menus,
        })
    }

    /// Ordered menu for a role; the dashboard is always the first entry.
    pub fn resolve(&self, role: UserRole) -> Vec<NavigationItem> {
        std::iter::once(DASHBOARD_ID)
            .chain(self.menus.for_role(role).iter().map(String::as_str))
            .filter_map(|id| self.item(id).cloned())
            .collect()
    }

    /// Resolve a role code as supplied by the session
    pub fn resolve_role(&self, raw: &str) -> Result<Vec<NavigationItem>, NavigationError> {
        let role: UserRole = raw.parse()?;
        Ok(self.resolve(role))
    }

    pub fn item(&self, id: &str) -> Option<&NavigationItem> {
        self.catalog.iter().find(|item| item.id == id)
    }
}
