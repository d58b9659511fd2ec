//! Role-aware primary navigation.
//!
//! - [`NavigationPolicy`] resolves a role to its ordered menu
//! - [`NavigationState`] tracks the active destination of that menu

pub mod error;
pub mod policy;
pub mod state;

pub use error::NavigationError;
pub use policy::NavigationPolicy;
pub use state::NavigationState;

use serde::{Deserialize, Serialize};

/// Id of the entry every menu starts with
pub const DASHBOARD_ID: &str = "dashboard";

/// One selectable destination of the primary menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavigationItem {
    pub id: String,
    pub label: String,
    /// Icon name understood by the frontend icon set
    pub icon: String,
}
