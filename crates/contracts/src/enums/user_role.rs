use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::system::navigation::NavigationError;

/// Permission class of the signed-in session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Administrator,
    Employee,
    Client,
}

impl UserRole {
    /// Code used by the identity provider and in session storage
    pub fn code(&self) -> &'static str {
        match self {
            UserRole::Administrator => "administrator",
            UserRole::Employee => "employee",
            UserRole::Client => "client",
        }
    }

    /// Human readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Administrator => "Administrator",
            UserRole::Employee => "Employee",
            UserRole::Client => "Client",
        }
    }

    pub fn all() -> Vec<UserRole> {
        vec![UserRole::Administrator, UserRole::Employee, UserRole::Client]
    }

    /// Exact match on the lowercase code; anything else is rejected.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "administrator" => Some(UserRole::Administrator),
            "employee" => Some(UserRole::Employee),
            "client" => Some(UserRole::Client),
            _ => None,
        }
    }
}

impl FromStr for UserRole {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| NavigationError::InvalidRole(s.to_string()))
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for role in UserRole::all() {
            assert_eq!(role.code().parse::<UserRole>().unwrap(), role);
        }
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        for raw in ["", "admin", "Administrator", " client", "guest", "superuser"] {
            match raw.parse::<UserRole>() {
                Err(NavigationError::InvalidRole(value)) => assert_eq!(value, raw),
                other => panic!("expected InvalidRole for {:?}, got {:?}", raw, other),
            }
        }
    }

    #[test]
    fn test_serde_uses_lowercase_codes() {
        let json = serde_json::to_string(&UserRole::Employee).unwrap();
        assert_eq!(json, "\"employee\"");
        let role: UserRole = serde_json::from_str("\"client\"").unwrap();
        assert_eq!(role, UserRole::Client);
        assert!(serde_json::from_str::<UserRole>("\"owner\"").is_err());
    }
}
