use thiserror::Error;

/// Errors raised while resolving the role menu or changing the active item
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("Unknown role: {0:?}")]
    InvalidRole(String),

    #[error("Navigation item {id:?} is not available for the current role")]
    InvalidSelection { id: String },

    #[error("Invalid navigation policy: {0}")]
    InvalidPolicy(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            NavigationError::InvalidRole("guest".to_string()).to_string(),
            "Unknown role: \"guest\""
        );
        assert_eq!(
            NavigationError::InvalidSelection {
                id: "personnel".to_string()
            }
            .to_string(),
            "Navigation item \"personnel\" is not available for the current role"
        );
        assert_eq!(
            NavigationError::InvalidPolicy("missing dashboard".to_string()).to_string(),
            "Invalid navigation policy: missing dashboard"
        );
    }
}
