use contracts::enums::user_role::UserRole;
use contracts::system::navigation::NavigationError;
use leptos::prelude::*;

use super::storage;

/// Session as handed over by the identity provider.
///
/// `role_code` is kept raw: a stored value outside the known roles must
/// surface as an error instead of silently mapping to some menu.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub role_code: Option<String>,
    /// Signed-out visitor asked for the sign-in page
    pub signing_in: bool,
}

impl SessionState {
    pub fn role(&self) -> Option<Result<UserRole, NavigationError>> {
        self.role_code.as_deref().map(str::parse)
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let (session, set_session) = signal(SessionState {
        role_code: storage::get_role(),
        signing_in: false,
    });

    provide_context(session);
    provide_context(set_session);

    children()
}

/// Hook to access session state
pub fn use_auth() -> (ReadSignal<SessionState>, WriteSignal<SessionState>) {
    let session =
        use_context::<ReadSignal<SessionState>>().expect("AuthProvider not found in component tree");
    let set_session =
        use_context::<WriteSignal<SessionState>>().expect("AuthProvider not found in component tree");

    (session, set_session)
}

/// Helper: start a session for a role
pub fn do_login(role: UserRole, set_session: WriteSignal<SessionState>) {
    log::info!("signed in as {}", role);
    storage::save_role(role.code());
    set_session.set(SessionState {
        role_code: Some(role.code().to_string()),
        signing_in: false,
    });
}

/// Helper: end the session and go back to the landing page
pub fn do_logout(set_session: WriteSignal<SessionState>) {
    log::info!("signed out");
    storage::clear_role();
    set_session.set(SessionState::default());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_role_parsing() {
        let signed_out = SessionState::default();
        assert!(signed_out.role().is_none());

        let employee = SessionState {
            role_code: Some("employee".to_string()),
            signing_in: false,
        };
        assert_eq!(employee.role(), Some(Ok(UserRole::Employee)));

        let tampered = SessionState {
            role_code: Some("root".to_string()),
            signing_in: false,
        };
        assert_eq!(
            tampered.role(),
            Some(Err(NavigationError::InvalidRole("root".to_string())))
        );
    }
}
