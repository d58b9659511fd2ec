use contracts::enums::user_role::UserRole;
use leptos::prelude::*;

use crate::system::auth::context::{do_login, use_auth};

/// Role behind a `<option value>` of the role picker.
fn role_from_option(value: &str) -> Option<UserRole> {
    UserRole::from_code(value)
}

/// Sign-in page.
///
/// Identity is owned by an external provider; this page only hands the
/// chosen role over to the session.
#[component]
pub fn LoginPage() -> impl IntoView {
    let (selected, set_selected) = signal(UserRole::Administrator);

    let (_, set_session) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        do_login(selected.get(), set_session);
    };

    let on_change = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        match role_from_option(&value) {
            Some(role) => set_selected.set(role),
            None => log::warn!("unexpected role option {:?}", value),
        }
    };

    let go_back = move |_| {
        set_session.update(|s| s.signing_in = false);
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Business Manager"</h1>
                <h2>"Sign in"</h2>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="role">"Role"</label>
                        <select
                            id="role"
                            on:change=on_change
                            prop:value=move || selected.get().code()
                        >
                            {UserRole::all().into_iter().map(|role| {
                                view! {
                                    <option value=role.code()>{role.display_name()}</option>
                                }
                            }).collect_view()}
                        </select>
                    </div>

                    <button type="submit" class="btn-primary">
                        "Continue"
                    </button>
                </form>

                <button class="btn-link" on:click=go_back>
                    "Back to home"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_offered_option_maps_to_its_role() {
        for role in UserRole::all() {
            assert_eq!(role_from_option(role.code()), Some(role));
        }
        assert_eq!(role_from_option(""), None);
        assert_eq!(role_from_option("Employee"), None);
    }
}
