//! Screens shown instead of the menu when navigation cannot be trusted.

use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};

/// Stored session carries a role outside the known set.
#[component]
pub fn InvalidRolePage(message: String) -> impl IntoView {
    let (_, set_session) = use_auth();

    view! {
        <div class="login-container">
            <div class="login-box access-error">
                {icon("alert-triangle")}
                <h2>"Access not configured"</h2>
                <div class="error-message">{message}</div>
                <p>"Your session does not carry a known role. Sign in again or contact an administrator."</p>
                <button class="btn-primary" on:click=move |_| do_logout(set_session)>
                    "Sign out"
                </button>
            </div>
        </div>
    }
}

/// Navigation policy failed to load; nothing can be rendered.
#[component]
pub fn ConfigErrorPage(message: String) -> impl IntoView {
    view! {
        <div class="login-container">
            <div class="login-box access-error">
                {icon("alert-triangle")}
                <h2>"Configuration error"</h2>
                <div class="error-message">{message}</div>
            </div>
        </div>
    }
}
