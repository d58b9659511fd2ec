//! Application Shell - root components of the application
//!
//! Contains:
//! - `AppShell` - session gate (landing, sign-in, access error or MainLayout)
//! - `MainLayout` - main layout (TopHeader + Sidebar + Content)

use crate::layout::center::Content;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::access_error::InvalidRolePage;
use crate::system::pages::landing::LandingPage;
use crate::system::pages::login::LoginPage;
use contracts::enums::user_role::UserRole;
use leptos::prelude::*;

/// Main application layout for a signed-in role.
///
/// Resolves the menu for `role` and syncs the active item with the URL
/// (`?active=...`).
#[component]
fn MainLayout(role: UserRole) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    ctx.set_role(role);
    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Content /> }.into_any()
        />
    }
}

/// Application shell - session gate component.
///
/// Shows:
/// - `LandingPage` / `LoginPage` without a session
/// - `InvalidRolePage` when the session role is unknown
/// - `MainLayout` for a known role
#[component]
pub fn AppShell() -> impl IntoView {
    let (session, _) = use_auth();

    move || {
        let state = session.get();
        match state.role() {
            None if state.signing_in => view! { <LoginPage /> }.into_any(),
            None => view! { <LandingPage /> }.into_any(),
            Some(Ok(role)) => view! { <MainLayout role=role /> }.into_any(),
            Some(Err(e)) => {
                log::error!("refusing to render navigation: {}", e);
                view! { <InvalidRolePage message=e.to_string() /> }.into_any()
            }
        }
    }
}
