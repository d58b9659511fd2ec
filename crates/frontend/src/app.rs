use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::system::auth::context::AuthProvider;
use crate::system::pages::access_error::ConfigErrorPage;
use contracts::system::navigation::NavigationPolicy;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Without a valid policy there is no safe menu to show.
    let policy = match NavigationPolicy::embedded() {
        Ok(policy) => policy,
        Err(e) => {
            log::error!("navigation policy failed to load: {}", e);
            return view! { <ConfigErrorPage message=e.to_string() /> }.into_any();
        }
    };

    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new(policy));

    view! {
        <ConfigProvider>
            <AuthProvider>
                <AppShell />
            </AuthProvider>
        </ConfigProvider>
    }
    .into_any()
}
