use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonSize};

use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

/// (icon, title, text)
const FEATURES: &[(&str, &str, &str)] = &[
    (
        "users",
        "Clients",
        "Keep every customer, contact and purchase history in one place.",
    ),
    (
        "cash",
        "Sales",
        "Record sales in seconds and follow revenue as it comes in.",
    ),
    (
        "inventory",
        "Stock",
        "Know what is on the shelf and what needs reordering.",
    ),
    (
        "purchases",
        "Purchases",
        "Track orders to suppliers from request to delivery.",
    ),
    (
        "percent",
        "Commissions",
        "Commissions are calculated for each salesperson automatically.",
    ),
    (
        "shield",
        "Permissions",
        "Administrators, employees and clients each see only what they need.",
    ),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    let (_, set_session) = use_auth();

    let open_sign_in = move |_| {
        set_session.update(|s| s.signing_in = true);
    };

    view! {
        <div class="landing">
            <header class="landing__nav">
                <span class="landing__brand">"Business Manager"</span>
                <Button appearance=ButtonAppearance::Subtle on_click=open_sign_in>
                    "Sign in"
                </Button>
            </header>

            <section class="landing__hero">
                <h1>"Run your business from one place"</h1>
                <p>
                    "Clients, sales, purchases, stock and commissions, with a menu that fits every role on your team."
                </p>
                <Button
                    size=ButtonSize::Large
                    appearance=ButtonAppearance::Primary
                    on_click=open_sign_in
                >
                    "Get started"
                </Button>
            </section>

            <section class="landing__features">
                {FEATURES.iter().map(|(icon_name, title, text)| {
                    view! {
                        <div class="landing__feature">
                            <div class="landing__feature-icon">{icon(icon_name)}</div>
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </div>
                    }
                }).collect_view()}
            </section>

            <footer class="landing__footer">
                "© 2026 Business Manager"
            </footer>
        </div>
    }
}
