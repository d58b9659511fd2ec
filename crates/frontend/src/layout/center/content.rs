use contracts::system::navigation::DASHBOARD_ID;
use leptos::prelude::*;

use super::section::SectionPage;
use crate::dashboards::d100_overview::ui::OverviewDashboard;
use crate::layout::global_context::AppGlobalContext;

/// Swaps the content area to match the active navigation item.
#[component]
pub fn Content() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    move || {
        let active = ctx.active_id();
        if active == DASHBOARD_ID {
            view! { <OverviewDashboard /> }.into_any()
        } else {
            let title = ctx.label_for(&active);
            let icon_name = ctx.icon_for(&active);
            view! { <SectionPage title=title icon_name=icon_name /> }.into_any()
        }
    }
}
