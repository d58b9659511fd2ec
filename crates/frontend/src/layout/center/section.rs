use leptos::prelude::*;

use crate::shared::components::page_header::PageHeader;

/// Content page for menu entries without a dedicated screen yet.
#[component]
pub fn SectionPage(title: String, icon_name: String) -> impl IntoView {
    view! {
        <div class="page">
            <PageHeader title=title.clone() icon_name=icon_name />
            <div class="page__empty">
                <p>{format!("{} will appear here once it is connected to a data source.", title)}</p>
            </div>
        </div>
    }
}
