//! Sidebar with the primary menu resolved for the current role.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use contracts::system::navigation::NavigationItem;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <nav class="app-sidebar__content">
            <For
                each=move || ctx.items()
                key=|item| item.id.clone()
                children=move |item: NavigationItem| {
                    let item_id = StoredValue::new(item.id.clone());
                    view! {
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || {
                                item_id.with_value(|id| ctx.is_active(id))
                            }
                            style:padding-left="12px"
                            on:click=move |_| {
                                if let Err(e) = ctx.select(&item_id.get_value()) {
                                    log::error!("sidebar out of sync with resolved menu: {}", e);
                                }
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(&item.icon)}
                                <span>{item.label}</span>
                            </div>
                        </div>
                    }
                }
            />
        </nav>
    }
}
