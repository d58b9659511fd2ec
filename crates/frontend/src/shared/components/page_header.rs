use leptos::prelude::*;

use crate::shared::icons::icon;

/// Header shown at the top of every content page
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,

    #[prop(optional, into)] subtitle: MaybeProp<String>,

    /// Icon name from the icon() helper
    #[prop(optional, into)]
    icon_name: Option<String>,

    /// Actions on the right
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                {icon_name.map(|name| view! {
                    <div class="page-header__icon">{icon(&name)}</div>
                })}
                <div class="page-header__text">
                    <h1 class="page-header__title">{title}</h1>
                    {move || subtitle.get().map(|s| view! {
                        <div class="page-header__subtitle">{s}</div>
                    })}
                </div>
            </div>
            <div class="page-header__actions">
                {children.map(|c| c())}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_builds_with_and_without_actions() {
        Owner::new().with(|| {
            let _bare = view! { <PageHeader title="Dashboard" icon_name="layout-dashboard" /> };
            let _with_actions = view! {
                <PageHeader title="Sales" subtitle="This month">
                    <button>"Export"</button>
                </PageHeader>
            };
        });
    }
}
