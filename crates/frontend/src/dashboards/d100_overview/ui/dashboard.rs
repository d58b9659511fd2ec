use contracts::dashboards::d100_overview::static_overview;
use leptos::prelude::*;

use super::recent_sales::RecentSales;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;

/// Overview dashboard: summary cards and the latest sales.
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let overview = static_overview();
    let total = overview.recent_sales_total();

    view! {
        <div class="page">
            <PageHeader
                title="Dashboard"
                subtitle=overview.period.clone()
                icon_name="layout-dashboard"
            />

            <div class="stat-grid">
                {overview.stats.into_iter().map(|stat| {
                    let status = stat.status();
                    view! {
                        <StatCard
                            label=stat.label
                            icon_name=stat.icon
                            value=stat.value
                            format=stat.format
                            status=status
                            change_percent=stat.change_percent
                            subtitle=stat.subtitle
                        />
                    }
                }).collect_view()}
            </div>

            <RecentSales sales=overview.recent_sales total=total />
        </div>
    }
}
