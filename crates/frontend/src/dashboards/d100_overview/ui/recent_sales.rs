use contracts::dashboards::d100_overview::dto::RecentSale;
use contracts::shared::indicators::ValueFormat;
use leptos::prelude::*;

use crate::shared::components::stat_card::format_value;
use crate::shared::date_utils::format_date;

#[component]
pub fn RecentSales(sales: Vec<RecentSale>, total: f64) -> impl IntoView {
    let usd = ValueFormat::Money {
        symbol: "$".to_string(),
    };
    let count = sales.len();
    let subtitle = format!(
        "{} sales for {}",
        count,
        format_value(total, &usd)
    );

    view! {
        <div class="recent-sales">
            <div class="recent-sales__header">
                <h3>"Recent Sales"</h3>
                <span class="recent-sales__subtitle">{subtitle}</span>
            </div>
            <ul class="recent-sales__list">
                {sales.into_iter().map(|sale| {
                    let amount = format!("+{}", format_value(sale.amount, &usd));
                    let date = format_date(&sale.sold_on);
                    let initials = sale.initials();
                    view! {
                        <li class="recent-sales__row" data-sale-id=sale.id.to_string()>
                            <div class="recent-sales__avatar">{initials}</div>
                            <div class="recent-sales__client">
                                <div class="recent-sales__name">{sale.client_name}</div>
                                <div class="recent-sales__email">{sale.client_email}</div>
                            </div>
                            <div class="recent-sales__date">{date}</div>
                            <div class="recent-sales__amount">{amount}</div>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </div>
    }
}
