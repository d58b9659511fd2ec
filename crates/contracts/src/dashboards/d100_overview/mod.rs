//! Overview dashboard shown on the `dashboard` navigation entry.
//!
//! Figures are static until a data source is wired in.

pub mod dto;

use uuid::Uuid;

use crate::shared::indicators::ValueFormat;
use dto::{OverviewResponse, RecentSale, SummaryStat};

fn stat(
    id: &str,
    label: &str,
    icon: &str,
    value: f64,
    format: ValueFormat,
    change_percent: f64,
    subtitle: Option<&str>,
) -> SummaryStat {
    SummaryStat {
        id: id.to_string(),
        label: label.to_string(),
        icon: icon.to_string(),
        value,
        format,
        change_percent: Some(change_percent),
        subtitle: subtitle.map(str::to_string),
    }
}

fn sale(id: u128, client_name: &str, client_email: &str, amount: f64, sold_on: &str) -> RecentSale {
    RecentSale {
        id: Uuid::from_u128(id),
        client_name: client_name.to_string(),
        client_email: client_email.to_string(),
        amount,
        sold_on: sold_on.to_string(),
    }
}

pub fn static_overview() -> OverviewResponse {
    let usd = || ValueFormat::Money {
        symbol: "$".to_string(),
    };

    OverviewResponse {
        period: "October 2026".to_string(),
        stats: vec![
            stat(
                "total_revenue",
                "Total Revenue",
                "dollar-sign",
                45_231.89,
                usd(),
                20.1,
                Some("from last month"),
            ),
            stat(
                "sales",
                "Sales",
                "cash",
                2_350.0,
                ValueFormat::Integer,
                18.0,
                Some("from last month"),
            ),
            stat(
                "active_clients",
                "Active Clients",
                "users",
                573.0,
                ValueFormat::Integer,
                2.4,
                Some("since last week"),
            ),
            stat(
                "stock_items",
                "Stock Items",
                "inventory",
                1_203.0,
                ValueFormat::Integer,
                -4.3,
                Some("12 below reorder level"),
            ),
        ],
        recent_sales: vec![
            sale(0x01, "Olivia Martin", "olivia.martin@email.com", 1_999.00, "2026-10-17"),
            sale(0x02, "Jackson Lee", "jackson.lee@email.com", 39.00, "2026-10-16"),
            sale(0x03, "Isabella Nguyen", "isabella.nguyen@email.com", 299.00, "2026-10-15"),
            sale(0x04, "William Kim", "will@email.com", 99.00, "2026-10-14"),
            sale(0x05, "Sofia Davis", "sofia.davis@email.com", 39.00, "2026-10-12"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::indicators::IndicatorStatus;

    #[test]
    fn test_stat_ids_are_unique() {
        let overview = static_overview();
        let mut ids: Vec<&str> = overview.stats.iter().map(|s| s.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), overview.stats.len());
    }

    #[test]
    fn test_recent_sales_are_newest_first() {
        let overview = static_overview();
        let dates: Vec<_> = overview
            .recent_sales
            .iter()
            .map(|s| s.sold_on_date().expect("valid date"))
            .collect();
        assert!(dates.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_recent_sales_total() {
        let overview = static_overview();
        assert!((overview.recent_sales_total() - 2_475.0).abs() < 1e-9);
    }

    #[test]
    fn test_stock_decline_is_flagged() {
        let overview = static_overview();
        let stock = overview
            .stats
            .iter()
            .find(|s| s.id == "stock_items")
            .unwrap();
        assert_eq!(stock.status(), IndicatorStatus::Bad);
    }

    #[test]
    fn test_initials() {
        let overview = static_overview();
        assert_eq!(overview.recent_sales[0].initials(), "OM");
        assert_eq!(overview.recent_sales[3].initials(), "WK");
    }
}
