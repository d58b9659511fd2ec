use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::indicators::{IndicatorStatus, ValueFormat};

/// Overview dashboard payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverviewResponse {
    /// Reporting period label, e.g. "October 2026"
    pub period: String,
    pub stats: Vec<SummaryStat>,
    /// Newest first
    pub recent_sales: Vec<RecentSale>,
}

impl OverviewResponse {
    pub fn recent_sales_total(&self) -> f64 {
        self.recent_sales.iter().map(|s| s.amount).sum()
    }
}

/// One summary card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryStat {
    pub id: String,
    pub label: String,
    pub icon: String,
    pub value: f64,
    pub format: ValueFormat,
    /// Change relative to the previous period, in percent
    pub change_percent: Option<f64>,
    pub subtitle: Option<String>,
}

impl SummaryStat {
    pub fn status(&self) -> IndicatorStatus {
        IndicatorStatus::from_change(self.change_percent)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentSale {
    pub id: Uuid,
    pub client_name: String,
    pub client_email: String,
    pub amount: f64,
    /// Format "YYYY-MM-DD"
    pub sold_on: String,
}

impl RecentSale {
    pub fn sold_on_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.sold_on, "%Y-%m-%d").ok()
    }

    /// Two-letter avatar text, e.g. "Olivia Martin" -> "OM"
    pub fn initials(&self) -> String {
        self.client_name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}
