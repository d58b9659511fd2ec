pub mod dashboard;
pub mod recent_sales;

pub use dashboard::OverviewDashboard;
