mod charts;
mod loader;
mod types;

pub use self::charts::{
    CATEGORY_PALETTE, ChartData, ChartSeries, Colors, MONTHS, UNCATEGORIZED, category_chart, month_label,
    transaction_chart,
};
pub use self::loader::{DashboardData, DashboardState, FETCH_FAILED, fetch_dashboard, load_dashboard};
pub use self::types::{
    ActivityView, DashboardStats, SYSTEM_ACTOR, StatCard, format_count, format_timestamp,
};
