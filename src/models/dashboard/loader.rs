use crate::api::{ApiClient, ApiError};

use super::charts::{self, ChartData};
use super::types::{ActivityView, DashboardStats};

pub const FETCH_FAILED: &str = "Failed to fetch dashboard data";

/// Everything the dashboard panel shows after a successful load.
#[derive(Debug, Clone, Default)]
pub struct DashboardData {
    pub stats: DashboardStats,
    pub transactions: Option<ChartData>,
    pub categories: Option<ChartData>,
    pub activities: Vec<ActivityView>,
}

/// Outcome of one panel load. The shell page is the loading state; the
/// panel fragment is always one of these two.
#[derive(Debug, Clone)]
pub enum DashboardState {
    Ready(DashboardData),
    /// Any of the four reads failed. Nothing from the batch is kept.
    Failed,
}

impl DashboardState {
    /// What the panel shows: fetched data, or the empty view after a failure.
    pub fn data(&self) -> DashboardData {
        match self {
            DashboardState::Ready(data) => data.clone(),
            DashboardState::Failed => DashboardData::default(),
        }
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            DashboardState::Ready(_) => None,
            DashboardState::Failed => Some(FETCH_FAILED),
        }
    }
}

/// Issue the four dashboard reads concurrently and shape the results.
pub async fn fetch_dashboard(client: &ApiClient, token: Option<&str>) -> Result<DashboardData, ApiError> {
    let (stats, transactions, categories, activities) = tokio::try_join!(
        client.dashboard_stats(token),
        client.transaction_chart(token),
        client.category_chart(token),
        client.activities(token),
    )?;

    Ok(DashboardData {
        stats: DashboardStats::from(stats),
        transactions: Some(charts::transaction_chart(&transactions)),
        categories: Some(charts::category_chart(&categories)),
        activities: activities.into_iter().map(ActivityView::from).collect(),
    })
}

/// `fetch_dashboard`, with every failure collapsed into `Failed`.
pub async fn load_dashboard(client: &ApiClient, token: Option<&str>) -> DashboardState {
    match fetch_dashboard(client, token).await {
        Ok(data) => DashboardState::Ready(data),
        Err(e) => {
            log::error!("Dashboard load failed: {e}");
            DashboardState::Failed
        }
    }
}
