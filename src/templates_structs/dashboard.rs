use askama::Template;

use crate::models::dashboard::{ActivityView, StatCard};

use super::PageContext;

/// Page shell; shows the spinner until the panel fragment arrives.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub ctx: PageContext,
    pub panel_url: &'static str,
}

#[derive(Template)]
#[template(path = "dashboard_panel.html")]
pub struct DashboardPanelTemplate {
    pub error: Option<&'static str>,
    pub stat_cards: Vec<StatCard>,
    /// Pre-escaped JSON for the inline chart data blocks.
    pub transaction_chart_json: Option<String>,
    pub category_chart_json: Option<String>,
    pub activities: Vec<ActivityView>,
}
