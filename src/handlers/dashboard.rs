use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::api::ApiClient;
use crate::auth::session::get_token;
use crate::config::AppName;
use crate::errors::{AppError, render};
use crate::models::dashboard::{DashboardState, load_dashboard};
use crate::templates_structs::{DashboardPanelTemplate, DashboardTemplate, PageContext};

pub const PANEL_URL: &str = "/dashboard/panel";

/// Page shell with the loading spinner; the panel is fetched afterwards.
pub async fn index(
    app_name: web::Data<AppName>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, &app_name.0, "/dashboard")?;
    render(DashboardTemplate { ctx, panel_url: PANEL_URL })
}

/// Stats, charts and activity feed. Backend failures still render a panel.
pub async fn panel(
    api: web::Data<ApiClient>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let token = get_token(&session);
    let state = load_dashboard(&api, token.as_deref()).await;
    render(panel_template(&state))
}

pub fn panel_template(state: &DashboardState) -> DashboardPanelTemplate {
    let data = state.data();
    DashboardPanelTemplate {
        error: state.error_message(),
        stat_cards: data.stats.cards(),
        transaction_chart_json: data.transactions.as_ref().map(|c| c.to_script_json()),
        category_chart_json: data.categories.as_ref().map(|c| c.to_script_json()),
        activities: data.activities,
    }
}
