// Template context structures for Askama templates, organized by page.

use actix_session::Session;

use crate::auth::csrf;
use crate::auth::session::{Notice, get_user, take_flash};
use crate::errors::AppError;
use crate::models::nav_item::{self, NavItem};

/// Common context shared by all authenticated pages.
/// Templates access these as `ctx.user_name`, `ctx.nav`, etc.
pub struct PageContext {
    pub user_name: String,
    pub user_role: String,
    pub avatar_initial: String,
    pub notice: Option<Notice>,
    pub nav: Vec<NavItem>,
    pub app_name: String,
    pub csrf_token: String,
}

impl PageContext {
    pub fn build(session: &Session, app_name: &str, current_path: &str) -> Result<Self, AppError> {
        let user = get_user(session)?;
        let notice = take_flash(session);
        let csrf_token = csrf::get_or_create_token(session);
        let display = if user.name.is_empty() { user.email.clone() } else { user.name.clone() };
        let avatar_initial = display.chars().next().unwrap_or('?').to_uppercase().to_string();
        Ok(Self {
            user_name: display,
            user_role: user.role,
            avatar_initial,
            notice,
            nav: nav_item::find_navigation(current_path),
            app_name: app_name.to_string(),
            csrf_token,
        })
    }
}

mod common;
mod dashboard;
mod pages;

pub use self::common::{DemoOption, LoginTemplate, NotFoundTemplate};
pub use self::dashboard::{DashboardPanelTemplate, DashboardTemplate};
pub use self::pages::{PlaceholderTemplate, ProfileTemplate};
