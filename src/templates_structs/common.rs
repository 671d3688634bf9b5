use askama::Template;

use crate::auth::session::Notice;

/// A demo-credential row on the login page; `index` feeds `?demo=`.
pub struct DemoOption {
    pub index: usize,
    pub role: &'static str,
    pub email: &'static str,
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub app_name: String,
    pub csrf_token: String,
    pub notice: Option<Notice>,
    pub email: String,
    pub password: String,
    pub demos: Vec<DemoOption>,
    pub version: &'static str,
}

#[derive(Template)]
#[template(path = "errors/404.html")]
pub struct NotFoundTemplate {
    pub app_name: String,
}
