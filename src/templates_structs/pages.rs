use askama::Template;

use super::PageContext;

/// Books, Members and Transactions share one layout until they grow real content.
#[derive(Template)]
#[template(path = "placeholder.html")]
pub struct PlaceholderTemplate {
    pub ctx: PageContext,
    pub title: &'static str,
    pub blurb: &'static str,
}

#[derive(Template)]
#[template(path = "profile.html")]
pub struct ProfileTemplate {
    pub ctx: PageContext,
    pub email: String,
}
