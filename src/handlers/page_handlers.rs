use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::auth::session::get_user;
use crate::config::AppName;
use crate::errors::{AppError, render};
use crate::templates_structs::{PageContext, PlaceholderTemplate, ProfileTemplate};

fn placeholder(
    session: &Session,
    app_name: &AppName,
    path: &str,
    title: &'static str,
    blurb: &'static str,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(session, &app_name.0, path)?;
    render(PlaceholderTemplate { ctx, title, blurb })
}

pub async fn books(app_name: web::Data<AppName>, session: Session) -> Result<HttpResponse, AppError> {
    placeholder(&session, &app_name, "/books", "Books", "Manage and browse books here.")
}

pub async fn members(app_name: web::Data<AppName>, session: Session) -> Result<HttpResponse, AppError> {
    placeholder(&session, &app_name, "/members", "Members", "Manage library members here.")
}

pub async fn transactions(app_name: web::Data<AppName>, session: Session) -> Result<HttpResponse, AppError> {
    placeholder(
        &session,
        &app_name,
        "/transactions",
        "Transactions",
        "Track book issue and return transactions here.",
    )
}

pub async fn profile(app_name: web::Data<AppName>, session: Session) -> Result<HttpResponse, AppError> {
    let email = get_user(&session)?.email;
    let ctx = PageContext::build(&session, &app_name.0, "/profile")?;
    render(ProfileTemplate { ctx, email })
}
