use actix_web::dev::HttpServiceFactory;
use actix_web::middleware::from_fn;
use actix_web::{HttpResponse, Route, web};
use askama::Template;

use crate::auth;
use crate::config::AppName;
use crate::errors::see_other;
use crate::templates_structs::NotFoundTemplate;

pub mod auth_handlers;
pub mod dashboard;
pub mod page_handlers;

/// All console routes. Shared state (`ApiClient`, `RateLimiter`, `AppName`)
/// and the session middleware are attached by the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Public routes
        .route("/login", web::get().to(auth_handlers::login_page))
        .route("/login", web::post().to(auth_handlers::login_submit))
        // Root redirect
        .route("/", web::get().to(|| async { see_other("/dashboard") }))
        // Protected routes
        .service(protected("/dashboard", web::get().to(dashboard::index)))
        .service(protected(dashboard::PANEL_URL, web::get().to(dashboard::panel)))
        .service(protected("/books", web::get().to(page_handlers::books)))
        .service(protected("/members", web::get().to(page_handlers::members)))
        .service(protected("/transactions", web::get().to(page_handlers::transactions)))
        .service(protected("/profile", web::get().to(page_handlers::profile)))
        .service(protected("/logout", web::post().to(auth_handlers::logout)))
        // Unknown paths are a 404 whether or not the visitor is signed in
        .default_service(web::to(not_found));
}

/// A single route behind `require_auth`.
fn protected(path: &'static str, route: Route) -> impl HttpServiceFactory + 'static {
    web::resource(path)
        .route(route)
        .wrap(from_fn(auth::middleware::require_auth))
}

pub async fn not_found(app_name: Option<web::Data<AppName>>) -> HttpResponse {
    let app_name = app_name.map(|a| a.0.clone()).unwrap_or_else(|| AppName::default().0);
    let body = NotFoundTemplate { app_name }
        .render()
        .unwrap_or_else(|_| "Not Found".to_string());
    HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(body)
}
