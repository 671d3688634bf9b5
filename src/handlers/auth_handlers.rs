use std::net::{IpAddr, Ipv4Addr};

use actix_session::Session;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;

use crate::api::{ApiClient, LOGIN_FAILED, LoginOutcome};
use crate::auth::session::{self, Notice};
use crate::auth::{csrf, rate_limit::RateLimiter};
use crate::config::AppName;
use crate::errors::{AppError, render, see_other};
use crate::models::demo::{self, DEMO_CREDENTIALS};
use crate::templates_structs::{DemoOption, LoginTemplate};

const RATE_LIMITED: &str = "Too many failed login attempts. Please try again later.";

#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub csrf_token: String,
}

#[derive(Deserialize)]
pub struct LoginQuery {
    /// Index into the demo credential list; fills the form, never submits it.
    pub demo: Option<String>,
}

#[derive(Deserialize)]
pub struct CsrfOnly {
    pub csrf_token: String,
}

fn login_template(
    session: &Session,
    app_name: &AppName,
    notice: Option<Notice>,
    email: String,
    password: String,
) -> LoginTemplate {
    let demos = DEMO_CREDENTIALS
        .iter()
        .enumerate()
        .map(|(index, cred)| DemoOption { index, role: cred.role, email: cred.email })
        .collect();
    LoginTemplate {
        app_name: app_name.0.clone(),
        csrf_token: csrf::get_or_create_token(session),
        notice,
        email,
        password,
        demos,
        version: env!("CARGO_PKG_VERSION"),
    }
}

pub async fn login_page(
    app_name: web::Data<AppName>,
    session: Session,
    query: web::Query<LoginQuery>,
) -> Result<HttpResponse, AppError> {
    if session::is_signed_in(&session) {
        return Ok(see_other("/dashboard"));
    }

    let (email, password) = query
        .demo
        .as_deref()
        .and_then(|raw| raw.parse::<usize>().ok())
        .and_then(demo::find)
        .map(|cred| (cred.email.to_string(), cred.password.to_string()))
        .unwrap_or_default();

    let notice = session::take_flash(&session);
    render(login_template(&session, &app_name, notice, email, password))
}

pub async fn login_submit(
    req: HttpRequest,
    api: web::Data<ApiClient>,
    app_name: web::Data<AppName>,
    limiter: web::Data<RateLimiter>,
    session: Session,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    // Rate-limit check BEFORE calling the backend
    let ip = req
        .peer_addr()
        .map(|addr| addr.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));

    if limiter.is_blocked(ip) {
        log::warn!("Login blocked for {ip}: too many failures");
        let notice = Some(Notice::error(RATE_LIMITED));
        let tmpl = login_template(&session, &app_name, notice, form.email.clone(), String::new());
        return render(tmpl);
    }

    let outcome = match api.login(&form.email, &form.password).await {
        Ok(outcome) => outcome,
        Err(e) => {
            log::error!("Login request failed: {e}");
            LoginOutcome::Failure { message: LOGIN_FAILED.to_string() }
        }
    };

    match outcome {
        LoginOutcome::Success { token, user } => {
            limiter.clear(ip);
            session::sign_in(&session, &token, &user)?;
            session::set_flash(&session, Notice::success("Login successful!"));
            log::info!("User {} signed in", user.email);
            Ok(see_other("/dashboard"))
        }
        LoginOutcome::Failure { message } => {
            limiter.record_failure(ip);
            let notice = Some(Notice::error(message));
            let email = form.email.clone();
            let tmpl = login_template(&session, &app_name, notice, email, String::new());
            render(tmpl)
        }
    }
}

pub async fn logout(session: Session, form: web::Form<CsrfOnly>) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    session.purge();
    Ok(see_other("/login"))
}
