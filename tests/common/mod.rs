//! Shared test infrastructure.
//!
//! # Mock backend
//! - `spawn_backend()` - actix server on an ephemeral port standing in for the
//!   library REST API
//! - `MockBackend` - canned responses plus call recording
//!
//! # Console helpers
//! - `console_app!` - the console wired to a backend, ready for `test::call_service`
//! - `sign_in()` - walks the login form and returns the session cookie
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::cookie::Cookie;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, test, web};
use serde_json::{Value, json};

use libradmin::api::ApiClient;
use libradmin::config::ApiConfig;

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const ADMIN_EMAIL: &str = "admin@library.com";
pub const ADMIN_PASS: &str = "admin123";
pub const ADMIN_NAME: &str = "Ada Admin";
pub const ADMIN_TOKEN: &str = "token-admin";
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const SESSION_COOKIE: &str = "id";

// ============================================================================
// MOCK BACKEND
// ============================================================================

/// Canned backend responses. `None` makes the endpoint answer 500.
#[derive(Clone)]
pub struct MockBackend {
    pub stats: Option<Value>,
    pub transactions: Option<Value>,
    pub categories: Option<Value>,
    pub activities: Option<Value>,
    /// Authorization headers seen on dashboard reads.
    pub seen_auth: Arc<Mutex<Vec<String>>>,
    pub login_calls: Arc<Mutex<usize>>,
    /// Fixed `/auth/login` reply as (status, body); a null body sends none.
    pub login_reply: Option<(u16, Value)>,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self {
            stats: Some(sample_stats()),
            transactions: Some(sample_transactions()),
            categories: Some(sample_categories()),
            activities: Some(sample_activities()),
            seen_auth: Arc::default(),
            login_calls: Arc::default(),
            login_reply: None,
        }
    }
}

impl MockBackend {
    pub fn login_calls(&self) -> usize {
        *self.login_calls.lock().unwrap()
    }

    pub fn seen_auth(&self) -> Vec<String> {
        self.seen_auth.lock().unwrap().clone()
    }
}

pub fn sample_stats() -> Value {
    json!({
        "totalBooks": 1250,
        "availableBooks": 980,
        "issuedBooks": 270,
        "totalMembers": 415,
        "activeMembers": 388,
        "overdueBooks": 17
    })
}

pub fn sample_transactions() -> Value {
    json!([
        {"_id": {"month": 11, "year": 2023}, "issued": 40, "returned": 35},
        {"_id": {"month": 12, "year": 2023}, "issued": 52, "returned": 48},
        {"_id": {"month": 1, "year": 2024}, "issued": 31, "returned": 30}
    ])
}

pub fn sample_categories() -> Value {
    json!([
        {"_id": "Fiction", "count": 420},
        {"_id": "Science", "count": 210},
        {"_id": "History", "count": 130}
    ])
}

pub fn sample_activities() -> Value {
    json!([
        {"user": {"name": "Grace Hopper"}, "details": "Issued \"Dune\" to member #42", "createdAt": "2024-01-15T10:30:00Z"},
        {"user": null, "details": "Overdue reminder batch sent", "createdAt": "2024-01-15T08:00:00Z"}
    ])
}

fn respond(req: &HttpRequest, backend: &MockBackend, body: &Option<Value>) -> HttpResponse {
    if let Some(auth) = req.headers().get("Authorization").and_then(|h| h.to_str().ok()) {
        backend.seen_auth.lock().unwrap().push(auth.to_string());
    }
    match body {
        Some(v) => HttpResponse::Ok().json(v),
        None => HttpResponse::InternalServerError().json(json!({"message": "boom"})),
    }
}

async fn stats(req: HttpRequest, b: web::Data<MockBackend>) -> HttpResponse {
    respond(&req, &b, &b.stats)
}

async fn transactions(req: HttpRequest, b: web::Data<MockBackend>) -> HttpResponse {
    respond(&req, &b, &b.transactions)
}

async fn categories(req: HttpRequest, b: web::Data<MockBackend>) -> HttpResponse {
    respond(&req, &b, &b.categories)
}

async fn activities(req: HttpRequest, b: web::Data<MockBackend>) -> HttpResponse {
    respond(&req, &b, &b.activities)
}

async fn login(b: web::Data<MockBackend>, body: web::Json<Value>) -> HttpResponse {
    *b.login_calls.lock().unwrap() += 1;
    if let Some((status, reply)) = &b.login_reply {
        let mut resp = HttpResponse::build(StatusCode::from_u16(*status).expect("status code"));
        return match reply {
            Value::Null => resp.finish(),
            body => resp.json(body),
        };
    }
    let email = body.get("email").and_then(Value::as_str).unwrap_or_default();
    let password = body.get("password").and_then(Value::as_str).unwrap_or_default();
    if email == ADMIN_EMAIL && password == ADMIN_PASS {
        HttpResponse::Ok().json(json!({
            "token": ADMIN_TOKEN,
            "user": {"name": ADMIN_NAME, "email": ADMIN_EMAIL, "role": "admin"}
        }))
    } else {
        HttpResponse::Unauthorized().json(json!({"message": INVALID_CREDENTIALS}))
    }
}

pub struct BackendHandle {
    pub base_url: String,
    pub state: MockBackend,
}

impl BackendHandle {
    pub fn client(&self) -> ApiClient {
        ApiClient::new(&ApiConfig { base_url: self.base_url.clone(), timeout: None })
            .expect("Failed to build API client")
    }
}

/// Start the mock backend on 127.0.0.1 with an OS-assigned port.
/// Must run inside an actix system (`#[actix_web::test]`).
pub fn spawn_backend(state: MockBackend) -> BackendHandle {
    let data = web::Data::new(state.clone());
    let server = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .route("/dashboard/stats", web::get().to(stats))
            .route("/dashboard/charts/transactions", web::get().to(transactions))
            .route("/dashboard/charts/categories", web::get().to(categories))
            .route("/dashboard/activities", web::get().to(activities))
            .route("/auth/login", web::post().to(login))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("Failed to bind mock backend");

    let addr = server.addrs()[0];
    actix_rt::spawn(server.run());

    BackendHandle { base_url: format!("http://{addr}"), state }
}

/// Base URL nothing listens on, for transport-failure paths.
pub fn dead_backend_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    format!("http://{addr}")
}

// ============================================================================
// CONSOLE HELPERS
// ============================================================================

/// Build the console app pointed at `$base_url` and initialise it for testing.
macro_rules! console_app {
    ($base_url:expr) => {{
        let api = libradmin::api::ApiClient::new(&libradmin::config::ApiConfig {
            base_url: $base_url.to_string(),
            timeout: None,
        })
        .expect("Failed to build API client");
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(libradmin::auth::session::session_middleware(actix_web::cookie::Key::generate()))
                .app_data(actix_web::web::Data::new(api))
                .app_data(actix_web::web::Data::new(libradmin::auth::rate_limit::RateLimiter::new()))
                .app_data(actix_web::web::Data::new(libradmin::config::AppName::default()))
                .configure(libradmin::handlers::configure),
        )
        .await
    }};
}

/// The session cookie set by a response, if any.
pub fn session_cookie<B>(resp: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|c| c.name() == SESSION_COOKIE)
        .map(|c| c.into_owned())
}

pub fn location<B>(resp: &ServiceResponse<B>) -> Option<String> {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .map(String::from)
}

pub async fn body_string<B: MessageBody>(resp: ServiceResponse<B>) -> String {
    let bytes = test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).expect("body is not UTF-8")
}

pub fn extract_csrf(html: &str) -> String {
    let re = regex::Regex::new(r#"name="csrf_token" value="([0-9a-f]{64})""#).unwrap();
    re.captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .expect("No CSRF token in page")
}

/// Load the login page, returning its HTML and the fresh session cookie.
pub async fn open_login<S, B>(app: &S) -> (String, Cookie<'static>)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let resp = test::call_service(app, test::TestRequest::get().uri("/login").to_request()).await;
    let cookie = session_cookie(&resp).expect("login page did not start a session");
    (body_string(resp).await, cookie)
}

/// Submit the login form; returns the response for inspection.
pub async fn submit_login<S, B>(
    app: &S,
    cookie: &Cookie<'static>,
    csrf: &str,
    email: &str,
    password: &str,
) -> ServiceResponse<B>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let form = serde_urlencoded::to_string([("email", email), ("password", password), ("csrf_token", csrf)])
        .expect("encode form");
    let req = test::TestRequest::post()
        .uri("/login")
        .cookie(cookie.clone())
        .insert_header(("Content-Type", "application/x-www-form-urlencoded"))
        .set_payload(form)
        .to_request();
    test::call_service(app, req).await
}

/// Full login round-trip with the admin account; returns the signed-in cookie.
pub async fn sign_in<S, B>(app: &S) -> Cookie<'static>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let (html, cookie) = open_login(app).await;
    let csrf = extract_csrf(&html);
    let resp = submit_login(app, &cookie, &csrf, ADMIN_EMAIL, ADMIN_PASS).await;
    assert_eq!(location(&resp).as_deref(), Some("/dashboard"), "login did not redirect");
    session_cookie(&resp).expect("login did not update the session")
}

pub async fn get_with<S, B>(app: &S, uri: &str, cookie: &Cookie<'static>) -> ServiceResponse<B>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = test::TestRequest::get().uri(uri).cookie(cookie.clone()).to_request();
    test::call_service(app, req).await
}
