use actix_session::{Session, SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use serde::{Deserialize, Serialize};

use crate::api::AuthUser;
use crate::errors::AppError;

const TOKEN_KEY: &str = "api_token";
const USER_KEY: &str = "user";
const NOTICE_KEY: &str = "notice";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

/// One-shot toast shown on the next rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, message: message.into() }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

pub fn get_token(session: &Session) -> Option<String> {
    session.get::<String>(TOKEN_KEY).unwrap_or(None)
}

pub fn get_user(session: &Session) -> Result<AuthUser, AppError> {
    match session.get::<AuthUser>(USER_KEY) {
        Ok(Some(user)) => Ok(user),
        Ok(None) => Err(AppError::Session("No user in session".to_string())),
        Err(e) => Err(AppError::Session(format!("Failed to read user: {e}"))),
    }
}

/// Store the backend token and user after a successful login.
pub fn sign_in(session: &Session, token: &str, user: &AuthUser) -> Result<(), AppError> {
    session.renew();
    session
        .insert(TOKEN_KEY, token)
        .and_then(|_| session.insert(USER_KEY, user))
        .map_err(|e| AppError::Session(format!("Failed to store login: {e}")))
}

pub fn set_flash(session: &Session, notice: Notice) {
    if let Err(e) = session.insert(NOTICE_KEY, notice) {
        log::warn!("Could not store flash notice: {e}");
    }
}

pub fn take_flash(session: &Session) -> Option<Notice> {
    let notice = session.get::<Notice>(NOTICE_KEY).unwrap_or(None);
    if notice.is_some() {
        session.remove(NOTICE_KEY);
    }
    notice
}

pub fn is_signed_in(session: &Session) -> bool {
    get_token(session).is_some()
}

/// Cookie-backed session store used by the console.
pub fn session_middleware(key: Key) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_secure(false)
        .cookie_http_only(true)
        .build()
}
