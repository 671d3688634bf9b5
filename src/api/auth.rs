use serde::{Deserialize, Serialize};

use super::client::{ApiClient, ApiError};

pub const LOGIN_FAILED: &str = "Login failed";

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: Option<String>,
    #[serde(default)]
    user: AuthUser,
    message: Option<String>,
}

/// The backend's own wording when it gave any, otherwise the generic text.
fn failure(message: Option<String>) -> LoginOutcome {
    let message = message
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| LOGIN_FAILED.to_string());
    LoginOutcome::Failure { message }
}

/// The signed-in user as reported by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthUser {
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Result of a login attempt, mirroring the backend's `{success, message}`.
#[derive(Debug, Clone)]
pub enum LoginOutcome {
    Success { token: String, user: AuthUser },
    Failure { message: String },
}

impl ApiClient {
    /// Exchange credentials for a bearer token.
    ///
    /// Backend rejections come back as `Failure` with the server's message
    /// untouched, or `Login failed` when it sent none. Only transport problems
    /// surface as `Err`.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, ApiError> {
        let body = LoginRequest { email, password };
        match self.post_json::<_, LoginResponse>("/auth/login", &body, None).await {
            Ok(LoginResponse { token: Some(token), user, .. }) if !token.is_empty() => {
                let user = if user.email.is_empty() {
                    AuthUser { email: email.to_string(), ..user }
                } else {
                    user
                };
                Ok(LoginOutcome::Success { token, user })
            }
            Ok(LoginResponse { message, .. }) => Ok(failure(message)),
            Err(ApiError::Status { message, .. }) => Ok(failure(message)),
            Err(ApiError::Decode(e)) => {
                log::warn!("Login response did not decode: {e}");
                Ok(failure(None))
            }
            Err(e) => Err(e),
        }
    }
}
