//! Runtime configuration, read from the environment (and `.env` via dotenvy).

use std::time::Duration;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_APP_NAME: &str = "Library Management System";

/// Minimum length actix-web's `Key::from` accepts.
pub const MIN_SESSION_KEY_LEN: usize = 64;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub app_name: String,
    pub session_key: Option<String>,
    pub api: ApiConfig,
}

/// Settings for the REST backend the console talks to.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    /// Unset means no client-side timeout.
    pub timeout: Option<Duration>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; `from_env` passes `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let timeout = non_empty("API_TIMEOUT_SECS").and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
            _ => {
                log::warn!("Ignoring invalid API_TIMEOUT_SECS value {raw:?}");
                None
            }
        });

        Self {
            bind_addr: non_empty("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            app_name: non_empty("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
            session_key: non_empty("SESSION_KEY"),
            api: ApiConfig {
                base_url: non_empty("API_BASE_URL")
                    .map(|url| url.trim_end_matches('/').to_string())
                    .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
                timeout,
            },
        }
    }
}

/// Display name of the console, shared with templates through `web::Data`.
#[derive(Debug, Clone)]
pub struct AppName(pub String);

impl Default for AppName {
    fn default() -> Self {
        AppName(DEFAULT_APP_NAME.to_string())
    }
}
