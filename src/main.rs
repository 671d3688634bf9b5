use actix_web::{App, HttpServer, cookie::Key, middleware, web};

use libradmin::api::ApiClient;
use libradmin::auth::{rate_limit::RateLimiter, session::session_middleware};
use libradmin::config::{AppConfig, AppName, MIN_SESSION_KEY_LEN};
use libradmin::handlers;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env();

    let api = ApiClient::new(&config.api)
        .map_err(|e| std::io::Error::other(format!("Failed to build API client: {e}")))?;
    log::info!("Using library API at {}", api.base_url());

    // Session encryption key — load from SESSION_KEY env var for persistent sessions across restarts
    let secret_key = match config.session_key.as_deref() {
        Some(val) if val.len() >= MIN_SESSION_KEY_LEN => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Some(val) => {
            log::warn!("SESSION_KEY too short ({} bytes, need {MIN_SESSION_KEY_LEN}+), generating random key", val.len());
            Key::generate()
        }
        None => {
            log::warn!("No SESSION_KEY set, generating random key (sessions lost on restart)");
            Key::generate()
        }
    };

    let limiter = RateLimiter::new();
    let app_name = AppName(config.app_name.clone());

    log::info!("Starting server at http://{}", config.bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(session_middleware(secret_key.clone()))
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(api.clone()))
            .app_data(web::Data::new(limiter.clone()))
            .app_data(web::Data::new(app_name.clone()))
            .service(actix_files::Files::new("/static", "./static"))
            .configure(handlers::configure)
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
