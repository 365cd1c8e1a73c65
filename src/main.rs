use std::io;
use std::sync::Arc;

use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::web::{self, Data};
use actix_web::{App, HttpServer};
use tracing_subscriber::EnvFilter;

use nakhla::config::AppConfig;
use nakhla::db::{self, Database};
use nakhla::storage::{FsBlobStore, PUBLIC_PREFIX};
use nakhla::web::handlers::public;
use nakhla::web::middleware::SecurityHeaders;
use nakhla::web::security::RateLimiter;
use nakhla::web::{self as site, AppState};

/// Large enough for a long bilingual blog post.
const FORM_LIMIT_BYTES: usize = 512 * 1024;

fn startup_error(context: &str, e: impl std::fmt::Display) -> io::Error {
    io::Error::other(format!("{context}: {e}"))
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init()
        .map_err(|e| startup_error("failed to initialize logging", e))?;

    let config = AppConfig::from_env().map_err(|e| startup_error("invalid configuration", e))?;

    let database = Database::connect(&config)
        .await
        .map_err(|e| startup_error("failed to connect to database / run migrations", e))?;

    match db::purge_expired_sessions(&database.pool).await {
        Ok(n) if n > 0 => log::info!("Purged {} expired sessions", n),
        Ok(_) => {}
        Err(e) => log::warn!("Failed to purge expired sessions: {}", e),
    }

    let blobs = FsBlobStore::new(config.upload_dir.clone(), config.max_upload_bytes);
    blobs
        .ensure_root()
        .await
        .map_err(|e| startup_error("failed to prepare upload directory", e))?;

    let bind_addr = config.bind_addr.clone();
    let upload_dir = blobs.root().clone();
    let state = Data::new(AppState {
        pool: database.pool,
        rate_limiter: Arc::new(RateLimiter::new()),
        storage: Arc::new(blobs),
        config: Arc::new(config),
    });

    log::info!("Listening on {}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(web::FormConfig::default().limit(FORM_LIMIT_BYTES))
            .wrap(SecurityHeaders)
            .wrap(Logger::default())
            .configure(site::configure)
            .service(Files::new("/static", "./static").prefer_utf8(true))
            .service(Files::new(PUBLIC_PREFIX, upload_dir.clone()))
            .default_service(web::to(public::not_found_page))
    })
    .bind(bind_addr)?
    .run()
    .await
}
