use std::sync::Arc;

use sqlx::PgPool;

use crate::config::AppConfig;
use crate::storage::BlobStore;
use crate::web::security::RateLimiter;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub rate_limiter: Arc<RateLimiter>,
    pub storage: Arc<dyn BlobStore>,
    pub config: Arc<AppConfig>,
}
