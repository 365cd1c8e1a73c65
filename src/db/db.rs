use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::common::GeneralError;
use crate::config::AppConfig;

/// Connection pool with the schema migrated to the latest version.
pub struct Database {
    pub pool: PgPool,
}

impl Database {
    pub async fn connect(config: &AppConfig) -> Result<Self, GeneralError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&config.database_url)
            .await?;

        let migrator = sqlx::migrate!("./migrations");
        migrator.run(&pool).await?;
        log::info!("Database ready, {} migrations known", migrator.iter().count());

        Ok(Self { pool })
    }
}
