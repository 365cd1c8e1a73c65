use sqlx::PgPool;

use crate::common::StoreError;
use crate::models::{SiteStats, SiteStatsData};

pub async fn get_site_stats(pool: &PgPool) -> Result<SiteStats, StoreError> {
    let row = sqlx::query_as::<_, SiteStats>(
        r#"
        SELECT projects_completed, happy_clients, years_experience, team_size, updated_at
        FROM site_stats
        WHERE id = 1
        "#,
    )
    .fetch_optional(pool)
    .await?;

    row.ok_or(StoreError::NotFound)
}

/// Writes the single stats row, creating it if the seed row is missing.
pub async fn update_site_stats(pool: &PgPool, data: &SiteStatsData) -> Result<SiteStats, StoreError> {
    let row = sqlx::query_as::<_, SiteStats>(
        r#"
        INSERT INTO site_stats (id, projects_completed, happy_clients, years_experience, team_size)
        VALUES (1, $1, $2, $3, $4)
        ON CONFLICT (id) DO UPDATE
        SET
            projects_completed = EXCLUDED.projects_completed,
            happy_clients = EXCLUDED.happy_clients,
            years_experience = EXCLUDED.years_experience,
            team_size = EXCLUDED.team_size,
            updated_at = now()
        RETURNING projects_completed, happy_clients, years_experience, team_size, updated_at
        "#,
    )
    .bind(data.projects_completed)
    .bind(data.happy_clients)
    .bind(data.years_experience)
    .bind(data.team_size)
    .fetch_one(pool)
    .await?;

    Ok(row)
}
