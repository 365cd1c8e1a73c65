use sqlx::PgPool;
use uuid::Uuid;

use crate::common::StoreError;
use crate::models::{CompanyMilestone, CompanyMilestoneData};

pub async fn list_milestones(pool: &PgPool) -> Result<Vec<CompanyMilestone>, StoreError> {
    let rows = sqlx::query_as::<_, CompanyMilestone>(
        r#"SELECT * FROM company_history ORDER BY year ASC, created_at ASC"#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn get_milestone(pool: &PgPool, id: Uuid) -> Result<Option<CompanyMilestone>, StoreError> {
    let row = sqlx::query_as::<_, CompanyMilestone>(
        r#"SELECT * FROM company_history WHERE id = $1"#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn create_milestone(
    pool: &PgPool,
    data: &CompanyMilestoneData,
) -> Result<CompanyMilestone, StoreError> {
    let row = sqlx::query_as::<_, CompanyMilestone>(
        r#"
        INSERT INTO company_history (year, title_en, title_ar, description_en, description_ar)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(data.year)
    .bind(&data.title_en)
    .bind(&data.title_ar)
    .bind(&data.description_en)
    .bind(&data.description_ar)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

pub async fn update_milestone(
    pool: &PgPool,
    id: Uuid,
    data: &CompanyMilestoneData,
) -> Result<Option<CompanyMilestone>, StoreError> {
    let row = sqlx::query_as::<_, CompanyMilestone>(
        r#"
        UPDATE company_history
        SET
            year = $1,
            title_en = $2,
            title_ar = $3,
            description_en = $4,
            description_ar = $5,
            updated_at = now()
        WHERE id = $6
        RETURNING *
        "#,
    )
    .bind(data.year)
    .bind(&data.title_en)
    .bind(&data.title_ar)
    .bind(&data.description_en)
    .bind(&data.description_ar)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn delete_milestone(pool: &PgPool, id: Uuid) -> Result<bool, StoreError> {
    let result = sqlx::query(r#"DELETE FROM company_history WHERE id = $1"#)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
