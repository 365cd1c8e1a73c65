use sqlx::PgPool;
use uuid::Uuid;

use crate::common::StoreError;
use crate::models::{Service, ServiceData};

pub async fn list_services(pool: &PgPool, include_inactive: bool) -> Result<Vec<Service>, StoreError> {
    let rows = if include_inactive {
        sqlx::query_as::<_, Service>(
            r#"SELECT * FROM services ORDER BY sort_order ASC, created_at ASC"#,
        )
        .fetch_all(pool)
        .await?
    } else {
        sqlx::query_as::<_, Service>(
            r#"
            SELECT *
            FROM services
            WHERE is_active
            ORDER BY sort_order ASC, created_at ASC
            "#,
        )
        .fetch_all(pool)
        .await?
    };

    Ok(rows)
}

pub async fn get_service(pool: &PgPool, id: Uuid) -> Result<Option<Service>, StoreError> {
    let row = sqlx::query_as::<_, Service>(r#"SELECT * FROM services WHERE id = $1"#)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row)
}

pub async fn create_service(pool: &PgPool, data: &ServiceData) -> Result<Service, StoreError> {
    let row = sqlx::query_as::<_, Service>(
        r#"
        INSERT INTO services (
            title_en, title_ar, description_en, description_ar, icon,
            features_en, features_ar, sort_order, is_active
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING *
        "#,
    )
    .bind(&data.title_en)
    .bind(&data.title_ar)
    .bind(&data.description_en)
    .bind(&data.description_ar)
    .bind(&data.icon)
    .bind(&data.features_en)
    .bind(&data.features_ar)
    .bind(data.sort_order)
    .bind(data.is_active)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

pub async fn update_service(
    pool: &PgPool,
    id: Uuid,
    data: &ServiceData,
) -> Result<Option<Service>, StoreError> {
    let row = sqlx::query_as::<_, Service>(
        r#"
        UPDATE services
        SET
            title_en = $1,
            title_ar = $2,
            description_en = $3,
            description_ar = $4,
            icon = $5,
            features_en = $6,
            features_ar = $7,
            sort_order = $8,
            is_active = $9,
            updated_at = now()
        WHERE id = $10
        RETURNING *
        "#,
    )
    .bind(&data.title_en)
    .bind(&data.title_ar)
    .bind(&data.description_en)
    .bind(&data.description_ar)
    .bind(&data.icon)
    .bind(&data.features_en)
    .bind(&data.features_ar)
    .bind(data.sort_order)
    .bind(data.is_active)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn delete_service(pool: &PgPool, id: Uuid) -> Result<bool, StoreError> {
    let result = sqlx::query(r#"DELETE FROM services WHERE id = $1"#)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
