use sqlx::PgPool;
use uuid::Uuid;

use crate::common::StoreError;
use crate::models::{Project, ProjectData};

pub async fn list_projects(pool: &PgPool) -> Result<Vec<Project>, StoreError> {
    let rows = sqlx::query_as::<_, Project>(
        r#"
        SELECT *
        FROM projects
        ORDER BY completed_on DESC NULLS LAST, created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn list_featured_projects(pool: &PgPool, limit: i64) -> Result<Vec<Project>, StoreError> {
    let rows = sqlx::query_as::<_, Project>(
        r#"
        SELECT *
        FROM projects
        WHERE featured
        ORDER BY completed_on DESC NULLS LAST, created_at DESC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn get_project(pool: &PgPool, id: Uuid) -> Result<Option<Project>, StoreError> {
    let row = sqlx::query_as::<_, Project>(r#"SELECT * FROM projects WHERE id = $1"#)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row)
}

pub async fn create_project(pool: &PgPool, data: &ProjectData) -> Result<Project, StoreError> {
    let row = sqlx::query_as::<_, Project>(
        r#"
        INSERT INTO projects (
            title_en, title_ar, description_en, description_ar, category,
            client_name, image_url, project_url, completed_on, featured
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING *
        "#,
    )
    .bind(&data.title_en)
    .bind(&data.title_ar)
    .bind(&data.description_en)
    .bind(&data.description_ar)
    .bind(&data.category)
    .bind(&data.client_name)
    .bind(data.image_url.as_deref())
    .bind(data.project_url.as_deref())
    .bind(data.completed_on)
    .bind(data.featured)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

pub async fn update_project(
    pool: &PgPool,
    id: Uuid,
    data: &ProjectData,
) -> Result<Option<Project>, StoreError> {
    let row = sqlx::query_as::<_, Project>(
        r#"
        UPDATE projects
        SET
            title_en = $1,
            title_ar = $2,
            description_en = $3,
            description_ar = $4,
            category = $5,
            client_name = $6,
            image_url = $7,
            project_url = $8,
            completed_on = $9,
            featured = $10,
            updated_at = now()
        WHERE id = $11
        RETURNING *
        "#,
    )
    .bind(&data.title_en)
    .bind(&data.title_ar)
    .bind(&data.description_en)
    .bind(&data.description_ar)
    .bind(&data.category)
    .bind(&data.client_name)
    .bind(data.image_url.as_deref())
    .bind(data.project_url.as_deref())
    .bind(data.completed_on)
    .bind(data.featured)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn delete_project(pool: &PgPool, id: Uuid) -> Result<bool, StoreError> {
    let result = sqlx::query(r#"DELETE FROM projects WHERE id = $1"#)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
