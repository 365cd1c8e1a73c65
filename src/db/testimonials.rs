use sqlx::PgPool;
use uuid::Uuid;

use crate::common::StoreError;
use crate::models::{Testimonial, TestimonialData};

pub async fn list_testimonials(pool: &PgPool) -> Result<Vec<Testimonial>, StoreError> {
    let rows = sqlx::query_as::<_, Testimonial>(
        r#"SELECT * FROM testimonials ORDER BY created_at DESC"#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn list_approved_testimonials(
    pool: &PgPool,
    limit: i64,
) -> Result<Vec<Testimonial>, StoreError> {
    let rows = sqlx::query_as::<_, Testimonial>(
        r#"
        SELECT *
        FROM testimonials
        WHERE is_approved
        ORDER BY created_at DESC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Public submissions always start unapproved.
pub async fn submit_testimonial(
    pool: &PgPool,
    data: &TestimonialData,
) -> Result<Testimonial, StoreError> {
    let row = sqlx::query_as::<_, Testimonial>(
        r#"
        INSERT INTO testimonials (client_name, client_company, content_en, content_ar, rating, is_approved)
        VALUES ($1, $2, $3, $4, $5, FALSE)
        RETURNING *
        "#,
    )
    .bind(&data.client_name)
    .bind(&data.client_company)
    .bind(&data.content_en)
    .bind(&data.content_ar)
    .bind(data.rating)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

pub async fn set_testimonial_approval(
    pool: &PgPool,
    id: Uuid,
    approved: bool,
) -> Result<Option<Testimonial>, StoreError> {
    let row = sqlx::query_as::<_, Testimonial>(
        r#"
        UPDATE testimonials
        SET is_approved = $1, updated_at = now()
        WHERE id = $2
        RETURNING *
        "#,
    )
    .bind(approved)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn count_pending_testimonials(pool: &PgPool) -> Result<i64, StoreError> {
    let n = sqlx::query_scalar::<_, i64>(
        r#"SELECT COUNT(*) FROM testimonials WHERE NOT is_approved"#,
    )
    .fetch_one(pool)
    .await?;

    Ok(n)
}

pub async fn delete_testimonial(pool: &PgPool, id: Uuid) -> Result<bool, StoreError> {
    let result = sqlx::query(r#"DELETE FROM testimonials WHERE id = $1"#)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
