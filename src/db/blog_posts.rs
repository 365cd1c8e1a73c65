use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::common::StoreError;
use crate::models::{BlogPost, BlogPostData, PostStatus};

pub async fn list_blog_posts(
    pool: &PgPool,
    include_drafts: bool,
) -> Result<Vec<BlogPost>, StoreError> {
    let rows = if include_drafts {
        sqlx::query_as::<_, BlogPost>(
            r#"
            SELECT *
            FROM blog_posts
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(pool)
        .await?
    } else {
        sqlx::query_as::<_, BlogPost>(
            r#"
            SELECT *
            FROM blog_posts
            WHERE status = 'published'
            ORDER BY published_at DESC NULLS LAST, created_at DESC
            "#,
        )
        .fetch_all(pool)
        .await?
    };

    Ok(rows)
}

pub async fn get_blog_post(pool: &PgPool, id: Uuid) -> Result<Option<BlogPost>, StoreError> {
    let row = sqlx::query_as::<_, BlogPost>(r#"SELECT * FROM blog_posts WHERE id = $1"#)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row)
}

pub async fn get_published_post_by_slug(
    pool: &PgPool,
    slug: &str,
) -> Result<Option<BlogPost>, StoreError> {
    let row = sqlx::query_as::<_, BlogPost>(
        r#"
        SELECT *
        FROM blog_posts
        WHERE slug = $1 AND status = 'published'
        "#,
    )
    .bind(slug)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// `published_at` is stamped the first time a post is created or saved as
/// published and kept on later edits.
pub async fn create_blog_post(
    pool: &PgPool,
    author_id: Option<Uuid>,
    data: &BlogPostData,
) -> Result<BlogPost, StoreError> {
    let published_at = (data.status == PostStatus::Published).then(Utc::now);

    sqlx::query_as::<_, BlogPost>(
        r#"
        INSERT INTO blog_posts (
            slug, title_en, title_ar, excerpt_en, excerpt_ar, content_en, content_ar,
            cover_image_url, tags, status, author_id, published_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
        RETURNING *
        "#,
    )
    .bind(&data.slug)
    .bind(&data.title_en)
    .bind(&data.title_ar)
    .bind(&data.excerpt_en)
    .bind(&data.excerpt_ar)
    .bind(&data.content_en)
    .bind(&data.content_ar)
    .bind(data.cover_image_url.as_deref())
    .bind(&data.tags)
    .bind(data.status)
    .bind(author_id)
    .bind(published_at)
    .fetch_one(pool)
    .await
    .map_err(|e| StoreError::from_unique(e, "A post with this slug"))
}

pub async fn update_blog_post(
    pool: &PgPool,
    id: Uuid,
    data: &BlogPostData,
) -> Result<Option<BlogPost>, StoreError> {
    sqlx::query_as::<_, BlogPost>(
        r#"
        UPDATE blog_posts
        SET
            slug = $1,
            title_en = $2,
            title_ar = $3,
            excerpt_en = $4,
            excerpt_ar = $5,
            content_en = $6,
            content_ar = $7,
            cover_image_url = $8,
            tags = $9,
            status = $10,
            published_at = CASE
                WHEN $10 = 'published' THEN COALESCE(published_at, now())
                ELSE published_at
            END,
            updated_at = now()
        WHERE id = $11
        RETURNING *
        "#,
    )
    .bind(&data.slug)
    .bind(&data.title_en)
    .bind(&data.title_ar)
    .bind(&data.excerpt_en)
    .bind(&data.excerpt_ar)
    .bind(&data.content_en)
    .bind(&data.content_ar)
    .bind(data.cover_image_url.as_deref())
    .bind(&data.tags)
    .bind(data.status)
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(|e| StoreError::from_unique(e, "A post with this slug"))
}

pub async fn publish_blog_post(pool: &PgPool, id: Uuid) -> Result<Option<BlogPost>, StoreError> {
    let row = sqlx::query_as::<_, BlogPost>(
        r#"
        UPDATE blog_posts
        SET
            status = 'published',
            published_at = COALESCE(published_at, now()),
            updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn delete_blog_post(pool: &PgPool, id: Uuid) -> Result<bool, StoreError> {
    let result = sqlx::query(r#"DELETE FROM blog_posts WHERE id = $1"#)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
