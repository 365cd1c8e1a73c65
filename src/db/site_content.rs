use sqlx::PgPool;
use uuid::Uuid;

use crate::common::StoreError;
use crate::models::{ContentItem, ContentItemData, SiteCopy};

pub async fn list_content_items(pool: &PgPool) -> Result<Vec<ContentItem>, StoreError> {
    let rows = sqlx::query_as::<_, ContentItem>(
        r#"SELECT * FROM site_content ORDER BY section ASC, key ASC"#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// All content of the given sections, ready for `section.key` lookups.
pub async fn load_site_copy(pool: &PgPool, sections: &[&str]) -> Result<SiteCopy, StoreError> {
    let sections: Vec<String> = sections.iter().map(|s| s.to_string()).collect();

    let rows = sqlx::query_as::<_, ContentItem>(
        r#"SELECT * FROM site_content WHERE section = ANY($1)"#,
    )
    .bind(&sections)
    .fetch_all(pool)
    .await?;

    Ok(SiteCopy::new(rows))
}

pub async fn get_content_item(pool: &PgPool, id: Uuid) -> Result<Option<ContentItem>, StoreError> {
    let row = sqlx::query_as::<_, ContentItem>(r#"SELECT * FROM site_content WHERE id = $1"#)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row)
}

pub async fn create_content_item(
    pool: &PgPool,
    data: &ContentItemData,
) -> Result<ContentItem, StoreError> {
    sqlx::query_as::<_, ContentItem>(
        r#"
        INSERT INTO site_content (section, key, value_en, value_ar)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(&data.section)
    .bind(&data.key)
    .bind(&data.value_en)
    .bind(&data.value_ar)
    .fetch_one(pool)
    .await
    .map_err(|e| StoreError::from_unique(e, "Content with this section and key"))
}

pub async fn update_content_item(
    pool: &PgPool,
    id: Uuid,
    data: &ContentItemData,
) -> Result<Option<ContentItem>, StoreError> {
    sqlx::query_as::<_, ContentItem>(
        r#"
        UPDATE site_content
        SET
            section = $1,
            key = $2,
            value_en = $3,
            value_ar = $4,
            updated_at = now()
        WHERE id = $5
        RETURNING *
        "#,
    )
    .bind(&data.section)
    .bind(&data.key)
    .bind(&data.value_en)
    .bind(&data.value_ar)
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(|e| StoreError::from_unique(e, "Content with this section and key"))
}

pub async fn delete_content_item(pool: &PgPool, id: Uuid) -> Result<bool, StoreError> {
    let result = sqlx::query(r#"DELETE FROM site_content WHERE id = $1"#)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
