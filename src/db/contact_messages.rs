use sqlx::PgPool;
use uuid::Uuid;

use crate::common::StoreError;
use crate::models::{ContactMessage, ContactMessageCreate, MessageStatus};

pub async fn create_contact_message(
    pool: &PgPool,
    data: &ContactMessageCreate,
) -> Result<ContactMessage, StoreError> {
    let row = sqlx::query_as::<_, ContactMessage>(
        r#"
        INSERT INTO contact_messages (kind, name, email, phone, subject, message, service_id)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(data.kind)
    .bind(&data.name)
    .bind(&data.email)
    .bind(data.phone.as_deref())
    .bind(&data.subject)
    .bind(&data.message)
    .bind(data.service_id)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

pub async fn list_contact_messages(pool: &PgPool) -> Result<Vec<ContactMessage>, StoreError> {
    let rows = sqlx::query_as::<_, ContactMessage>(
        r#"SELECT * FROM contact_messages ORDER BY created_at DESC"#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn get_contact_message(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<ContactMessage>, StoreError> {
    let row = sqlx::query_as::<_, ContactMessage>(
        r#"SELECT * FROM contact_messages WHERE id = $1"#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn set_contact_message_status(
    pool: &PgPool,
    id: Uuid,
    status: MessageStatus,
) -> Result<Option<ContactMessage>, StoreError> {
    let row = sqlx::query_as::<_, ContactMessage>(
        r#"
        UPDATE contact_messages
        SET status = $1, updated_at = now()
        WHERE id = $2
        RETURNING *
        "#,
    )
    .bind(status)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn count_new_messages(pool: &PgPool) -> Result<i64, StoreError> {
    let n = sqlx::query_scalar::<_, i64>(
        r#"SELECT COUNT(*) FROM contact_messages WHERE status = 'new'"#,
    )
    .fetch_one(pool)
    .await?;

    Ok(n)
}

pub async fn delete_contact_message(pool: &PgPool, id: Uuid) -> Result<bool, StoreError> {
    let result = sqlx::query(r#"DELETE FROM contact_messages WHERE id = $1"#)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
