use sqlx::PgPool;
use uuid::Uuid;

use crate::common::StoreError;
use crate::models::{Profile, ProfileUpdate, Role};

pub async fn list_profiles(pool: &PgPool) -> Result<Vec<Profile>, StoreError> {
    let rows = sqlx::query_as::<_, Profile>(r#"SELECT * FROM profiles ORDER BY created_at ASC"#)
        .fetch_all(pool)
        .await?;

    Ok(rows)
}

pub async fn get_profile(pool: &PgPool, id: Uuid) -> Result<Option<Profile>, StoreError> {
    let row = sqlx::query_as::<_, Profile>(r#"SELECT * FROM profiles WHERE id = $1"#)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row)
}

pub async fn update_profile(
    pool: &PgPool,
    id: Uuid,
    data: &ProfileUpdate,
) -> Result<Option<Profile>, StoreError> {
    if data.is_empty() {
        return get_profile(pool, id).await;
    }

    let row = sqlx::query_as::<_, Profile>(
        r#"
        UPDATE profiles
        SET
            full_name = COALESCE($1, full_name),
            avatar_url = COALESCE($2, avatar_url),
            updated_at = now()
        WHERE id = $3
        RETURNING *
        "#,
    )
    .bind(data.full_name.as_deref())
    .bind(data.avatar_url.as_deref())
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn set_profile_role(
    pool: &PgPool,
    id: Uuid,
    role: Role,
) -> Result<Option<Profile>, StoreError> {
    let row = sqlx::query_as::<_, Profile>(
        r#"
        UPDATE profiles
        SET role = $1, updated_at = now()
        WHERE id = $2
        RETURNING *
        "#,
    )
    .bind(role)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn count_admins(pool: &PgPool) -> Result<i64, StoreError> {
    let n = sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM profiles WHERE role = 'admin'"#)
        .fetch_one(pool)
        .await?;

    Ok(n)
}

/// Removes the account; the profile and sessions go with it by cascade.
pub async fn delete_account(pool: &PgPool, id: Uuid) -> Result<bool, StoreError> {
    let result = sqlx::query(r#"DELETE FROM auth_users WHERE id = $1"#)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
