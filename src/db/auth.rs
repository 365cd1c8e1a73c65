use chrono::{Duration, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::common::AuthError;
use crate::models::{AuthUser, Profile, Role, SignUpData};

/// Advisory lock key serialising sign-ups so only one can see an empty site.
const SIGN_UP_LOCK: i64 = 0x6e616b686c61;

/// Opaque random token for session and reset links (256 bits of v4 UUIDs).
pub fn new_token() -> String {
    format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple())
}

/// Creates the credential row and its profile in one transaction. The first
/// account on an empty site becomes admin; later accounts start as viewers.
/// Concurrent sign-ups queue on an advisory lock until the previous one commits.
pub async fn sign_up(pool: &PgPool, data: &SignUpData) -> Result<Profile, AuthError> {
    let mut tx = pool.begin().await?;

    sqlx::query(r#"SELECT pg_advisory_xact_lock($1)"#)
        .bind(SIGN_UP_LOCK)
        .execute(&mut *tx)
        .await?;

    let user_id = sqlx::query_scalar::<_, Uuid>(
        r#"
        INSERT INTO auth_users (email, password_hash)
        VALUES ($1, $2)
        ON CONFLICT (email) DO NOTHING
        RETURNING id
        "#,
    )
    .bind(&data.email)
    .bind(&data.password_hash)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or(AuthError::EmailTaken)?;

    let existing = sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM profiles"#)
        .fetch_one(&mut *tx)
        .await?;
    let role = if existing == 0 { Role::Admin } else { Role::Viewer };

    let profile = sqlx::query_as::<_, Profile>(
        r#"
        INSERT INTO profiles (id, email, full_name, role)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(&data.email)
    .bind(&data.full_name)
    .bind(role)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(profile)
}

pub async fn find_auth_user_by_email(
    pool: &PgPool,
    email: &str,
) -> Result<Option<AuthUser>, sqlx::Error> {
    sqlx::query_as::<_, AuthUser>(r#"SELECT * FROM auth_users WHERE email = $1"#)
        .bind(email)
        .fetch_optional(pool)
        .await
}

pub async fn find_auth_user_by_id(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<AuthUser>, sqlx::Error> {
    sqlx::query_as::<_, AuthUser>(r#"SELECT * FROM auth_users WHERE id = $1"#)
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Stores a new password hash, ends every session of the user and opens a
/// fresh one, all in one transaction. Returns the new session token and the
/// number of sessions dropped, or `None` when the user does not exist.
pub async fn change_password(
    pool: &PgPool,
    user_id: Uuid,
    password_hash: &str,
    ttl: Duration,
) -> Result<Option<(String, u64)>, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let updated = sqlx::query(
        r#"
        UPDATE auth_users
        SET password_hash = $1, updated_at = now()
        WHERE id = $2
        "#,
    )
    .bind(password_hash)
    .bind(user_id)
    .execute(&mut *tx)
    .await?;

    if updated.rows_affected() == 0 {
        return Ok(None);
    }

    let dropped = sqlx::query(r#"DELETE FROM auth_sessions WHERE user_id = $1"#)
        .bind(user_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    let token = new_token();
    sqlx::query(
        r#"
        INSERT INTO auth_sessions (token, user_id, expires_at)
        VALUES ($1, $2, $3)
        "#,
    )
    .bind(&token)
    .bind(user_id)
    .bind(Utc::now() + ttl)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(Some((token, dropped)))
}

pub async fn create_session(
    pool: &PgPool,
    user_id: Uuid,
    ttl: Duration,
) -> Result<String, sqlx::Error> {
    let token = new_token();

    sqlx::query(
        r#"
        INSERT INTO auth_sessions (token, user_id, expires_at)
        VALUES ($1, $2, $3)
        "#,
    )
    .bind(&token)
    .bind(user_id)
    .bind(Utc::now() + ttl)
    .execute(pool)
    .await?;

    Ok(token)
}

/// Profile behind an unexpired session token.
pub async fn get_session_profile(
    pool: &PgPool,
    token: &str,
) -> Result<Option<Profile>, sqlx::Error> {
    sqlx::query_as::<_, Profile>(
        r#"
        SELECT p.*
        FROM auth_sessions s
        JOIN profiles p ON p.id = s.user_id
        WHERE s.token = $1 AND s.expires_at > now()
        "#,
    )
    .bind(token)
    .fetch_optional(pool)
    .await
}

pub async fn delete_session(pool: &PgPool, token: &str) -> Result<(), sqlx::Error> {
    sqlx::query(r#"DELETE FROM auth_sessions WHERE token = $1"#)
        .bind(token)
        .execute(pool)
        .await?;

    Ok(())
}

pub async fn purge_expired_sessions(pool: &PgPool) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(r#"DELETE FROM auth_sessions WHERE expires_at <= now()"#)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

pub async fn create_password_reset(
    pool: &PgPool,
    user_id: Uuid,
    ttl: Duration,
) -> Result<String, sqlx::Error> {
    let token = new_token();

    sqlx::query(
        r#"
        INSERT INTO auth_password_resets (token, user_id, expires_at)
        VALUES ($1, $2, $3)
        "#,
    )
    .bind(&token)
    .bind(user_id)
    .bind(Utc::now() + ttl)
    .execute(pool)
    .await?;

    Ok(token)
}

pub async fn password_reset_is_valid(pool: &PgPool, token: &str) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS(
            SELECT 1 FROM auth_password_resets
            WHERE token = $1 AND used_at IS NULL AND expires_at > now()
        )
        "#,
    )
    .bind(token)
    .fetch_one(pool)
    .await
}

/// Marks the token used, stores the new hash and signs the user out
/// everywhere. Returns the affected user id.
pub async fn consume_password_reset(
    pool: &PgPool,
    token: &str,
    password_hash: &str,
) -> Result<Uuid, AuthError> {
    let mut tx = pool.begin().await?;

    let user_id = sqlx::query_scalar::<_, Uuid>(
        r#"
        UPDATE auth_password_resets
        SET used_at = now()
        WHERE token = $1 AND used_at IS NULL AND expires_at > now()
        RETURNING user_id
        "#,
    )
    .bind(token)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or(AuthError::InvalidToken)?;

    sqlx::query(
        r#"
        UPDATE auth_users
        SET password_hash = $1, updated_at = now()
        WHERE id = $2
        "#,
    )
    .bind(password_hash)
    .bind(user_id)
    .execute(&mut *tx)
    .await?;

    sqlx::query(r#"DELETE FROM auth_sessions WHERE user_id = $1"#)
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(user_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_token_shape() {
        let a = new_token();
        let b = new_token();

        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }
}
