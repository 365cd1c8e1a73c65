#![allow(dead_code)]

use std::sync::Arc;

use sqlx::PgPool;
use tempfile::TempDir;
use uuid::Uuid;

use nakhla::config::AppConfig;
use nakhla::models::*;
use nakhla::services::PasswordManager;
use nakhla::storage::FsBlobStore;
use nakhla::web::security::RateLimiter;
use nakhla::web::AppState;

pub const ADMIN_ID: &str = "00000000-0000-0000-0000-000000000001";
pub const EDITOR_ID: &str = "00000000-0000-0000-0000-000000000002";
pub const VIEWER_ID: &str = "00000000-0000-0000-0000-000000000003";

pub const ADMIN_SESSION: &str = "admin-session";
pub const EDITOR_SESSION: &str = "editor-session";
pub const VIEWER_SESSION: &str = "viewer-session";
pub const EXPIRED_SESSION: &str = "expired-session";

pub const ACTIVE_SERVICE_ID: &str = "00000000-0000-0000-0000-0000000000a1";
pub const INACTIVE_SERVICE_ID: &str = "00000000-0000-0000-0000-0000000000a2";
pub const PUBLISHED_POST_ID: &str = "00000000-0000-0000-0000-0000000000b1";
pub const DRAFT_POST_ID: &str = "00000000-0000-0000-0000-0000000000b2";
pub const PENDING_TESTIMONIAL_ID: &str = "00000000-0000-0000-0000-0000000000c2";
pub const NEW_MESSAGE_ID: &str = "00000000-0000-0000-0000-0000000000d1";
pub const OVERDUE_TASK_ID: &str = "00000000-0000-0000-0000-0000000000e1";

pub fn id(s: &str) -> Uuid {
    Uuid::parse_str(s).expect("Invalid uuid in test helper")
}

pub fn test_config(upload_dir: &TempDir) -> AppConfig {
    let upload_dir = upload_dir.path().to_string_lossy().to_string();
    AppConfig::from_lookup(move |key| match key {
        "DATABASE_URL" => Some("postgres://localhost/nakhla_test".to_string()),
        "UPLOAD_DIR" => Some(upload_dir.clone()),
        "MAX_UPLOAD_BYTES" => Some("1024".to_string()),
        _ => None,
    })
    .expect("Test config should load")
}

/// Application state over `pool` with uploads in a throwaway directory.
/// Keep the returned directory alive for the duration of the test.
pub fn test_state(pool: PgPool) -> (AppState, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = test_config(&dir);
    let storage = FsBlobStore::new(config.upload_dir.clone(), config.max_upload_bytes);

    let state = AppState {
        pool,
        rate_limiter: Arc::new(RateLimiter::new()),
        storage: Arc::new(storage),
        config: Arc::new(config),
    };
    (state, dir)
}

/// State whose pool never connects; for requests that must not reach the
/// database.
pub fn offline_state() -> (AppState, TempDir) {
    let pool = PgPool::connect_lazy("postgres://nobody@127.0.0.1:1/none")
        .expect("Lazy pool should build");
    test_state(pool)
}

pub fn post_data(slug: &str, status: PostStatus) -> BlogPostData {
    BlogPostData {
        slug: slug.to_string(),
        title_en: format!("Post {slug}"),
        title_ar: String::new(),
        excerpt_en: String::new(),
        excerpt_ar: String::new(),
        content_en: "Body".to_string(),
        content_ar: String::new(),
        cover_image_url: None,
        tags: vec!["news".to_string()],
        status,
    }
}

pub fn signup_data(email: &str) -> SignUpData {
    SignUpData {
        email: email.to_string(),
        password_hash: "not-a-real-hash".to_string(),
        full_name: "Test Person".to_string(),
    }
}

/// Gives a seeded user a real password so sign-in can verify it.
pub async fn set_password(pool: &PgPool, user_id: &str, password: &str) {
    let hash = PasswordManager::hash_password(password).expect("Failed to hash password");
    sqlx::query("UPDATE auth_users SET password_hash = $1 WHERE id = $2")
        .bind(hash)
        .bind(id(user_id))
        .execute(pool)
        .await
        .expect("Failed to set password");
}

pub const TEST_PASSWORD: &str = "Sesame2026";
