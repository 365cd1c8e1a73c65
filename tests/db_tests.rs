mod common;

#[cfg(test)]
pub mod db_tests {
    use chrono::Duration;
    use sqlx::PgPool;

    use super::common::*;

    use nakhla::common::*;
    use nakhla::db::*;
    use nakhla::i18n::Lang;
    use nakhla::models::*;

    #[sqlx::test(migrations = "./migrations")]
    async fn test_first_signup_becomes_admin(pool: PgPool) {
        let first = sign_up(&pool, &signup_data("first@test.com"))
            .await
            .expect("First sign up should succeed");
        assert_eq!(first.role, Role::Admin);

        let second = sign_up(&pool, &signup_data("second@test.com"))
            .await
            .expect("Second sign up should succeed");
        assert_eq!(second.role, Role::Viewer);
        assert_eq!(second.full_name, "Test Person");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_concurrent_first_signups_make_one_admin(pool: PgPool) {
        for round in 0..10 {
            let a = signup_data(&format!("a{round}@test.com"));
            let b = signup_data(&format!("b{round}@test.com"));
            let (first, second) = tokio::join!(sign_up(&pool, &a), sign_up(&pool, &b));

            let roles = [
                first.expect("Sign up should succeed").role,
                second.expect("Sign up should succeed").role,
            ];
            let admins = roles.iter().filter(|r| **r == Role::Admin).count();
            assert_eq!(admins, 1, "round {round}: {roles:?}");

            sqlx::query("DELETE FROM auth_users")
                .execute(&pool)
                .await
                .expect("Failed to reset accounts");
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_signup_duplicate_email(pool: PgPool) {
        sign_up(&pool, &signup_data("dup@test.com"))
            .await
            .expect("First sign up should succeed");

        let result = sign_up(&pool, &signup_data("dup@test.com")).await;
        assert!(matches!(result, Err(AuthError::EmailTaken)));

        let profiles = list_profiles(&pool).await.expect("Failed to list profiles");
        assert_eq!(profiles.len(), 1);
    }

    #[sqlx::test(migrations = "./migrations", fixtures("seed"))]
    async fn test_session_lookup_ignores_expired(pool: PgPool) {
        let profile = get_session_profile(&pool, EDITOR_SESSION)
            .await
            .expect("Failed to load session");
        assert_eq!(profile.map(|p| p.id), Some(id(EDITOR_ID)));

        let expired = get_session_profile(&pool, EXPIRED_SESSION)
            .await
            .expect("Failed to load session");
        assert!(expired.is_none());

        let purged = purge_expired_sessions(&pool).await.expect("Failed to purge");
        assert_eq!(purged, 1);
    }

    #[sqlx::test(migrations = "./migrations", fixtures("seed"))]
    async fn test_password_reset_single_use(pool: PgPool) {
        let user = id(VIEWER_ID);
        let token = create_password_reset(&pool, user, Duration::hours(1))
            .await
            .expect("Failed to create reset");

        assert!(password_reset_is_valid(&pool, &token).await.unwrap());

        let reset_user = consume_password_reset(&pool, &token, "new-hash")
            .await
            .expect("First use should succeed");
        assert_eq!(reset_user, user);

        let again = consume_password_reset(&pool, &token, "other-hash").await;
        assert!(matches!(again, Err(AuthError::InvalidToken)));
        assert!(!password_reset_is_valid(&pool, &token).await.unwrap());

        let auth = find_auth_user_by_id(&pool, user)
            .await
            .unwrap()
            .expect("User should exist");
        assert_eq!(auth.password_hash, "new-hash");

        // Resetting signs the user out everywhere
        let session = get_session_profile(&pool, VIEWER_SESSION).await.unwrap();
        assert!(session.is_none());
    }

    #[sqlx::test(migrations = "./migrations", fixtures("seed"))]
    async fn test_change_password_rotates_sessions(pool: PgPool) {
        let editor = id(EDITOR_ID);
        let (token, dropped) = change_password(&pool, editor, "new-hash", Duration::hours(1))
            .await
            .expect("Failed to change password")
            .expect("User should exist");

        // The live session and the expired one
        assert_eq!(dropped, 2);
        assert!(get_session_profile(&pool, EDITOR_SESSION).await.unwrap().is_none());
        let profile = get_session_profile(&pool, &token).await.unwrap();
        assert_eq!(profile.map(|p| p.id), Some(editor));

        let auth = find_auth_user_by_id(&pool, editor).await.unwrap().unwrap();
        assert_eq!(auth.password_hash, "new-hash");

        let missing = change_password(&pool, uuid::Uuid::new_v4(), "x", Duration::hours(1))
            .await
            .expect("Query should succeed");
        assert!(missing.is_none());
    }

    #[sqlx::test(migrations = "./migrations", fixtures("seed"))]
    async fn test_expired_reset_token_rejected(pool: PgPool) {
        let token = create_password_reset(&pool, id(VIEWER_ID), Duration::hours(-1))
            .await
            .expect("Failed to create reset");

        assert!(!password_reset_is_valid(&pool, &token).await.unwrap());
        let result = consume_password_reset(&pool, &token, "new-hash").await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[sqlx::test(migrations = "./migrations", fixtures("seed"))]
    async fn test_blog_slug_conflict(pool: PgPool) {
        let result = create_blog_post(
            &pool,
            Some(id(EDITOR_ID)),
            &post_data("hello-world", PostStatus::Draft),
        )
        .await;
        assert!(matches!(result, Err(StoreError::Conflict(_))));

        let post = create_blog_post(&pool, None, &post_data("fresh-slug", PostStatus::Draft))
            .await
            .expect("Unique slug should insert");
        assert!(post.published_at.is_none());

        let renamed = update_blog_post(&pool, post.id, &post_data("hello-world", PostStatus::Draft)).await;
        assert!(matches!(renamed, Err(StoreError::Conflict(_))));
    }

    #[sqlx::test(migrations = "./migrations", fixtures("seed"))]
    async fn test_publish_sets_published_at_once(pool: PgPool) {
        let draft = id(DRAFT_POST_ID);

        let first = publish_blog_post(&pool, draft)
            .await
            .unwrap()
            .expect("Post should exist");
        assert_eq!(first.status, PostStatus::Published);
        let stamped = first.published_at.expect("published_at should be set");

        let second = publish_blog_post(&pool, draft).await.unwrap().unwrap();
        assert_eq!(second.published_at, Some(stamped));

        let mut data = post_data("work-in-progress", PostStatus::Published);
        data.title_en = "Edited".into();
        let edited = update_blog_post(&pool, draft, &data).await.unwrap().unwrap();
        assert_eq!(edited.published_at, Some(stamped));
        assert_eq!(edited.title_en, "Edited");
    }

    #[sqlx::test(migrations = "./migrations", fixtures("seed"))]
    async fn test_public_queries_hide_unpublished_and_inactive(pool: PgPool) {
        let published = list_blog_posts(&pool, false).await.unwrap();
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].slug, "hello-world");

        let draft = get_published_post_by_slug(&pool, "work-in-progress").await.unwrap();
        assert!(draft.is_none());

        let active = list_services(&pool, false).await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, id(ACTIVE_SERVICE_ID));
        assert_eq!(list_services(&pool, true).await.unwrap().len(), 2);

        let approved = list_approved_testimonials(&pool, 6).await.unwrap();
        assert_eq!(approved.len(), 1);
        assert_eq!(count_pending_testimonials(&pool).await.unwrap(), 1);
    }

    #[sqlx::test(migrations = "./migrations", fixtures("seed"))]
    async fn test_submitted_testimonial_needs_approval(pool: PgPool) {
        let data = TestimonialData {
            client_name: "Visitor".into(),
            client_company: String::new(),
            content_en: "Nice".into(),
            content_ar: String::new(),
            rating: 4,
        };
        let t = submit_testimonial(&pool, &data).await.unwrap();
        assert!(!t.is_approved);

        let approved = set_testimonial_approval(&pool, t.id, true).await.unwrap().unwrap();
        assert!(approved.is_approved);
        assert_eq!(list_approved_testimonials(&pool, 10).await.unwrap().len(), 2);
    }

    #[sqlx::test(migrations = "./migrations", fixtures("seed"))]
    async fn test_deleting_service_keeps_quote(pool: PgPool) {
        assert!(delete_service(&pool, id(ACTIVE_SERVICE_ID)).await.unwrap());

        let message = get_contact_message(&pool, id(NEW_MESSAGE_ID))
            .await
            .unwrap()
            .expect("Message should survive");
        assert!(message.service_id.is_none());
        assert_eq!(message.kind, MessageKind::Quote);
    }

    #[sqlx::test(migrations = "./migrations", fixtures("seed"))]
    async fn test_delete_account_cascades(pool: PgPool) {
        let editor = id(EDITOR_ID);
        assert!(delete_account(&pool, editor).await.unwrap());

        assert!(get_profile(&pool, editor).await.unwrap().is_none());
        assert!(get_session_profile(&pool, EDITOR_SESSION).await.unwrap().is_none());

        // Assigned tasks stay, unassigned
        let task = get_task(&pool, id(OVERDUE_TASK_ID)).await.unwrap().unwrap();
        assert!(task.assignee_id.is_none());

        assert_eq!(count_admins(&pool).await.unwrap(), 1);
    }

    #[sqlx::test(migrations = "./migrations", fixtures("seed"))]
    async fn test_task_status_change(pool: PgPool) {
        let task = set_task_status(&pool, id(OVERDUE_TASK_ID), TaskStatus::Done)
            .await
            .unwrap()
            .expect("Task should exist");
        assert_eq!(task.status, TaskStatus::Done);
        assert!(!task.is_overdue(chrono::Utc::now().date_naive()));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_site_copy_and_content_conflict(pool: PgPool) {
        let copy = load_site_copy(&pool, &["home", "contact"]).await.unwrap();
        assert_eq!(copy.get(Lang::Ar, "contact.address"), "الرياض، المملكة العربية السعودية");
        assert_eq!(copy.get(Lang::En, "home.missing_key"), "");
        assert_eq!(copy.get(Lang::En, "about.intro"), "");

        let duplicate = ContentItemData {
            section: "home".into(),
            key: "hero_title".into(),
            value_en: "Again".into(),
            value_ar: String::new(),
        };
        let result = create_content_item(&pool, &duplicate).await;
        assert!(matches!(result, Err(StoreError::Conflict(_))));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_site_stats_single_row(pool: PgPool) {
        let initial = get_site_stats(&pool).await.unwrap();
        assert_eq!(initial.projects_completed, 0);

        let data = SiteStatsData {
            projects_completed: 120,
            happy_clients: 80,
            years_experience: 9,
            team_size: 14,
        };
        let updated = update_site_stats(&pool, &data).await.unwrap();
        assert_eq!(updated.projects_completed, 120);

        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM site_stats")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }
}
