mod common;

#[cfg(test)]
pub mod web_tests {
    use actix_web::cookie::Cookie;
    use actix_web::http::{header, StatusCode};
    use actix_web::web::{self, Data};
    use actix_web::{test, App};
    use sqlx::PgPool;

    use super::common::*;

    use nakhla::db;
    use nakhla::models::{MessageStatus, TaskStatus};
    use nakhla::services::PasswordManager;
    use nakhla::web::handlers::public;
    use nakhla::web::helpers::SESSION_COOKIE;
    use nakhla::web::security::LOGIN_LIMIT;

    macro_rules! app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data(Data::new($state))
                    .configure(nakhla::web::configure)
                    .default_service(web::to(public::not_found_page)),
            )
            .await
        };
    }

    fn location<B>(resp: &actix_web::dev::ServiceResponse<B>) -> String {
        resp.headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    }

    fn session(token: &str) -> Cookie<'static> {
        Cookie::new(SESSION_COOKIE, token.to_string())
    }

    fn multipart_body(boundary: &str, content_type: &str, bytes: &[u8]) -> Vec<u8> {
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(
            b"Content-Disposition: form-data; name=\"file\"; filename=\"logo.png\"\r\n",
        );
        body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
        body.extend_from_slice(bytes);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
        body
    }

    #[actix_web::test]
    async fn test_dashboard_requires_sign_in() {
        let (state, _dir) = offline_state();
        let app = app!(state);

        let req = test::TestRequest::get().uri("/dashboard/posts").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), "/login?next=%2Fdashboard%2Fposts");
    }

    #[actix_web::test]
    async fn test_invalid_contact_rejected_without_database() {
        let (state, _dir) = offline_state();
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/contact")
            .set_form([
                ("name", "Sara"),
                ("email", "not-an-email"),
                ("message", "Hello"),
            ])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = test::read_body(resp).await;
        let body = String::from_utf8_lossy(&body);
        assert!(body.contains("Enter a valid email address"));
        assert!(body.contains("Sara"));
    }

    #[actix_web::test]
    async fn test_language_switch_sets_cookie() {
        let (state, _dir) = offline_state();
        let app = app!(state);

        let req = test::TestRequest::get()
            .uri("/lang/ar?next=%2Fabout")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), "/about");
        let cookie = resp
            .response()
            .cookies()
            .find(|c| c.name() == "lang")
            .expect("Language cookie should be set");
        assert_eq!(cookie.value(), "ar");

        // Off-site targets fall back to the home page
        let req = test::TestRequest::get()
            .uri("/lang/en?next=https%3A%2F%2Fevil.example")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(location(&resp), "/");
    }

    #[actix_web::test]
    async fn test_login_page_renders_arabic_rtl() {
        let (state, _dir) = offline_state();
        let app = app!(state);

        let req = test::TestRequest::get().uri("/login?lang=ar").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        let body = String::from_utf8_lossy(&body);
        assert!(body.contains("dir=\"rtl\""));
    }

    #[sqlx::test(migrations = "./migrations", fixtures("seed"))]
    async fn test_viewer_cannot_open_admin_pages(pool: PgPool) {
        let (state, _dir) = test_state(pool);
        let app = app!(state);

        for uri in ["/dashboard/users", "/dashboard/stats", "/dashboard/content"] {
            let req = test::TestRequest::get()
                .uri(uri)
                .cookie(session(VIEWER_SESSION))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::SEE_OTHER, "{uri}");
            assert_eq!(location(&resp), "/dashboard", "{uri}");
        }

        let req = test::TestRequest::get()
            .uri("/dashboard/tasks")
            .cookie(session(VIEWER_SESSION))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[sqlx::test(migrations = "./migrations", fixtures("seed"))]
    async fn test_expired_session_redirects_to_login(pool: PgPool) {
        let (state, _dir) = test_state(pool);
        let app = app!(state);

        let req = test::TestRequest::get()
            .uri("/dashboard")
            .cookie(session(EXPIRED_SESSION))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), "/login?next=%2Fdashboard");
    }

    #[sqlx::test(migrations = "./migrations", fixtures("seed"))]
    async fn test_duplicate_slug_shows_field_error(pool: PgPool) {
        let (state, _dir) = test_state(pool);
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/dashboard/posts")
            .cookie(session(EDITOR_SESSION))
            .set_form([
                ("slug", "hello-world"),
                ("title_en", "Another hello"),
                ("status", "draft"),
            ])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let body = test::read_body(resp).await;
        assert!(String::from_utf8_lossy(&body).contains("This slug is already used by another post"));
    }

    #[sqlx::test(migrations = "./migrations", fixtures("seed"))]
    async fn test_admin_cannot_delete_self(pool: PgPool) {
        let (state, _dir) = test_state(pool.clone());
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri(&format!("/dashboard/users/{ADMIN_ID}/delete"))
            .cookie(session(ADMIN_SESSION))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), "/dashboard/users?flash=self_delete");
        assert!(db::get_profile(&pool, id(ADMIN_ID)).await.unwrap().is_some());
    }

    #[sqlx::test(migrations = "./migrations", fixtures("seed"))]
    async fn test_opening_message_marks_read(pool: PgPool) {
        let (state, _dir) = test_state(pool.clone());
        let app = app!(state);

        let req = test::TestRequest::get()
            .uri(&format!("/dashboard/messages/{NEW_MESSAGE_ID}"))
            .cookie(session(VIEWER_SESSION))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        assert!(String::from_utf8_lossy(&body).contains("Web Development"));

        let message = db::get_contact_message(&pool, id(NEW_MESSAGE_ID))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(message.status, MessageStatus::Read);
    }

    #[sqlx::test(migrations = "./migrations", fixtures("seed"))]
    async fn test_public_pages_hide_drafts_and_inactive(pool: PgPool) {
        let (state, _dir) = test_state(pool);
        let app = app!(state);

        let cases = [
            ("/blog/hello-world".to_string(), StatusCode::OK),
            ("/blog/work-in-progress".to_string(), StatusCode::NOT_FOUND),
            (format!("/services/{ACTIVE_SERVICE_ID}"), StatusCode::OK),
            (format!("/services/{INACTIVE_SERVICE_ID}"), StatusCode::NOT_FOUND),
            ("/no-such-page".to_string(), StatusCode::NOT_FOUND),
        ];

        for (uri, expected) in cases {
            let req = test::TestRequest::get().uri(&uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), expected, "{uri}");
        }
    }

    #[sqlx::test(migrations = "./migrations", fixtures("seed"))]
    async fn test_upload_stores_image(pool: PgPool) {
        let (state, dir) = test_state(pool);
        let app = app!(state);
        let boundary = "XBOUNDARYX";

        let req = test::TestRequest::post()
            .uri("/dashboard/uploads")
            .cookie(session(EDITOR_SESSION))
            .insert_header((
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            ))
            .set_payload(multipart_body(boundary, "image/png", b"\x89PNG fake image"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let json: serde_json::Value = test::read_body_json(resp).await;
        let url = json["url"].as_str().expect("Response should carry a url");
        let name = url.strip_prefix("/storage/").expect("Url should be public");
        assert!(dir.path().join(name).exists());
    }

    #[sqlx::test(migrations = "./migrations", fixtures("seed"))]
    async fn test_upload_rejections(pool: PgPool) {
        let (state, _dir) = test_state(pool);
        let app = app!(state);
        let boundary = "XBOUNDARYX";

        let too_big = vec![0u8; 4096];
        let req = test::TestRequest::post()
            .uri("/dashboard/uploads")
            .cookie(session(EDITOR_SESSION))
            .insert_header((
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            ))
            .set_payload(multipart_body(boundary, "image/png", &too_big))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);

        let req = test::TestRequest::post()
            .uri("/dashboard/uploads")
            .cookie(session(EDITOR_SESSION))
            .insert_header((
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            ))
            .set_payload(multipart_body(boundary, "application/pdf", b"%PDF"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

        // Viewers may not upload at all
        let req = test::TestRequest::post()
            .uri("/dashboard/uploads")
            .cookie(session(VIEWER_SESSION))
            .insert_header((
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            ))
            .set_payload(multipart_body(boundary, "image/png", b"png"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    }

    fn session_from<B>(resp: &actix_web::dev::ServiceResponse<B>) -> Option<String> {
        resp.response()
            .cookies()
            .find(|c| c.name() == SESSION_COOKIE)
            .map(|c| c.value().to_string())
    }

    #[sqlx::test(migrations = "./migrations", fixtures("seed"))]
    async fn test_login_redirects_to_local_next(pool: PgPool) {
        set_password(&pool, EDITOR_ID, TEST_PASSWORD).await;
        let (state, _dir) = test_state(pool.clone());
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/login")
            .set_form([
                ("email", "Editor@Test.com"),
                ("password", TEST_PASSWORD),
                ("next", "/dashboard/tasks"),
            ])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), "/dashboard/tasks");
        let token = session_from(&resp).expect("Session cookie should be set");
        let profile = db::get_session_profile(&pool, &token).await.unwrap();
        assert_eq!(profile.map(|p| p.id), Some(id(EDITOR_ID)));

        // External targets are replaced by the dashboard
        let req = test::TestRequest::post()
            .uri("/login")
            .set_form([
                ("email", "editor@test.com"),
                ("password", TEST_PASSWORD),
                ("next", "https://evil.example/steal"),
            ])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), "/dashboard");
    }

    #[sqlx::test(migrations = "./migrations", fixtures("seed"))]
    async fn test_login_wrong_password_rejected(pool: PgPool) {
        set_password(&pool, EDITOR_ID, TEST_PASSWORD).await;
        let (state, _dir) = test_state(pool);
        let app = app!(state);

        for email in ["editor@test.com", "nobody@test.com"] {
            let req = test::TestRequest::post()
                .uri("/login")
                .set_form([("email", email), ("password", "Wrong2026"), ("next", "")])
                .to_request();
            let resp = test::call_service(&app, req).await;

            assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{email}");
            assert!(session_from(&resp).is_none(), "{email}");
            let body = test::read_body(resp).await;
            assert!(String::from_utf8_lossy(&body).contains(email), "{email}");
        }
    }

    #[actix_web::test]
    async fn test_login_rate_limited() {
        let (state, _dir) = offline_state();
        let limiter = state.rate_limiter.clone();
        let app = app!(state);

        // Test requests carry no peer address
        for _ in 0..LOGIN_LIMIT.0 {
            assert!(limiter.allow("login:unknown", LOGIN_LIMIT));
        }

        let req = test::TestRequest::post()
            .uri("/login")
            .set_form([("email", "editor@test.com"), ("password", "x"), ("next", "")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[sqlx::test(migrations = "./migrations", fixtures("seed"))]
    async fn test_password_change_replaces_sessions(pool: PgPool) {
        set_password(&pool, EDITOR_ID, TEST_PASSWORD).await;
        let (state, _dir) = test_state(pool.clone());
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/dashboard/account/password")
            .cookie(session(EDITOR_SESSION))
            .set_form([
                ("current_password", "Wrong2026"),
                ("password", "Changed2027"),
                ("password_confirm", "Changed2027"),
            ])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(db::get_session_profile(&pool, EDITOR_SESSION).await.unwrap().is_some());

        let req = test::TestRequest::post()
            .uri("/dashboard/account/password")
            .cookie(session(EDITOR_SESSION))
            .set_form([
                ("current_password", TEST_PASSWORD),
                ("password", "Changed2027"),
                ("password_confirm", "Changed2027"),
            ])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), "/dashboard/account?flash=password_changed");
        let token = session_from(&resp).expect("A fresh session cookie should be set");

        assert!(db::get_session_profile(&pool, EDITOR_SESSION).await.unwrap().is_none());
        let profile = db::get_session_profile(&pool, &token).await.unwrap();
        assert_eq!(profile.map(|p| p.id), Some(id(EDITOR_ID)));
        // Other users keep their sessions
        assert!(db::get_session_profile(&pool, ADMIN_SESSION).await.unwrap().is_some());

        let user = db::find_auth_user_by_id(&pool, id(EDITOR_ID)).await.unwrap().unwrap();
        assert!(PasswordManager::verify_password("Changed2027", &user.password_hash).unwrap());
    }

    #[sqlx::test(migrations = "./migrations", fixtures("seed"))]
    async fn test_task_quick_status_for_htmx(pool: PgPool) {
        let (state, _dir) = test_state(pool.clone());
        let app = app!(state);
        let uri = format!("/dashboard/tasks/{OVERDUE_TASK_ID}/status");

        let req = test::TestRequest::post()
            .uri(&uri)
            .cookie(session(EDITOR_SESSION))
            .insert_header(("HX-Request", "true"))
            .set_form([("status", "in_progress")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let task = db::get_task(&pool, id(OVERDUE_TASK_ID)).await.unwrap().unwrap();
        assert_eq!(task.status, TaskStatus::InProgress);

        let req = test::TestRequest::post()
            .uri(&uri)
            .cookie(session(EDITOR_SESSION))
            .insert_header(("HX-Request", "true"))
            .set_form([("status", "someday")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        // Without htmx the list is shown again
        let req = test::TestRequest::post()
            .uri(&uri)
            .cookie(session(EDITOR_SESSION))
            .set_form([("status", "done")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), "/dashboard/tasks?flash=saved");
    }

    #[sqlx::test(migrations = "./migrations", fixtures("seed"))]
    async fn test_forgot_password_same_answer(pool: PgPool) {
        let (state, _dir) = test_state(pool.clone());
        let app = app!(state);

        let mut bodies = Vec::new();
        for email in ["viewer@test.com", "nobody@test.com"] {
            let req = test::TestRequest::post()
                .uri("/forgot-password")
                .set_form([("email", email)])
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK, "{email}");
            bodies.push(test::read_body(resp).await);
        }
        assert_eq!(bodies[0], bodies[1]);

        let resets = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM auth_password_resets")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(resets, 1);
    }

    #[sqlx::test(migrations = "./migrations", fixtures("seed"))]
    async fn test_message_list_filters(pool: PgPool) {
        let (state, _dir) = test_state(pool);
        let app = app!(state);

        let cases = [
            ("/dashboard/messages?kind=quote", true),
            ("/dashboard/messages?kind=contact", false),
            ("/dashboard/messages?status=new", true),
            ("/dashboard/messages?status=archived", false),
            ("/dashboard/messages?status=new&kind=quote", true),
        ];

        for (uri, shown) in cases {
            let req = test::TestRequest::get()
                .uri(uri)
                .cookie(session(VIEWER_SESSION))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK, "{uri}");
            let body = test::read_body(resp).await;
            assert_eq!(String::from_utf8_lossy(&body).contains("sara@example.com"), shown, "{uri}");
        }
    }

    #[sqlx::test(migrations = "./migrations", fixtures("seed"))]
    async fn test_testimonial_approval_filter(pool: PgPool) {
        let (state, _dir) = test_state(pool);
        let app = app!(state);

        let cases = [
            ("/dashboard/testimonials?approval=approved", true, false),
            ("/dashboard/testimonials?approval=pending", false, true),
            ("/dashboard/testimonials", true, true),
        ];

        for (uri, approved, pending) in cases {
            let req = test::TestRequest::get()
                .uri(uri)
                .cookie(session(EDITOR_SESSION))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK, "{uri}");
            let body = test::read_body(resp).await;
            let body = String::from_utf8_lossy(&body);
            assert_eq!(body.contains("Happy Client"), approved, "{uri}");
            assert_eq!(body.contains("New Client"), pending, "{uri}");
        }
    }
}
