use std::collections::HashMap;

use actix_web::cookie::{time, Cookie, SameSite};
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use askama::Template;

use crate::config::AppConfig;
use crate::db;
use crate::i18n::{Lang, LANG_COOKIE};
use crate::models::{Profile, Role};
use crate::services::{authorize, login_redirect, AccessDecision, DASHBOARD_PATH};
use crate::web::context::{Flash, PageContext};
use crate::web::state::AppState;
use crate::web::templates::ErrorTemplate;

pub const SESSION_COOKIE: &str = "nakhla_session";

pub fn is_htmx(req: &HttpRequest) -> bool {
    req.headers()
        .get("HX-Request")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|s| s.eq_ignore_ascii_case("true"))
}

pub fn render<T: Template>(t: T) -> HttpResponse {
    render_status(StatusCode::OK, t)
}

pub fn render_status<T: Template>(status: StatusCode, t: T) -> HttpResponse {
    match t.render() {
        Ok(body) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            log::error!("Template error: {}", e);
            HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body(format!("Template error: {e}"))
        }
    }
}

/// 303 to `location`, or an `HX-Redirect` for htmx requests.
pub fn redirect(req: &HttpRequest, location: &str) -> HttpResponse {
    if is_htmx(req) {
        HttpResponse::Ok()
            .insert_header(("HX-Redirect", location))
            .finish()
    } else {
        HttpResponse::SeeOther()
            .insert_header(("Location", location))
            .finish()
    }
}

/// Redirect that shows a banner on the target page.
pub fn redirect_flash(req: &HttpRequest, location: &str, code: &str) -> HttpResponse {
    let sep = if location.contains('?') { '&' } else { '?' };
    redirect(req, &format!("{}{}flash={}", location, sep, code))
}

fn query_map(req: &HttpRequest) -> HashMap<String, String> {
    web::Query::<HashMap<String, String>>::from_query(req.query_string())
        .map(|q| q.into_inner())
        .unwrap_or_default()
}

/// `?lang=`, then the language cookie, then `Accept-Language`, then the
/// configured default.
pub fn resolve_lang(req: &HttpRequest, default: Lang) -> Lang {
    if let Some(lang) = query_map(req).get("lang").and_then(|c| Lang::from_code(c)) {
        return lang;
    }

    if let Some(lang) = req
        .cookie(LANG_COOKIE)
        .and_then(|c| Lang::from_code(c.value()))
    {
        return lang;
    }

    req.headers()
        .get("Accept-Language")
        .and_then(|v| v.to_str().ok())
        .and_then(Lang::from_accept_language)
        .unwrap_or(default)
}

fn request_path(req: &HttpRequest) -> String {
    match req.query_string() {
        "" => req.path().to_string(),
        q => format!("{}?{}", req.path(), q),
    }
}

/// Profile of the session cookie, if it names a live session.
pub async fn current_profile(req: &HttpRequest, state: &AppState) -> Option<Profile> {
    let token = req
        .cookie(SESSION_COOKIE)
        .map(|c| c.value().trim().to_string())
        .filter(|t| !t.is_empty())?;

    match db::get_session_profile(&state.pool, &token).await {
        Ok(profile) => profile,
        Err(e) => {
            log::error!("Failed to load session: {}", e);
            None
        }
    }
}

fn context_for(req: &HttpRequest, state: &AppState, user: Option<Profile>) -> PageContext {
    let mut ctx = PageContext::new(
        resolve_lang(req, state.config.default_lang),
        user,
        request_path(req),
    );
    ctx.flash = query_map(req).get("flash").and_then(|c| Flash::from_code(c));
    ctx
}

/// Context for public pages; a session is loaded only when a cookie is sent.
pub async fn page_context(req: &HttpRequest, state: &AppState) -> PageContext {
    let user = current_profile(req, state).await;
    context_for(req, state, user)
}

/// Context for pages that never need the session (sign-in forms, 404).
pub fn anonymous_context(req: &HttpRequest, state: &AppState) -> PageContext {
    context_for(req, state, None)
}

/// Dashboard guard. Unauthenticated visitors go to the sign-in page with a
/// return path; signed-in users lacking `required` go to the overview.
pub async fn require_role(
    req: &HttpRequest,
    state: &AppState,
    required: Option<Role>,
) -> Result<PageContext, HttpResponse> {
    let user = current_profile(req, state).await;

    match authorize(user.as_ref(), required) {
        AccessDecision::Granted => Ok(context_for(req, state, user)),
        AccessDecision::RedirectToLogin => {
            let next = if req.method() == actix_web::http::Method::GET {
                request_path(req)
            } else {
                DASHBOARD_PATH.to_string()
            };
            Err(redirect(req, &login_redirect(&next)))
        }
        AccessDecision::RedirectToDashboard => {
            log::warn!(
                "Denied {} {} for role {:?}",
                req.method(),
                req.path(),
                user.as_ref().map(|u| u.role)
            );
            Err(redirect(req, DASHBOARD_PATH))
        }
    }
}

pub fn session_cookie(token: &str, config: &AppConfig) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token.to_string())
        .path("/")
        .http_only(true)
        .secure(config.cookie_secure)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::hours(config.session_ttl_hours))
        .finish()
}

pub fn removal_cookie(name: &'static str) -> Cookie<'static> {
    let mut cookie = Cookie::build(name, "").path("/").finish();
    cookie.make_removal();
    cookie
}

pub fn lang_cookie(lang: Lang, config: &AppConfig) -> Cookie<'static> {
    Cookie::build(LANG_COOKIE, lang.code())
        .path("/")
        .secure(config.cookie_secure)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::days(365))
        .finish()
}

/// Generic failure page; the cause is logged by the caller.
pub fn server_error(ctx: PageContext) -> HttpResponse {
    render_status(
        StatusCode::INTERNAL_SERVER_ERROR,
        ErrorTemplate {
            ctx,
            title_key: "error.server_title",
            message_key: "error.server_message",
        },
    )
}

pub fn not_found(ctx: PageContext) -> HttpResponse {
    render_status(
        StatusCode::NOT_FOUND,
        ErrorTemplate {
            ctx,
            title_key: "error.not_found_title",
            message_key: "error.not_found_message",
        },
    )
}

pub fn too_many_requests(ctx: PageContext) -> HttpResponse {
    render_status(
        StatusCode::TOO_MANY_REQUESTS,
        ErrorTemplate {
            ctx,
            title_key: "error.rate_limit_title",
            message_key: "error.rate_limit_message",
        },
    )
}

#[cfg(test)]
mod tests {
    use actix_web::test::TestRequest;

    use super::*;

    #[test]
    fn test_resolve_lang_order() {
        let req = TestRequest::get()
            .uri("/?lang=ar")
            .insert_header(("Accept-Language", "en-US"))
            .to_http_request();
        assert_eq!(resolve_lang(&req, Lang::En), Lang::Ar);

        let req = TestRequest::get()
            .uri("/")
            .cookie(Cookie::new(LANG_COOKIE, "ar"))
            .insert_header(("Accept-Language", "en"))
            .to_http_request();
        assert_eq!(resolve_lang(&req, Lang::En), Lang::Ar);

        let req = TestRequest::get()
            .uri("/")
            .insert_header(("Accept-Language", "ar-SA,en;q=0.5"))
            .to_http_request();
        assert_eq!(resolve_lang(&req, Lang::En), Lang::Ar);

        let req = TestRequest::get().uri("/").to_http_request();
        assert_eq!(resolve_lang(&req, Lang::Ar), Lang::Ar);
    }

    #[test]
    fn test_redirect_htmx_aware() {
        let req = TestRequest::post().uri("/x").to_http_request();
        let resp = redirect(&req, "/dashboard");
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers().get("Location").unwrap(), "/dashboard");

        let req = TestRequest::post()
            .uri("/x")
            .insert_header(("HX-Request", "true"))
            .to_http_request();
        let resp = redirect(&req, "/dashboard");
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get("HX-Redirect").unwrap(), "/dashboard");
    }

    #[test]
    fn test_redirect_flash_appends_code() {
        let req = TestRequest::post().uri("/x").to_http_request();
        let resp = redirect_flash(&req, "/dashboard/posts?status=draft", "saved");
        assert_eq!(
            resp.headers().get("Location").unwrap(),
            "/dashboard/posts?status=draft&flash=saved"
        );
    }
}
