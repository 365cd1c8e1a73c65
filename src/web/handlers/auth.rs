use actix_web::cookie::Cookie;
use actix_web::http::StatusCode;
use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};
use chrono::Duration;

use crate::common::AuthError;
use crate::db;
use crate::models::SignUpData;
use crate::services::{
    normalize_email, safe_next, validate_email, FormErrors, PasswordManager, DASHBOARD_PATH,
    LOGIN_PATH,
};
use crate::web::context::PageContext;
use crate::web::forms::{
    ForgotPasswordForm, LoginForm, NextQuery, ResetPasswordForm, SignupForm, TokenQuery,
};
use crate::web::helpers::{
    anonymous_context, current_profile, redirect, redirect_flash, removal_cookie, render,
    render_status, server_error, session_cookie, too_many_requests, SESSION_COOKIE,
};
use crate::web::security::{rate_key, ACCOUNT_LIMIT, LOGIN_LIMIT};
use crate::web::state::AppState;
use crate::web::templates::{
    ForgotPasswordTemplate, LoginTemplate, ResetPasswordTemplate, SignupTemplate,
};

const RESET_TOKEN_TTL_HOURS: i64 = 1;

fn with_cookie(mut resp: HttpResponse, cookie: Cookie<'static>) -> HttpResponse {
    if let Err(e) = resp.add_cookie(&cookie) {
        log::error!("Failed to set cookie {}: {}", cookie.name(), e);
    }
    resp
}

/// Starts a session and sends the user on to `next`.
async fn sign_in(
    req: &HttpRequest,
    state: &AppState,
    user_id: uuid::Uuid,
    next: &str,
) -> Result<HttpResponse, sqlx::Error> {
    let ttl = Duration::hours(state.config.session_ttl_hours);
    let token = db::create_session(&state.pool, user_id, ttl).await?;
    let target = safe_next(Some(next).filter(|n| *n != LOGIN_PATH), DASHBOARD_PATH);

    Ok(with_cookie(
        redirect(req, target),
        session_cookie(&token, &state.config),
    ))
}

fn login_page(ctx: PageContext, email: String, next: String, error: Option<&'static str>) -> LoginTemplate {
    LoginTemplate {
        ctx,
        email,
        next,
        error,
    }
}

#[get("/login")]
pub async fn login_form(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<NextQuery>,
) -> impl Responder {
    if current_profile(&req, &state).await.is_some() {
        return redirect(&req, DASHBOARD_PATH);
    }

    let ctx = anonymous_context(&req, &state);
    let next = query.into_inner().next.unwrap_or_default();
    render(login_page(ctx, String::new(), next, None))
}

#[post("/login")]
pub async fn login_submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<LoginForm>,
) -> impl Responder {
    let ctx = anonymous_context(&req, &state);
    let form = form.into_inner();
    let email = normalize_email(&form.email);

    if !state.rate_limiter.allow(&rate_key("login", &req), LOGIN_LIMIT) {
        log::warn!("Sign-in rate limit hit for {}", email);
        return render_status(
            StatusCode::TOO_MANY_REQUESTS,
            login_page(ctx, email, form.next, Some("error.rate_limit_message")),
        );
    }

    let user = match db::find_auth_user_by_email(&state.pool, &email).await {
        Ok(u) => u,
        Err(e) => {
            log::error!("Database error during sign in: {}", e);
            return server_error(ctx);
        }
    };

    // Unknown emails are verified against a dummy hash so both paths cost the same
    let stored_hash = user
        .as_ref()
        .map(|u| u.password_hash.as_str())
        .unwrap_or_else(|| PasswordManager::dummy_hash());
    let password_valid =
        PasswordManager::verify_password(&form.password, stored_hash).unwrap_or(false);

    let user = match user {
        Some(u) if password_valid => u,
        _ => {
            return render_status(
                StatusCode::UNAUTHORIZED,
                login_page(ctx, email, form.next, Some("auth.invalid_credentials")),
            );
        }
    };

    match sign_in(&req, &state, user.id, &form.next).await {
        Ok(resp) => {
            log::info!("User {} signed in", user.id);
            resp
        }
        Err(e) => {
            log::error!("Failed to create session: {}", e);
            server_error(ctx)
        }
    }
}

#[get("/signup")]
pub async fn signup_form(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    if current_profile(&req, &state).await.is_some() {
        return redirect(&req, DASHBOARD_PATH);
    }

    render(SignupTemplate {
        ctx: anonymous_context(&req, &state),
        form: SignupForm::default(),
        errors: FormErrors::new(),
    })
}

#[post("/signup")]
pub async fn signup_submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<SignupForm>,
) -> impl Responder {
    let ctx = anonymous_context(&req, &state);
    let mut form = form.into_inner();

    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            form.password.clear();
            form.password_confirm.clear();
            return render_status(
                StatusCode::UNPROCESSABLE_ENTITY,
                SignupTemplate { ctx, form, errors },
            );
        }
    };

    if !state.rate_limiter.allow(&rate_key("account", &req), ACCOUNT_LIMIT) {
        return too_many_requests(ctx);
    }

    let password_hash = match PasswordManager::hash_password(&input.password) {
        Ok(h) => h,
        Err(e) => {
            log::error!("Password hashing error: {}", e);
            return server_error(ctx);
        }
    };

    let data = SignUpData {
        email: input.email,
        password_hash,
        full_name: input.full_name,
    };

    let profile = match db::sign_up(&state.pool, &data).await {
        Ok(p) => p,
        Err(AuthError::EmailTaken) => {
            let mut errors = FormErrors::new();
            errors.add("email", "validation.email_taken");
            form.password.clear();
            form.password_confirm.clear();
            return render_status(
                StatusCode::CONFLICT,
                SignupTemplate { ctx, form, errors },
            );
        }
        Err(e) => {
            log::error!("Database error during sign up: {}", e);
            return server_error(ctx);
        }
    };

    log::info!("New account {} with role {}", profile.id, profile.role.as_str());

    match sign_in(&req, &state, profile.id, DASHBOARD_PATH).await {
        Ok(resp) => resp,
        Err(e) => {
            log::error!("Failed to create session after sign up: {}", e);
            redirect(&req, LOGIN_PATH)
        }
    }
}

#[post("/logout")]
pub async fn logout(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    if let Some(cookie) = req.cookie(SESSION_COOKIE) {
        if let Err(e) = db::delete_session(&state.pool, cookie.value()).await {
            log::error!("Failed to delete session: {}", e);
        }
    }

    with_cookie(
        redirect_flash(&req, LOGIN_PATH, "signed_out"),
        removal_cookie(SESSION_COOKIE),
    )
}

#[get("/forgot-password")]
pub async fn forgot_password_form(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    render(ForgotPasswordTemplate {
        ctx: anonymous_context(&req, &state),
        email: String::new(),
        errors: FormErrors::new(),
        sent: false,
    })
}

#[post("/forgot-password")]
pub async fn forgot_password_submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<ForgotPasswordForm>,
) -> impl Responder {
    let ctx = anonymous_context(&req, &state);
    let email = normalize_email(&form.email);

    if !validate_email(&email) {
        let mut errors = FormErrors::new();
        errors.add("email", "validation.email");
        return render_status(
            StatusCode::UNPROCESSABLE_ENTITY,
            ForgotPasswordTemplate {
                ctx,
                email,
                errors,
                sent: false,
            },
        );
    }

    if !state.rate_limiter.allow(&rate_key("account", &req), ACCOUNT_LIMIT) {
        return too_many_requests(ctx);
    }

    match db::find_auth_user_by_email(&state.pool, &email).await {
        Ok(Some(user)) => {
            match db::create_password_reset(&state.pool, user.id, Duration::hours(RESET_TOKEN_TTL_HOURS))
                .await
            {
                Ok(token) => log::info!(
                    "Password reset link for {}: {}/reset-password?token={}",
                    user.email,
                    state.config.public_base_url.trim_end_matches('/'),
                    token
                ),
                Err(e) => log::error!("Failed to create password reset: {}", e),
            }
        }
        Ok(None) => log::info!("Password reset requested for unknown email"),
        Err(e) => log::error!("Database error during password reset request: {}", e),
    }

    // Same answer whether or not the account exists
    render(ForgotPasswordTemplate {
        ctx,
        email: String::new(),
        errors: FormErrors::new(),
        sent: true,
    })
}

#[get("/reset-password")]
pub async fn reset_password_form(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<TokenQuery>,
) -> impl Responder {
    let ctx = anonymous_context(&req, &state);
    let token = query.into_inner().token;

    let valid = if token.is_empty() {
        false
    } else {
        match db::password_reset_is_valid(&state.pool, &token).await {
            Ok(v) => v,
            Err(e) => {
                log::error!("Failed to check reset token: {}", e);
                return server_error(ctx);
            }
        }
    };

    render(ResetPasswordTemplate {
        ctx,
        token,
        valid,
        errors: FormErrors::new(),
    })
}

#[post("/reset-password")]
pub async fn reset_password_submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<ResetPasswordForm>,
) -> impl Responder {
    let ctx = anonymous_context(&req, &state);
    let form = form.into_inner();

    if let Err(errors) = form.validate() {
        return render_status(
            StatusCode::UNPROCESSABLE_ENTITY,
            ResetPasswordTemplate {
                ctx,
                token: form.token,
                valid: true,
                errors,
            },
        );
    }

    let password_hash = match PasswordManager::hash_password(&form.password) {
        Ok(h) => h,
        Err(e) => {
            log::error!("Password hashing error: {}", e);
            return server_error(ctx);
        }
    };

    match db::consume_password_reset(&state.pool, &form.token, &password_hash).await {
        Ok(user_id) => {
            log::info!("Password reset completed for {}", user_id);
            redirect_flash(&req, LOGIN_PATH, "password_reset")
        }
        Err(AuthError::InvalidToken) => render_status(
            StatusCode::BAD_REQUEST,
            ResetPasswordTemplate {
                ctx,
                token: String::new(),
                valid: false,
                errors: FormErrors::new(),
            },
        ),
        Err(e) => {
            log::error!("Failed to reset password: {}", e);
            server_error(ctx)
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(login_form)
        .service(login_submit)
        .service(signup_form)
        .service(signup_submit)
        .service(logout)
        .service(forgot_password_form)
        .service(forgot_password_submit)
        .service(reset_password_form)
        .service(reset_password_submit);
}
