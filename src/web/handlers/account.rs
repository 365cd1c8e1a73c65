use actix_web::http::StatusCode;
use actix_web::{get, post, web, HttpRequest, Responder};
use chrono::Duration;

use crate::db;
use crate::services::{FormErrors, PasswordManager};
use crate::web::context::PageContext;
use crate::web::forms::{PasswordChangeForm, ProfileForm};
use crate::web::helpers::{
    redirect_flash, render, render_status, require_role, server_error, session_cookie,
};
use crate::web::state::AppState;
use crate::web::templates::AccountTemplate;

const PAGE_PATH: &str = "/dashboard/account";

fn account_page(ctx: PageContext, form: Option<ProfileForm>) -> AccountTemplate {
    let form = form.unwrap_or_else(|| {
        ctx.user
            .as_ref()
            .map(ProfileForm::from_profile)
            .unwrap_or_default()
    });
    AccountTemplate {
        ctx,
        form,
        errors: FormErrors::new(),
        password_errors: FormErrors::new(),
    }
}

#[get("/dashboard/account")]
pub async fn account_form(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let ctx = match require_role(&req, &state, None).await {
        Ok(ctx) => ctx,
        Err(resp) => return resp,
    };

    render(account_page(ctx, None))
}

#[post("/dashboard/account")]
pub async fn account_update(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<ProfileForm>,
) -> impl Responder {
    let ctx = match require_role(&req, &state, None).await {
        Ok(ctx) => ctx,
        Err(resp) => return resp,
    };
    let Some(user_id) = ctx.user_id() else {
        return server_error(ctx);
    };

    let form = form.into_inner();
    let data = match form.validate() {
        Ok(data) => data,
        Err(errors) => {
            let mut page = account_page(ctx, Some(form));
            page.errors = errors;
            return render_status(StatusCode::UNPROCESSABLE_ENTITY, page);
        }
    };

    match db::update_profile(&state.pool, user_id, &data).await {
        Ok(Some(_)) => redirect_flash(&req, PAGE_PATH, "saved"),
        Ok(None) => server_error(ctx),
        Err(e) => {
            log::error!("Failed to update profile {}: {}", user_id, e);
            redirect_flash(&req, PAGE_PATH, "failed")
        }
    }
}

#[post("/dashboard/account/password")]
pub async fn account_password(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<PasswordChangeForm>,
) -> impl Responder {
    let ctx = match require_role(&req, &state, None).await {
        Ok(ctx) => ctx,
        Err(resp) => return resp,
    };
    let Some(user_id) = ctx.user_id() else {
        return server_error(ctx);
    };

    let form = form.into_inner();
    if let Err(errors) = form.validate() {
        let mut page = account_page(ctx, None);
        page.password_errors = errors;
        return render_status(StatusCode::UNPROCESSABLE_ENTITY, page);
    }

    let user = match db::find_auth_user_by_id(&state.pool, user_id).await {
        Ok(Some(u)) => u,
        Ok(None) => return server_error(ctx),
        Err(e) => {
            log::error!("Failed to load credentials of {}: {}", user_id, e);
            return server_error(ctx);
        }
    };

    if !PasswordManager::verify_password(&form.current_password, &user.password_hash)
        .unwrap_or(false)
    {
        log::warn!("Wrong current password on password change for {}", user_id);
        let mut page = account_page(ctx, None);
        page.password_errors.add("current_password", "validation.current_password");
        return render_status(StatusCode::UNPROCESSABLE_ENTITY, page);
    }

    let password_hash = match PasswordManager::hash_password(&form.password) {
        Ok(h) => h,
        Err(e) => {
            log::error!("Password hashing error: {}", e);
            return server_error(ctx);
        }
    };

    let ttl = Duration::hours(state.config.session_ttl_hours);
    match db::change_password(&state.pool, user_id, &password_hash, ttl).await {
        Ok(Some((token, dropped))) => {
            log::info!("Password of {} changed, {} sessions ended", user_id, dropped);
            let mut resp = redirect_flash(&req, PAGE_PATH, "password_changed");
            if let Err(e) = resp.add_cookie(&session_cookie(&token, &state.config)) {
                log::error!("Failed to set session cookie: {}", e);
            }
            resp
        }
        Ok(None) => server_error(ctx),
        Err(e) => {
            log::error!("Failed to change password of {}: {}", user_id, e);
            redirect_flash(&req, PAGE_PATH, "failed")
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(account_form)
        .service(account_update)
        .service(account_password);
}
