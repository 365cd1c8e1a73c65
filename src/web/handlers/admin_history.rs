use actix_web::http::StatusCode;
use actix_web::{get, post, web, HttpRequest, Responder};
use uuid::Uuid;

use crate::db;
use crate::models::Role;
use crate::services::FormErrors;
use crate::web::context::PageContext;
use crate::web::forms::MilestoneForm;
use crate::web::helpers::{
    not_found, redirect_flash, render, render_status, require_role, server_error,
};
use crate::web::state::AppState;
use crate::web::templates::{HistoryFormTemplate, HistoryTemplate};

const LIST_PATH: &str = "/dashboard/history";

fn form_page(
    ctx: PageContext,
    id: Option<Uuid>,
    form: MilestoneForm,
    errors: FormErrors,
) -> HistoryFormTemplate {
    HistoryFormTemplate {
        ctx,
        action: match id {
            Some(id) => format!("{}/{}", LIST_PATH, id),
            None => LIST_PATH.to_string(),
        },
        is_new: id.is_none(),
        form,
        errors,
    }
}

fn failed() -> FormErrors {
    let mut errors = FormErrors::new();
    errors.add("form", "validation.failed");
    errors
}

#[get("/dashboard/history")]
pub async fn history_list(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let ctx = match require_role(&req, &state, Some(Role::Editor)).await {
        Ok(ctx) => ctx,
        Err(resp) => return resp,
    };

    match db::list_milestones(&state.pool).await {
        Ok(milestones) => render(HistoryTemplate { ctx, milestones }),
        Err(e) => {
            log::error!("Failed to list company history: {}", e);
            server_error(ctx)
        }
    }
}

#[get("/dashboard/history/new")]
pub async fn history_new(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let ctx = match require_role(&req, &state, Some(Role::Editor)).await {
        Ok(ctx) => ctx,
        Err(resp) => return resp,
    };

    render(form_page(ctx, None, MilestoneForm::default(), FormErrors::new()))
}

#[post("/dashboard/history")]
pub async fn history_create(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<MilestoneForm>,
) -> impl Responder {
    let ctx = match require_role(&req, &state, Some(Role::Editor)).await {
        Ok(ctx) => ctx,
        Err(resp) => return resp,
    };

    let form = form.into_inner();
    let data = match form.validate() {
        Ok(data) => data,
        Err(errors) => {
            return render_status(
                StatusCode::UNPROCESSABLE_ENTITY,
                form_page(ctx, None, form, errors),
            );
        }
    };

    match db::create_milestone(&state.pool, &data).await {
        Ok(m) => {
            log::info!("Milestone {} ({}) created", m.id, m.year);
            redirect_flash(&req, LIST_PATH, "created")
        }
        Err(e) => {
            log::error!("Failed to create milestone: {}", e);
            render_status(
                StatusCode::INTERNAL_SERVER_ERROR,
                form_page(ctx, None, form, failed()),
            )
        }
    }
}

#[get("/dashboard/history/{id}/edit")]
pub async fn history_edit(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> impl Responder {
    let ctx = match require_role(&req, &state, Some(Role::Editor)).await {
        Ok(ctx) => ctx,
        Err(resp) => return resp,
    };

    let id = path.into_inner();
    match db::get_milestone(&state.pool, id).await {
        Ok(Some(m)) => render(form_page(
            ctx,
            Some(id),
            MilestoneForm::from_milestone(&m),
            FormErrors::new(),
        )),
        Ok(None) => not_found(ctx),
        Err(e) => {
            log::error!("Failed to load milestone {}: {}", id, e);
            server_error(ctx)
        }
    }
}

#[post("/dashboard/history/{id}")]
pub async fn history_update(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    form: web::Form<MilestoneForm>,
) -> impl Responder {
    let ctx = match require_role(&req, &state, Some(Role::Editor)).await {
        Ok(ctx) => ctx,
        Err(resp) => return resp,
    };

    let id = path.into_inner();
    let form = form.into_inner();
    let data = match form.validate() {
        Ok(data) => data,
        Err(errors) => {
            return render_status(
                StatusCode::UNPROCESSABLE_ENTITY,
                form_page(ctx, Some(id), form, errors),
            );
        }
    };

    match db::update_milestone(&state.pool, id, &data).await {
        Ok(Some(_)) => redirect_flash(&req, LIST_PATH, "saved"),
        Ok(None) => redirect_flash(&req, LIST_PATH, "not_found"),
        Err(e) => {
            log::error!("Failed to update milestone {}: {}", id, e);
            render_status(
                StatusCode::INTERNAL_SERVER_ERROR,
                form_page(ctx, Some(id), form, failed()),
            )
        }
    }
}

#[post("/dashboard/history/{id}/delete")]
pub async fn history_delete(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> impl Responder {
    if let Err(resp) = require_role(&req, &state, Some(Role::Editor)).await {
        return resp;
    }

    let id = path.into_inner();
    match db::delete_milestone(&state.pool, id).await {
        Ok(true) => redirect_flash(&req, LIST_PATH, "deleted"),
        Ok(false) => redirect_flash(&req, LIST_PATH, "not_found"),
        Err(e) => {
            log::error!("Failed to delete milestone {}: {}", id, e);
            redirect_flash(&req, LIST_PATH, "failed")
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(history_list)
        .service(history_new)
        .service(history_create)
        .service(history_edit)
        .service(history_update)
        .service(history_delete);
}
