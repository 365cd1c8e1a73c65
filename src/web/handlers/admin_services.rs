use actix_web::http::StatusCode;
use actix_web::{get, post, web, HttpRequest, Responder};
use uuid::Uuid;

use crate::db;
use crate::models::Role;
use crate::services::FormErrors;
use crate::web::context::PageContext;
use crate::web::forms::ServiceForm;
use crate::web::helpers::{
    not_found, redirect_flash, render, render_status, require_role, server_error,
};
use crate::web::state::AppState;
use crate::web::templates::{ServiceFormTemplate, ServicesAdminTemplate};

const LIST_PATH: &str = "/dashboard/services";

fn form_page(
    ctx: PageContext,
    id: Option<Uuid>,
    form: ServiceForm,
    errors: FormErrors,
) -> ServiceFormTemplate {
    ServiceFormTemplate {
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

#[get("/dashboard/services")]
pub async fn services_list(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let ctx = match require_role(&req, &state, Some(Role::Editor)).await {
        Ok(ctx) => ctx,
        Err(resp) => return resp,
    };

    match db::list_services(&state.pool, true).await {
        Ok(services) => render(ServicesAdminTemplate { ctx, services }),
        Err(e) => {
            log::error!("Failed to list services: {}", e);
            server_error(ctx)
        }
    }
}

#[get("/dashboard/services/new")]
pub async fn services_new(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let ctx = match require_role(&req, &state, Some(Role::Editor)).await {
        Ok(ctx) => ctx,
        Err(resp) => return resp,
    };

    render(form_page(ctx, None, ServiceForm::default(), FormErrors::new()))
}

#[post("/dashboard/services")]
pub async fn services_create(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<ServiceForm>,
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

    match db::create_service(&state.pool, &data).await {
        Ok(service) => {
            log::info!("Service {} created", service.id);
            redirect_flash(&req, LIST_PATH, "created")
        }
        Err(e) => {
            log::error!("Failed to create service: {}", e);
            render_status(
                StatusCode::INTERNAL_SERVER_ERROR,
                form_page(ctx, None, form, failed()),
            )
        }
    }
}

#[get("/dashboard/services/{id}/edit")]
pub async fn services_edit(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> impl Responder {
    let ctx = match require_role(&req, &state, Some(Role::Editor)).await {
        Ok(ctx) => ctx,
        Err(resp) => return resp,
    };

    let id = path.into_inner();
    match db::get_service(&state.pool, id).await {
        Ok(Some(service)) => render(form_page(
            ctx,
            Some(id),
            ServiceForm::from_service(&service),
            FormErrors::new(),
        )),
        Ok(None) => not_found(ctx),
        Err(e) => {
            log::error!("Failed to load service {}: {}", id, e);
            server_error(ctx)
        }
    }
}

#[post("/dashboard/services/{id}")]
pub async fn services_update(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    form: web::Form<ServiceForm>,
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

    match db::update_service(&state.pool, id, &data).await {
        Ok(Some(_)) => redirect_flash(&req, LIST_PATH, "saved"),
        Ok(None) => redirect_flash(&req, LIST_PATH, "not_found"),
        Err(e) => {
            log::error!("Failed to update service {}: {}", id, e);
            render_status(
                StatusCode::INTERNAL_SERVER_ERROR,
                form_page(ctx, Some(id), form, failed()),
            )
        }
    }
}

/// Quote requests keep their message; the service link is cleared by the
/// foreign key.
#[post("/dashboard/services/{id}/delete")]
pub async fn services_delete(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> impl Responder {
    if let Err(resp) = require_role(&req, &state, Some(Role::Editor)).await {
        return resp;
    }

    let id = path.into_inner();
    match db::delete_service(&state.pool, id).await {
        Ok(true) => redirect_flash(&req, LIST_PATH, "deleted"),
        Ok(false) => redirect_flash(&req, LIST_PATH, "not_found"),
        Err(e) => {
            log::error!("Failed to delete service {}: {}", id, e);
            redirect_flash(&req, LIST_PATH, "failed")
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(services_list)
        .service(services_new)
        .service(services_create)
        .service(services_edit)
        .service(services_update)
        .service(services_delete);
}
