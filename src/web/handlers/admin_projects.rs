use actix_web::http::StatusCode;
use actix_web::{get, post, web, HttpRequest, Responder};
use uuid::Uuid;

use crate::db;
use crate::models::Role;
use crate::services::FormErrors;
use crate::web::context::PageContext;
use crate::web::forms::ProjectForm;
use crate::web::handlers::uploads::discard_upload;
use crate::web::helpers::{
    not_found, redirect_flash, render, render_status, require_role, server_error,
};
use crate::web::state::AppState;
use crate::web::templates::{ProjectFormTemplate, ProjectsAdminTemplate};

const LIST_PATH: &str = "/dashboard/projects";

fn form_page(
    ctx: PageContext,
    id: Option<Uuid>,
    form: ProjectForm,
    errors: FormErrors,
) -> ProjectFormTemplate {
    ProjectFormTemplate {
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

#[get("/dashboard/projects")]
pub async fn projects_list(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let ctx = match require_role(&req, &state, Some(Role::Editor)).await {
        Ok(ctx) => ctx,
        Err(resp) => return resp,
    };

    match db::list_projects(&state.pool).await {
        Ok(projects) => render(ProjectsAdminTemplate { ctx, projects }),
        Err(e) => {
            log::error!("Failed to list projects: {}", e);
            server_error(ctx)
        }
    }
}

#[get("/dashboard/projects/new")]
pub async fn projects_new(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let ctx = match require_role(&req, &state, Some(Role::Editor)).await {
        Ok(ctx) => ctx,
        Err(resp) => return resp,
    };

    render(form_page(ctx, None, ProjectForm::default(), FormErrors::new()))
}

#[post("/dashboard/projects")]
pub async fn projects_create(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<ProjectForm>,
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

    match db::create_project(&state.pool, &data).await {
        Ok(project) => {
            log::info!("Project {} created", project.id);
            redirect_flash(&req, LIST_PATH, "created")
        }
        Err(e) => {
            log::error!("Failed to create project: {}", e);
            render_status(
                StatusCode::INTERNAL_SERVER_ERROR,
                form_page(ctx, None, form, failed()),
            )
        }
    }
}

#[get("/dashboard/projects/{id}/edit")]
pub async fn projects_edit(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> impl Responder {
    let ctx = match require_role(&req, &state, Some(Role::Editor)).await {
        Ok(ctx) => ctx,
        Err(resp) => return resp,
    };

    let id = path.into_inner();
    match db::get_project(&state.pool, id).await {
        Ok(Some(project)) => render(form_page(
            ctx,
            Some(id),
            ProjectForm::from_project(&project),
            FormErrors::new(),
        )),
        Ok(None) => not_found(ctx),
        Err(e) => {
            log::error!("Failed to load project {}: {}", id, e);
            server_error(ctx)
        }
    }
}

#[post("/dashboard/projects/{id}")]
pub async fn projects_update(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    form: web::Form<ProjectForm>,
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

    match db::update_project(&state.pool, id, &data).await {
        Ok(Some(_)) => redirect_flash(&req, LIST_PATH, "saved"),
        Ok(None) => redirect_flash(&req, LIST_PATH, "not_found"),
        Err(e) => {
            log::error!("Failed to update project {}: {}", id, e);
            render_status(
                StatusCode::INTERNAL_SERVER_ERROR,
                form_page(ctx, Some(id), form, failed()),
            )
        }
    }
}

#[post("/dashboard/projects/{id}/delete")]
pub async fn projects_delete(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> impl Responder {
    if let Err(resp) = require_role(&req, &state, Some(Role::Editor)).await {
        return resp;
    }

    let id = path.into_inner();
    let image = match db::get_project(&state.pool, id).await {
        Ok(Some(project)) => project.image_url,
        Ok(None) => return redirect_flash(&req, LIST_PATH, "not_found"),
        Err(e) => {
            log::error!("Failed to load project {}: {}", id, e);
            return redirect_flash(&req, LIST_PATH, "failed");
        }
    };

    match db::delete_project(&state.pool, id).await {
        Ok(true) => {
            discard_upload(&state, image.as_deref()).await;
            redirect_flash(&req, LIST_PATH, "deleted")
        }
        Ok(false) => redirect_flash(&req, LIST_PATH, "not_found"),
        Err(e) => {
            log::error!("Failed to delete project {}: {}", id, e);
            redirect_flash(&req, LIST_PATH, "failed")
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(projects_list)
        .service(projects_new)
        .service(projects_create)
        .service(projects_edit)
        .service(projects_update)
        .service(projects_delete);
}
