use std::collections::HashMap;

use actix_web::http::StatusCode;
use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};
use sqlx::PgPool;
use uuid::Uuid;

use crate::common::StoreError;
use crate::db;
use crate::models::{Profile, Role, TaskStatus};
use crate::services::{FormErrors, TaskFilter};
use crate::web::context::PageContext;
use crate::web::forms::{TaskForm, TaskStatusForm};
use crate::web::helpers::{
    is_htmx, not_found, redirect_flash, render, render_status, require_role, server_error,
};
use crate::web::state::AppState;
use crate::web::templates::{TaskFormTemplate, TaskRow, TasksTemplate};

const LIST_PATH: &str = "/dashboard/tasks";

async fn load_tasks(
    pool: &PgPool,
    ctx: PageContext,
    filter: TaskFilter,
) -> Result<TasksTemplate, StoreError> {
    let people = db::list_profiles(pool).await?;
    let tasks = filter.apply(db::list_tasks(pool).await?);

    let names: HashMap<Uuid, String> = people
        .iter()
        .map(|p| (p.id, p.display_name().to_string()))
        .collect();
    let today = ctx.today();
    let rows = tasks
        .into_iter()
        .map(|task| TaskRow {
            assignee: task
                .assignee_id
                .and_then(|id| names.get(&id).cloned())
                .unwrap_or_default(),
            overdue: task.is_overdue(today),
            task,
        })
        .collect();

    Ok(TasksTemplate {
        ctx,
        rows,
        people,
        filter,
    })
}

/// Renders the task form. The assignee list is best effort; a failed lookup
/// leaves it empty rather than failing the page.
async fn form_page(
    pool: &PgPool,
    ctx: PageContext,
    id: Option<Uuid>,
    form: TaskForm,
    errors: FormErrors,
) -> TaskFormTemplate {
    let people: Vec<Profile> = match db::list_profiles(pool).await {
        Ok(people) => people,
        Err(e) => {
            log::warn!("Failed to load assignees: {}", e);
            Vec::new()
        }
    };

    TaskFormTemplate {
        ctx,
        action: match id {
            Some(id) => format!("{}/{}", LIST_PATH, id),
            None => LIST_PATH.to_string(),
        },
        is_new: id.is_none(),
        form,
        errors,
        people,
    }
}

fn failed() -> FormErrors {
    let mut errors = FormErrors::new();
    errors.add("form", "validation.failed");
    errors
}

#[get("/dashboard/tasks")]
pub async fn tasks_list(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<TaskFilter>,
) -> impl Responder {
    let ctx = match require_role(&req, &state, Some(Role::Viewer)).await {
        Ok(ctx) => ctx,
        Err(resp) => return resp,
    };

    match load_tasks(&state.pool, ctx.clone(), query.into_inner()).await {
        Ok(page) => render(page),
        Err(e) => {
            log::error!("Failed to list tasks: {}", e);
            server_error(ctx)
        }
    }
}

#[get("/dashboard/tasks/new")]
pub async fn tasks_new(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let ctx = match require_role(&req, &state, Some(Role::Editor)).await {
        Ok(ctx) => ctx,
        Err(resp) => return resp,
    };

    render(form_page(&state.pool, ctx, None, TaskForm::new_default(), FormErrors::new()).await)
}

#[post("/dashboard/tasks")]
pub async fn tasks_create(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<TaskForm>,
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
                form_page(&state.pool, ctx, None, form, errors).await,
            );
        }
    };

    match db::create_task(&state.pool, ctx.user_id(), &data).await {
        Ok(task) => {
            log::info!("Task {} created by {:?}", task.id, ctx.user_id());
            redirect_flash(&req, LIST_PATH, "created")
        }
        Err(e) => {
            log::error!("Failed to create task: {}", e);
            render_status(
                StatusCode::INTERNAL_SERVER_ERROR,
                form_page(&state.pool, ctx, None, form, failed()).await,
            )
        }
    }
}

#[get("/dashboard/tasks/{id}/edit")]
pub async fn tasks_edit(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> impl Responder {
    let ctx = match require_role(&req, &state, Some(Role::Editor)).await {
        Ok(ctx) => ctx,
        Err(resp) => return resp,
    };

    let id = path.into_inner();
    match db::get_task(&state.pool, id).await {
        Ok(Some(task)) => render(
            form_page(
                &state.pool,
                ctx,
                Some(id),
                TaskForm::from_task(&task),
                FormErrors::new(),
            )
            .await,
        ),
        Ok(None) => not_found(ctx),
        Err(e) => {
            log::error!("Failed to load task {}: {}", id, e);
            server_error(ctx)
        }
    }
}

#[post("/dashboard/tasks/{id}")]
pub async fn tasks_update(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    form: web::Form<TaskForm>,
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
                form_page(&state.pool, ctx, Some(id), form, errors).await,
            );
        }
    };

    match db::update_task(&state.pool, id, &data).await {
        Ok(Some(_)) => redirect_flash(&req, LIST_PATH, "saved"),
        Ok(None) => redirect_flash(&req, LIST_PATH, "not_found"),
        Err(e) => {
            log::error!("Failed to update task {}: {}", id, e);
            render_status(
                StatusCode::INTERNAL_SERVER_ERROR,
                form_page(&state.pool, ctx, Some(id), form, failed()).await,
            )
        }
    }
}

/// Inline status change from the task list. htmx callers get an empty 204.
#[post("/dashboard/tasks/{id}/status")]
pub async fn tasks_set_status(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    form: web::Form<TaskStatusForm>,
) -> impl Responder {
    if let Err(resp) = require_role(&req, &state, Some(Role::Editor)).await {
        return resp;
    }

    let id = path.into_inner();
    let status = match form.status.parse::<TaskStatus>() {
        Ok(status) => status,
        Err(_) => {
            if is_htmx(&req) {
                return HttpResponse::BadRequest().finish();
            }
            return redirect_flash(&req, LIST_PATH, "failed");
        }
    };

    let code = match db::set_task_status(&state.pool, id, status).await {
        Ok(Some(_)) => {
            log::info!("Task {} moved to {}", id, status.as_str());
            if is_htmx(&req) {
                return HttpResponse::NoContent().finish();
            }
            "saved"
        }
        Ok(None) => "not_found",
        Err(e) => {
            log::error!("Failed to update task status {}: {}", id, e);
            "failed"
        }
    };
    redirect_flash(&req, LIST_PATH, code)
}

#[post("/dashboard/tasks/{id}/delete")]
pub async fn tasks_delete(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> impl Responder {
    if let Err(resp) = require_role(&req, &state, Some(Role::Editor)).await {
        return resp;
    }

    let id = path.into_inner();
    match db::delete_task(&state.pool, id).await {
        Ok(true) => redirect_flash(&req, LIST_PATH, "deleted"),
        Ok(false) => redirect_flash(&req, LIST_PATH, "not_found"),
        Err(e) => {
            log::error!("Failed to delete task {}: {}", id, e);
            redirect_flash(&req, LIST_PATH, "failed")
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(tasks_list)
        .service(tasks_new)
        .service(tasks_create)
        .service(tasks_edit)
        .service(tasks_update)
        .service(tasks_set_status)
        .service(tasks_delete);
}
