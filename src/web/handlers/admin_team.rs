use actix_web::http::StatusCode;
use actix_web::{get, post, web, HttpRequest, Responder};
use uuid::Uuid;

use crate::db;
use crate::models::Role;
use crate::services::FormErrors;
use crate::web::context::PageContext;
use crate::web::forms::TeamMemberForm;
use crate::web::handlers::uploads::discard_upload;
use crate::web::helpers::{
    not_found, redirect_flash, render, render_status, require_role, server_error,
};
use crate::web::state::AppState;
use crate::web::templates::{TeamFormTemplate, TeamTemplate};

const LIST_PATH: &str = "/dashboard/team";

fn form_page(
    ctx: PageContext,
    id: Option<Uuid>,
    form: TeamMemberForm,
    errors: FormErrors,
) -> TeamFormTemplate {
    TeamFormTemplate {
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

fn failed(errors: &mut FormErrors) {
    errors.add("form", "validation.failed");
}

#[get("/dashboard/team")]
pub async fn team_list(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let ctx = match require_role(&req, &state, Some(Role::Viewer)).await {
        Ok(ctx) => ctx,
        Err(resp) => return resp,
    };

    match db::list_team_members(&state.pool, true).await {
        Ok(members) => render(TeamTemplate { ctx, members }),
        Err(e) => {
            log::error!("Failed to list team members: {}", e);
            server_error(ctx)
        }
    }
}

#[get("/dashboard/team/new")]
pub async fn team_new(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let ctx = match require_role(&req, &state, Some(Role::Editor)).await {
        Ok(ctx) => ctx,
        Err(resp) => return resp,
    };

    render(form_page(ctx, None, TeamMemberForm::default(), FormErrors::new()))
}

#[post("/dashboard/team")]
pub async fn team_create(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<TeamMemberForm>,
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

    match db::create_team_member(&state.pool, &data).await {
        Ok(member) => {
            log::info!("Team member {} created", member.id);
            redirect_flash(&req, LIST_PATH, "created")
        }
        Err(e) => {
            log::error!("Failed to create team member: {}", e);
            let mut errors = FormErrors::new();
            failed(&mut errors);
            render_status(
                StatusCode::INTERNAL_SERVER_ERROR,
                form_page(ctx, None, form, errors),
            )
        }
    }
}

#[get("/dashboard/team/{id}/edit")]
pub async fn team_edit(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> impl Responder {
    let ctx = match require_role(&req, &state, Some(Role::Editor)).await {
        Ok(ctx) => ctx,
        Err(resp) => return resp,
    };

    let id = path.into_inner();
    match db::get_team_member(&state.pool, id).await {
        Ok(Some(member)) => render(form_page(
            ctx,
            Some(id),
            TeamMemberForm::from_member(&member),
            FormErrors::new(),
        )),
        Ok(None) => not_found(ctx),
        Err(e) => {
            log::error!("Failed to load team member {}: {}", id, e);
            server_error(ctx)
        }
    }
}

#[post("/dashboard/team/{id}")]
pub async fn team_update(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    form: web::Form<TeamMemberForm>,
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

    match db::update_team_member(&state.pool, id, &data).await {
        Ok(Some(_)) => redirect_flash(&req, LIST_PATH, "saved"),
        Ok(None) => redirect_flash(&req, LIST_PATH, "not_found"),
        Err(e) => {
            log::error!("Failed to update team member {}: {}", id, e);
            let mut errors = FormErrors::new();
            failed(&mut errors);
            render_status(
                StatusCode::INTERNAL_SERVER_ERROR,
                form_page(ctx, Some(id), form, errors),
            )
        }
    }
}

#[post("/dashboard/team/{id}/delete")]
pub async fn team_delete(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> impl Responder {
    if let Err(resp) = require_role(&req, &state, Some(Role::Editor)).await {
        return resp;
    }

    let id = path.into_inner();
    let photo = match db::get_team_member(&state.pool, id).await {
        Ok(Some(member)) => member.photo_url,
        Ok(None) => return redirect_flash(&req, LIST_PATH, "not_found"),
        Err(e) => {
            log::error!("Failed to load team member {}: {}", id, e);
            return redirect_flash(&req, LIST_PATH, "failed");
        }
    };

    match db::delete_team_member(&state.pool, id).await {
        Ok(true) => {
            discard_upload(&state, photo.as_deref()).await;
            redirect_flash(&req, LIST_PATH, "deleted")
        }
        Ok(false) => redirect_flash(&req, LIST_PATH, "not_found"),
        Err(e) => {
            log::error!("Failed to delete team member {}: {}", id, e);
            redirect_flash(&req, LIST_PATH, "failed")
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(team_list)
        .service(team_new)
        .service(team_create)
        .service(team_edit)
        .service(team_update)
        .service(team_delete);
}
