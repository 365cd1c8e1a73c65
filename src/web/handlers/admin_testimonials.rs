use actix_web::{get, post, web, HttpRequest, Responder};
use uuid::Uuid;

use crate::db;
use crate::models::Role;
use crate::services::{checkbox, TestimonialFilter};
use crate::web::forms::ApprovalForm;
use crate::web::helpers::{redirect_flash, render, require_role, server_error};
use crate::web::state::AppState;
use crate::web::templates::TestimonialsAdminTemplate;

const LIST_PATH: &str = "/dashboard/testimonials";

#[get("/dashboard/testimonials")]
pub async fn testimonials_list(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<TestimonialFilter>,
) -> impl Responder {
    let ctx = match require_role(&req, &state, Some(Role::Editor)).await {
        Ok(ctx) => ctx,
        Err(resp) => return resp,
    };

    match db::list_testimonials(&state.pool).await {
        Ok(all) => {
            let filter = query.into_inner();
            let testimonials = filter.apply(all);
            render(TestimonialsAdminTemplate {
                ctx,
                testimonials,
                filter,
            })
        }
        Err(e) => {
            log::error!("Failed to list testimonials: {}", e);
            server_error(ctx)
        }
    }
}

/// Approves when the `approved` checkbox is present, withdraws otherwise.
#[post("/dashboard/testimonials/{id}/approval")]
pub async fn testimonials_set_approval(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    form: web::Form<ApprovalForm>,
) -> impl Responder {
    if let Err(resp) = require_role(&req, &state, Some(Role::Editor)).await {
        return resp;
    }

    let id = path.into_inner();
    let approved = checkbox(&form.approved);
    match db::set_testimonial_approval(&state.pool, id, approved).await {
        Ok(Some(_)) => {
            log::info!("Testimonial {} approved={}", id, approved);
            redirect_flash(&req, LIST_PATH, "saved")
        }
        Ok(None) => redirect_flash(&req, LIST_PATH, "not_found"),
        Err(e) => {
            log::error!("Failed to update testimonial {}: {}", id, e);
            redirect_flash(&req, LIST_PATH, "failed")
        }
    }
}

#[post("/dashboard/testimonials/{id}/delete")]
pub async fn testimonials_delete(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> impl Responder {
    if let Err(resp) = require_role(&req, &state, Some(Role::Editor)).await {
        return resp;
    }

    let id = path.into_inner();
    match db::delete_testimonial(&state.pool, id).await {
        Ok(true) => redirect_flash(&req, LIST_PATH, "deleted"),
        Ok(false) => redirect_flash(&req, LIST_PATH, "not_found"),
        Err(e) => {
            log::error!("Failed to delete testimonial {}: {}", id, e);
            redirect_flash(&req, LIST_PATH, "failed")
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(testimonials_list)
        .service(testimonials_set_approval)
        .service(testimonials_delete);
}
