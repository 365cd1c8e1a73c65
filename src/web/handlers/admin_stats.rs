use actix_web::http::StatusCode;
use actix_web::{get, post, web, HttpRequest, Responder};

use crate::db;
use crate::models::{Role, SiteStats};
use crate::services::FormErrors;
use crate::web::context::PageContext;
use crate::web::forms::SiteStatsForm;
use crate::web::helpers::{redirect_flash, render, render_status, require_role, server_error};
use crate::web::state::AppState;
use crate::web::templates::StatsTemplate;

const PAGE_PATH: &str = "/dashboard/stats";

fn stats_page(ctx: PageContext, stats: &SiteStats, form: SiteStatsForm, errors: FormErrors) -> StatsTemplate {
    StatsTemplate {
        ctx,
        form,
        errors,
        updated_at: stats.updated_at.format("%Y-%m-%d %H:%M UTC").to_string(),
    }
}

#[get("/dashboard/stats")]
pub async fn stats_form(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let ctx = match require_role(&req, &state, Some(Role::Admin)).await {
        Ok(ctx) => ctx,
        Err(resp) => return resp,
    };

    match db::get_site_stats(&state.pool).await {
        Ok(stats) => {
            let form = SiteStatsForm::from_stats(&stats);
            render(stats_page(ctx, &stats, form, FormErrors::new()))
        }
        Err(e) => {
            log::error!("Failed to load site stats: {}", e);
            server_error(ctx)
        }
    }
}

#[post("/dashboard/stats")]
pub async fn stats_update(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<SiteStatsForm>,
) -> impl Responder {
    let ctx = match require_role(&req, &state, Some(Role::Admin)).await {
        Ok(ctx) => ctx,
        Err(resp) => return resp,
    };

    let form = form.into_inner();
    let data = match form.validate() {
        Ok(data) => data,
        Err(errors) => {
            let stats = match db::get_site_stats(&state.pool).await {
                Ok(stats) => stats,
                Err(e) => {
                    log::error!("Failed to load site stats: {}", e);
                    return server_error(ctx);
                }
            };
            return render_status(
                StatusCode::UNPROCESSABLE_ENTITY,
                stats_page(ctx, &stats, form, errors),
            );
        }
    };

    match db::update_site_stats(&state.pool, &data).await {
        Ok(_) => {
            log::info!("Site stats updated by {:?}", ctx.user_id());
            redirect_flash(&req, PAGE_PATH, "saved")
        }
        Err(e) => {
            log::error!("Failed to update site stats: {}", e);
            redirect_flash(&req, PAGE_PATH, "failed")
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(stats_form).service(stats_update);
}
