use actix_web::{get, web, HttpRequest, Responder};
use sqlx::PgPool;

use crate::common::StoreError;
use crate::db;
use crate::models::PostStatus;
use crate::web::context::PageContext;
use crate::web::helpers::{render, require_role, server_error};
use crate::web::state::AppState;
use crate::web::templates::OverviewTemplate;

async fn load_overview(pool: &PgPool, ctx: PageContext) -> Result<OverviewTemplate, StoreError> {
    let new_messages = db::count_new_messages(pool).await?;
    let pending_testimonials = db::count_pending_testimonials(pool).await?;
    let tasks = db::list_tasks(pool).await?;
    let posts = db::list_blog_posts(pool, true).await?;

    let open_tasks = tasks.iter().filter(|t| t.status.is_open()).count();
    let drafts = posts
        .iter()
        .filter(|p| p.status == PostStatus::Draft)
        .count();
    let published = posts.len() - drafts;

    let me = ctx.user_id();
    let my_tasks = tasks
        .into_iter()
        .filter(|t| t.status.is_open() && me.is_some() && t.assignee_id == me)
        .collect();

    Ok(OverviewTemplate {
        ctx,
        new_messages,
        pending_testimonials,
        open_tasks,
        drafts,
        published,
        my_tasks,
    })
}

#[get("/dashboard")]
pub async fn overview(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let ctx = match require_role(&req, &state, None).await {
        Ok(ctx) => ctx,
        Err(resp) => return resp,
    };

    match load_overview(&state.pool, ctx.clone()).await {
        Ok(page) => render(page),
        Err(e) => {
            log::error!("Failed to load dashboard overview: {}", e);
            server_error(ctx)
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(overview);
}
