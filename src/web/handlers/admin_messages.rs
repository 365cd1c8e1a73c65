use actix_web::{get, post, web, HttpRequest, Responder};
use sqlx::PgPool;
use uuid::Uuid;

use crate::common::StoreError;
use crate::db;
use crate::models::{MessageStatus, Role};
use crate::services::MessageFilter;
use crate::web::context::PageContext;
use crate::web::forms::MessageStatusForm;
use crate::web::helpers::{not_found, redirect_flash, render, require_role, server_error};
use crate::web::state::AppState;
use crate::web::templates::{MessageDetailTemplate, MessagesTemplate};

const LIST_PATH: &str = "/dashboard/messages";

/// Loads one message. Opening a new message marks it read.
async fn load_message(
    pool: &PgPool,
    ctx: PageContext,
    id: Uuid,
) -> Result<Option<MessageDetailTemplate>, StoreError> {
    let mut message = match db::get_contact_message(pool, id).await? {
        Some(m) => m,
        None => return Ok(None),
    };

    if message.status == MessageStatus::New {
        if let Some(updated) = db::set_contact_message_status(pool, id, MessageStatus::Read).await? {
            message = updated;
        }
    }

    let service_title = match message.service_id {
        Some(service_id) => db::get_service(pool, service_id)
            .await?
            .map(|s| s.title(ctx.lang).to_string())
            .unwrap_or_default(),
        None => String::new(),
    };

    Ok(Some(MessageDetailTemplate {
        ctx,
        message,
        service_title,
    }))
}

#[get("/dashboard/messages")]
pub async fn messages_list(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<MessageFilter>,
) -> impl Responder {
    let ctx = match require_role(&req, &state, Some(Role::Viewer)).await {
        Ok(ctx) => ctx,
        Err(resp) => return resp,
    };

    match db::list_contact_messages(&state.pool).await {
        Ok(all) => {
            let filter = query.into_inner();
            let messages = filter.apply(all);
            render(MessagesTemplate {
                ctx,
                messages,
                filter,
            })
        }
        Err(e) => {
            log::error!("Failed to list contact messages: {}", e);
            server_error(ctx)
        }
    }
}

#[get("/dashboard/messages/{id}")]
pub async fn messages_detail(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> impl Responder {
    let ctx = match require_role(&req, &state, Some(Role::Viewer)).await {
        Ok(ctx) => ctx,
        Err(resp) => return resp,
    };

    let id = path.into_inner();
    match load_message(&state.pool, ctx.clone(), id).await {
        Ok(Some(page)) => render(page),
        Ok(None) => not_found(ctx),
        Err(e) => {
            log::error!("Failed to load contact message {}: {}", id, e);
            server_error(ctx)
        }
    }
}

#[post("/dashboard/messages/{id}/status")]
pub async fn messages_set_status(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    form: web::Form<MessageStatusForm>,
) -> impl Responder {
    if let Err(resp) = require_role(&req, &state, Some(Role::Editor)).await {
        return resp;
    }

    let id = path.into_inner();
    let detail = format!("{}/{}", LIST_PATH, id);
    let status = match form.status() {
        Some(status) => status,
        None => return redirect_flash(&req, &detail, "failed"),
    };

    match db::set_contact_message_status(&state.pool, id, status).await {
        Ok(Some(_)) => redirect_flash(&req, &detail, "saved"),
        Ok(None) => redirect_flash(&req, LIST_PATH, "not_found"),
        Err(e) => {
            log::error!("Failed to update contact message {}: {}", id, e);
            redirect_flash(&req, &detail, "failed")
        }
    }
}

#[post("/dashboard/messages/{id}/delete")]
pub async fn messages_delete(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> impl Responder {
    if let Err(resp) = require_role(&req, &state, Some(Role::Editor)).await {
        return resp;
    }

    let id = path.into_inner();
    match db::delete_contact_message(&state.pool, id).await {
        Ok(true) => redirect_flash(&req, LIST_PATH, "deleted"),
        Ok(false) => redirect_flash(&req, LIST_PATH, "not_found"),
        Err(e) => {
            log::error!("Failed to delete contact message {}: {}", id, e);
            redirect_flash(&req, LIST_PATH, "failed")
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(messages_list)
        .service(messages_detail)
        .service(messages_set_status)
        .service(messages_delete);
}
