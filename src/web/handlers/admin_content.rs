use actix_web::http::StatusCode;
use actix_web::{get, post, web, HttpRequest, Responder};
use uuid::Uuid;

use crate::common::StoreError;
use crate::db;
use crate::models::{ContentItem, Role};
use crate::services::FormErrors;
use crate::web::context::PageContext;
use crate::web::forms::ContentItemForm;
use crate::web::helpers::{
    not_found, redirect_flash, render, render_status, require_role, server_error,
};
use crate::web::state::AppState;
use crate::web::templates::{ContentFormTemplate, ContentSection, ContentTemplate};

const LIST_PATH: &str = "/dashboard/content";

/// Groups items (already ordered by section) into one block per section.
fn group_sections(items: Vec<ContentItem>) -> Vec<ContentSection> {
    let mut sections: Vec<ContentSection> = Vec::new();
    for item in items {
        match sections.last_mut() {
            Some(section) if section.name == item.section => section.items.push(item),
            _ => sections.push(ContentSection {
                name: item.section.clone(),
                items: vec![item],
            }),
        }
    }
    sections
}

fn form_page(
    ctx: PageContext,
    id: Option<Uuid>,
    form: ContentItemForm,
    errors: FormErrors,
) -> ContentFormTemplate {
    ContentFormTemplate {
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

fn save_error(e: StoreError) -> (StatusCode, FormErrors) {
    let mut errors = FormErrors::new();
    match e {
        StoreError::Conflict(_) => {
            errors.add("key", "validation.key_taken");
            (StatusCode::CONFLICT, errors)
        }
        e => {
            log::error!("Failed to save content item: {}", e);
            errors.add("form", "validation.failed");
            (StatusCode::INTERNAL_SERVER_ERROR, errors)
        }
    }
}

#[get("/dashboard/content")]
pub async fn content_list(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let ctx = match require_role(&req, &state, Some(Role::Editor)).await {
        Ok(ctx) => ctx,
        Err(resp) => return resp,
    };

    match db::list_content_items(&state.pool).await {
        Ok(items) => render(ContentTemplate {
            ctx,
            sections: group_sections(items),
        }),
        Err(e) => {
            log::error!("Failed to list site content: {}", e);
            server_error(ctx)
        }
    }
}

#[get("/dashboard/content/new")]
pub async fn content_new(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let ctx = match require_role(&req, &state, Some(Role::Editor)).await {
        Ok(ctx) => ctx,
        Err(resp) => return resp,
    };

    render(form_page(ctx, None, ContentItemForm::default(), FormErrors::new()))
}

#[post("/dashboard/content")]
pub async fn content_create(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<ContentItemForm>,
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

    match db::create_content_item(&state.pool, &data).await {
        Ok(item) => {
            log::info!("Content item {}.{} created", item.section, item.key);
            redirect_flash(&req, LIST_PATH, "created")
        }
        Err(e) => {
            let (status, errors) = save_error(e);
            render_status(status, form_page(ctx, None, form, errors))
        }
    }
}

#[get("/dashboard/content/{id}/edit")]
pub async fn content_edit(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> impl Responder {
    let ctx = match require_role(&req, &state, Some(Role::Editor)).await {
        Ok(ctx) => ctx,
        Err(resp) => return resp,
    };

    let id = path.into_inner();
    match db::get_content_item(&state.pool, id).await {
        Ok(Some(item)) => render(form_page(
            ctx,
            Some(id),
            ContentItemForm::from_item(&item),
            FormErrors::new(),
        )),
        Ok(None) => not_found(ctx),
        Err(e) => {
            log::error!("Failed to load content item {}: {}", id, e);
            server_error(ctx)
        }
    }
}

#[post("/dashboard/content/{id}")]
pub async fn content_update(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    form: web::Form<ContentItemForm>,
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

    match db::update_content_item(&state.pool, id, &data).await {
        Ok(Some(_)) => redirect_flash(&req, LIST_PATH, "saved"),
        Ok(None) => redirect_flash(&req, LIST_PATH, "not_found"),
        Err(e) => {
            let (status, errors) = save_error(e);
            render_status(status, form_page(ctx, Some(id), form, errors))
        }
    }
}

#[post("/dashboard/content/{id}/delete")]
pub async fn content_delete(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> impl Responder {
    if let Err(resp) = require_role(&req, &state, Some(Role::Editor)).await {
        return resp;
    }

    let id = path.into_inner();
    match db::delete_content_item(&state.pool, id).await {
        Ok(true) => redirect_flash(&req, LIST_PATH, "deleted"),
        Ok(false) => redirect_flash(&req, LIST_PATH, "not_found"),
        Err(e) => {
            log::error!("Failed to delete content item {}: {}", id, e);
            redirect_flash(&req, LIST_PATH, "failed")
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(content_list)
        .service(content_new)
        .service(content_create)
        .service(content_edit)
        .service(content_update)
        .service(content_delete);
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn item(section: &str, key: &str) -> ContentItem {
        ContentItem {
            id: Uuid::new_v4(),
            section: section.to_string(),
            key: key.to_string(),
            value_en: String::new(),
            value_ar: String::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_group_sections_keeps_order() {
        let sections = group_sections(vec![
            item("about", "mission"),
            item("about", "vision"),
            item("contact", "email"),
            item("home", "hero_title"),
        ]);

        let names: Vec<&str> = sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["about", "contact", "home"]);
        assert_eq!(sections[0].items.len(), 2);
        assert_eq!(sections[2].items[0].key, "hero_title");
    }

    #[test]
    fn test_group_sections_empty() {
        assert!(group_sections(Vec::new()).is_empty());
    }
}
