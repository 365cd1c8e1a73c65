use actix_web::http::StatusCode;
use actix_web::{get, post, web, HttpRequest, Responder};
use uuid::Uuid;

use crate::common::StoreError;
use crate::db;
use crate::models::{PostStatus, Role};
use crate::services::{collect_tags, BlogFilter, FormErrors};
use crate::web::context::PageContext;
use crate::web::forms::BlogPostForm;
use crate::web::handlers::uploads::discard_upload;
use crate::web::helpers::{
    not_found, redirect_flash, render, render_status, require_role, server_error,
};
use crate::web::state::AppState;
use crate::web::templates::{PostFormTemplate, PostsTemplate};

const LIST_PATH: &str = "/dashboard/posts";

fn form_page(
    ctx: PageContext,
    id: Option<Uuid>,
    form: BlogPostForm,
    errors: FormErrors,
) -> PostFormTemplate {
    PostFormTemplate {
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

/// Maps a failed save to a form error. Slug collisions are shown on the field.
fn save_error(e: StoreError) -> (StatusCode, FormErrors) {
    let mut errors = FormErrors::new();
    match e {
        StoreError::Conflict(_) => {
            errors.add("slug", "validation.slug_taken");
            (StatusCode::CONFLICT, errors)
        }
        e => {
            log::error!("Failed to save blog post: {}", e);
            errors.add("form", "validation.failed");
            (StatusCode::INTERNAL_SERVER_ERROR, errors)
        }
    }
}

#[get("/dashboard/posts")]
pub async fn posts_list(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<BlogFilter>,
) -> impl Responder {
    let ctx = match require_role(&req, &state, Some(Role::Viewer)).await {
        Ok(ctx) => ctx,
        Err(resp) => return resp,
    };

    match db::list_blog_posts(&state.pool, true).await {
        Ok(posts) => {
            let filter = query.into_inner();
            let tags = collect_tags(&posts);
            let posts = filter.apply(posts);
            render(PostsTemplate {
                ctx,
                posts,
                tags,
                filter,
            })
        }
        Err(e) => {
            log::error!("Failed to list blog posts: {}", e);
            server_error(ctx)
        }
    }
}

#[get("/dashboard/posts/new")]
pub async fn posts_new(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let ctx = match require_role(&req, &state, Some(Role::Editor)).await {
        Ok(ctx) => ctx,
        Err(resp) => return resp,
    };

    let form = BlogPostForm {
        status: PostStatus::Draft.as_str().to_string(),
        ..Default::default()
    };
    render(form_page(ctx, None, form, FormErrors::new()))
}

#[post("/dashboard/posts")]
pub async fn posts_create(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<BlogPostForm>,
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

    match db::create_blog_post(&state.pool, ctx.user_id(), &data).await {
        Ok(post) => {
            log::info!("Blog post {} created by {:?}", post.id, ctx.user_id());
            redirect_flash(&req, LIST_PATH, "created")
        }
        Err(e) => {
            let (status, errors) = save_error(e);
            render_status(status, form_page(ctx, None, form, errors))
        }
    }
}

#[get("/dashboard/posts/{id}/edit")]
pub async fn posts_edit(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> impl Responder {
    let ctx = match require_role(&req, &state, Some(Role::Editor)).await {
        Ok(ctx) => ctx,
        Err(resp) => return resp,
    };

    let id = path.into_inner();
    match db::get_blog_post(&state.pool, id).await {
        Ok(Some(post)) => render(form_page(
            ctx,
            Some(id),
            BlogPostForm::from_post(&post),
            FormErrors::new(),
        )),
        Ok(None) => not_found(ctx),
        Err(e) => {
            log::error!("Failed to load blog post {}: {}", id, e);
            server_error(ctx)
        }
    }
}

#[post("/dashboard/posts/{id}")]
pub async fn posts_update(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    form: web::Form<BlogPostForm>,
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

    match db::update_blog_post(&state.pool, id, &data).await {
        Ok(Some(_)) => redirect_flash(&req, LIST_PATH, "saved"),
        Ok(None) => redirect_flash(&req, LIST_PATH, "not_found"),
        Err(e) => {
            let (status, errors) = save_error(e);
            render_status(status, form_page(ctx, Some(id), form, errors))
        }
    }
}

#[post("/dashboard/posts/{id}/publish")]
pub async fn posts_publish(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> impl Responder {
    if let Err(resp) = require_role(&req, &state, Some(Role::Editor)).await {
        return resp;
    }

    let id = path.into_inner();
    match db::publish_blog_post(&state.pool, id).await {
        Ok(Some(post)) => {
            log::info!("Blog post {} published", post.id);
            redirect_flash(&req, LIST_PATH, "published")
        }
        Ok(None) => redirect_flash(&req, LIST_PATH, "not_found"),
        Err(e) => {
            log::error!("Failed to publish blog post {}: {}", id, e);
            redirect_flash(&req, LIST_PATH, "failed")
        }
    }
}

#[post("/dashboard/posts/{id}/delete")]
pub async fn posts_delete(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> impl Responder {
    if let Err(resp) = require_role(&req, &state, Some(Role::Editor)).await {
        return resp;
    }

    let id = path.into_inner();
    let cover = match db::get_blog_post(&state.pool, id).await {
        Ok(Some(post)) => post.cover_image_url,
        Ok(None) => return redirect_flash(&req, LIST_PATH, "not_found"),
        Err(e) => {
            log::error!("Failed to load blog post {}: {}", id, e);
            return redirect_flash(&req, LIST_PATH, "failed");
        }
    };

    match db::delete_blog_post(&state.pool, id).await {
        Ok(true) => {
            discard_upload(&state, cover.as_deref()).await;
            redirect_flash(&req, LIST_PATH, "deleted")
        }
        Ok(false) => redirect_flash(&req, LIST_PATH, "not_found"),
        Err(e) => {
            log::error!("Failed to delete blog post {}: {}", id, e);
            redirect_flash(&req, LIST_PATH, "failed")
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(posts_list)
        .service(posts_new)
        .service(posts_create)
        .service(posts_edit)
        .service(posts_update)
        .service(posts_publish)
        .service(posts_delete);
}
