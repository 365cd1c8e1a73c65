use actix_web::http::StatusCode;
use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};
use sqlx::PgPool;
use uuid::Uuid;

use crate::common::StoreError;
use crate::db;
use crate::log_failure;
use crate::models::SiteCopy;
use crate::services::{collect_tags, BlogFilter, FormErrors};
use crate::web::context::PageContext;
use crate::web::forms::{CategoryQuery, ContactForm, QuoteForm, TestimonialForm};
use crate::web::helpers::{
    not_found, page_context, render, render_status, server_error, too_many_requests,
};
use crate::web::security::{rate_key, SUBMISSION_LIMIT};
use crate::web::state::AppState;
use crate::web::templates::{
    AboutTemplate, BlogPostTemplate, BlogTemplate, ContactTemplate, HomeTemplate,
    ProjectDetailTemplate, ProjectsTemplate, ServiceDetailTemplate, ServicesTemplate,
};

const FEATURED_PROJECTS: i64 = 6;
const HOME_TESTIMONIALS: i64 = 6;
const HOME_POSTS: usize = 3;

async fn load_home(pool: &PgPool, ctx: PageContext) -> Result<HomeTemplate, StoreError> {
    let copy = db::load_site_copy(pool, &["home", "about"]).await?;
    let services = db::list_services(pool, false).await?;
    let projects = db::list_featured_projects(pool, FEATURED_PROJECTS).await?;
    let stats = db::get_site_stats(pool).await?;
    let testimonials = db::list_approved_testimonials(pool, HOME_TESTIMONIALS).await?;
    let mut posts = db::list_blog_posts(pool, false).await?;
    posts.truncate(HOME_POSTS);

    Ok(HomeTemplate {
        ctx,
        copy,
        services,
        projects,
        stats,
        testimonials,
        posts,
    })
}

#[get("/")]
pub async fn home(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let ctx = page_context(&req, &state).await;

    match load_home(&state.pool, ctx.clone()).await {
        Ok(page) => render(page),
        Err(e) => {
            log::error!("Failed to load home page: {}", e);
            server_error(ctx)
        }
    }
}

#[get("/services")]
pub async fn services_page(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let ctx = page_context(&req, &state).await;

    match db::list_services(&state.pool, false).await {
        Ok(services) => render(ServicesTemplate { ctx, services }),
        Err(e) => {
            log::error!("Failed to list services: {}", e);
            server_error(ctx)
        }
    }
}

#[get("/services/{id}")]
pub async fn service_detail(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> impl Responder {
    let ctx = page_context(&req, &state).await;

    match db::get_service(&state.pool, path.into_inner()).await {
        Ok(Some(service)) if service.is_active => render(ServiceDetailTemplate {
            ctx,
            service,
            form: QuoteForm::default(),
            errors: FormErrors::new(),
            sent: false,
        }),
        Ok(_) => not_found(ctx),
        Err(e) => {
            log::error!("Failed to load service: {}", e);
            server_error(ctx)
        }
    }
}

#[post("/quote")]
pub async fn quote_submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<QuoteForm>,
) -> impl Responder {
    let ctx = page_context(&req, &state).await;

    if !state
        .rate_limiter
        .allow(&rate_key("submit", &req), SUBMISSION_LIMIT)
    {
        return too_many_requests(ctx);
    }

    let form = form.into_inner();
    let service_id = match Uuid::parse_str(form.service_id.trim()) {
        Ok(id) => id,
        Err(_) => return not_found(ctx),
    };

    let service = match db::get_service(&state.pool, service_id).await {
        Ok(Some(s)) if s.is_active => s,
        Ok(_) => return not_found(ctx),
        Err(e) => {
            log::error!("Failed to load service for quote: {}", e);
            return server_error(ctx);
        }
    };

    let data = match form.validate() {
        Ok(data) => data,
        Err(errors) => {
            return render_status(
                StatusCode::UNPROCESSABLE_ENTITY,
                ServiceDetailTemplate {
                    ctx,
                    service,
                    form,
                    errors,
                    sent: false,
                },
            );
        }
    };

    match db::create_contact_message(&state.pool, &data).await {
        Ok(message) => {
            log::info!("Quote request {} for service {}", message.id, service.id);
            render(ServiceDetailTemplate {
                ctx,
                service,
                form: QuoteForm::default(),
                errors: FormErrors::new(),
                sent: true,
            })
        }
        Err(e) => {
            log::error!("Failed to store quote request: {}", e);
            log_failure!(&state.pool, "quote.submit", &data);
            server_error(ctx)
        }
    }
}

#[get("/projects")]
pub async fn projects_page(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<CategoryQuery>,
) -> impl Responder {
    let ctx = page_context(&req, &state).await;

    let all = match db::list_projects(&state.pool).await {
        Ok(p) => p,
        Err(e) => {
            log::error!("Failed to list projects: {}", e);
            return server_error(ctx);
        }
    };

    let mut categories: Vec<String> = all
        .iter()
        .map(|p| p.category.trim().to_string())
        .filter(|c| !c.is_empty())
        .collect();
    categories.sort();
    categories.dedup();

    let category = query
        .category
        .as_deref()
        .map(str::trim)
        .unwrap_or("")
        .to_string();
    let projects = if category.is_empty() {
        all
    } else {
        all.into_iter()
            .filter(|p| p.category.trim().eq_ignore_ascii_case(&category))
            .collect()
    };

    render(ProjectsTemplate {
        ctx,
        projects,
        categories,
        category,
    })
}

#[get("/projects/{id}")]
pub async fn project_detail(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> impl Responder {
    let ctx = page_context(&req, &state).await;

    match db::get_project(&state.pool, path.into_inner()).await {
        Ok(Some(project)) => render(ProjectDetailTemplate { ctx, project }),
        Ok(None) => not_found(ctx),
        Err(e) => {
            log::error!("Failed to load project: {}", e);
            server_error(ctx)
        }
    }
}

#[get("/blog")]
pub async fn blog_page(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<BlogFilter>,
) -> impl Responder {
    let ctx = page_context(&req, &state).await;

    // Visitors only ever see published posts
    let mut filter = query.into_inner();
    filter.status = None;

    match db::list_blog_posts(&state.pool, false).await {
        Ok(posts) => {
            let tags = collect_tags(&posts);
            let posts = filter.apply(posts);
            render(BlogTemplate {
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

#[get("/blog/{slug}")]
pub async fn blog_post(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> impl Responder {
    let ctx = page_context(&req, &state).await;

    match db::get_published_post_by_slug(&state.pool, &path.into_inner()).await {
        Ok(Some(post)) => render(BlogPostTemplate { ctx, post }),
        Ok(None) => not_found(ctx),
        Err(e) => {
            log::error!("Failed to load blog post: {}", e);
            server_error(ctx)
        }
    }
}

async fn load_about(pool: &PgPool, ctx: PageContext) -> Result<AboutTemplate, StoreError> {
    Ok(AboutTemplate {
        ctx,
        copy: db::load_site_copy(pool, &["about"]).await?,
        milestones: db::list_milestones(pool).await?,
        team: db::list_team_members(pool, false).await?,
        stats: db::get_site_stats(pool).await?,
    })
}

#[get("/about")]
pub async fn about_page(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let ctx = page_context(&req, &state).await;

    match load_about(&state.pool, ctx.clone()).await {
        Ok(page) => render(page),
        Err(e) => {
            log::error!("Failed to load about page: {}", e);
            server_error(ctx)
        }
    }
}

/// Contact details are decoration; the form still works without them.
async fn contact_copy(pool: &PgPool) -> SiteCopy {
    db::load_site_copy(pool, &["contact"])
        .await
        .unwrap_or_else(|e| {
            log::warn!("Failed to load contact copy: {}", e);
            SiteCopy::default()
        })
}

fn contact_page(ctx: PageContext, copy: SiteCopy) -> ContactTemplate {
    ContactTemplate {
        ctx,
        copy,
        form: ContactForm::default(),
        errors: FormErrors::new(),
        sent: false,
        testimonial: TestimonialForm {
            rating: "5".to_string(),
            ..Default::default()
        },
        testimonial_errors: FormErrors::new(),
        testimonial_sent: false,
    }
}

#[get("/contact")]
pub async fn contact_get(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let ctx = page_context(&req, &state).await;
    let copy = contact_copy(&state.pool).await;
    render(contact_page(ctx, copy))
}

#[post("/contact")]
pub async fn contact_submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<ContactForm>,
) -> impl Responder {
    let ctx = page_context(&req, &state).await;

    if !state
        .rate_limiter
        .allow(&rate_key("submit", &req), SUBMISSION_LIMIT)
    {
        return too_many_requests(ctx);
    }

    let form = form.into_inner();

    // Rejected input never reaches the database
    let data = match form.validate() {
        Ok(data) => data,
        Err(errors) => {
            let mut page = contact_page(ctx, SiteCopy::default());
            page.form = form;
            page.errors = errors;
            return render_status(StatusCode::UNPROCESSABLE_ENTITY, page);
        }
    };

    match db::create_contact_message(&state.pool, &data).await {
        Ok(message) => {
            log::info!("Contact message {} received", message.id);
            let copy = contact_copy(&state.pool).await;
            let mut page = contact_page(ctx, copy);
            page.sent = true;
            render(page)
        }
        Err(e) => {
            log::error!("Failed to store contact message: {}", e);
            log_failure!(&state.pool, "contact.submit", &data);
            let mut page = contact_page(ctx, SiteCopy::default());
            page.form = form;
            page.errors.add("form", "validation.failed");
            render_status(StatusCode::INTERNAL_SERVER_ERROR, page)
        }
    }
}

#[post("/testimonials")]
pub async fn testimonial_submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<TestimonialForm>,
) -> impl Responder {
    let ctx = page_context(&req, &state).await;

    if !state
        .rate_limiter
        .allow(&rate_key("submit", &req), SUBMISSION_LIMIT)
    {
        return too_many_requests(ctx);
    }

    let form = form.into_inner();
    let data = match form.validate(ctx.lang) {
        Ok(data) => data,
        Err(errors) => {
            let mut page = contact_page(ctx, SiteCopy::default());
            page.testimonial = form;
            page.testimonial_errors = errors;
            return render_status(StatusCode::UNPROCESSABLE_ENTITY, page);
        }
    };

    match db::submit_testimonial(&state.pool, &data).await {
        Ok(t) => {
            log::info!("Testimonial {} submitted for review", t.id);
            let copy = contact_copy(&state.pool).await;
            let mut page = contact_page(ctx, copy);
            page.testimonial_sent = true;
            render(page)
        }
        Err(e) => {
            log::error!("Failed to store testimonial: {}", e);
            log_failure!(&state.pool, "testimonial.submit", &data);
            let mut page = contact_page(ctx, SiteCopy::default());
            page.testimonial = form;
            page.testimonial_errors.add("content", "validation.failed");
            render_status(StatusCode::INTERNAL_SERVER_ERROR, page)
        }
    }
}

/// Fallback for unmatched paths.
pub async fn not_found_page(state: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    let ctx = page_context(&req, &state).await;
    not_found(ctx)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(home)
        .service(services_page)
        .service(service_detail)
        .service(quote_submit)
        .service(projects_page)
        .service(project_detail)
        .service(blog_page)
        .service(blog_post)
        .service(about_page)
        .service(contact_get)
        .service(contact_submit)
        .service(testimonial_submit);
}
