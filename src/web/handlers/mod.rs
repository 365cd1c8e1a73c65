pub mod account;
pub mod admin_content;
pub mod admin_history;
pub mod admin_messages;
pub mod admin_posts;
pub mod admin_projects;
pub mod admin_services;
pub mod admin_stats;
pub mod admin_tasks;
pub mod admin_team;
pub mod admin_testimonials;
pub mod admin_users;
pub mod auth;
pub mod dashboard;
pub mod lang;
pub mod public;
pub mod uploads;

use actix_web::web;

/// Registers every route. Unmatched paths fall through to
/// [`public::not_found_page`], which the app installs as its default service.
pub fn configure(cfg: &mut web::ServiceConfig) {
    public::configure(cfg);
    auth::configure(cfg);
    lang::configure(cfg);
    dashboard::configure(cfg);
    admin_posts::configure(cfg);
    admin_team::configure(cfg);
    admin_tasks::configure(cfg);
    admin_users::configure(cfg);
    admin_content::configure(cfg);
    admin_stats::configure(cfg);
    admin_history::configure(cfg);
    admin_projects::configure(cfg);
    admin_services::configure(cfg);
    admin_testimonials::configure(cfg);
    admin_messages::configure(cfg);
    account::configure(cfg);
    uploads::configure(cfg);
}
