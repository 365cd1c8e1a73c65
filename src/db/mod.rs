pub use auth::*;
pub use blog_posts::*;
pub use company_history::*;
pub use contact_messages::*;
pub use db::*;
pub use profiles::*;
pub use projects::*;
pub use services::*;
pub use site_content::*;
pub use site_stats::*;
pub use tasks::*;
pub use team_members::*;
pub use testimonials::*;

mod auth;
mod blog_posts;
mod company_history;
mod contact_messages;
mod db;
mod profiles;
mod projects;
mod services;
mod site_content;
mod site_stats;
mod tasks;
mod team_members;
mod testimonials;
