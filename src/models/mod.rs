pub use blog_post::*;
pub use company_history::*;
pub use contact_message::*;
pub use content_item::*;
pub use profile::*;
pub use project::*;
pub use role::*;
pub use service::*;
pub use site_stats::*;
pub use task::*;
pub use team_member::*;
pub use testimonial::*;

mod blog_post;
mod company_history;
mod contact_message;
mod content_item;
mod profile;
mod project;
mod role;
mod service;
mod site_stats;
mod task;
mod team_member;
mod testimonial;
