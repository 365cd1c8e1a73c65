use askama::Template;

use crate::models::{
    BlogPost, CompanyMilestone, ContactMessage, ContentItem, Profile, Project, Service,
    SiteCopy, SiteStats, Task, TeamMember, Testimonial,
};
use crate::services::{BlogFilter, FormErrors, MessageFilter, TaskFilter, TestimonialFilter};
use crate::web::context::PageContext;
use crate::web::forms::{
    BlogPostForm, ContactForm, ContentItemForm, MilestoneForm, ProfileForm, ProjectForm,
    QuoteForm, ServiceForm, SignupForm, SiteStatsForm, TaskForm, TeamMemberForm,
    TestimonialForm,
};

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub ctx: PageContext,
    pub title_key: &'static str,
    pub message_key: &'static str,
}

// Public site

#[derive(Template)]
#[template(path = "public/index.html")]
pub struct HomeTemplate {
    pub ctx: PageContext,
    pub copy: SiteCopy,
    pub services: Vec<Service>,
    pub projects: Vec<Project>,
    pub stats: SiteStats,
    pub testimonials: Vec<Testimonial>,
    pub posts: Vec<BlogPost>,
}

#[derive(Template)]
#[template(path = "public/services.html")]
pub struct ServicesTemplate {
    pub ctx: PageContext,
    pub services: Vec<Service>,
}

#[derive(Template)]
#[template(path = "public/service_detail.html")]
pub struct ServiceDetailTemplate {
    pub ctx: PageContext,
    pub service: Service,
    pub form: QuoteForm,
    pub errors: FormErrors,
    pub sent: bool,
}

#[derive(Template)]
#[template(path = "public/projects.html")]
pub struct ProjectsTemplate {
    pub ctx: PageContext,
    pub projects: Vec<Project>,
    pub categories: Vec<String>,
    pub category: String,
}

#[derive(Template)]
#[template(path = "public/project_detail.html")]
pub struct ProjectDetailTemplate {
    pub ctx: PageContext,
    pub project: Project,
}

#[derive(Template)]
#[template(path = "public/blog.html")]
pub struct BlogTemplate {
    pub ctx: PageContext,
    pub posts: Vec<BlogPost>,
    pub tags: Vec<String>,
    pub filter: BlogFilter,
}

#[derive(Template)]
#[template(path = "public/blog_post.html")]
pub struct BlogPostTemplate {
    pub ctx: PageContext,
    pub post: BlogPost,
}

#[derive(Template)]
#[template(path = "public/about.html")]
pub struct AboutTemplate {
    pub ctx: PageContext,
    pub copy: SiteCopy,
    pub milestones: Vec<CompanyMilestone>,
    pub team: Vec<TeamMember>,
    pub stats: SiteStats,
}

#[derive(Template)]
#[template(path = "public/contact.html")]
pub struct ContactTemplate {
    pub ctx: PageContext,
    pub copy: SiteCopy,
    pub form: ContactForm,
    pub errors: FormErrors,
    pub sent: bool,
    pub testimonial: TestimonialForm,
    pub testimonial_errors: FormErrors,
    pub testimonial_sent: bool,
}

// Authentication

#[derive(Template)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub ctx: PageContext,
    pub email: String,
    pub next: String,
    pub error: Option<&'static str>,
}

#[derive(Template)]
#[template(path = "auth/signup.html")]
pub struct SignupTemplate {
    pub ctx: PageContext,
    pub form: SignupForm,
    pub errors: FormErrors,
}

#[derive(Template)]
#[template(path = "auth/forgot_password.html")]
pub struct ForgotPasswordTemplate {
    pub ctx: PageContext,
    pub email: String,
    pub errors: FormErrors,
    pub sent: bool,
}

#[derive(Template)]
#[template(path = "auth/reset_password.html")]
pub struct ResetPasswordTemplate {
    pub ctx: PageContext,
    pub token: String,
    pub valid: bool,
    pub errors: FormErrors,
}

// Dashboard

#[derive(Template)]
#[template(path = "dashboard/overview.html")]
pub struct OverviewTemplate {
    pub ctx: PageContext,
    pub new_messages: i64,
    pub pending_testimonials: i64,
    pub open_tasks: usize,
    pub drafts: usize,
    pub published: usize,
    pub my_tasks: Vec<Task>,
}

#[derive(Template)]
#[template(path = "dashboard/posts.html")]
pub struct PostsTemplate {
    pub ctx: PageContext,
    pub posts: Vec<BlogPost>,
    pub tags: Vec<String>,
    pub filter: BlogFilter,
}

#[derive(Template)]
#[template(path = "dashboard/post_form.html")]
pub struct PostFormTemplate {
    pub ctx: PageContext,
    pub action: String,
    pub is_new: bool,
    pub form: BlogPostForm,
    pub errors: FormErrors,
}

#[derive(Template)]
#[template(path = "dashboard/team.html")]
pub struct TeamTemplate {
    pub ctx: PageContext,
    pub members: Vec<TeamMember>,
}

#[derive(Template)]
#[template(path = "dashboard/team_form.html")]
pub struct TeamFormTemplate {
    pub ctx: PageContext,
    pub action: String,
    pub is_new: bool,
    pub form: TeamMemberForm,
    pub errors: FormErrors,
}

/// Task with its assignee resolved for display.
pub struct TaskRow {
    pub task: Task,
    pub assignee: String,
    pub overdue: bool,
}

#[derive(Template)]
#[template(path = "dashboard/tasks.html")]
pub struct TasksTemplate {
    pub ctx: PageContext,
    pub rows: Vec<TaskRow>,
    pub people: Vec<Profile>,
    pub filter: TaskFilter,
}

#[derive(Template)]
#[template(path = "dashboard/task_form.html")]
pub struct TaskFormTemplate {
    pub ctx: PageContext,
    pub action: String,
    pub is_new: bool,
    pub form: TaskForm,
    pub errors: FormErrors,
    pub people: Vec<Profile>,
}

#[derive(Template)]
#[template(path = "dashboard/users.html")]
pub struct UsersTemplate {
    pub ctx: PageContext,
    pub users: Vec<Profile>,
}

pub struct ContentSection {
    pub name: String,
    pub items: Vec<ContentItem>,
}

#[derive(Template)]
#[template(path = "dashboard/content.html")]
pub struct ContentTemplate {
    pub ctx: PageContext,
    pub sections: Vec<ContentSection>,
}

#[derive(Template)]
#[template(path = "dashboard/content_form.html")]
pub struct ContentFormTemplate {
    pub ctx: PageContext,
    pub action: String,
    pub is_new: bool,
    pub form: ContentItemForm,
    pub errors: FormErrors,
}

#[derive(Template)]
#[template(path = "dashboard/stats.html")]
pub struct StatsTemplate {
    pub ctx: PageContext,
    pub form: SiteStatsForm,
    pub errors: FormErrors,
    pub updated_at: String,
}

#[derive(Template)]
#[template(path = "dashboard/history.html")]
pub struct HistoryTemplate {
    pub ctx: PageContext,
    pub milestones: Vec<CompanyMilestone>,
}

#[derive(Template)]
#[template(path = "dashboard/history_form.html")]
pub struct HistoryFormTemplate {
    pub ctx: PageContext,
    pub action: String,
    pub is_new: bool,
    pub form: MilestoneForm,
    pub errors: FormErrors,
}

#[derive(Template)]
#[template(path = "dashboard/projects.html")]
pub struct ProjectsAdminTemplate {
    pub ctx: PageContext,
    pub projects: Vec<Project>,
}

#[derive(Template)]
#[template(path = "dashboard/project_form.html")]
pub struct ProjectFormTemplate {
    pub ctx: PageContext,
    pub action: String,
    pub is_new: bool,
    pub form: ProjectForm,
    pub errors: FormErrors,
}

#[derive(Template)]
#[template(path = "dashboard/services.html")]
pub struct ServicesAdminTemplate {
    pub ctx: PageContext,
    pub services: Vec<Service>,
}

#[derive(Template)]
#[template(path = "dashboard/service_form.html")]
pub struct ServiceFormTemplate {
    pub ctx: PageContext,
    pub action: String,
    pub is_new: bool,
    pub form: ServiceForm,
    pub errors: FormErrors,
}

#[derive(Template)]
#[template(path = "dashboard/testimonials.html")]
pub struct TestimonialsAdminTemplate {
    pub ctx: PageContext,
    pub testimonials: Vec<Testimonial>,
    pub filter: TestimonialFilter,
}

#[derive(Template)]
#[template(path = "dashboard/messages.html")]
pub struct MessagesTemplate {
    pub ctx: PageContext,
    pub messages: Vec<ContactMessage>,
    pub filter: MessageFilter,
}

#[derive(Template)]
#[template(path = "dashboard/message_detail.html")]
pub struct MessageDetailTemplate {
    pub ctx: PageContext,
    pub message: ContactMessage,
    pub service_title: String,
}

#[derive(Template)]
#[template(path = "dashboard/account.html")]
pub struct AccountTemplate {
    pub ctx: PageContext,
    pub form: ProfileForm,
    pub errors: FormErrors,
    pub password_errors: FormErrors,
}
