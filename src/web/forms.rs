//! Submitted forms. Every field arrives as a string; `validate()` turns the
//! form into typed input or a map of per-field message keys.

use serde::Deserialize;

use crate::i18n::Lang;
use crate::models::{
    BlogPost, BlogPostData, CompanyMilestone, CompanyMilestoneData, ContactMessageCreate,
    ContentItem, ContentItemData, MessageKind, MessageStatus, PostStatus, Profile,
    ProfileUpdate, Project, ProjectData, Role, Service, ServiceData, SiteStats, SiteStatsData,
    Task, TaskData, TaskPriority, TaskStatus, TeamMember, TeamMemberData, TestimonialData,
};
use crate::services::{
    checkbox, normalize_email, optional_limited, optional_text, parse_enum, parse_i32,
    parse_lines, parse_non_negative, parse_optional_date, parse_optional_url,
    parse_optional_uuid, parse_tags, required_text, slugify, validate_email, validate_slug,
    FormErrors, PasswordPolicy, MAX_LONG_TEXT, MAX_SHORT_TEXT,
};

fn email_field(errors: &mut FormErrors, field: &'static str, input: &str) -> String {
    let email = normalize_email(input);
    if email.is_empty() {
        errors.add(field, "validation.required");
    } else if !validate_email(&email) {
        errors.add(field, "validation.email");
    }
    email
}

fn password_pair(errors: &mut FormErrors, password: &str, confirm: &str) {
    if let Err(key) = PasswordPolicy::validate(password) {
        errors.add("password", key);
    }
    if password != confirm {
        errors.add("password_confirm", "validation.password_mismatch");
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NextQuery {
    pub next: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenQuery {
    #[serde(default)]
    pub token: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryQuery {
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub next: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SignupForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

#[derive(Debug)]
pub struct SignupInput {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

impl SignupForm {
    pub fn validate(&self) -> Result<SignupInput, FormErrors> {
        let mut errors = FormErrors::new();
        let full_name = required_text(&mut errors, "full_name", &self.full_name, MAX_SHORT_TEXT);
        let email = email_field(&mut errors, "email", &self.email);
        password_pair(&mut errors, &self.password, &self.password_confirm);

        errors.finish(SignupInput {
            full_name,
            email,
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ForgotPasswordForm {
    pub email: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ResetPasswordForm {
    pub token: String,
    pub password: String,
    pub password_confirm: String,
}

impl ResetPasswordForm {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        password_pair(&mut errors, &self.password, &self.password_confirm);
        errors.finish(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<ContactMessageCreate, FormErrors> {
        let mut errors = FormErrors::new();
        let name = required_text(&mut errors, "name", &self.name, MAX_SHORT_TEXT);
        let email = email_field(&mut errors, "email", &self.email);
        let phone = optional_limited(&mut errors, "phone", &self.phone, 40);
        let subject = optional_limited(&mut errors, "subject", &self.subject, MAX_SHORT_TEXT);
        let message = required_text(&mut errors, "message", &self.message, 5_000);

        errors.finish(ContactMessageCreate {
            kind: MessageKind::Contact,
            name,
            email,
            phone: optional_text(&phone),
            subject,
            message,
            service_id: None,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct QuoteForm {
    pub service_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl QuoteForm {
    pub fn validate(&self) -> Result<ContactMessageCreate, FormErrors> {
        let mut errors = FormErrors::new();
        let service_id = parse_optional_uuid(&mut errors, "service_id", &self.service_id);
        let name = required_text(&mut errors, "name", &self.name, MAX_SHORT_TEXT);
        let email = email_field(&mut errors, "email", &self.email);
        let phone = optional_limited(&mut errors, "phone", &self.phone, 40);
        let message = required_text(&mut errors, "message", &self.message, 5_000);

        errors.finish(ContactMessageCreate {
            kind: MessageKind::Quote,
            name,
            email,
            phone: optional_text(&phone),
            subject: "Quote request".to_string(),
            message,
            service_id,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TestimonialForm {
    pub client_name: String,
    pub client_company: String,
    pub content: String,
    pub rating: String,
}

impl TestimonialForm {
    /// The text is stored in the column of the language it was written in.
    pub fn validate(&self, lang: Lang) -> Result<TestimonialData, FormErrors> {
        let mut errors = FormErrors::new();
        let client_name = required_text(&mut errors, "client_name", &self.client_name, MAX_SHORT_TEXT);
        let client_company =
            optional_limited(&mut errors, "client_company", &self.client_company, MAX_SHORT_TEXT);
        let content = required_text(&mut errors, "content", &self.content, 2_000);

        let rating = parse_i32(&mut errors, "rating", &self.rating, 0);
        if !(1..=5).contains(&rating) {
            errors.add("rating", "validation.rating");
        }

        let (content_en, content_ar) = match lang {
            Lang::En => (content, String::new()),
            Lang::Ar => (String::new(), content),
        };

        errors.finish(TestimonialData {
            client_name,
            client_company,
            content_en,
            content_ar,
            rating: rating.clamp(1, 5) as i16,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BlogPostForm {
    pub slug: String,
    pub title_en: String,
    pub title_ar: String,
    pub excerpt_en: String,
    pub excerpt_ar: String,
    pub content_en: String,
    pub content_ar: String,
    pub cover_image_url: String,
    pub tags: String,
    pub status: String,
}

impl BlogPostForm {
    pub fn from_post(post: &BlogPost) -> Self {
        Self {
            slug: post.slug.clone(),
            title_en: post.title_en.clone(),
            title_ar: post.title_ar.clone(),
            excerpt_en: post.excerpt_en.clone(),
            excerpt_ar: post.excerpt_ar.clone(),
            content_en: post.content_en.clone(),
            content_ar: post.content_ar.clone(),
            cover_image_url: post.cover_image_url.clone().unwrap_or_default(),
            tags: post.tags.join(", "),
            status: post.status.as_str().to_string(),
        }
    }

    /// A blank slug is derived from the English title.
    pub fn validate(&self) -> Result<BlogPostData, FormErrors> {
        let mut errors = FormErrors::new();
        let title_en = required_text(&mut errors, "title_en", &self.title_en, MAX_SHORT_TEXT);
        let title_ar = optional_limited(&mut errors, "title_ar", &self.title_ar, MAX_SHORT_TEXT);

        let slug = match self.slug.trim() {
            "" => slugify(&title_en),
            s => s.to_string(),
        };
        if !validate_slug(&slug) {
            errors.add("slug", "validation.slug");
        }

        let excerpt_en = optional_limited(&mut errors, "excerpt_en", &self.excerpt_en, 500);
        let excerpt_ar = optional_limited(&mut errors, "excerpt_ar", &self.excerpt_ar, 500);
        let content_en = optional_limited(&mut errors, "content_en", &self.content_en, MAX_LONG_TEXT);
        let content_ar = optional_limited(&mut errors, "content_ar", &self.content_ar, MAX_LONG_TEXT);
        let cover_image_url = parse_optional_url(&mut errors, "cover_image_url", &self.cover_image_url);
        let status: PostStatus = parse_enum(&mut errors, "status", &self.status);

        errors.finish(BlogPostData {
            slug,
            title_en,
            title_ar,
            excerpt_en,
            excerpt_ar,
            content_en,
            content_ar,
            cover_image_url,
            tags: parse_tags(&self.tags),
            status,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TeamMemberForm {
    pub name_en: String,
    pub name_ar: String,
    pub position_en: String,
    pub position_ar: String,
    pub bio_en: String,
    pub bio_ar: String,
    pub photo_url: String,
    pub email: String,
    pub linkedin_url: String,
    pub sort_order: String,
    pub is_active: Option<String>,
}

impl Default for TeamMemberForm {
    fn default() -> Self {
        Self {
            name_en: String::new(),
            name_ar: String::new(),
            position_en: String::new(),
            position_ar: String::new(),
            bio_en: String::new(),
            bio_ar: String::new(),
            photo_url: String::new(),
            email: String::new(),
            linkedin_url: String::new(),
            sort_order: "0".into(),
            is_active: Some("on".into()),
        }
    }
}

impl TeamMemberForm {
    pub fn from_member(m: &TeamMember) -> Self {
        Self {
            name_en: m.name_en.clone(),
            name_ar: m.name_ar.clone(),
            position_en: m.position_en.clone(),
            position_ar: m.position_ar.clone(),
            bio_en: m.bio_en.clone(),
            bio_ar: m.bio_ar.clone(),
            photo_url: m.photo_url.clone().unwrap_or_default(),
            email: m.email.clone().unwrap_or_default(),
            linkedin_url: m.linkedin_url.clone().unwrap_or_default(),
            sort_order: m.sort_order.to_string(),
            is_active: m.is_active.then(|| "on".to_string()),
        }
    }

    pub fn active(&self) -> bool {
        checkbox(&self.is_active)
    }

    pub fn validate(&self) -> Result<TeamMemberData, FormErrors> {
        let mut errors = FormErrors::new();
        let name_en = required_text(&mut errors, "name_en", &self.name_en, MAX_SHORT_TEXT);
        let name_ar = optional_limited(&mut errors, "name_ar", &self.name_ar, MAX_SHORT_TEXT);
        let position_en = optional_limited(&mut errors, "position_en", &self.position_en, MAX_SHORT_TEXT);
        let position_ar = optional_limited(&mut errors, "position_ar", &self.position_ar, MAX_SHORT_TEXT);
        let bio_en = optional_limited(&mut errors, "bio_en", &self.bio_en, 5_000);
        let bio_ar = optional_limited(&mut errors, "bio_ar", &self.bio_ar, 5_000);
        let photo_url = parse_optional_url(&mut errors, "photo_url", &self.photo_url);
        let linkedin_url = parse_optional_url(&mut errors, "linkedin_url", &self.linkedin_url);

        let email = optional_text(&self.email).map(|e| normalize_email(&e));
        if email.as_deref().is_some_and(|e| !validate_email(e)) {
            errors.add("email", "validation.email");
        }

        let sort_order = parse_i32(&mut errors, "sort_order", &self.sort_order, 0);

        errors.finish(TeamMemberData {
            name_en,
            name_ar,
            position_en,
            position_ar,
            bio_en,
            bio_ar,
            photo_url,
            email,
            linkedin_url,
            sort_order,
            is_active: self.active(),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub status: String,
    pub priority: String,
    pub assignee_id: String,
    pub due_date: String,
}

impl TaskForm {
    pub fn new_default() -> Self {
        Self {
            status: TaskStatus::default().as_str().to_string(),
            priority: TaskPriority::default().as_str().to_string(),
            ..Default::default()
        }
    }

    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status.as_str().to_string(),
            priority: task.priority.as_str().to_string(),
            assignee_id: task.assignee_id.map(|id| id.to_string()).unwrap_or_default(),
            due_date: task
                .due_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<TaskData, FormErrors> {
        let mut errors = FormErrors::new();
        let title = required_text(&mut errors, "title", &self.title, MAX_SHORT_TEXT);
        let description = optional_limited(&mut errors, "description", &self.description, 5_000);
        let status: TaskStatus = parse_enum(&mut errors, "status", &self.status);
        let priority: TaskPriority = parse_enum(&mut errors, "priority", &self.priority);
        let assignee_id = parse_optional_uuid(&mut errors, "assignee_id", &self.assignee_id);
        let due_date = parse_optional_date(&mut errors, "due_date", &self.due_date);

        errors.finish(TaskData {
            title,
            description,
            status,
            priority,
            assignee_id,
            due_date,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TaskStatusForm {
    pub status: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RoleForm {
    pub role: String,
}

impl RoleForm {
    pub fn role(&self) -> Option<Role> {
        self.role.parse().ok()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContentItemForm {
    pub section: String,
    pub key: String,
    pub value_en: String,
    pub value_ar: String,
}

impl ContentItemForm {
    pub fn from_item(item: &ContentItem) -> Self {
        Self {
            section: item.section.clone(),
            key: item.key.clone(),
            value_en: item.value_en.clone(),
            value_ar: item.value_ar.clone(),
        }
    }

    pub fn validate(&self) -> Result<ContentItemData, FormErrors> {
        let mut errors = FormErrors::new();
        let section = self.section.trim().to_lowercase();
        let key = self.key.trim().to_lowercase();

        if section.is_empty() {
            errors.add("section", "validation.required");
        } else if !validate_slug(&section) {
            errors.add("section", "validation.slug");
        }
        if key.is_empty() {
            errors.add("key", "validation.required");
        } else if !validate_slug(&key) {
            errors.add("key", "validation.slug");
        }

        let value_en = optional_limited(&mut errors, "value_en", &self.value_en, MAX_LONG_TEXT);
        let value_ar = optional_limited(&mut errors, "value_ar", &self.value_ar, MAX_LONG_TEXT);

        errors.finish(ContentItemData {
            section,
            key,
            value_en,
            value_ar,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SiteStatsForm {
    pub projects_completed: String,
    pub happy_clients: String,
    pub years_experience: String,
    pub team_size: String,
}

impl SiteStatsForm {
    pub fn from_stats(stats: &SiteStats) -> Self {
        Self {
            projects_completed: stats.projects_completed.to_string(),
            happy_clients: stats.happy_clients.to_string(),
            years_experience: stats.years_experience.to_string(),
            team_size: stats.team_size.to_string(),
        }
    }

    pub fn validate(&self) -> Result<SiteStatsData, FormErrors> {
        let mut errors = FormErrors::new();
        let data = SiteStatsData {
            projects_completed: parse_non_negative(&mut errors, "projects_completed", &self.projects_completed),
            happy_clients: parse_non_negative(&mut errors, "happy_clients", &self.happy_clients),
            years_experience: parse_non_negative(&mut errors, "years_experience", &self.years_experience),
            team_size: parse_non_negative(&mut errors, "team_size", &self.team_size),
        };
        errors.finish(data)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MilestoneForm {
    pub year: String,
    pub title_en: String,
    pub title_ar: String,
    pub description_en: String,
    pub description_ar: String,
}

impl MilestoneForm {
    pub fn from_milestone(m: &CompanyMilestone) -> Self {
        Self {
            year: m.year.to_string(),
            title_en: m.title_en.clone(),
            title_ar: m.title_ar.clone(),
            description_en: m.description_en.clone(),
            description_ar: m.description_ar.clone(),
        }
    }

    pub fn validate(&self) -> Result<CompanyMilestoneData, FormErrors> {
        let mut errors = FormErrors::new();

        let year = if self.year.trim().is_empty() {
            errors.add("year", "validation.required");
            0
        } else {
            parse_i32(&mut errors, "year", &self.year, 0)
        };
        if !errors.has("year") && !(1800..=2200).contains(&year) {
            errors.add("year", "validation.year");
        }

        let title_en = required_text(&mut errors, "title_en", &self.title_en, MAX_SHORT_TEXT);
        let title_ar = optional_limited(&mut errors, "title_ar", &self.title_ar, MAX_SHORT_TEXT);
        let description_en = optional_limited(&mut errors, "description_en", &self.description_en, 5_000);
        let description_ar = optional_limited(&mut errors, "description_ar", &self.description_ar, 5_000);

        errors.finish(CompanyMilestoneData {
            year,
            title_en,
            title_ar,
            description_en,
            description_ar,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectForm {
    pub title_en: String,
    pub title_ar: String,
    pub description_en: String,
    pub description_ar: String,
    pub category: String,
    pub client_name: String,
    pub image_url: String,
    pub project_url: String,
    pub completed_on: String,
    pub featured: Option<String>,
}

impl ProjectForm {
    pub fn from_project(p: &Project) -> Self {
        Self {
            title_en: p.title_en.clone(),
            title_ar: p.title_ar.clone(),
            description_en: p.description_en.clone(),
            description_ar: p.description_ar.clone(),
            category: p.category.clone(),
            client_name: p.client_name.clone(),
            image_url: p.image_url.clone().unwrap_or_default(),
            project_url: p.project_url.clone().unwrap_or_default(),
            completed_on: p
                .completed_on
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            featured: p.featured.then(|| "on".to_string()),
        }
    }

    pub fn is_featured(&self) -> bool {
        checkbox(&self.featured)
    }

    pub fn validate(&self) -> Result<ProjectData, FormErrors> {
        let mut errors = FormErrors::new();
        let title_en = required_text(&mut errors, "title_en", &self.title_en, MAX_SHORT_TEXT);
        let title_ar = optional_limited(&mut errors, "title_ar", &self.title_ar, MAX_SHORT_TEXT);
        let description_en = optional_limited(&mut errors, "description_en", &self.description_en, MAX_LONG_TEXT);
        let description_ar = optional_limited(&mut errors, "description_ar", &self.description_ar, MAX_LONG_TEXT);
        let category = optional_limited(&mut errors, "category", &self.category, 80).to_lowercase();
        let client_name = optional_limited(&mut errors, "client_name", &self.client_name, MAX_SHORT_TEXT);
        let image_url = parse_optional_url(&mut errors, "image_url", &self.image_url);
        let project_url = parse_optional_url(&mut errors, "project_url", &self.project_url);
        let completed_on = parse_optional_date(&mut errors, "completed_on", &self.completed_on);

        errors.finish(ProjectData {
            title_en,
            title_ar,
            description_en,
            description_ar,
            category,
            client_name,
            image_url,
            project_url,
            completed_on,
            featured: self.is_featured(),
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServiceForm {
    pub title_en: String,
    pub title_ar: String,
    pub description_en: String,
    pub description_ar: String,
    pub icon: String,
    /// One feature per line.
    pub features_en: String,
    pub features_ar: String,
    pub sort_order: String,
    pub is_active: Option<String>,
}

impl Default for ServiceForm {
    fn default() -> Self {
        Self {
            title_en: String::new(),
            title_ar: String::new(),
            description_en: String::new(),
            description_ar: String::new(),
            icon: String::new(),
            features_en: String::new(),
            features_ar: String::new(),
            sort_order: "0".into(),
            is_active: Some("on".into()),
        }
    }
}

impl ServiceForm {
    pub fn from_service(s: &Service) -> Self {
        Self {
            title_en: s.title_en.clone(),
            title_ar: s.title_ar.clone(),
            description_en: s.description_en.clone(),
            description_ar: s.description_ar.clone(),
            icon: s.icon.clone(),
            features_en: s.features_en.join("\n"),
            features_ar: s.features_ar.join("\n"),
            sort_order: s.sort_order.to_string(),
            is_active: s.is_active.then(|| "on".to_string()),
        }
    }

    pub fn active(&self) -> bool {
        checkbox(&self.is_active)
    }

    pub fn validate(&self) -> Result<ServiceData, FormErrors> {
        let mut errors = FormErrors::new();
        let title_en = required_text(&mut errors, "title_en", &self.title_en, MAX_SHORT_TEXT);
        let title_ar = optional_limited(&mut errors, "title_ar", &self.title_ar, MAX_SHORT_TEXT);
        let description_en = optional_limited(&mut errors, "description_en", &self.description_en, MAX_LONG_TEXT);
        let description_ar = optional_limited(&mut errors, "description_ar", &self.description_ar, MAX_LONG_TEXT);
        let icon = optional_limited(&mut errors, "icon", &self.icon, 40);
        let sort_order = parse_i32(&mut errors, "sort_order", &self.sort_order, 0);

        errors.finish(ServiceData {
            title_en,
            title_ar,
            description_en,
            description_ar,
            icon,
            features_en: parse_lines(&self.features_en),
            features_ar: parse_lines(&self.features_ar),
            sort_order,
            is_active: self.active(),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MessageStatusForm {
    pub status: String,
}

impl MessageStatusForm {
    pub fn status(&self) -> Option<MessageStatus> {
        self.status.parse().ok()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApprovalForm {
    pub approved: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileForm {
    pub full_name: String,
    pub avatar_url: String,
}

impl ProfileForm {
    pub fn from_profile(p: &Profile) -> Self {
        Self {
            full_name: p.full_name.clone(),
            avatar_url: p.avatar_url.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<ProfileUpdate, FormErrors> {
        let mut errors = FormErrors::new();
        let full_name = required_text(&mut errors, "full_name", &self.full_name, MAX_SHORT_TEXT);
        let avatar_url = parse_optional_url(&mut errors, "avatar_url", &self.avatar_url);

        errors.finish(ProfileUpdate {
            full_name: Some(full_name),
            avatar_url,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PasswordChangeForm {
    pub current_password: String,
    pub password: String,
    pub password_confirm: String,
}

impl PasswordChangeForm {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        if self.current_password.is_empty() {
            errors.add("current_password", "validation.required");
        }
        password_pair(&mut errors, &self.password, &self.password_confirm);
        errors.finish(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_form_invalid_email() {
        let form = ContactForm {
            name: "Sara".into(),
            email: "not-an-email".into(),
            message: "Hello".into(),
            ..Default::default()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("email"), Some("validation.email"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_contact_form_valid() {
        let form = ContactForm {
            name: " Sara ".into(),
            email: "Sara@Example.com".into(),
            phone: "  ".into(),
            subject: "Hi".into(),
            message: "Hello there".into(),
        };
        let data = form.validate().expect("valid form");
        assert_eq!(data.name, "Sara");
        assert_eq!(data.email, "sara@example.com");
        assert_eq!(data.phone, None);
        assert_eq!(data.kind, MessageKind::Contact);
    }

    #[test]
    fn test_quote_form_requires_valid_service_id() {
        let form = QuoteForm {
            service_id: "nope".into(),
            name: "Omar".into(),
            email: "omar@example.com".into(),
            message: "Need a site".into(),
            ..Default::default()
        };
        assert_eq!(form.validate().unwrap_err().get("service_id"), Some("validation.invalid"));
    }

    #[test]
    fn test_testimonial_rating_bounds_and_language_column() {
        let mut form = TestimonialForm {
            client_name: "Lina".into(),
            content: "ممتاز".into(),
            rating: "6".into(),
            ..Default::default()
        };
        assert_eq!(form.validate(Lang::Ar).unwrap_err().get("rating"), Some("validation.rating"));

        form.rating = "4".into();
        let data = form.validate(Lang::Ar).expect("valid");
        assert_eq!(data.content_ar, "ممتاز");
        assert!(data.content_en.is_empty());
        assert_eq!(data.rating, 4);
    }

    #[test]
    fn test_blog_post_form_derives_slug() {
        let form = BlogPostForm {
            title_en: "Hello World".into(),
            tags: "News, news, Rust".into(),
            status: "published".into(),
            ..Default::default()
        };
        let data = form.validate().expect("valid");
        assert_eq!(data.slug, "hello-world");
        assert_eq!(data.tags, vec!["news", "rust"]);
        assert_eq!(data.status, PostStatus::Published);
    }

    #[test]
    fn test_blog_post_form_rejects_bad_slug() {
        let form = BlogPostForm {
            title_en: "Hello".into(),
            slug: "Hello World".into(),
            status: "draft".into(),
            ..Default::default()
        };
        assert_eq!(form.validate().unwrap_err().get("slug"), Some("validation.slug"));
    }

    #[test]
    fn test_signup_password_rules() {
        let form = SignupForm {
            full_name: "Admin".into(),
            email: "admin@example.com".into(),
            password: "short1".into(),
            password_confirm: "short2".into(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("password"), Some("validation.password_short"));
        assert_eq!(errors.get("password_confirm"), Some("validation.password_mismatch"));
    }

    #[test]
    fn test_task_form_parses_enums_and_dates() {
        let form = TaskForm {
            title: "Ship".into(),
            status: "in_progress".into(),
            priority: "high".into(),
            due_date: "2026-03-01".into(),
            ..Default::default()
        };
        let data = form.validate().expect("valid");
        assert_eq!(data.status, TaskStatus::InProgress);
        assert_eq!(data.priority, TaskPriority::High);
        assert!(data.due_date.is_some());
        assert_eq!(data.assignee_id, None);
    }

    #[test]
    fn test_milestone_year_range() {
        let form = MilestoneForm {
            year: "99".into(),
            title_en: "Founded".into(),
            ..Default::default()
        };
        assert_eq!(form.validate().unwrap_err().get("year"), Some("validation.year"));
    }

    #[test]
    fn test_service_form_features_per_line() {
        let form = ServiceForm {
            title_en: "Web".into(),
            features_en: "Fast\n\nSecure\n".into(),
            ..Default::default()
        };
        let data = form.validate().expect("valid");
        assert_eq!(data.features_en, vec!["Fast", "Secure"]);
        assert!(data.is_active);
    }

    #[test]
    fn test_content_item_form_normalizes_keys() {
        let form = ContentItemForm {
            section: " Home ".into(),
            key: "hero_title".into(),
            value_en: "Hi".into(),
            value_ar: String::new(),
        };
        let data = form.validate().expect("valid");
        assert_eq!(data.section, "home");

        let bad = ContentItemForm {
            section: "home".into(),
            key: "hero title".into(),
            ..Default::default()
        };
        assert_eq!(bad.validate().unwrap_err().get("key"), Some("validation.slug"));
    }
}
