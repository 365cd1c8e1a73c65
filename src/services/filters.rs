//! In-memory filters applied to fully fetched lists.

use serde::Deserialize;
use uuid::Uuid;

use crate::models::{
    BlogPost, ContactMessage, MessageKind, MessageStatus, PostStatus, Task, TaskStatus,
    Testimonial,
};

fn normalized(input: &Option<String>) -> Option<String> {
    input
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Query string of the blog list pages (`?q=&tag=&status=`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlogFilter {
    pub q: Option<String>,
    pub tag: Option<String>,
    pub status: Option<String>,
}

impl BlogFilter {
    pub fn query(&self) -> String {
        self.q.clone().unwrap_or_default()
    }

    pub fn tag(&self) -> String {
        normalized(&self.tag).unwrap_or_default()
    }

    pub fn status(&self) -> String {
        normalized(&self.status).unwrap_or_default()
    }

    pub fn matches(&self, post: &BlogPost) -> bool {
        if let Some(q) = normalized(&self.q) {
            let hit = contains_ci(&post.title_en, &q)
                || contains_ci(&post.title_ar, &q)
                || contains_ci(&post.excerpt_en, &q)
                || contains_ci(&post.excerpt_ar, &q)
                || contains_ci(&post.slug, &q);
            if !hit {
                return false;
            }
        }

        if let Some(tag) = normalized(&self.tag) {
            if !post.has_tag(&tag) {
                return false;
            }
        }

        if let Some(status) = normalized(&self.status) {
            match status.parse::<PostStatus>() {
                Ok(s) if s != post.status => return false,
                Ok(_) => {}
                // Unknown status filters are ignored
                Err(_) => {}
            }
        }

        true
    }

    pub fn apply(&self, posts: Vec<BlogPost>) -> Vec<BlogPost> {
        posts.into_iter().filter(|p| self.matches(p)).collect()
    }
}

/// Distinct tags across posts, sorted.
pub fn collect_tags(posts: &[BlogPost]) -> Vec<String> {
    let mut tags: Vec<String> = posts.iter().flat_map(|p| p.tags.iter().cloned()).collect();
    tags.sort();
    tags.dedup();
    tags
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskFilter {
    pub q: Option<String>,
    pub status: Option<String>,
    pub assignee: Option<String>,
}

impl TaskFilter {
    pub fn query(&self) -> String {
        self.q.clone().unwrap_or_default()
    }

    pub fn status(&self) -> String {
        normalized(&self.status).unwrap_or_default()
    }

    pub fn assignee(&self) -> String {
        normalized(&self.assignee).unwrap_or_default()
    }

    pub fn matches(&self, task: &Task) -> bool {
        if let Some(q) = normalized(&self.q) {
            if !(contains_ci(&task.title, &q) || contains_ci(&task.description, &q)) {
                return false;
            }
        }

        if let Some(status) = normalized(&self.status) {
            if status == "open" {
                if !task.status.is_open() {
                    return false;
                }
            } else if let Ok(s) = status.parse::<TaskStatus>() {
                if s != task.status {
                    return false;
                }
            }
        }

        if let Some(assignee) = normalized(&self.assignee) {
            if assignee == "none" {
                if task.assignee_id.is_some() {
                    return false;
                }
            } else if let Ok(id) = Uuid::parse_str(&assignee) {
                if task.assignee_id != Some(id) {
                    return false;
                }
            }
        }

        true
    }

    pub fn apply(&self, tasks: Vec<Task>) -> Vec<Task> {
        tasks.into_iter().filter(|t| self.matches(t)).collect()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageFilter {
    pub status: Option<String>,
    pub kind: Option<String>,
}

impl MessageFilter {
    pub fn status(&self) -> String {
        normalized(&self.status).unwrap_or_default()
    }

    pub fn kind(&self) -> String {
        normalized(&self.kind).unwrap_or_default()
    }

    pub fn matches(&self, message: &ContactMessage) -> bool {
        if let Some(Ok(status)) = normalized(&self.status).map(|s| s.parse::<MessageStatus>()) {
            if status != message.status {
                return false;
            }
        }

        if let Some(Ok(kind)) = normalized(&self.kind).map(|k| k.parse::<MessageKind>()) {
            if kind != message.kind {
                return false;
            }
        }

        true
    }

    pub fn apply(&self, messages: Vec<ContactMessage>) -> Vec<ContactMessage> {
        messages.into_iter().filter(|m| self.matches(m)).collect()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TestimonialFilter {
    /// `approved`, `pending`, or anything else for all.
    pub approval: Option<String>,
}

impl TestimonialFilter {
    pub fn approval(&self) -> String {
        normalized(&self.approval).unwrap_or_default()
    }

    pub fn matches(&self, testimonial: &Testimonial) -> bool {
        match normalized(&self.approval).as_deref() {
            Some("approved") => testimonial.is_approved,
            Some("pending") => !testimonial.is_approved,
            _ => true,
        }
    }

    pub fn apply(&self, testimonials: Vec<Testimonial>) -> Vec<Testimonial> {
        testimonials.into_iter().filter(|t| self.matches(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::models::TaskPriority;

    fn post(slug: &str, title_en: &str, title_ar: &str, tags: &[&str], status: PostStatus) -> BlogPost {
        BlogPost {
            id: Uuid::new_v4(),
            slug: slug.into(),
            title_en: title_en.into(),
            title_ar: title_ar.into(),
            excerpt_en: String::new(),
            excerpt_ar: String::new(),
            content_en: String::new(),
            content_ar: String::new(),
            cover_image_url: None,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            status,
            author_id: None,
            published_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn task(title: &str, status: TaskStatus, assignee: Option<Uuid>) -> Task {
        Task {
            id: Uuid::new_v4(),
            title: title.into(),
            description: String::new(),
            status,
            priority: TaskPriority::Medium,
            assignee_id: assignee,
            created_by: None,
            due_date: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn sample_posts() -> Vec<BlogPost> {
        vec![
            post("rust-web", "Rust on the Web", "رست على الويب", &["rust", "web"], PostStatus::Published),
            post("design-notes", "Design Notes", "", &["design"], PostStatus::Draft),
            post("hiring", "We Are Hiring", "نحن نوظف", &["news"], PostStatus::Published),
        ]
    }

    #[test]
    fn test_blog_filter_empty_keeps_everything() {
        let filter = BlogFilter::default();
        assert_eq!(filter.apply(sample_posts()).len(), 3);
    }

    #[test]
    fn test_blog_filter_search_both_languages() {
        let filter = BlogFilter {
            q: Some("RUST".into()),
            ..Default::default()
        };
        let result = filter.apply(sample_posts());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].slug, "rust-web");

        let filter = BlogFilter {
            q: Some("نوظف".into()),
            ..Default::default()
        };
        let result = filter.apply(sample_posts());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].slug, "hiring");
    }

    #[test]
    fn test_blog_filter_tag_and_status() {
        let filter = BlogFilter {
            tag: Some("Design".into()),
            ..Default::default()
        };
        assert_eq!(filter.apply(sample_posts()).len(), 1);

        let filter = BlogFilter {
            status: Some("published".into()),
            ..Default::default()
        };
        assert_eq!(filter.apply(sample_posts()).len(), 2);

        let filter = BlogFilter {
            tag: Some("design".into()),
            status: Some("published".into()),
            ..Default::default()
        };
        assert!(filter.apply(sample_posts()).is_empty());
    }

    #[test]
    fn test_blog_filter_ignores_unknown_status() {
        let filter = BlogFilter {
            status: Some("archived".into()),
            ..Default::default()
        };
        assert_eq!(filter.apply(sample_posts()).len(), 3);
    }

    #[test]
    fn test_collect_tags_sorted_unique() {
        assert_eq!(collect_tags(&sample_posts()), vec!["design", "news", "rust", "web"]);
    }

    #[test]
    fn test_task_filter() {
        let me = Uuid::new_v4();
        let tasks = vec![
            task("Write copy", TaskStatus::Todo, Some(me)),
            task("Ship site", TaskStatus::InProgress, None),
            task("Old thing", TaskStatus::Done, Some(me)),
        ];

        let open = TaskFilter {
            status: Some("open".into()),
            ..Default::default()
        };
        assert_eq!(open.apply(tasks.clone()).len(), 2);

        let mine = TaskFilter {
            assignee: Some(me.to_string()),
            ..Default::default()
        };
        assert_eq!(mine.apply(tasks.clone()).len(), 2);

        let unassigned = TaskFilter {
            assignee: Some("none".into()),
            ..Default::default()
        };
        assert_eq!(unassigned.apply(tasks.clone()).len(), 1);

        let search = TaskFilter {
            q: Some("ship".into()),
            status: Some("in_progress".into()),
            ..Default::default()
        };
        let result = search.apply(tasks);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Ship site");
    }

    #[test]
    fn test_testimonial_filter() {
        let make = |approved| Testimonial {
            id: Uuid::new_v4(),
            client_name: "Client".into(),
            client_company: String::new(),
            content_en: "Great".into(),
            content_ar: String::new(),
            rating: 5,
            is_approved: approved,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let all = vec![make(true), make(false), make(false)];

        let pending = TestimonialFilter {
            approval: Some("pending".into()),
        };
        assert_eq!(pending.apply(all.clone()).len(), 2);

        let approved = TestimonialFilter {
            approval: Some("approved".into()),
        };
        assert_eq!(approved.apply(all.clone()).len(), 1);

        assert_eq!(TestimonialFilter::default().apply(all).len(), 3);
    }
}
