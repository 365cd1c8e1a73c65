use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::i18n::Lang;

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    Eq,
    PartialEq,
    Serialize,
    Deserialize,
    sqlx::Type,
)]
#[sqlx(type_name = "text", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
}

impl PostStatus {
    pub const ALL: [PostStatus; 2] = [PostStatus::Draft, PostStatus::Published];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            Self::Draft => "post_status.draft",
            Self::Published => "post_status.published",
        }
    }
}

impl std::fmt::Display for PostStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl PartialEq<&str> for PostStatus {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl std::str::FromStr for PostStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            _ => Err(format!("invalid post status: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BlogPost {
    pub id: Uuid,
    pub slug: String,
    pub title_en: String,
    pub title_ar: String,
    pub excerpt_en: String,
    pub excerpt_ar: String,
    pub content_en: String,
    pub content_ar: String,
    pub cover_image_url: Option<String>,
    pub tags: Vec<String>,
    pub status: PostStatus,
    pub author_id: Option<Uuid>,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BlogPost {
    pub fn title(&self, lang: Lang) -> &str {
        lang.pick(&self.title_en, &self.title_ar)
    }

    pub fn content(&self, lang: Lang) -> &str {
        lang.pick(&self.content_en, &self.content_ar)
    }

    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Published
    }

    /// Publication date, or creation date for drafts.
    pub fn display_date(&self) -> String {
        self.published_at
            .unwrap_or(self.created_at)
            .format("%Y-%m-%d")
            .to_string()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlogPostData {
    pub slug: String,
    pub title_en: String,
    pub title_ar: String,
    pub excerpt_en: String,
    pub excerpt_ar: String,
    pub content_en: String,
    pub content_ar: String,
    pub cover_image_url: Option<String>,
    pub tags: Vec<String>,
    pub status: PostStatus,
}
