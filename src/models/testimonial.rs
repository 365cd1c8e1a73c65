use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::i18n::Lang;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Testimonial {
    pub id: Uuid,
    pub client_name: String,
    pub client_company: String,
    pub content_en: String,
    pub content_ar: String,
    pub rating: i16,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Testimonial {
    pub fn content(&self, lang: Lang) -> &str {
        lang.pick(&self.content_en, &self.content_ar)
    }

    /// Filled and empty stars for the rating, e.g. "★★★★☆".
    pub fn stars(&self) -> String {
        let filled = self.rating.clamp(0, 5) as usize;
        format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestimonialData {
    pub client_name: String,
    pub client_company: String,
    pub content_en: String,
    pub content_ar: String,
    pub rating: i16,
}
