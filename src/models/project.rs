use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::i18n::Lang;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Project {
    pub id: Uuid,
    pub title_en: String,
    pub title_ar: String,
    pub description_en: String,
    pub description_ar: String,
    pub category: String,
    pub client_name: String,
    pub image_url: Option<String>,
    pub project_url: Option<String>,
    pub completed_on: Option<NaiveDate>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    pub fn title(&self, lang: Lang) -> &str {
        lang.pick(&self.title_en, &self.title_ar)
    }

    pub fn description(&self, lang: Lang) -> &str {
        lang.pick(&self.description_en, &self.description_ar)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectData {
    pub title_en: String,
    pub title_ar: String,
    pub description_en: String,
    pub description_ar: String,
    pub category: String,
    pub client_name: String,
    pub image_url: Option<String>,
    pub project_url: Option<String>,
    pub completed_on: Option<NaiveDate>,
    pub featured: bool,
}
