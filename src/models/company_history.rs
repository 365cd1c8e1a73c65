use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::i18n::Lang;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CompanyMilestone {
    pub id: Uuid,
    pub year: i32,
    pub title_en: String,
    pub title_ar: String,
    pub description_en: String,
    pub description_ar: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CompanyMilestone {
    pub fn title(&self, lang: Lang) -> &str {
        lang.pick(&self.title_en, &self.title_ar)
    }

    pub fn description(&self, lang: Lang) -> &str {
        lang.pick(&self.description_en, &self.description_ar)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyMilestoneData {
    pub year: i32,
    pub title_en: String,
    pub title_ar: String,
    pub description_en: String,
    pub description_ar: String,
}
