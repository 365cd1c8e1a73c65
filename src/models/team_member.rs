use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::i18n::Lang;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TeamMember {
    pub id: Uuid,
    pub name_en: String,
    pub name_ar: String,
    pub position_en: String,
    pub position_ar: String,
    pub bio_en: String,
    pub bio_ar: String,
    pub photo_url: Option<String>,
    pub email: Option<String>,
    pub linkedin_url: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TeamMember {
    pub fn name(&self, lang: Lang) -> &str {
        lang.pick(&self.name_en, &self.name_ar)
    }

    pub fn position(&self, lang: Lang) -> &str {
        lang.pick(&self.position_en, &self.position_ar)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamMemberData {
    pub name_en: String,
    pub name_ar: String,
    pub position_en: String,
    pub position_ar: String,
    pub bio_en: String,
    pub bio_ar: String,
    pub photo_url: Option<String>,
    pub email: Option<String>,
    pub linkedin_url: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
}
