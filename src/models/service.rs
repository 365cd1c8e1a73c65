use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::i18n::Lang;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Service {
    pub id: Uuid,
    pub title_en: String,
    pub title_ar: String,
    pub description_en: String,
    pub description_ar: String,
    pub icon: String,
    pub features_en: Vec<String>,
    pub features_ar: Vec<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Service {
    pub fn title(&self, lang: Lang) -> &str {
        lang.pick(&self.title_en, &self.title_ar)
    }

    pub fn description(&self, lang: Lang) -> &str {
        lang.pick(&self.description_en, &self.description_ar)
    }

    /// Arabic feature list when one exists, otherwise the English list.
    pub fn features(&self, lang: Lang) -> &[String] {
        match lang {
            Lang::Ar if !self.features_ar.is_empty() => &self.features_ar,
            _ => &self.features_en,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceData {
    pub title_en: String,
    pub title_ar: String,
    pub description_en: String,
    pub description_ar: String,
    pub icon: String,
    pub features_en: Vec<String>,
    pub features_ar: Vec<String>,
    pub sort_order: i32,
    pub is_active: bool,
}
