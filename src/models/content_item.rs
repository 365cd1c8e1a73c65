use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::i18n::Lang;

/// One editable block of site copy, addressed by `(section, key)`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContentItem {
    pub id: Uuid,
    pub section: String,
    pub key: String,
    pub value_en: String,
    pub value_ar: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContentItem {
    pub fn value(&self, lang: Lang) -> &str {
        lang.pick(&self.value_en, &self.value_ar)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentItemData {
    pub section: String,
    pub key: String,
    pub value_en: String,
    pub value_ar: String,
}

/// Content items of one or more sections, looked up by `section.key`.
#[derive(Debug, Clone, Default)]
pub struct SiteCopy {
    items: Vec<ContentItem>,
}

impl SiteCopy {
    pub fn new(items: Vec<ContentItem>) -> Self {
        Self { items }
    }

    /// Text for `section.key`, or an empty string when it is not defined.
    pub fn get(&self, lang: Lang, path: &str) -> &str {
        let (section, key) = path.split_once('.').unwrap_or(("", path));
        self.items
            .iter()
            .find(|item| item.section == section && item.key == key)
            .map(|item| item.value(lang))
            .unwrap_or("")
    }
}
