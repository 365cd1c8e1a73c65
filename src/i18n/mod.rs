//! English/Arabic language selection and UI string lookup.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

mod dictionary;

pub const LANG_COOKIE: &str = "lang";

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Ar,
}

impl Lang {
    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    /// Text direction for the `dir` attribute.
    pub fn dir(&self) -> &'static str {
        match self {
            Self::En => "ltr",
            Self::Ar => "rtl",
        }
    }

    pub fn other(&self) -> Self {
        match self {
            Self::En => Self::Ar,
            Self::Ar => Self::En,
        }
    }

    /// Name of the language written in itself, for the switcher link.
    pub fn native_name(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Ar => "العربية",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "ar" => Some(Self::Ar),
            _ => None,
        }
    }

    /// Picks the text for this language, falling back to the other language
    /// when the preferred value is blank.
    pub fn pick<'a>(&self, en: &'a str, ar: &'a str) -> &'a str {
        let (preferred, fallback) = match self {
            Self::En => (en, ar),
            Self::Ar => (ar, en),
        };
        if preferred.trim().is_empty() {
            fallback
        } else {
            preferred
        }
    }

    /// Resolves the first language tag of an `Accept-Language` header.
    pub fn from_accept_language(header: &str) -> Option<Self> {
        header
            .split(',')
            .filter_map(|part| part.split(';').next())
            .map(str::trim)
            .find_map(|tag| {
                let primary = tag.split('-').next().unwrap_or(tag);
                Self::from_code(primary)
            })
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl PartialEq<&str> for Lang {
    fn eq(&self, other: &&str) -> bool {
        self.code() == *other
    }
}

impl std::str::FromStr for Lang {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| format!("invalid language: {}", s))
    }
}

fn table() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    static TABLE: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();
    TABLE.get_or_init(|| {
        dictionary::ENTRIES
            .iter()
            .map(|&(key, en, ar)| (key, (en, ar)))
            .collect()
    })
}

/// Looks up a UI string. Unknown keys are returned as-is so a missing entry
/// shows up on the page instead of failing the render.
pub fn translate<'a>(lang: Lang, key: &'a str) -> &'a str {
    match table().get(key) {
        Some(&(en, ar)) => lang.pick(en, ar),
        None => key,
    }
}
