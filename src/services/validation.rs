use std::collections::BTreeMap;

use chrono::NaiveDate;
use uuid::Uuid;

/// Field name to i18n message key for a rejected form.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct FormErrors(BTreeMap<&'static str, &'static str>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the first error for a field; later ones are ignored.
    pub fn add(&mut self, field: &'static str, message_key: &'static str) {
        self.0.entry(field).or_insert(message_key);
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `Ok(value)` when nothing was recorded, otherwise the errors.
    pub fn finish<T>(self, value: T) -> Result<T, FormErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

pub const MAX_SHORT_TEXT: usize = 200;
pub const MAX_LONG_TEXT: usize = 20_000;

/// Email validation
pub fn validate_email(email: &str) -> bool {
    let email = email.trim();

    if email.is_empty() || email.len() > 254 {
        return false;
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return false;
    }

    let local = parts[0];
    let domain = parts[1];

    if local.is_empty() || local.len() > 64 || domain.is_empty() {
        return false;
    }

    if email.chars().any(char::is_whitespace) {
        return false;
    }

    // Domain must have at least one dot, not at either end
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Slug validation
pub fn validate_slug(slug: &str) -> bool {
    if slug.is_empty() || slug.len() > 255 {
        return false;
    }

    slug.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
}

/// Lowercase ASCII slug from a title; runs of other characters become one `-`.
pub fn slugify(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut pending_dash = false;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    out.truncate(255);
    out
}

/// Comma separated tags, trimmed, lowercased, without blanks or repeats.
pub fn parse_tags(input: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in input.split(',').map(|t| t.trim().to_lowercase()) {
        if !tag.is_empty() && !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

/// One entry per non-blank line.
pub fn parse_lines(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

/// Trimmed value, or `None` for a blank input.
pub fn optional_text(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// HTML checkboxes submit a value only when checked.
pub fn checkbox(input: &Option<String>) -> bool {
    matches!(
        input.as_deref().map(str::trim),
        Some("on") | Some("true") | Some("1")
    )
}

pub fn required_text(
    errors: &mut FormErrors,
    field: &'static str,
    input: &str,
    max: usize,
) -> String {
    let value = input.trim();
    if value.is_empty() {
        errors.add(field, "validation.required");
    } else if value.chars().count() > max {
        errors.add(field, "validation.too_long");
    }
    value.to_string()
}

pub fn optional_limited(
    errors: &mut FormErrors,
    field: &'static str,
    input: &str,
    max: usize,
) -> String {
    let value = input.trim();
    if value.chars().count() > max {
        errors.add(field, "validation.too_long");
    }
    value.to_string()
}

pub fn parse_i32(errors: &mut FormErrors, field: &'static str, input: &str, default: i32) -> i32 {
    let value = input.trim();
    if value.is_empty() {
        return default;
    }
    match value.parse::<i32>() {
        Ok(n) => n,
        Err(_) => {
            errors.add(field, "validation.number");
            default
        }
    }
}

pub fn parse_non_negative(errors: &mut FormErrors, field: &'static str, input: &str) -> i32 {
    let n = parse_i32(errors, field, input, 0);
    if n < 0 {
        errors.add(field, "validation.number");
        return 0;
    }
    n
}

/// `YYYY-MM-DD` as sent by `<input type="date">`; blank means none.
pub fn parse_optional_date(
    errors: &mut FormErrors,
    field: &'static str,
    input: &str,
) -> Option<NaiveDate> {
    let value = input.trim();
    if value.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(d) => Some(d),
        Err(_) => {
            errors.add(field, "validation.date");
            None
        }
    }
}

pub fn parse_optional_uuid(
    errors: &mut FormErrors,
    field: &'static str,
    input: &str,
) -> Option<Uuid> {
    let value = input.trim();
    if value.is_empty() {
        return None;
    }
    match Uuid::parse_str(value) {
        Ok(id) => Some(id),
        Err(_) => {
            errors.add(field, "validation.invalid");
            None
        }
    }
}

/// Optional link: blank, a local path, or an http(s) URL.
pub fn parse_optional_url(
    errors: &mut FormErrors,
    field: &'static str,
    input: &str,
) -> Option<String> {
    let value = optional_text(input)?;
    let ok = value.starts_with('/')
        || value.starts_with("https://")
        || value.starts_with("http://");
    if !ok || value.len() > 2048 || value.chars().any(char::is_whitespace) {
        errors.add(field, "validation.url");
        return None;
    }
    Some(value)
}

pub fn parse_enum<T: std::str::FromStr + Default>(
    errors: &mut FormErrors,
    field: &'static str,
    input: &str,
) -> T {
    match input.trim().parse::<T>() {
        Ok(v) => v,
        Err(_) => {
            errors.add(field, "validation.invalid");
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("someone@example.com"));
        assert!(validate_email("  first.last@sub.example.sa "));
        assert!(!validate_email("not-an-email"));
        assert!(!validate_email("a@b"));
        assert!(!validate_email("a@@example.com"));
        assert!(!validate_email("@example.com"));
        assert!(!validate_email("a@example."));
        assert!(!validate_email("a b@example.com"));
        assert!(!validate_email(""));
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Someone@Example.COM "), "someone@example.com");
    }

    #[test]
    fn test_validate_slug() {
        assert!(validate_slug("hello-world_2"));
        assert!(!validate_slug("Hello"));
        assert!(!validate_slug("with space"));
        assert!(!validate_slug(""));
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("  Rust & Web  2026 "), "rust-web-2026");
        assert_eq!(slugify("مرحبا"), "");
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!(
            parse_tags(" Rust, web ,,rust, Design "),
            vec!["rust".to_string(), "web".to_string(), "design".to_string()]
        );
        assert!(parse_tags("  ").is_empty());
    }

    #[test]
    fn test_parse_lines() {
        assert_eq!(parse_lines("one\n\n two \r\nthree"), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_checkbox() {
        assert!(checkbox(&Some("on".into())));
        assert!(!checkbox(&None));
        assert!(!checkbox(&Some("off".into())));
    }

    #[test]
    fn test_number_and_date_parsing_record_errors() {
        let mut errors = FormErrors::new();

        assert_eq!(parse_i32(&mut errors, "sort_order", "", 7), 7);
        assert_eq!(parse_i32(&mut errors, "sort_order", " 3 ", 0), 3);
        assert!(errors.is_empty());

        parse_i32(&mut errors, "year", "abc", 0);
        parse_optional_date(&mut errors, "due_date", "2026-13-40");
        parse_non_negative(&mut errors, "team_size", "-1");

        assert_eq!(errors.get("year"), Some("validation.number"));
        assert_eq!(errors.get("due_date"), Some("validation.date"));
        assert_eq!(errors.get("team_size"), Some("validation.number"));
    }

    #[test]
    fn test_required_text_and_first_error_wins() {
        let mut errors = FormErrors::new();
        required_text(&mut errors, "name", "   ", MAX_SHORT_TEXT);
        required_text(&mut errors, "name", &"x".repeat(500), MAX_SHORT_TEXT);

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("name"), Some("validation.required"));
        assert!(errors.finish(()).is_err());
    }

    #[test]
    fn test_parse_optional_url() {
        let mut errors = FormErrors::new();
        assert_eq!(
            parse_optional_url(&mut errors, "image_url", "/storage/a.png"),
            Some("/storage/a.png".to_string())
        );
        assert_eq!(parse_optional_url(&mut errors, "image_url", " "), None);
        assert!(errors.is_empty());

        assert_eq!(
            parse_optional_url(&mut errors, "image_url", "javascript:alert(1)"),
            None
        );
        assert!(errors.has("image_url"));
    }
}
