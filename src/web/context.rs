use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::i18n::{self, Lang};
use crate::models::{
    MessageKind, MessageStatus, PostStatus, Profile, Role, Service, SiteCopy, TaskPriority,
    TaskStatus,
};
use crate::services::FormErrors;

/// One-shot banner carried across a redirect as `?flash=<code>`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Flash {
    pub key: &'static str,
    pub is_error: bool,
}

const FLASHES: &[(&str, &str, bool)] = &[
    ("saved", "flash.saved", false),
    ("created", "flash.created", false),
    ("deleted", "flash.deleted", false),
    ("published", "flash.published", false),
    ("uploaded", "flash.uploaded", false),
    ("password_changed", "flash.password_changed", false),
    ("password_reset", "flash.password_reset", false),
    ("signed_out", "flash.signed_out", false),
    ("self_delete", "flash.self_delete", true),
    ("self_demote", "flash.self_demote", true),
    ("last_admin", "flash.last_admin", true),
    ("not_found", "flash.not_found", true),
    ("failed", "flash.failed", true),
];

impl Flash {
    pub fn from_code(code: &str) -> Option<Self> {
        FLASHES
            .iter()
            .find(|(c, _, _)| *c == code)
            .map(|&(_, key, is_error)| Flash { key, is_error })
    }
}

/// Request-scoped data every page template receives as `ctx`.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub lang: Lang,
    pub user: Option<Profile>,
    /// Path and query of the current request.
    pub path: String,
    pub flash: Option<Flash>,
}

impl PageContext {
    pub fn new(lang: Lang, user: Option<Profile>, path: impl Into<String>) -> Self {
        Self {
            lang,
            user,
            path: path.into(),
            flash: None,
        }
    }

    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        i18n::translate(self.lang, key)
    }

    pub fn pick<'a>(&self, en: &'a str, ar: &'a str) -> &'a str {
        self.lang.pick(en, ar)
    }

    /// Translated message for a rejected field, or an empty string.
    pub fn error_for(&self, errors: &FormErrors, field: &str) -> &'static str {
        errors
            .get(field)
            .map(|key| i18n::translate(self.lang, key))
            .unwrap_or("")
    }

    /// Editable site copy for `section.key` in the page language.
    pub fn copy<'a>(&self, copy: &'a SiteCopy, path: &str) -> &'a str {
        copy.get(self.lang, path)
    }

    pub fn features<'a>(&self, service: &'a Service) -> &'a [String] {
        service.features(self.lang)
    }

    pub fn is_rtl(&self) -> bool {
        self.lang == Lang::Ar
    }

    pub fn other_lang(&self) -> Lang {
        self.lang.other()
    }

    /// Link that flips the language and comes back to this page.
    pub fn switch_lang_url(&self) -> String {
        format!(
            "/lang/{}?next={}",
            self.lang.other().code(),
            urlencoding::encode(&self.path)
        )
    }

    /// Whether the nav entry for `prefix` should be highlighted.
    pub fn is_current(&self, prefix: &str) -> bool {
        let path = self.path.split('?').next().unwrap_or("");
        if prefix == "/" || prefix == "/dashboard" {
            path == prefix
        } else {
            path == prefix || path.starts_with(&format!("{}/", prefix))
        }
    }

    pub fn signed_in(&self) -> bool {
        self.user.is_some()
    }

    fn has_role(&self, role: Role) -> bool {
        self.user.as_ref().is_some_and(|u| u.role.satisfies(role))
    }

    pub fn can_edit(&self) -> bool {
        self.has_role(Role::Editor)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }

    pub fn is_self(&self, id: &Uuid) -> bool {
        self.user.as_ref().is_some_and(|u| u.id == *id)
    }

    pub fn user_id(&self) -> Option<Uuid> {
        self.user.as_ref().map(|u| u.id)
    }

    pub fn display_name(&self) -> &str {
        self.user.as_ref().map(|u| u.display_name()).unwrap_or("")
    }

    pub fn role_label(&self) -> &str {
        match &self.user {
            Some(u) => self.t(u.role.label_key()),
            None => "",
        }
    }

    pub fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }

    pub fn roles(&self) -> &'static [Role] {
        &Role::ALL
    }

    pub fn post_statuses(&self) -> &'static [PostStatus] {
        &PostStatus::ALL
    }

    pub fn task_statuses(&self) -> &'static [TaskStatus] {
        &TaskStatus::ALL
    }

    pub fn priorities(&self) -> &'static [TaskPriority] {
        &TaskPriority::ALL
    }

    pub fn message_statuses(&self) -> &'static [MessageStatus] {
        &MessageStatus::ALL
    }

    pub fn message_kinds(&self) -> &'static [MessageKind] {
        &MessageKind::ALL
    }

    pub fn year(&self) -> i32 {
        use chrono::Datelike;
        Utc::now().year()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> Profile {
        Profile {
            id: Uuid::new_v4(),
            email: "editor@example.com".into(),
            full_name: String::new(),
            role,
            avatar_url: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_role_helpers() {
        let anon = PageContext::new(Lang::En, None, "/");
        assert!(!anon.signed_in());
        assert!(!anon.can_edit());

        let editor = PageContext::new(Lang::En, Some(user(Role::Editor)), "/dashboard");
        assert!(editor.can_edit());
        assert!(!editor.is_admin());
        assert_eq!(editor.display_name(), "editor@example.com");
        assert_eq!(editor.role_label(), "Editor");
    }

    #[test]
    fn test_switch_lang_url_keeps_path() {
        let ctx = PageContext::new(Lang::En, None, "/blog?tag=rust");
        assert_eq!(ctx.switch_lang_url(), "/lang/ar?next=%2Fblog%3Ftag%3Drust");
    }

    #[test]
    fn test_is_current() {
        let ctx = PageContext::new(Lang::Ar, None, "/dashboard/posts/new?x=1");
        assert!(ctx.is_current("/dashboard/posts"));
        assert!(!ctx.is_current("/dashboard"));
        assert!(!ctx.is_current("/dashboard/post"));
        assert!(ctx.is_rtl());
    }

    #[test]
    fn test_error_for_translates() {
        let mut errors = FormErrors::new();
        errors.add("email", "validation.email");

        let ctx = PageContext::new(Lang::En, None, "/contact");
        assert_eq!(ctx.error_for(&errors, "email"), "Enter a valid email address");
        assert_eq!(ctx.error_for(&errors, "name"), "");
    }

    #[test]
    fn test_flash_codes() {
        assert_eq!(
            Flash::from_code("saved"),
            Some(Flash {
                key: "flash.saved",
                is_error: false
            })
        );
        assert!(Flash::from_code("last_admin").is_some_and(|f| f.is_error));
        assert_eq!(Flash::from_code("<script>"), None);
    }
}
