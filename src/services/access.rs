//! Route guard decisions for the dashboard.

use crate::models::{Profile, Role};

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum AccessDecision {
    Granted,
    /// No session: send the visitor to sign in.
    RedirectToLogin,
    /// Signed in without the required role.
    RedirectToDashboard,
}

pub fn authorize(profile: Option<&Profile>, required: Option<Role>) -> AccessDecision {
    match (profile, required) {
        (None, _) => AccessDecision::RedirectToLogin,
        (Some(_), None) => AccessDecision::Granted,
        (Some(p), Some(role)) if p.role.satisfies(role) => AccessDecision::Granted,
        (Some(_), Some(_)) => AccessDecision::RedirectToDashboard,
    }
}

/// Login URL that returns the visitor to `next` after signing in.
pub fn login_redirect(next: &str) -> String {
    if is_local_path(next) && next != LOGIN_PATH {
        format!("{}?next={}", LOGIN_PATH, urlencoding::encode(next))
    } else {
        LOGIN_PATH.to_string()
    }
}

/// Only same-site absolute paths are accepted as redirect targets.
pub fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.contains('\\')
}

/// `next` when it is a safe local path, otherwise `fallback`.
pub fn safe_next<'a>(next: Option<&'a str>, fallback: &'a str) -> &'a str {
    match next {
        Some(n) if is_local_path(n) => n,
        _ => fallback,
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;

    fn profile(role: Role) -> Profile {
        Profile {
            id: Uuid::new_v4(),
            email: "someone@example.com".into(),
            full_name: "Someone".into(),
            role,
            avatar_url: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_unauthenticated_goes_to_login() {
        assert_eq!(authorize(None, None), AccessDecision::RedirectToLogin);
        assert_eq!(
            authorize(None, Some(Role::Viewer)),
            AccessDecision::RedirectToLogin
        );
    }

    #[test]
    fn test_viewer_denied_admin() {
        let viewer = profile(Role::Viewer);
        assert_eq!(
            authorize(Some(&viewer), Some(Role::Admin)),
            AccessDecision::RedirectToDashboard
        );
    }

    #[test]
    fn test_editor_denied_admin_but_granted_editor() {
        let editor = profile(Role::Editor);
        assert_eq!(
            authorize(Some(&editor), Some(Role::Admin)),
            AccessDecision::RedirectToDashboard
        );
        assert_eq!(
            authorize(Some(&editor), Some(Role::Editor)),
            AccessDecision::Granted
        );
    }

    #[test]
    fn test_admin_granted_everything() {
        let admin = profile(Role::Admin);
        for role in Role::ALL {
            assert_eq!(authorize(Some(&admin), Some(role)), AccessDecision::Granted);
        }
        assert_eq!(authorize(Some(&admin), None), AccessDecision::Granted);
    }

    #[test]
    fn test_login_redirect_keeps_local_next() {
        assert_eq!(
            login_redirect("/dashboard/posts"),
            "/login?next=%2Fdashboard%2Fposts"
        );
        assert_eq!(login_redirect("https://evil.example"), "/login");
        assert_eq!(login_redirect("//evil.example"), "/login");
        assert_eq!(login_redirect("/login"), "/login");
    }

    #[test]
    fn test_safe_next() {
        assert_eq!(safe_next(Some("/blog"), "/"), "/blog");
        assert_eq!(safe_next(Some("http://x"), "/"), "/");
        assert_eq!(safe_next(None, "/dashboard"), "/dashboard");
    }
}
