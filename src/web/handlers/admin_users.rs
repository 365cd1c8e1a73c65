use actix_web::{get, post, web, HttpRequest, Responder};
use uuid::Uuid;

use crate::db;
use crate::models::{Profile, Role};
use crate::web::forms::RoleForm;
use crate::web::helpers::{redirect_flash, render, require_role, server_error};
use crate::web::state::AppState;
use crate::web::templates::UsersTemplate;

const LIST_PATH: &str = "/dashboard/users";

/// Flash code explaining why `actor` may not give `target` the role `new_role`.
fn role_change_refusal(
    actor: Uuid,
    target: &Profile,
    new_role: Role,
    admin_count: i64,
) -> Option<&'static str> {
    if target.role != Role::Admin || new_role == Role::Admin {
        return None;
    }
    if target.id == actor {
        return Some("self_demote");
    }
    if admin_count <= 1 {
        return Some("last_admin");
    }
    None
}

/// Flash code explaining why `actor` may not delete `target`.
fn deletion_refusal(actor: Uuid, target: &Profile, admin_count: i64) -> Option<&'static str> {
    if target.id == actor {
        return Some("self_delete");
    }
    // Reachable only when the acting admin lost the role after the guard ran
    if target.role == Role::Admin && admin_count <= 1 {
        return Some("last_admin");
    }
    None
}

#[get("/dashboard/users")]
pub async fn users_list(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let ctx = match require_role(&req, &state, Some(Role::Admin)).await {
        Ok(ctx) => ctx,
        Err(resp) => return resp,
    };

    match db::list_profiles(&state.pool).await {
        Ok(users) => render(UsersTemplate { ctx, users }),
        Err(e) => {
            log::error!("Failed to list users: {}", e);
            server_error(ctx)
        }
    }
}

#[post("/dashboard/users/{id}/role")]
pub async fn users_set_role(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    form: web::Form<RoleForm>,
) -> impl Responder {
    let ctx = match require_role(&req, &state, Some(Role::Admin)).await {
        Ok(ctx) => ctx,
        Err(resp) => return resp,
    };
    let Some(actor) = ctx.user_id() else {
        return redirect_flash(&req, LIST_PATH, "failed");
    };

    let id = path.into_inner();
    let Some(new_role) = form.role() else {
        return redirect_flash(&req, LIST_PATH, "failed");
    };

    let target = match db::get_profile(&state.pool, id).await {
        Ok(Some(p)) => p,
        Ok(None) => return redirect_flash(&req, LIST_PATH, "not_found"),
        Err(e) => {
            log::error!("Failed to load profile {}: {}", id, e);
            return redirect_flash(&req, LIST_PATH, "failed");
        }
    };

    let admin_count = match db::count_admins(&state.pool).await {
        Ok(n) => n,
        Err(e) => {
            log::error!("Failed to count admins: {}", e);
            return redirect_flash(&req, LIST_PATH, "failed");
        }
    };

    if let Some(code) = role_change_refusal(actor, &target, new_role, admin_count) {
        log::warn!("Refused role change of {} by {}: {}", id, actor, code);
        return redirect_flash(&req, LIST_PATH, code);
    }

    match db::set_profile_role(&state.pool, id, new_role).await {
        Ok(Some(p)) => {
            log::info!("User {} is now {} (changed by {})", p.id, p.role.as_str(), actor);
            redirect_flash(&req, LIST_PATH, "saved")
        }
        Ok(None) => redirect_flash(&req, LIST_PATH, "not_found"),
        Err(e) => {
            log::error!("Failed to change role of {}: {}", id, e);
            redirect_flash(&req, LIST_PATH, "failed")
        }
    }
}

#[post("/dashboard/users/{id}/delete")]
pub async fn users_delete(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> impl Responder {
    let ctx = match require_role(&req, &state, Some(Role::Admin)).await {
        Ok(ctx) => ctx,
        Err(resp) => return resp,
    };
    let Some(actor) = ctx.user_id() else {
        return redirect_flash(&req, LIST_PATH, "failed");
    };

    let id = path.into_inner();
    let target = match db::get_profile(&state.pool, id).await {
        Ok(Some(p)) => p,
        Ok(None) => return redirect_flash(&req, LIST_PATH, "not_found"),
        Err(e) => {
            log::error!("Failed to load profile {}: {}", id, e);
            return redirect_flash(&req, LIST_PATH, "failed");
        }
    };

    let admin_count = match db::count_admins(&state.pool).await {
        Ok(n) => n,
        Err(e) => {
            log::error!("Failed to count admins: {}", e);
            return redirect_flash(&req, LIST_PATH, "failed");
        }
    };

    if let Some(code) = deletion_refusal(actor, &target, admin_count) {
        log::warn!("Refused deletion of {} by {}: {}", id, actor, code);
        return redirect_flash(&req, LIST_PATH, code);
    }

    match db::delete_account(&state.pool, id).await {
        Ok(true) => {
            log::info!("Account {} deleted by {}", id, actor);
            redirect_flash(&req, LIST_PATH, "deleted")
        }
        Ok(false) => redirect_flash(&req, LIST_PATH, "not_found"),
        Err(e) => {
            log::error!("Failed to delete account {}: {}", id, e);
            redirect_flash(&req, LIST_PATH, "failed")
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(users_list)
        .service(users_set_role)
        .service(users_delete);
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn profile(role: Role) -> Profile {
        Profile {
            id: Uuid::new_v4(),
            email: "someone@example.com".into(),
            full_name: "Someone".into(),
            avatar_url: None,
            role,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_admin_cannot_demote_self() {
        let me = profile(Role::Admin);
        assert_eq!(
            role_change_refusal(me.id, &me, Role::Editor, 3),
            Some("self_demote")
        );
        assert_eq!(role_change_refusal(me.id, &me, Role::Admin, 1), None);
    }

    #[test]
    fn test_last_admin_keeps_role() {
        let actor = Uuid::new_v4();
        let other = profile(Role::Admin);
        assert_eq!(
            role_change_refusal(actor, &other, Role::Viewer, 1),
            Some("last_admin")
        );
        assert_eq!(role_change_refusal(actor, &other, Role::Viewer, 2), None);
    }

    #[test]
    fn test_promotions_always_allowed() {
        let actor = Uuid::new_v4();
        let viewer = profile(Role::Viewer);
        assert_eq!(role_change_refusal(actor, &viewer, Role::Admin, 1), None);
        assert_eq!(role_change_refusal(actor, &viewer, Role::Editor, 1), None);
    }

    #[test]
    fn test_deletion_refusals() {
        let me = profile(Role::Admin);
        assert_eq!(deletion_refusal(me.id, &me, 5), Some("self_delete"));

        let actor = Uuid::new_v4();
        let admin = profile(Role::Admin);
        assert_eq!(deletion_refusal(actor, &admin, 1), Some("last_admin"));
        assert_eq!(deletion_refusal(actor, &admin, 2), None);

        let editor = profile(Role::Editor);
        assert_eq!(deletion_refusal(actor, &editor, 1), None);
    }
}
