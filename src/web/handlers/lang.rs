use actix_web::{get, web, HttpRequest, HttpResponse, Responder};

use crate::i18n::Lang;
use crate::services::safe_next;
use crate::web::forms::NextQuery;
use crate::web::helpers::{lang_cookie, redirect};
use crate::web::state::AppState;

/// Stores the language choice and goes back to the page it was made on.
#[get("/lang/{code}")]
pub async fn switch_lang(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    query: web::Query<NextQuery>,
) -> impl Responder {
    let target = safe_next(query.next.as_deref(), "/").to_string();

    let lang = match Lang::from_code(&path) {
        Some(lang) => lang,
        None => return redirect(&req, &target),
    };

    let mut resp: HttpResponse = redirect(&req, &target);
    if let Err(e) = resp.add_cookie(&lang_cookie(lang, &state.config)) {
        log::error!("Failed to set language cookie: {}", e);
    }
    resp
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(switch_lang);
}
