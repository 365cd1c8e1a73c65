use actix_multipart::Multipart;
use actix_web::http::StatusCode;
use actix_web::{post, web, HttpRequest, HttpResponse, Responder};
use futures_util::StreamExt;
use serde_json::json;

use crate::common::StorageError;
use crate::i18n::{self, Lang};
use crate::models::Role;
use crate::storage::{extension_for, name_from_url};
use crate::web::helpers::require_role;
use crate::web::state::AppState;

const FILE_FIELD: &str = "file";

fn upload_error(status: StatusCode, lang: Lang, key: &str) -> HttpResponse {
    HttpResponse::build(status).json(json!({ "error": i18n::translate(lang, key) }))
}

/// Removes an image this site stored, ignoring external URLs.
pub async fn discard_upload(state: &AppState, url: Option<&str>) {
    let Some(name) = url.and_then(name_from_url) else {
        return;
    };
    if let Err(e) = state.storage.delete(name).await {
        log::warn!("Failed to remove upload {}: {}", name, e);
    }
}

/// Accepts one image as the `file` field and answers with its public URL.
#[post("/dashboard/uploads")]
pub async fn upload_image(
    state: web::Data<AppState>,
    req: HttpRequest,
    mut payload: Multipart,
) -> impl Responder {
    let ctx = match require_role(&req, &state, Some(Role::Editor)).await {
        Ok(ctx) => ctx,
        Err(resp) => return resp,
    };
    let lang = ctx.lang;
    let limit = state.config.max_upload_bytes;

    while let Some(item) = payload.next().await {
        let mut field = match item {
            Ok(field) => field,
            Err(e) => {
                log::warn!("Malformed upload: {}", e);
                return upload_error(StatusCode::BAD_REQUEST, lang, "upload.failed");
            }
        };

        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let content_type = field
            .content_type()
            .map(|m| m.essence_str().to_string())
            .unwrap_or_default();
        if extension_for(&content_type).is_none() {
            return upload_error(StatusCode::UNSUPPORTED_MEDIA_TYPE, lang, "upload.unsupported");
        }

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = match chunk {
                Ok(chunk) => chunk,
                Err(e) => {
                    log::warn!("Upload interrupted: {}", e);
                    return upload_error(StatusCode::BAD_REQUEST, lang, "upload.failed");
                }
            };
            if bytes.len() + chunk.len() > limit {
                return upload_error(StatusCode::PAYLOAD_TOO_LARGE, lang, "upload.too_large");
            }
            bytes.extend_from_slice(&chunk);
        }

        if bytes.is_empty() {
            return upload_error(StatusCode::BAD_REQUEST, lang, "upload.missing");
        }

        return match state.storage.put(&content_type, &bytes).await {
            Ok(url) => {
                log::info!("Upload {} stored by {:?}", url, ctx.user_id());
                HttpResponse::Ok().json(json!({ "url": url }))
            }
            Err(StorageError::TooLarge(_)) => {
                upload_error(StatusCode::PAYLOAD_TOO_LARGE, lang, "upload.too_large")
            }
            Err(StorageError::UnsupportedType(_)) => {
                upload_error(StatusCode::UNSUPPORTED_MEDIA_TYPE, lang, "upload.unsupported")
            }
            Err(e) => {
                log::error!("Failed to store upload: {}", e);
                upload_error(StatusCode::INTERNAL_SERVER_ERROR, lang, "upload.failed")
            }
        };
    }

    upload_error(StatusCode::BAD_REQUEST, lang, "upload.missing")
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(upload_image);
}
