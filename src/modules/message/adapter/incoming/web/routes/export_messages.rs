use actix_web::{get, http::header, web, HttpResponse, Responder};
use chrono::Utc;

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::AppState;

/// Export the inbox as CSV
///
/// Exports everything currently loaded, ignoring any search filter.
#[utoipa::path(
    get,
    path = "/api/admin/messages/export",
    tag = "admin-messages",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "CSV attachment", content_type = "text/csv", body = String),
        (status = 401, description = "No valid admin session", body = crate::api::schemas::ErrorResponse),
    )
)]
#[get("/api/admin/messages/export")]
pub async fn export_messages_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    let export = data
        .messages
        .inbox
        .export_csv(Utc::now().date_naive())
        .await;

    HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", export.filename),
        ))
        .body(export.content)
}
