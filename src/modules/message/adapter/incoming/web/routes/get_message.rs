use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::message::application::domain::entities::ContactMessage;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Open one message
///
/// Also marks it as the selected message.
#[utoipa::path(
    get,
    path = "/api/admin/messages/{id}",
    tag = "admin-messages",
    params(("id" = String, Path, description = "Message id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The message", body = inline(SuccessResponse<ContactMessage>)),
        (status = 404, description = "Not in the inbox", body = ErrorResponse),
        (status = 401, description = "No valid admin session", body = ErrorResponse),
    )
)]
#[get("/api/admin/messages/{id}")]
pub async fn get_message_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.messages.inbox.open(&path).await {
        Some(message) => ApiResponse::success(message),
        None => ApiResponse::not_found("MESSAGE_NOT_FOUND", "Message not found"),
    }
}
