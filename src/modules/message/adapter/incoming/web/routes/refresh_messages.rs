use actix_web::{post, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::message::application::ports::incoming::use_cases::InboxSnapshot;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Reload the inbox
///
/// Runs the RPC, direct read, demo chain. The connection state in the body
/// tells which one answered.
#[utoipa::path(
    post,
    path = "/api/admin/messages/refresh",
    tag = "admin-messages",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Reloaded inbox", body = inline(SuccessResponse<InboxSnapshot>)),
        (status = 401, description = "No valid admin session", body = ErrorResponse),
    )
)]
#[post("/api/admin/messages/refresh")]
pub async fn refresh_messages_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    ApiResponse::success(data.messages.inbox.refresh().await)
}
