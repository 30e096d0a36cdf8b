use actix_web::{get, web, Responder};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::message::application::ports::incoming::use_cases::InboxSnapshot;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct InboxQuery {
    /// Case-insensitive match on name, email or subject
    pub search: Option<String>,
}

/// Current inbox
///
/// Served from memory. Use the refresh endpoint to reload from the backend.
#[utoipa::path(
    get,
    path = "/api/admin/messages",
    tag = "admin-messages",
    params(InboxQuery),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Inbox state", body = inline(SuccessResponse<InboxSnapshot>)),
        (status = 401, description = "No valid admin session", body = ErrorResponse),
    )
)]
#[get("/api/admin/messages")]
pub async fn list_messages_handler(
    _admin: AdminUser,
    query: web::Query<InboxQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let snapshot = data
        .messages
        .inbox
        .snapshot(query.search.as_deref())
        .await;
    ApiResponse::success(snapshot)
}
