use actix_web::{delete, web, Responder};

use crate::api::schemas::ErrorResponse;
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::{ApiResponse, DeleteConfirmation};
use crate::AppState;

/// Delete a message
#[utoipa::path(
    delete,
    path = "/api/admin/messages/{id}",
    tag = "admin-messages",
    params(
        ("id" = String, Path, description = "Message id"),
        ("confirm" = bool, Query, description = "Must be true"),
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Deleted, or was never there"),
        (status = 400, description = "Missing confirmation", body = ErrorResponse),
        (status = 502, description = "Backend refused the delete", body = ErrorResponse),
    )
)]
#[delete("/api/admin/messages/{id}")]
pub async fn delete_message_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    confirmation: web::Query<DeleteConfirmation>,
    data: web::Data<AppState>,
) -> impl Responder {
    if !confirmation.is_confirmed() {
        return ApiResponse::confirmation_required();
    }

    match data.messages.inbox.delete(&path).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => ApiResponse::backend_error(&e.to_string()),
    }
}
