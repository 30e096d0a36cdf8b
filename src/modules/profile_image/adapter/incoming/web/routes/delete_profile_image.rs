use actix_web::{delete, web, Responder};
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::{ApiResponse, DeleteConfirmation};
use crate::AppState;

/// Delete a profile image record
#[utoipa::path(
    delete,
    path = "/api/admin/profile-images/{id}",
    tag = "admin-profile-images",
    params(
        ("id" = Uuid, Path, description = "Profile image id"),
        ("confirm" = bool, Query, description = "Must be true"),
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Deleted, or was never there"),
        (status = 400, description = "Missing confirmation", body = ErrorResponse),
        (status = 502, description = "Backend error", body = ErrorResponse),
    )
)]
#[delete("/api/admin/profile-images/{id}")]
pub async fn delete_profile_image_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    confirmation: web::Query<DeleteConfirmation>,
    data: web::Data<AppState>,
) -> impl Responder {
    if !confirmation.is_confirmed() {
        return ApiResponse::confirmation_required();
    }

    match data.profile_images.delete.execute(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => e.to_response(),
    }
}
