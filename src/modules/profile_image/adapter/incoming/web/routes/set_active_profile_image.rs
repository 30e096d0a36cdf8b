use actix_web::{put, web, Responder};
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Make an image the active profile image
#[utoipa::path(
    put,
    path = "/api/admin/profile-images/{id}/active",
    tag = "admin-profile-images",
    params(("id" = Uuid, Path, description = "Profile image id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Activated"),
        (status = 404, description = "No such image", body = ErrorResponse),
        (status = 502, description = "Backend error", body = ErrorResponse),
    )
)]
#[put("/api/admin/profile-images/{id}/active")]
pub async fn set_active_profile_image_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.profile_images.set_active.execute(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => e.to_response(),
    }
}
