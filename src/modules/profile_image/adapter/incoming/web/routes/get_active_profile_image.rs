use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::profile_image::application::domain::entities::ProfileImage;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Currently active profile image
#[utoipa::path(
    get,
    path = "/api/admin/profile-images/active",
    tag = "admin-profile-images",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Active image or null", body = inline(SuccessResponse<Option<ProfileImage>>)),
        (status = 502, description = "Backend error", body = ErrorResponse),
    )
)]
#[get("/api/admin/profile-images/active")]
pub async fn get_active_profile_image_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.profile_images.get_active.execute().await {
        Ok(active) => ApiResponse::success(active),
        Err(e) => e.to_response(),
    }
}
