use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::profile_image::application::domain::entities::ProfileImage;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List profile images
#[utoipa::path(
    get,
    path = "/api/admin/profile-images",
    tag = "admin-profile-images",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Newest first", body = inline(SuccessResponse<Vec<ProfileImage>>)),
        (status = 502, description = "Backend error", body = ErrorResponse),
    )
)]
#[get("/api/admin/profile-images")]
pub async fn list_profile_images_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.profile_images.list.execute().await {
        Ok(images) => ApiResponse::success(images),
        Err(e) => e.to_response(),
    }
}
