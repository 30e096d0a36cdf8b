use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::profile::application::domain::entities::PersonalInfo;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Load personal info
///
/// `data` is null until the profile has been saved once.
#[utoipa::path(
    get,
    path = "/api/admin/profile",
    tag = "admin-profile",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Profile or null", body = inline(SuccessResponse<Option<PersonalInfo>>)),
        (status = 502, description = "Backend error", body = ErrorResponse),
    )
)]
#[get("/api/admin/profile")]
pub async fn get_personal_info_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.profile.get.execute().await {
        Ok(info) => ApiResponse::success(info),
        Err(e) => e.to_response(),
    }
}
