use actix_web::{put, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::profile::application::domain::entities::{PersonalInfo, PersonalInfoInput};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Save personal info
///
/// Creates the profile on first save and updates the same row afterwards.
#[utoipa::path(
    put,
    path = "/api/admin/profile",
    tag = "admin-profile",
    request_body = PersonalInfoInput,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Saved profile", body = inline(SuccessResponse<PersonalInfo>)),
        (status = 400, description = "Invalid email or negative counter", body = ErrorResponse),
        (status = 502, description = "Backend error", body = ErrorResponse),
    )
)]
#[put("/api/admin/profile")]
pub async fn upsert_personal_info_handler(
    _admin: AdminUser,
    req: web::Json<PersonalInfoInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.profile.upsert.execute(req.into_inner()).await {
        Ok(saved) => ApiResponse::success(saved),
        Err(e) => e.to_response(),
    }
}
