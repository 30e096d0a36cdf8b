use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::cv::application::domain::entities::CvFile;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Currently active CV
#[utoipa::path(
    get,
    path = "/api/admin/cv/active",
    tag = "admin-cv",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Active CV or null", body = inline(SuccessResponse<Option<CvFile>>)),
        (status = 502, description = "Backend error", body = ErrorResponse),
    )
)]
#[get("/api/admin/cv/active")]
pub async fn get_active_cv_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.cv.get_active.execute().await {
        Ok(active) => ApiResponse::success(active),
        Err(e) => e.to_response(),
    }
}
