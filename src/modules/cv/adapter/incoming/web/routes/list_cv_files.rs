use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::cv::application::domain::entities::CvFile;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List uploaded CV files
#[utoipa::path(
    get,
    path = "/api/admin/cv",
    tag = "admin-cv",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Newest first", body = inline(SuccessResponse<Vec<CvFile>>)),
        (status = 502, description = "Backend error", body = ErrorResponse),
    )
)]
#[get("/api/admin/cv")]
pub async fn list_cv_files_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.cv.list.execute().await {
        Ok(files) => ApiResponse::success(files),
        Err(e) => e.to_response(),
    }
}
