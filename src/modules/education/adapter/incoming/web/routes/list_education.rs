use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::education::application::domain::entities::Education;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List education entries
#[utoipa::path(
    get,
    path = "/api/admin/education",
    tag = "admin-education",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Entries, latest start date first", body = inline(SuccessResponse<Vec<Education>>)),
        (status = 502, description = "Backend error", body = ErrorResponse),
    )
)]
#[get("/api/admin/education")]
pub async fn list_education_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.education.list.execute().await {
        Ok(entries) => ApiResponse::success(entries),
        Err(e) => e.to_response(),
    }
}
