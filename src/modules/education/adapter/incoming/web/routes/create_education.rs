use actix_web::{post, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::education::application::domain::entities::{Education, EducationInput};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Add an education entry
#[utoipa::path(
    post,
    path = "/api/admin/education",
    tag = "admin-education",
    request_body = EducationInput,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Created", body = inline(SuccessResponse<Education>)),
        (status = 400, description = "Missing degree or institution", body = ErrorResponse),
        (status = 502, description = "Backend error", body = ErrorResponse),
    )
)]
#[post("/api/admin/education")]
pub async fn create_education_handler(
    _admin: AdminUser,
    req: web::Json<EducationInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.education.create.execute(req.into_inner()).await {
        Ok(entry) => ApiResponse::created(entry),
        Err(e) => e.to_response(),
    }
}
