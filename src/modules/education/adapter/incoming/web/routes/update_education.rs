use actix_web::{put, web, Responder};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::education::application::domain::entities::{Education, EducationInput};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Edit an education entry
#[utoipa::path(
    put,
    path = "/api/admin/education/{id}",
    tag = "admin-education",
    params(("id" = Uuid, Path, description = "Education entry id")),
    request_body = EducationInput,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Updated", body = inline(SuccessResponse<Education>)),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "No such entry", body = ErrorResponse),
        (status = 502, description = "Backend error", body = ErrorResponse),
    )
)]
#[put("/api/admin/education/{id}")]
pub async fn update_education_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<EducationInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .education
        .update
        .execute(path.into_inner(), req.into_inner())
        .await
    {
        Ok(entry) => ApiResponse::success(entry),
        Err(e) => e.to_response(),
    }
}
