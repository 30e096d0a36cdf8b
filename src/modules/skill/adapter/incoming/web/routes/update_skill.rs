use actix_web::{put, web, Responder};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::skill::application::domain::entities::{Skill, SkillInput};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Edit a skill
#[utoipa::path(
    put,
    path = "/api/admin/skills/{id}",
    tag = "admin-skills",
    params(("id" = Uuid, Path, description = "Skill id")),
    request_body = SkillInput,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Updated", body = inline(SuccessResponse<Skill>)),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "No such skill", body = ErrorResponse),
        (status = 502, description = "Backend error", body = ErrorResponse),
    )
)]
#[put("/api/admin/skills/{id}")]
pub async fn update_skill_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<SkillInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .skills
        .update
        .execute(path.into_inner(), req.into_inner())
        .await
    {
        Ok(skill) => ApiResponse::success(skill),
        Err(e) => e.to_response(),
    }
}
