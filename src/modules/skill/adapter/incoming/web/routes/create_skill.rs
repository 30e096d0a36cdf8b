use actix_web::{post, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::skill::application::domain::entities::{Skill, SkillInput};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Add a skill
#[utoipa::path(
    post,
    path = "/api/admin/skills",
    tag = "admin-skills",
    request_body = SkillInput,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Created", body = inline(SuccessResponse<Skill>)),
        (status = 400, description = "Blank name, unknown category or level outside 0..=100", body = ErrorResponse),
        (status = 502, description = "Backend error", body = ErrorResponse),
    )
)]
#[post("/api/admin/skills")]
pub async fn create_skill_handler(
    _admin: AdminUser,
    req: web::Json<SkillInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.skills.create.execute(req.into_inner()).await {
        Ok(skill) => ApiResponse::created(skill),
        Err(e) => e.to_response(),
    }
}
