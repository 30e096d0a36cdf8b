use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::skill::application::domain::entities::Skill;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List skills
#[utoipa::path(
    get,
    path = "/api/admin/skills",
    tag = "admin-skills",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Skills ordered by category then name", body = inline(SuccessResponse<Vec<Skill>>)),
        (status = 502, description = "Backend error", body = ErrorResponse),
    )
)]
#[get("/api/admin/skills")]
pub async fn list_skills_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.skills.list.execute().await {
        Ok(skills) => ApiResponse::success(skills),
        Err(e) => e.to_response(),
    }
}
