use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::project::application::domain::entities::Project;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List projects
#[utoipa::path(
    get,
    path = "/api/admin/projects",
    tag = "admin-projects",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Projects in display order", body = inline(SuccessResponse<Vec<Project>>)),
        (status = 401, description = "No admin session", body = ErrorResponse),
        (status = 502, description = "Backend error", body = ErrorResponse),
    )
)]
#[get("/api/admin/projects")]
pub async fn list_projects_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.projects.list.execute().await {
        Ok(projects) => ApiResponse::success(projects),
        Err(e) => e.to_response(),
    }
}
