use actix_web::{post, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::project::application::domain::entities::{Project, ProjectInput};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Add a project
///
/// `status` defaults to "Completed" and `sort_order` to 0.
#[utoipa::path(
    post,
    path = "/api/admin/projects",
    tag = "admin-projects",
    request_body = ProjectInput,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Created", body = inline(SuccessResponse<Project>)),
        (status = 400, description = "Missing title, description or category", body = ErrorResponse),
        (status = 502, description = "Backend error", body = ErrorResponse),
    )
)]
#[post("/api/admin/projects")]
pub async fn create_project_handler(
    _admin: AdminUser,
    req: web::Json<ProjectInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.projects.create.execute(req.into_inner()).await {
        Ok(project) => ApiResponse::created(project),
        Err(e) => e.to_response(),
    }
}
