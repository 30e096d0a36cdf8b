use actix_web::{put, web, Responder};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::project::application::domain::entities::{Project, ProjectInput};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Edit a project
#[utoipa::path(
    put,
    path = "/api/admin/projects/{id}",
    tag = "admin-projects",
    params(("id" = Uuid, Path, description = "Project id")),
    request_body = ProjectInput,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Updated", body = inline(SuccessResponse<Project>)),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "No such project", body = ErrorResponse),
        (status = 502, description = "Backend error", body = ErrorResponse),
    )
)]
#[put("/api/admin/projects/{id}")]
pub async fn update_project_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<ProjectInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .projects
        .update
        .execute(path.into_inner(), req.into_inner())
        .await
    {
        Ok(project) => ApiResponse::success(project),
        Err(e) => e.to_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::json;

    use crate::tests::support::auth_helper::{admin_state, ADMIN_AUTH};
    use crate::tests::support::fixtures::project;
    use crate::tests::support::stubs::StubProjects;

    #[actix_web::test]
    async fn featured_flag_is_saved() {
        let existing = project("CMS", 3);
        let id = existing.id;
        let stub = StubProjects::with(vec![existing]);
        let app = test::init_service(
            App::new()
                .app_data(admin_state().with_projects(stub.use_cases()).build())
                .service(update_project_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/admin/projects/{}", id))
            .insert_header(ADMIN_AUTH)
            .set_json(json!({
                "title": "CMS",
                "description": "Blog engine",
                "category": "fullstack",
                "is_featured": true,
                "sort_order": 0
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let rows = stub.rows();
        assert!(rows[0].is_featured);
        assert_eq!(rows[0].sort_order, 0);
    }
}
