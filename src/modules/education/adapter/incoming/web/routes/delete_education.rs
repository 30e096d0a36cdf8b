use actix_web::{delete, web, Responder};
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::{ApiResponse, DeleteConfirmation};
use crate::AppState;

/// Delete an education entry
#[utoipa::path(
    delete,
    path = "/api/admin/education/{id}",
    tag = "admin-education",
    params(
        ("id" = Uuid, Path, description = "Education entry id"),
        ("confirm" = bool, Query, description = "Must be true"),
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Deleted, or was never there"),
        (status = 400, description = "Missing confirmation", body = ErrorResponse),
        (status = 502, description = "Backend error", body = ErrorResponse),
    )
)]
#[delete("/api/admin/education/{id}")]
pub async fn delete_education_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    confirmation: web::Query<DeleteConfirmation>,
    data: web::Data<AppState>,
) -> impl Responder {
    if !confirmation.is_confirmed() {
        return ApiResponse::confirmation_required();
    }

    match data.education.delete.execute(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => e.to_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::tests::support::auth_helper::{admin_state, ADMIN_AUTH};
    use crate::tests::support::stubs::StubEducation;

    #[actix_web::test]
    async fn unknown_id_is_still_204() {
        let stub = StubEducation::with(vec![]);
        let app = test::init_service(
            App::new()
                .app_data(admin_state().with_education(stub.use_cases()).build())
                .service(delete_education_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/admin/education/{}?confirm=true", Uuid::new_v4()))
            .insert_header(ADMIN_AUTH)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }

    #[actix_web::test]
    async fn confirm_false_is_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(admin_state().build())
                .service(delete_education_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/admin/education/{}?confirm=false", Uuid::new_v4()))
            .insert_header(ADMIN_AUTH)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "CONFIRMATION_REQUIRED");
    }
}
