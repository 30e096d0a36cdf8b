use actix_web::{put, web, Responder};
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Make a CV the active one
///
/// Every other CV is deactivated first.
#[utoipa::path(
    put,
    path = "/api/admin/cv/{id}/active",
    tag = "admin-cv",
    params(("id" = Uuid, Path, description = "CV file id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Activated"),
        (status = 404, description = "No such CV file", body = ErrorResponse),
        (status = 502, description = "Backend error", body = ErrorResponse),
    )
)]
#[put("/api/admin/cv/{id}/active")]
pub async fn set_active_cv_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.cv.set_active.execute(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => e.to_response(),
    }
}
