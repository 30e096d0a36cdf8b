use actix_web::{post, web, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Admin logout
///
/// Signs the collaborator session out (when there is one) and clears the
/// persisted session.
#[utoipa::path(
    post,
    path = "/api/admin/logout",
    tag = "admin-auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Session cleared"),
        (status = 401, description = "No valid admin session", body = crate::api::schemas::ErrorResponse),
    )
)]
#[post("/api/admin/logout")]
pub async fn admin_logout_handler(user: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.auth.logout.execute(user.session_id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => {
            error!(error = %e, session_id = %user.session_id, "Logout failed");
            ApiResponse::internal_error()
        }
    }
}
