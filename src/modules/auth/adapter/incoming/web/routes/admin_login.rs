use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::domain::entities::AdminCredentials;
use crate::modules::auth::application::use_cases::login_admin::LoginError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::admin_session::SessionView;

#[derive(Deserialize, Serialize, ToSchema)]
pub struct AdminLoginRequestDto {
    #[schema(example = "admin@example.com")]
    pub email: String,
    #[schema(example = "correct horse battery staple")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct AdminLoginResponse {
    /// Bearer token for the admin routes
    token: String,
    /// RFC 3339 expiry of the session
    expires_at: String,
    session: SessionView,
}

/// Admin login
///
/// Tries the configured override credential, then the collaborator's
/// password sign-in. Any failure is reported as "Invalid credentials".
#[utoipa::path(
    post,
    path = "/api/admin/login",
    tag = "admin-auth",
    request_body = AdminLoginRequestDto,
    responses(
        (status = 200, description = "Session established", body = inline(SuccessResponse<AdminLoginResponse>)),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "INVALID_CREDENTIALS", "message": "Invalid credentials" }
            })
        ),
        (status = 400, description = "Empty email or password", body = ErrorResponse),
        (status = 500, description = "Session could not be stored", body = ErrorResponse),
    )
)]
#[post("/api/admin/login")]
pub async fn admin_login_handler(
    req: web::Json<AdminLoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let credentials = match AdminCredentials::new(dto.email, dto.password) {
        Ok(c) => c,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    info!(email = %credentials.email(), "Admin login attempt");

    match data.auth.login.execute(credentials).await {
        Ok(outcome) => ApiResponse::success(AdminLoginResponse {
            token: outcome.token,
            expires_at: outcome.expires_at.to_rfc3339(),
            session: SessionView::from(&outcome.state),
        }),
        Err(LoginError::InvalidCredentials) => {
            warn!("Admin login rejected");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid credentials")
        }
        Err(LoginError::SessionFailed(e)) => {
            error!(error = %e, "Admin session could not be created");
            ApiResponse::internal_error()
        }
    }
}
