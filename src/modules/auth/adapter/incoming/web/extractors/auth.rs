use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::SessionState;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// An admin caller whose session the gate accepted.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub session_id: Uuid,
    pub state: SessionState,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let token = extract_token_from_header(req);

        Box::pin(async move {
            let state = state.ok_or_else(|| create_api_error(ApiResponse::internal_error()))?;

            let token = token.ok_or_else(|| {
                create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))
            })?;

            let session = state.auth.check_session.execute(&token).await;
            match session.session_id() {
                Some(session_id) => Ok(AdminUser {
                    session_id,
                    state: session,
                }),
                None => Err(create_api_error(ApiResponse::unauthorized(
                    "UNAUTHENTICATED",
                    "Admin session required",
                ))),
            }
        })
    }
}

pub fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
