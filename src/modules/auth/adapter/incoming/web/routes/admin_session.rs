use actix_web::{get, web, HttpRequest, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::auth::adapter::incoming::web::extractors::auth::extract_token_from_header;
use crate::modules::auth::application::domain::entities::SessionState;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct SessionView {
    pub authenticated: bool,
    /// `unauthenticated`, `local_override` or `delegated`
    #[schema(example = "delegated")]
    pub mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl From<&SessionState> for SessionView {
    fn from(state: &SessionState) -> Self {
        let (user_id, email) = match state {
            SessionState::DelegatedSession { user_id, email, .. } => {
                (Some(user_id.to_string()), email.clone())
            }
            _ => (None, None),
        };

        Self {
            authenticated: state.is_authenticated(),
            mode: state.mode().to_string(),
            user_id,
            email,
        }
    }
}

/// Session check
///
/// Reports whether the bearer token still maps to a live admin session.
/// Never 401s; an absent or stale token is just `authenticated: false`.
#[utoipa::path(
    get,
    path = "/api/admin/session",
    tag = "admin-auth",
    responses(
        (status = 200, description = "Current session state", body = inline(crate::api::schemas::SuccessResponse<SessionView>)),
    )
)]
#[get("/api/admin/session")]
pub async fn admin_session_handler(req: HttpRequest, data: web::Data<AppState>) -> impl Responder {
    let state = match extract_token_from_header(&req) {
        Some(token) => data.auth.check_session.execute(&token).await,
        None => SessionState::Unauthenticated,
    };

    ApiResponse::success(SessionView::from(&state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;
    use uuid::Uuid;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubCheckSessionUseCase;

    #[actix_web::test]
    async fn no_token_is_unauthenticated() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(admin_session_handler),
        )
        .await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/admin/session").to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["authenticated"], false);
        assert_eq!(body["data"]["mode"], "unauthenticated");
    }

    #[actix_web::test]
    async fn delegated_session_reports_user() {
        let user_id = Uuid::new_v4();
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_check_session(StubCheckSessionUseCase::returning(
                            SessionState::DelegatedSession {
                                session_id: Uuid::new_v4(),
                                user_id,
                                email: Some("admin@example.com".into()),
                            },
                        ))
                        .build(),
                )
                .service(admin_session_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/session")
            .insert_header(("Authorization", "Bearer tok"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["authenticated"], true);
        assert_eq!(body["data"]["mode"], "delegated");
        assert_eq!(body["data"]["user_id"], user_id.to_string());
        assert_eq!(body["data"]["email"], "admin@example.com");
    }
}
