use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::warn;

use crate::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    backend: &'static str,
    sessions: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Hosted backend answers a head count on contact messages
/// - Session store answers a ping
#[get("/ready")]
pub async fn readiness(data: web::Data<AppState>) -> impl Responder {
    let backend_status = match data.messages.probe.execute().await {
        Ok(_) => "ok",
        Err(e) => {
            warn!(error = %e, "Readiness: backend unreachable");
            "unhealthy"
        }
    };

    let sessions_status = match data.sessions.ping().await {
        Ok(()) => "ok",
        Err(e) => {
            warn!(error = %e, "Readiness: session store unreachable");
            "unhealthy"
        }
    };

    if backend_status == "ok" && sessions_status == "ok" {
        HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            backend: backend_status,
            sessions: sessions_status,
        })
    } else {
        HttpResponse::ServiceUnavailable().json(ReadinessResponse {
            status: "unhealthy",
            backend: backend_status,
            sessions: sessions_status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fake_message_repository::FakeMessageRepository;

    #[actix_web::test]
    async fn liveness_needs_no_state() {
        let app = test::init_service(App::new().service(health)).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn ready_when_backend_and_sessions_answer() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(readiness),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/ready").to_request()).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn unreachable_backend_is_503() {
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_message_repository(FakeMessageRepository::new().failing_count("timeout"))
                        .build(),
                )
                .service(readiness),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/ready").to_request()).await;

        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["backend"], "unhealthy");
        assert_eq!(body["sessions"], "ok");
    }
}
