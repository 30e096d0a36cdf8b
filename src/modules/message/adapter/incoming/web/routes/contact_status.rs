use actix_web::{get, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::schemas::SuccessResponse;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Whether the contact form can currently store messages.
#[derive(Debug, Serialize, ToSchema)]
pub struct ContactStatusView {
    pub connected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Contact backend connectivity
///
/// Always 200; an unreachable backend is reported in the body so the form
/// can show it and disable submission.
#[utoipa::path(
    get,
    path = "/api/contact/status",
    tag = "contact",
    responses(
        (status = 200, description = "Probe result", body = inline(SuccessResponse<ContactStatusView>)),
    )
)]
#[get("/api/contact/status")]
pub async fn contact_status_handler(data: web::Data<AppState>) -> impl Responder {
    let view = match data.messages.probe.execute().await {
        Ok(_) => ContactStatusView {
            connected: true,
            message: None,
        },
        Err(e) => ContactStatusView {
            connected: false,
            message: Some(format!("Database connection failed: {}", e)),
        },
    };
    ApiResponse::success(view)
}
