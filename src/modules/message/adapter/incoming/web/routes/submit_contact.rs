use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::message::application::domain::entities::{ContactForm, NewContactMessage};
use crate::modules::message::application::ports::incoming::use_cases::SubmitContactError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Missing fields deserialize as empty strings so they fail validation
/// with the form's own message.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct ContactFormDto {
    #[serde(default)]
    #[schema(example = "Ann Lee")]
    pub name: String,
    #[serde(default)]
    #[schema(example = "ann@example.com")]
    pub email: String,
    #[serde(default)]
    #[schema(example = "Collaboration")]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl From<ContactFormDto> for ContactForm {
    fn from(dto: ContactFormDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            subject: dto.subject,
            message: dto.message,
        }
    }
}

/// Submit the contact form
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = ContactFormDto,
    responses(
        (status = 201, description = "Message stored", body = inline(SuccessResponse<NewContactMessage>)),
        (
            status = 400,
            description = "A field is empty",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "VALIDATION_ERROR", "message": "All fields are required" }
            })
        ),
        (status = 502, description = "Both insert paths failed", body = ErrorResponse),
    )
)]
#[post("/api/contact")]
pub async fn submit_contact_handler(
    req: web::Json<ContactFormDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.messages.submit.execute(req.into_inner().into()).await {
        Ok(stored) => ApiResponse::created(stored),
        Err(SubmitContactError::Validation(e)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }
        Err(e @ SubmitContactError::Database(_)) => {
            error!(error = %e, "Contact form submission failed");
            ApiResponse::backend_error(&e.to_string())
        }
    }
}
