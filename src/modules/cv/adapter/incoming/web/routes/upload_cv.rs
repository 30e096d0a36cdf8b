use actix_web::{post, web, HttpRequest, Responder};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::cv::application::domain::entities::{CvFile, CvUpload};
use crate::shared::api::{upload_mime_type, ApiResponse};
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct UploadCvQuery {
    /// Original file name, kept as the display name.
    pub filename: String,
}

/// Upload a CV
///
/// The request body is the file itself. The new file becomes the only active CV.
#[utoipa::path(
    post,
    path = "/api/admin/cv",
    tag = "admin-cv",
    params(UploadCvQuery),
    request_body(content = Vec<u8>, content_type = "application/pdf"),
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Stored and activated", body = inline(SuccessResponse<CvFile>)),
        (status = 400, description = "Empty file or missing name", body = ErrorResponse),
        (status = 413, description = "File too large"),
        (status = 502, description = "Storage or backend error", body = ErrorResponse),
    )
)]
#[post("/api/admin/cv")]
pub async fn upload_cv_handler(
    _admin: AdminUser,
    req: HttpRequest,
    query: web::Query<UploadCvQuery>,
    body: web::Bytes,
    data: web::Data<AppState>,
) -> impl Responder {
    let upload = CvUpload {
        filename: query.into_inner().filename,
        mime_type: upload_mime_type(&req),
        bytes: body.to_vec(),
    };

    match data.cv.upload.execute(upload).await {
        Ok(file) => ApiResponse::created(file),
        Err(e) => e.to_response(),
    }
}
