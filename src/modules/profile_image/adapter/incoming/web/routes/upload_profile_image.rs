use actix_web::{post, web, HttpRequest, Responder};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::profile_image::application::domain::entities::{ImageUpload, ProfileImage};
use crate::shared::api::{upload_mime_type, ApiResponse};
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct UploadImageQuery {
    pub filename: String,
    /// Defaults to "Profile Image".
    pub alt_text: Option<String>,
}

/// Upload a profile image
///
/// The request body is the image. It becomes the only active profile image.
#[utoipa::path(
    post,
    path = "/api/admin/profile-images",
    tag = "admin-profile-images",
    params(UploadImageQuery),
    request_body(content = Vec<u8>, content_type = "image/*"),
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Stored and activated", body = inline(SuccessResponse<ProfileImage>)),
        (status = 400, description = "Empty body or not an image", body = ErrorResponse),
        (status = 413, description = "File too large"),
        (status = 502, description = "Storage or backend error", body = ErrorResponse),
    )
)]
#[post("/api/admin/profile-images")]
pub async fn upload_profile_image_handler(
    _admin: AdminUser,
    req: HttpRequest,
    query: web::Query<UploadImageQuery>,
    body: web::Bytes,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();
    let upload = ImageUpload {
        filename: query.filename,
        mime_type: upload_mime_type(&req),
        alt_text: query.alt_text,
        bytes: body.to_vec(),
    };

    match data.profile_images.upload.execute(upload).await {
        Ok(image) => ApiResponse::created(image),
        Err(e) => e.to_response(),
    }
}
