// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::{JsonConfig, PayloadConfig};

/// JSON extractor config: malformed bodies come back in the standard
/// envelope instead of actix's plain-text 400.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().limit(256 * 1024).error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request("VALIDATION_ERROR", &message),
        )
        .into()
    })
}

/// Raw body limit for file uploads.
pub fn upload_payload_config(max_bytes: usize) -> PayloadConfig {
    PayloadConfig::new(max_bytes)
}
