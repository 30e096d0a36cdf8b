use actix_web::{http::header::CONTENT_TYPE, HttpRequest};

const FALLBACK_MIME_TYPE: &str = "application/octet-stream";
const DEFAULT_UPLOAD_MAX_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadConfig {
    pub max_bytes: usize,
}

impl UploadConfig {
    pub fn from_env() -> Self {
        Self {
            max_bytes: std::env::var("UPLOAD_MAX_BYTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_UPLOAD_MAX_BYTES),
        }
    }
}

/// Mime type of a raw upload body, from its `Content-Type` header with any
/// parameters stripped.
pub fn upload_mime_type(req: &HttpRequest) -> String {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(FALLBACK_MIME_TYPE)
        .to_string()
}
