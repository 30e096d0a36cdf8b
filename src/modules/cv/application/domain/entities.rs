use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::content::ContentError;

pub const CV_BUCKET: &str = "files";
pub const CV_OBJECT_PREFIX: &str = "cv";

/// Metadata row for an uploaded CV. The file itself lives in object storage
/// at `file_url`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CvFile {
    pub id: Uuid,
    pub filename: String,
    pub file_url: String,
    #[serde(default)]
    pub file_size: Option<i64>,
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub uploaded_at: Option<DateTime<Utc>>,
}

/// Row written after the object upload succeeds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCvFile {
    pub filename: String,
    pub file_url: String,
    pub file_size: i64,
    pub mime_type: String,
    pub is_active: bool,
}

#[derive(Debug, Clone)]
pub struct CvUpload {
    pub filename: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl CvUpload {
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.filename.trim().is_empty() {
            return Err(ContentError::validation("A file name is required"));
        }
        if self.bytes.is_empty() {
            return Err(ContentError::validation("The uploaded file is empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_is_rejected() {
        let upload = CvUpload {
            filename: "cv.pdf".into(),
            mime_type: "application/pdf".into(),
            bytes: vec![],
        };
        assert_eq!(
            upload.validate().unwrap_err(),
            ContentError::validation("The uploaded file is empty")
        );
    }

    #[test]
    fn file_size_may_be_null() {
        let file: CvFile = serde_json::from_value(serde_json::json!({
            "id": "4b8f3a0e-0a1b-4c2d-8e3f-5a6b7c8d9e0f",
            "filename": "cv.pdf",
            "file_url": "https://demo.supabase.co/storage/v1/object/public/files/cv-1.pdf",
            "file_size": null,
            "is_active": true
        }))
        .unwrap();
        assert_eq!(file.file_size, None);
        assert!(file.is_active);
    }
}
