use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::content::ContentError;

pub const IMAGE_BUCKET: &str = "images";
pub const IMAGE_OBJECT_PREFIX: &str = "profile";
pub const DEFAULT_ALT_TEXT: &str = "Profile Image";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProfileImage {
    pub id: Uuid,
    pub filename: String,
    pub image_url: String,
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub uploaded_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProfileImage {
    pub filename: String,
    pub image_url: String,
    pub alt_text: String,
    pub is_active: bool,
}

#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub filename: String,
    pub mime_type: String,
    pub alt_text: Option<String>,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.filename.trim().is_empty() {
            return Err(ContentError::validation("A file name is required"));
        }
        if self.bytes.is_empty() {
            return Err(ContentError::validation("The uploaded file is empty"));
        }
        if !self.mime_type.starts_with("image/") {
            return Err(ContentError::validation(format!(
                "Expected an image, got {}",
                self.mime_type
            )));
        }
        Ok(())
    }

    /// Blank or missing alt text falls back to the generic label.
    pub fn alt_text_or_default(&self) -> String {
        self.alt_text
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_ALT_TEXT)
            .to_string()
    }
}
