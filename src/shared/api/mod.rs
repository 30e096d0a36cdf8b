mod confirmation;
mod json_config;
mod response;
mod upload;

pub use confirmation::DeleteConfirmation;
pub use json_config::{custom_json_config, upload_payload_config};
pub use response::{ApiError, ApiResponse};
pub use upload::{upload_mime_type, UploadConfig};
