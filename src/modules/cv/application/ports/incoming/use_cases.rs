use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::cv::application::domain::entities::{CvFile, CvUpload};
use crate::shared::content::ContentError;

/// Newest upload first.
#[async_trait]
pub trait ListCvFilesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<CvFile>, ContentError>;
}

#[async_trait]
pub trait GetActiveCvUseCase: Send + Sync {
    async fn execute(&self) -> Result<Option<CvFile>, ContentError>;
}

/// Stores the file, then records it as the only active CV.
#[async_trait]
pub trait UploadCvUseCase: Send + Sync {
    async fn execute(&self, upload: CvUpload) -> Result<CvFile, ContentError>;
}

#[async_trait]
pub trait SetActiveCvUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), ContentError>;
}

/// Removes the metadata row only; the stored object stays in the bucket.
#[async_trait]
pub trait DeleteCvUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), ContentError>;
}
