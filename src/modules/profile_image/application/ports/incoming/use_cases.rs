use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::profile_image::application::domain::entities::{ImageUpload, ProfileImage};
use crate::shared::content::ContentError;

#[async_trait]
pub trait ListProfileImagesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ProfileImage>, ContentError>;
}

#[async_trait]
pub trait GetActiveProfileImageUseCase: Send + Sync {
    async fn execute(&self) -> Result<Option<ProfileImage>, ContentError>;
}

#[async_trait]
pub trait UploadProfileImageUseCase: Send + Sync {
    async fn execute(&self, upload: ImageUpload) -> Result<ProfileImage, ContentError>;
}

#[async_trait]
pub trait SetActiveProfileImageUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), ContentError>;
}

#[async_trait]
pub trait DeleteProfileImageUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), ContentError>;
}
