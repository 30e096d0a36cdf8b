use async_trait::async_trait;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::modules::profile_image::application::domain::entities::{
    ImageUpload, NewProfileImage, ProfileImage, IMAGE_BUCKET, IMAGE_OBJECT_PREFIX,
};
use crate::modules::profile_image::application::ports::incoming::{
    DeleteProfileImageUseCase, GetActiveProfileImageUseCase, ListProfileImagesUseCase,
    SetActiveProfileImageUseCase, UploadProfileImageUseCase,
};
use crate::modules::profile_image::application::ports::outgoing::ProfileImageRepository;
use crate::shared::activation::activate_exclusively;
use crate::shared::content::ContentError;
use crate::shared::object_storage::ObjectStorage;
use crate::shared::supabase::timestamped_object_name;

pub struct ProfileImageService<R, S>
where
    R: ProfileImageRepository,
    S: ObjectStorage,
{
    repository: R,
    storage: S,
}

impl<R, S> ProfileImageService<R, S>
where
    R: ProfileImageRepository,
    S: ObjectStorage,
{
    pub fn new(repository: R, storage: S) -> Self {
        Self {
            repository,
            storage,
        }
    }
}

#[async_trait]
impl<R, S> ListProfileImagesUseCase for ProfileImageService<R, S>
where
    R: ProfileImageRepository + Send + Sync,
    S: ObjectStorage + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<ProfileImage>, ContentError> {
        Ok(self.repository.list().await?)
    }
}

#[async_trait]
impl<R, S> GetActiveProfileImageUseCase for ProfileImageService<R, S>
where
    R: ProfileImageRepository + Send + Sync,
    S: ObjectStorage + Send + Sync,
{
    async fn execute(&self) -> Result<Option<ProfileImage>, ContentError> {
        Ok(self.repository.get_active().await?)
    }
}

#[async_trait]
impl<R, S> UploadProfileImageUseCase for ProfileImageService<R, S>
where
    R: ProfileImageRepository + Send + Sync,
    S: ObjectStorage + Send + Sync,
{
    async fn execute(&self, upload: ImageUpload) -> Result<ProfileImage, ContentError> {
        upload.validate()?;

        let alt_text = upload.alt_text_or_default();
        let object = timestamped_object_name(
            IMAGE_OBJECT_PREFIX,
            &upload.filename,
            Utc::now().timestamp_millis(),
        );
        let image_url = self
            .storage
            .put(IMAGE_BUCKET, &object, upload.bytes, &upload.mime_type)
            .await?;

        self.repository.deactivate_all().await?;

        let saved = self
            .repository
            .insert(&NewProfileImage {
                filename: upload.filename,
                image_url,
                alt_text,
                is_active: true,
            })
            .await?;

        info!(id = %saved.id, object = %object, "Profile image uploaded and activated");
        Ok(saved)
    }
}

#[async_trait]
impl<R, S> SetActiveProfileImageUseCase for ProfileImageService<R, S>
where
    R: ProfileImageRepository + Send + Sync,
    S: ObjectStorage + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), ContentError> {
        activate_exclusively(&self.repository, id, "Profile image").await
    }
}

#[async_trait]
impl<R, S> DeleteProfileImageUseCase for ProfileImageService<R, S>
where
    R: ProfileImageRepository + Send + Sync,
    S: ObjectStorage + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), ContentError> {
        self.repository.delete(id).await?;
        info!(id = %id, "Profile image deleted");
        Ok(())
    }
}
