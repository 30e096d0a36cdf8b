use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::profile_image::application::domain::entities::{
    NewProfileImage, ProfileImage,
};
use crate::shared::activation::ActiveFlagStore;
use crate::shared::content::RepositoryError;

#[async_trait]
pub trait ProfileImageRepository: ActiveFlagStore {
    async fn list(&self) -> Result<Vec<ProfileImage>, RepositoryError>;
    async fn get_active(&self) -> Result<Option<ProfileImage>, RepositoryError>;
    async fn insert(&self, image: &NewProfileImage) -> Result<ProfileImage, RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
