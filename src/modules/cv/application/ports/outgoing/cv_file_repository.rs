use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::cv::application::domain::entities::{CvFile, NewCvFile};
use crate::shared::activation::ActiveFlagStore;
use crate::shared::content::RepositoryError;

#[async_trait]
pub trait CvFileRepository: ActiveFlagStore {
    async fn list(&self) -> Result<Vec<CvFile>, RepositoryError>;
    async fn get_active(&self) -> Result<Option<CvFile>, RepositoryError>;
    async fn insert(&self, file: &NewCvFile) -> Result<CvFile, RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
