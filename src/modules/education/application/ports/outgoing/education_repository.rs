use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::education::application::domain::entities::{Education, EducationInput};
use crate::shared::content::RepositoryError;

#[async_trait]
pub trait EducationRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Education>, RepositoryError>;
    async fn create(&self, input: &EducationInput) -> Result<Education, RepositoryError>;
    async fn update(
        &self,
        id: Uuid,
        input: &EducationInput,
    ) -> Result<Option<Education>, RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
