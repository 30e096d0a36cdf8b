use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::{Project, ProjectInput};
use crate::shared::content::RepositoryError;

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Project>, RepositoryError>;
    async fn create(&self, input: &ProjectInput) -> Result<Project, RepositoryError>;
    async fn update(&self, id: Uuid, input: &ProjectInput)
        -> Result<Option<Project>, RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
