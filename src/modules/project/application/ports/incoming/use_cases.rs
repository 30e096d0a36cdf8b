use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::{Project, ProjectInput};
use crate::shared::content::ContentError;

/// Ascending `sort_order`.
#[async_trait]
pub trait ListProjectsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Project>, ContentError>;
}

#[async_trait]
pub trait CreateProjectUseCase: Send + Sync {
    async fn execute(&self, input: ProjectInput) -> Result<Project, ContentError>;
}

#[async_trait]
pub trait UpdateProjectUseCase: Send + Sync {
    async fn execute(&self, id: Uuid, input: ProjectInput) -> Result<Project, ContentError>;
}

#[async_trait]
pub trait DeleteProjectUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), ContentError>;
}
