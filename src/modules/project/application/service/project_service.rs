use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::{Project, ProjectInput};
use crate::modules::project::application::ports::incoming::{
    CreateProjectUseCase, DeleteProjectUseCase, ListProjectsUseCase, UpdateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::ProjectRepository;
use crate::shared::content::ContentError;

pub struct ProjectService<R>
where
    R: ProjectRepository,
{
    repository: R,
}

impl<R> ProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListProjectsUseCase for ProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Project>, ContentError> {
        Ok(self.repository.list().await?)
    }
}

#[async_trait]
impl<R> CreateProjectUseCase for ProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, input: ProjectInput) -> Result<Project, ContentError> {
        let input = input.normalized()?;
        let project = self.repository.create(&input).await?;
        info!(id = %project.id, title = %project.title, "Project created");
        Ok(project)
    }
}

#[async_trait]
impl<R> UpdateProjectUseCase for ProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid, input: ProjectInput) -> Result<Project, ContentError> {
        let input = input.normalized()?;
        let project = self
            .repository
            .update(id, &input)
            .await?
            .ok_or(ContentError::not_found("Project"))?;
        info!(id = %id, "Project updated");
        Ok(project)
    }
}

#[async_trait]
impl<R> DeleteProjectUseCase for ProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), ContentError> {
        self.repository.delete(id).await?;
        info!(id = %id, "Project deleted");
        Ok(())
    }
}
