use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::education::application::domain::entities::{Education, EducationInput};
use crate::modules::education::application::ports::incoming::{
    CreateEducationUseCase, DeleteEducationUseCase, ListEducationUseCase, UpdateEducationUseCase,
};
use crate::modules::education::application::ports::outgoing::EducationRepository;
use crate::shared::content::ContentError;

pub struct EducationService<R>
where
    R: EducationRepository,
{
    repository: R,
}

impl<R> EducationService<R>
where
    R: EducationRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListEducationUseCase for EducationService<R>
where
    R: EducationRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Education>, ContentError> {
        Ok(self.repository.list().await?)
    }
}

#[async_trait]
impl<R> CreateEducationUseCase for EducationService<R>
where
    R: EducationRepository + Send + Sync,
{
    async fn execute(&self, input: EducationInput) -> Result<Education, ContentError> {
        let input = input.normalized()?;
        let entry = self.repository.create(&input).await?;
        info!(id = %entry.id, institution = %entry.institution, "Education entry created");
        Ok(entry)
    }
}

#[async_trait]
impl<R> UpdateEducationUseCase for EducationService<R>
where
    R: EducationRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid, input: EducationInput) -> Result<Education, ContentError> {
        let input = input.normalized()?;
        self.repository
            .update(id, &input)
            .await?
            .ok_or(ContentError::not_found("Education entry"))
    }
}

#[async_trait]
impl<R> DeleteEducationUseCase for EducationService<R>
where
    R: EducationRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), ContentError> {
        self.repository.delete(id).await?;
        info!(id = %id, "Education entry deleted");
        Ok(())
    }
}
