use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::education::application::domain::entities::{Education, EducationInput};
use crate::shared::content::ContentError;

/// Most recent start date first.
#[async_trait]
pub trait ListEducationUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Education>, ContentError>;
}

#[async_trait]
pub trait CreateEducationUseCase: Send + Sync {
    async fn execute(&self, input: EducationInput) -> Result<Education, ContentError>;
}

#[async_trait]
pub trait UpdateEducationUseCase: Send + Sync {
    async fn execute(&self, id: Uuid, input: EducationInput) -> Result<Education, ContentError>;
}

#[async_trait]
pub trait DeleteEducationUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), ContentError>;
}
