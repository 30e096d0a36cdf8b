use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::skill::application::domain::entities::{Skill, SkillInput};
use crate::shared::content::RepositoryError;

#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Skill>, RepositoryError>;
    async fn create(&self, input: &SkillInput) -> Result<Skill, RepositoryError>;
    /// `None` when no row has that id.
    async fn update(&self, id: Uuid, input: &SkillInput) -> Result<Option<Skill>, RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
