use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::skill::application::domain::entities::{Skill, SkillInput};
use crate::shared::content::ContentError;

/// Ordered by category, then name.
#[async_trait]
pub trait ListSkillsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Skill>, ContentError>;
}

#[async_trait]
pub trait CreateSkillUseCase: Send + Sync {
    async fn execute(&self, input: SkillInput) -> Result<Skill, ContentError>;
}

#[async_trait]
pub trait UpdateSkillUseCase: Send + Sync {
    async fn execute(&self, id: Uuid, input: SkillInput) -> Result<Skill, ContentError>;
}

#[async_trait]
pub trait DeleteSkillUseCase: Send + Sync {
    /// Unknown ids are not an error.
    async fn execute(&self, id: Uuid) -> Result<(), ContentError>;
}
