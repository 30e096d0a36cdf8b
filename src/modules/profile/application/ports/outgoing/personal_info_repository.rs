use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::profile::application::domain::entities::{PersonalInfo, PersonalInfoInput};
use crate::shared::content::RepositoryError;

#[async_trait]
pub trait PersonalInfoRepository: Send + Sync {
    async fn get(&self) -> Result<Option<PersonalInfo>, RepositoryError>;

    /// Inserts when `id` is `None`, otherwise merges into that row.
    async fn upsert(
        &self,
        id: Option<Uuid>,
        input: &PersonalInfoInput,
    ) -> Result<PersonalInfo, RepositoryError>;
}
