use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::{PersonalInfo, PersonalInfoInput};
use crate::shared::content::ContentError;

#[async_trait]
pub trait UpsertPersonalInfoUseCase: Send + Sync {
    /// Saves the profile and returns the row as the backend stored it.
    async fn execute(&self, input: PersonalInfoInput) -> Result<PersonalInfo, ContentError>;
}
