use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::PersonalInfo;
use crate::shared::content::ContentError;

#[async_trait]
pub trait GetPersonalInfoUseCase: Send + Sync {
    /// `None` until the profile has been saved once.
    async fn execute(&self) -> Result<Option<PersonalInfo>, ContentError>;
}
