use async_trait::async_trait;
use tracing::info;

use crate::modules::profile::application::domain::entities::{PersonalInfo, PersonalInfoInput};
use crate::modules::profile::application::ports::incoming::use_cases::UpsertPersonalInfoUseCase;
use crate::modules::profile::application::ports::outgoing::PersonalInfoRepository;
use crate::shared::content::ContentError;

/// Saves the single profile row, reusing the existing id so a second row is
/// never created.
pub struct UpsertPersonalInfoService<R>
where
    R: PersonalInfoRepository,
{
    repository: R,
}

impl<R> UpsertPersonalInfoService<R>
where
    R: PersonalInfoRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpsertPersonalInfoUseCase for UpsertPersonalInfoService<R>
where
    R: PersonalInfoRepository + Send + Sync,
{
    async fn execute(&self, input: PersonalInfoInput) -> Result<PersonalInfo, ContentError> {
        let input = input.normalized()?;
        let existing = self.repository.get().await?.map(|info| info.id);

        let saved = self.repository.upsert(existing, &input).await?;
        info!(id = %saved.id, created = existing.is_none(), "Personal info saved");
        Ok(saved)
    }
}
