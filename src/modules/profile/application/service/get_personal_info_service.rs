use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::PersonalInfo;
use crate::modules::profile::application::ports::incoming::use_cases::GetPersonalInfoUseCase;
use crate::modules::profile::application::ports::outgoing::PersonalInfoRepository;
use crate::shared::content::ContentError;

pub struct GetPersonalInfoService<R>
where
    R: PersonalInfoRepository,
{
    repository: R,
}

impl<R> GetPersonalInfoService<R>
where
    R: PersonalInfoRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetPersonalInfoUseCase for GetPersonalInfoService<R>
where
    R: PersonalInfoRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Option<PersonalInfo>, ContentError> {
        Ok(self.repository.get().await?)
    }
}
