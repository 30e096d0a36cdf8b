use async_trait::async_trait;
use tracing::warn;

use crate::modules::message::application::ports::incoming::use_cases::{
    ProbeBackendError, ProbeBackendUseCase,
};
use crate::modules::message::application::ports::outgoing::ContactMessageRepository;

pub struct ProbeBackendService<R>
where
    R: ContactMessageRepository,
{
    repository: R,
}

impl<R> ProbeBackendService<R>
where
    R: ContactMessageRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ProbeBackendUseCase for ProbeBackendService<R>
where
    R: ContactMessageRepository + Send + Sync,
{
    async fn execute(&self) -> Result<u64, ProbeBackendError> {
        self.repository.count().await.map_err(|e| {
            warn!(error = %e, "Backend probe failed");
            ProbeBackendError::Unreachable(e.to_string())
        })
    }
}
