use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProbeBackendError {
    #[error("{0}")]
    Unreachable(String),
}

/// Cheap reachability check against the contact messages table.
#[async_trait]
pub trait ProbeBackendUseCase: Send + Sync {
    /// Number of stored messages when the backend answers.
    async fn execute(&self) -> Result<u64, ProbeBackendError>;
}
