use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::SessionRecord;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Session store error: {0}")]
    Backend(String),
    #[error("Stored session is unreadable: {0}")]
    Corrupt(String),
}

/// Where the persisted admin flag lives. Records expire on their own at
/// `expires_at`.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn save(&self, record: &SessionRecord) -> Result<(), SessionStoreError>;

    async fn find(&self, session_id: Uuid) -> Result<Option<SessionRecord>, SessionStoreError>;

    /// Idempotent.
    async fn remove(&self, session_id: Uuid) -> Result<(), SessionStoreError>;

    /// Drops every session belonging to a collaborator user. Returns how many
    /// were removed.
    async fn remove_for_user(&self, user_id: Uuid) -> Result<u64, SessionStoreError>;

    async fn ping(&self) -> Result<(), SessionStoreError>;
}
