use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::SessionRecord;
use crate::modules::auth::application::ports::outgoing::{SessionStore, SessionStoreError};

/// Process-local session store, used when no `REDIS_URL` is configured.
/// Sessions do not survive a restart.
#[derive(Clone, Default)]
pub struct InMemorySessionStore {
    records: Arc<RwLock<HashMap<Uuid, SessionRecord>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn save(&self, record: &SessionRecord) -> Result<(), SessionStoreError> {
        self.records
            .write()
            .await
            .insert(record.session_id, record.clone());
        Ok(())
    }

    async fn find(&self, session_id: Uuid) -> Result<Option<SessionRecord>, SessionStoreError> {
        let now = Utc::now();
        let mut records = self.records.write().await;

        match records.get(&session_id) {
            Some(record) if record.is_expired_at(now) => {
                records.remove(&session_id);
                Ok(None)
            }
            other => Ok(other.cloned()),
        }
    }

    async fn remove(&self, session_id: Uuid) -> Result<(), SessionStoreError> {
        self.records.write().await.remove(&session_id);
        Ok(())
    }

    async fn remove_for_user(&self, user_id: Uuid) -> Result<u64, SessionStoreError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|_, r| r.user_id() != Some(user_id));
        Ok((before - records.len()) as u64)
    }

    async fn ping(&self) -> Result<(), SessionStoreError> {
        Ok(())
    }
}
