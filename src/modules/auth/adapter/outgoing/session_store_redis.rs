use async_trait::async_trait;
use chrono::Utc;
use deadpool_redis::{redis::AsyncCommands, Pool};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::SessionRecord;
use crate::modules::auth::application::ports::outgoing::{SessionStore, SessionStoreError};

/// Redis-backed `SessionStore`.
///
/// ## Redis data model
///
/// ```text
/// admin:session:{session_id}   -> JSON(SessionRecord)   TTL = expires_at
/// admin:session:user:{user_id} -> SET(session_id)       TTL = latest expiry
/// ```
///
/// The per-user set only exists for delegated sessions and lets a
/// collaborator sign-out drop every session of that user without a scan.
#[derive(Clone)]
pub struct RedisSessionStore {
    pool: Arc<Pool>,
}

impl RedisSessionStore {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    fn session_key(session_id: Uuid) -> String {
        format!("admin:session:{session_id}")
    }

    fn user_key(user_id: Uuid) -> String {
        format!("admin:session:user:{user_id}")
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, SessionStoreError> {
        self.pool
            .get()
            .await
            .map_err(|e| SessionStoreError::Backend(format!("Pool error: {}", e)))
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    /// ```text
    /// SET    admin:session:{id} <json> EX <ttl>
    /// SADD   admin:session:user:{user_id} {id}
    /// EXPIRE admin:session:user:{user_id} <ttl>
    /// ```
    /// in one `MULTI/EXEC`.
    async fn save(&self, record: &SessionRecord) -> Result<(), SessionStoreError> {
        let ttl = (record.expires_at - Utc::now()).num_seconds();
        if ttl <= 0 {
            return Err(SessionStoreError::Backend(
                "refusing to store an already expired session".to_string(),
            ));
        }

        let payload = serde_json::to_string(record)
            .map_err(|e| SessionStoreError::Corrupt(e.to_string()))?;
        let session_key = Self::session_key(record.session_id);

        let mut pipe = deadpool_redis::redis::pipe();
        pipe.atomic()
            .cmd("SET")
            .arg(&session_key)
            .arg(payload)
            .arg("EX")
            .arg(ttl)
            .ignore();

        if let Some(user_id) = record.user_id() {
            let user_key = Self::user_key(user_id);
            pipe.cmd("SADD")
                .arg(&user_key)
                .arg(record.session_id.to_string())
                .ignore()
                .cmd("EXPIRE")
                .arg(&user_key)
                .arg(ttl)
                .ignore();
        }

        let mut conn = self.get_conn().await?;
        pipe.query_async::<()>(&mut *conn)
            .await
            .map_err(|e| SessionStoreError::Backend(e.to_string()))
    }

    async fn find(&self, session_id: Uuid) -> Result<Option<SessionRecord>, SessionStoreError> {
        let mut conn = self.get_conn().await?;

        let payload: Option<String> = conn
            .get(Self::session_key(session_id))
            .await
            .map_err(|e| SessionStoreError::Backend(e.to_string()))?;

        payload
            .map(|p| serde_json::from_str(&p).map_err(|e| SessionStoreError::Corrupt(e.to_string())))
            .transpose()
    }

    async fn remove(&self, session_id: Uuid) -> Result<(), SessionStoreError> {
        let record = match self.find(session_id).await {
            Ok(record) => record,
            // Still delete the key when its payload is unreadable.
            Err(SessionStoreError::Corrupt(_)) => None,
            Err(e) => return Err(e),
        };

        let mut pipe = deadpool_redis::redis::pipe();
        pipe.atomic().del(Self::session_key(session_id)).ignore();
        if let Some(user_id) = record.and_then(|r| r.user_id()) {
            pipe.srem(Self::user_key(user_id), session_id.to_string())
                .ignore();
        }

        let mut conn = self.get_conn().await?;
        pipe.query_async::<()>(&mut *conn)
            .await
            .map_err(|e| SessionStoreError::Backend(e.to_string()))
    }

    async fn remove_for_user(&self, user_id: Uuid) -> Result<u64, SessionStoreError> {
        let user_key = Self::user_key(user_id);
        let mut conn = self.get_conn().await?;

        let sessions: Vec<String> = conn
            .smembers(&user_key)
            .await
            .map_err(|e| SessionStoreError::Backend(e.to_string()))?;

        let mut pipe = deadpool_redis::redis::pipe();
        pipe.atomic();
        for id in &sessions {
            pipe.del(format!("admin:session:{id}")).ignore();
        }
        pipe.del(&user_key).ignore();

        pipe.query_async::<()>(&mut *conn)
            .await
            .map_err(|e| SessionStoreError::Backend(e.to_string()))?;

        Ok(sessions.len() as u64)
    }

    async fn ping(&self) -> Result<(), SessionStoreError> {
        let mut conn = self.get_conn().await?;
        deadpool_redis::redis::cmd("PING")
            .query_async::<String>(&mut *conn)
            .await
            .map(|_| ())
            .map_err(|e| SessionStoreError::Backend(e.to_string()))
    }
}
