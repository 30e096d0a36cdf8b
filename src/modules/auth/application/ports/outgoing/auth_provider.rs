use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::AuthEvent;

/// A session the collaborator handed out after password sign-in.
#[derive(Debug, Clone, PartialEq)]
pub struct DelegatedSession {
    pub user_id: Uuid,
    pub email: Option<String>,
    pub access_token: String,
    pub refresh_token: Option<String>,
    /// `None` when the collaborator did not say.
    pub token_expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AuthProviderError {
    /// The collaborator refused the credentials or token.
    #[error("{0}")]
    Rejected(String),
    /// The collaborator could not be reached or answered unexpectedly.
    #[error("{0}")]
    Unavailable(String),
}

#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<DelegatedSession, AuthProviderError>;

    async fn sign_out(&self, user_id: Uuid, access_token: &str) -> Result<(), AuthProviderError>;

    /// Trades a refresh token for a new session. `Ok(None)` when the refresh
    /// token is no longer accepted.
    async fn refresh_session(
        &self,
        refresh_token: &str,
    ) -> Result<Option<DelegatedSession>, AuthProviderError>;

    /// `Ok(None)` when the collaborator no longer recognises the token.
    async fn get_user(&self, access_token: &str) -> Result<Option<Uuid>, AuthProviderError>;

    /// Sign-in and sign-out notifications.
    fn subscribe(&self) -> broadcast::Receiver<AuthEvent>;
}
