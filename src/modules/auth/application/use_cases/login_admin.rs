use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{info, warn};

use crate::modules::auth::application::domain::entities::{
    AdminCredentials, SessionKind, SessionRecord, SessionState,
};
use crate::modules::auth::application::ports::outgoing::{
    AuthProvider, CredentialCheck, SessionStore, TokenProvider,
};
use crate::modules::auth::application::services::AdminSessionGate;

// ====================== Login Error =============================
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoginError {
    /// The only message a failed login ever shows.
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Session could not be created: {0}")]
    SessionFailed(String),
}

// ============================ Login Response =================================
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub state: SessionState,
}

// ============================ Login Use Case =============================
#[async_trait]
pub trait LoginAdminUseCase: Send + Sync {
    async fn execute(&self, credentials: AdminCredentials) -> Result<LoginOutcome, LoginError>;
}

pub struct LoginAdminService {
    credential_check: Arc<dyn CredentialCheck>,
    provider: Arc<dyn AuthProvider>,
    sessions: Arc<dyn SessionStore>,
    tokens: Arc<dyn TokenProvider>,
    gate: Arc<AdminSessionGate>,
    session_ttl: chrono::Duration,
}

impl LoginAdminService {
    pub fn new(
        credential_check: Arc<dyn CredentialCheck>,
        provider: Arc<dyn AuthProvider>,
        sessions: Arc<dyn SessionStore>,
        tokens: Arc<dyn TokenProvider>,
        gate: Arc<AdminSessionGate>,
        session_ttl: chrono::Duration,
    ) -> Self {
        Self {
            credential_check,
            provider,
            sessions,
            tokens,
            gate,
            session_ttl,
        }
    }

    async fn establish(&self, kind: SessionKind) -> Result<LoginOutcome, LoginError> {
        let record = SessionRecord::new(kind, self.session_ttl);

        self.sessions
            .save(&record)
            .await
            .map_err(|e| LoginError::SessionFailed(e.to_string()))?;

        let token = self
            .tokens
            .issue(record.session_id, record.expires_at)
            .map_err(|e| LoginError::SessionFailed(e.to_string()))?;

        info!(session_id = %record.session_id, "Admin session established");

        Ok(LoginOutcome {
            token,
            expires_at: record.expires_at,
            state: record.to_state(),
        })
    }
}

#[async_trait]
impl LoginAdminUseCase for LoginAdminService {
    async fn execute(&self, credentials: AdminCredentials) -> Result<LoginOutcome, LoginError> {
        // 1. local override
        if self
            .credential_check
            .matches(credentials.email(), credentials.password())
        {
            info!("Admin login through override credential");
            return self.establish(SessionKind::LocalOverride).await;
        }

        // 2. delegate
        match self
            .provider
            .sign_in_with_password(credentials.email(), credentials.password())
            .await
        {
            Ok(session) => {
                self.gate.mark_live(session.user_id).await;
                info!(user_id = %session.user_id, "Admin login through collaborator");
                self.establish(SessionKind::Delegated {
                    user_id: session.user_id,
                    email: session.email,
                    access_token: session.access_token,
                    refresh_token: session.refresh_token,
                    token_expires_at: session.token_expires_at,
                })
                .await
            }
            Err(e) => {
                warn!(error = %e, "Collaborator sign-in failed");

                // 3. one more override check before giving up
                if self
                    .credential_check
                    .matches(credentials.email(), credentials.password())
                {
                    return self.establish(SessionKind::LocalOverride).await;
                }

                Err(LoginError::InvalidCredentials)
            }
        }
    }
}
