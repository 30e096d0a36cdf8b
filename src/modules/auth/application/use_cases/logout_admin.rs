use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::SessionKind;
use crate::modules::auth::application::ports::outgoing::{AuthProvider, SessionStore};
use crate::modules::auth::application::services::AdminSessionGate;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LogoutError {
    #[error("Failed to clear session: {0}")]
    SessionStore(String),
}

#[async_trait]
pub trait LogoutAdminUseCase: Send + Sync {
    async fn execute(&self, session_id: Uuid) -> Result<(), LogoutError>;
}

pub struct LogoutAdminService {
    provider: Arc<dyn AuthProvider>,
    sessions: Arc<dyn SessionStore>,
    gate: Arc<AdminSessionGate>,
}

impl LogoutAdminService {
    pub fn new(
        provider: Arc<dyn AuthProvider>,
        sessions: Arc<dyn SessionStore>,
        gate: Arc<AdminSessionGate>,
    ) -> Self {
        Self {
            provider,
            sessions,
            gate,
        }
    }
}

#[async_trait]
impl LogoutAdminUseCase for LogoutAdminService {
    async fn execute(&self, session_id: Uuid) -> Result<(), LogoutError> {
        let record = self
            .sessions
            .find(session_id)
            .await
            .map_err(|e| LogoutError::SessionStore(e.to_string()))?;

        if let Some(SessionKind::Delegated {
            user_id,
            access_token,
            ..
        }) = record.map(|r| r.kind)
        {
            // Local state is cleared whatever the collaborator says.
            if let Err(e) = self.provider.sign_out(user_id, &access_token).await {
                warn!(%user_id, error = %e, "Collaborator sign-out failed");
            }
            self.gate.forget(user_id).await;
        }

        self.sessions
            .remove(session_id)
            .await
            .map_err(|e| LogoutError::SessionStore(e.to_string()))?;

        info!(%session_id, "Admin session cleared");
        Ok(())
    }
}
