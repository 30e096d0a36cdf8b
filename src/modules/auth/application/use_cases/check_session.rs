use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use crate::modules::auth::application::domain::entities::SessionState;
use crate::modules::auth::application::ports::outgoing::TokenProvider;
use crate::modules::auth::application::services::AdminSessionGate;

/// Turns a bearer token into a session state. Never fails: anything wrong
/// with the token or the record is just `Unauthenticated`.
#[async_trait]
pub trait CheckSessionUseCase: Send + Sync {
    async fn execute(&self, token: &str) -> SessionState;
}

pub struct CheckSessionService {
    tokens: Arc<dyn TokenProvider>,
    gate: Arc<AdminSessionGate>,
}

impl CheckSessionService {
    pub fn new(tokens: Arc<dyn TokenProvider>, gate: Arc<AdminSessionGate>) -> Self {
        Self { tokens, gate }
    }
}

#[async_trait]
impl CheckSessionUseCase for CheckSessionService {
    async fn execute(&self, token: &str) -> SessionState {
        match self.tokens.verify(token) {
            Ok(claims) => self.gate.resolve(claims.sub).await,
            Err(e) => {
                debug!(error = %e, "Rejected session token");
                SessionState::Unauthenticated
            }
        }
    }
}
