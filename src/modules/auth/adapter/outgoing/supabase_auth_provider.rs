use async_trait::async_trait;
use chrono::{Duration, Utc};
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::AuthEvent;
use crate::modules::auth::application::ports::outgoing::{
    AuthProvider, AuthProviderError, DelegatedSession,
};
use crate::shared::supabase::{AuthSession, SupabaseClient, SupabaseError};

const EVENT_CAPACITY: usize = 32;

/// Password sign-in against the collaborator's auth service. Every
/// successful sign-in and sign-out is broadcast to subscribers.
#[derive(Clone)]
pub struct SupabaseAuthProvider {
    client: SupabaseClient,
    events: broadcast::Sender<AuthEvent>,
}

impl SupabaseAuthProvider {
    pub fn new(client: SupabaseClient) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self { client, events }
    }

    fn emit(&self, event: AuthEvent) {
        // No subscribers is fine.
        let _ = self.events.send(event);
    }
}

fn map_error(e: SupabaseError) -> AuthProviderError {
    match e {
        SupabaseError::Api { status, message, .. } if (400..500).contains(&status) => {
            AuthProviderError::Rejected(message)
        }
        other => AuthProviderError::Unavailable(other.to_string()),
    }
}

fn to_delegated(session: AuthSession) -> DelegatedSession {
    let token_expires_at =
        (session.expires_in > 0).then(|| Utc::now() + Duration::seconds(session.expires_in));
    DelegatedSession {
        user_id: session.user.id,
        email: session.user.email,
        access_token: session.access_token,
        refresh_token: session.refresh_token,
        token_expires_at,
    }
}

#[async_trait]
impl AuthProvider for SupabaseAuthProvider {
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<DelegatedSession, AuthProviderError> {
        let session = self
            .client
            .sign_in_with_password(email, password)
            .await
            .map_err(map_error)?;

        self.emit(AuthEvent::SignedIn {
            user_id: session.user.id,
        });

        Ok(to_delegated(session))
    }

    async fn refresh_session(
        &self,
        refresh_token: &str,
    ) -> Result<Option<DelegatedSession>, AuthProviderError> {
        self.client
            .refresh_session(refresh_token)
            .await
            .map(|session| session.map(to_delegated))
            .map_err(map_error)
    }

    async fn sign_out(&self, user_id: Uuid, access_token: &str) -> Result<(), AuthProviderError> {
        let result = self.client.sign_out(access_token).await.map_err(map_error);
        self.emit(AuthEvent::SignedOut { user_id });
        result
    }

    async fn get_user(&self, access_token: &str) -> Result<Option<Uuid>, AuthProviderError> {
        self.client
            .get_user(access_token)
            .await
            .map(|user| user.map(|u| u.id))
            .map_err(map_error)
    }

    fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.events.subscribe()
    }
}
