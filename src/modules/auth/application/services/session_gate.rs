use chrono::Utc;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::{broadcast::error::RecvError, Mutex, RwLock};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{
    AuthEvent, SessionKind, SessionRecord, SessionState,
};
use crate::modules::auth::application::ports::outgoing::{AuthProvider, SessionStore};
use crate::shared::subscription::Subscription;

/// Decides whether a persisted session still grants admin access.
///
/// A caller is authenticated iff its session record exists and either it is
/// an override session or the collaborator still recognises the delegated
/// session. Users seen signing in are remembered in memory so a live
/// delegated session does not cost a collaborator round trip per request.
/// That shortcut only holds while the collaborator token is unexpired; a
/// lapsed token is refreshed first, warm process or not.
pub struct AdminSessionGate {
    sessions: Arc<dyn SessionStore>,
    provider: Arc<dyn AuthProvider>,
    live_users: Arc<RwLock<HashSet<Uuid>>>,
    // Refresh tokens are single use.
    refreshing: Mutex<()>,
}

impl AdminSessionGate {
    pub fn new(sessions: Arc<dyn SessionStore>, provider: Arc<dyn AuthProvider>) -> Self {
        Self {
            sessions,
            provider,
            live_users: Arc::new(RwLock::new(HashSet::new())),
            refreshing: Mutex::new(()),
        }
    }

    pub async fn resolve(&self, session_id: Uuid) -> SessionState {
        let record = match self.sessions.find(session_id).await {
            Ok(Some(record)) => record,
            Ok(None) => return SessionState::Unauthenticated,
            Err(e) => {
                warn!(%session_id, error = %e, "Session lookup failed");
                return SessionState::Unauthenticated;
            }
        };

        if record.is_expired_at(Utc::now()) {
            self.discard(session_id).await;
            return SessionState::Unauthenticated;
        }

        if record.needs_token_refresh_at(Utc::now()) {
            return self.refresh(session_id).await;
        }

        let (user_id, access_token) = match &record.kind {
            SessionKind::LocalOverride => return record.to_state(),
            SessionKind::Delegated {
                user_id,
                access_token,
                ..
            } => (*user_id, access_token.as_str()),
        };

        if self.is_live(user_id).await {
            return record.to_state();
        }

        match self.provider.get_user(access_token).await {
            Ok(Some(_)) => {
                self.mark_live(user_id).await;
                record.to_state()
            }
            Ok(None) => {
                info!(%session_id, %user_id, "Delegated session no longer recognised; signing out");
                self.discard(session_id).await;
                SessionState::Unauthenticated
            }
            Err(e) => {
                warn!(%session_id, error = %e, "Could not confirm delegated session");
                SessionState::Unauthenticated
            }
        }
    }

    pub async fn mark_live(&self, user_id: Uuid) {
        self.live_users.write().await.insert(user_id);
    }

    pub async fn forget(&self, user_id: Uuid) {
        self.live_users.write().await.remove(&user_id);
    }

    pub async fn is_live(&self, user_id: Uuid) -> bool {
        self.live_users.read().await.contains(&user_id)
    }

    /// Follows collaborator auth events until the returned guard drops.
    pub fn listen(&self) -> Subscription {
        let mut events = self.provider.subscribe();
        let sessions = Arc::clone(&self.sessions);
        let live_users = Arc::clone(&self.live_users);

        let handle = tokio::spawn(async move {
            loop {
                match events.recv().await {
                    Ok(AuthEvent::SignedIn { user_id }) => {
                        debug!(%user_id, "Auth event: signed in");
                        live_users.write().await.insert(user_id);
                    }
                    Ok(AuthEvent::SignedOut { user_id }) => {
                        debug!(%user_id, "Auth event: signed out");
                        live_users.write().await.remove(&user_id);
                        if let Err(e) = sessions.remove_for_user(user_id).await {
                            warn!(%user_id, error = %e, "Failed to clear sessions after sign-out");
                        }
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        warn!(skipped, "Auth listener lagged behind");
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        });

        Subscription::new("auth-listener", handle)
    }

    /// Swaps a lapsed collaborator token for a fresh one and persists it.
    async fn refresh(&self, session_id: Uuid) -> SessionState {
        let _guard = self.refreshing.lock().await;

        // Another request may have refreshed while we waited.
        let record = match self.sessions.find(session_id).await {
            Ok(Some(record)) => record,
            Ok(None) => return SessionState::Unauthenticated,
            Err(e) => {
                warn!(%session_id, error = %e, "Session lookup failed");
                return SessionState::Unauthenticated;
            }
        };
        if !record.needs_token_refresh_at(Utc::now()) {
            return record.to_state();
        }

        let SessionKind::Delegated {
            user_id,
            email,
            refresh_token,
            ..
        } = &record.kind
        else {
            return record.to_state();
        };
        let user_id = *user_id;

        let Some(refresh_token) = refresh_token.as_deref() else {
            info!(%session_id, %user_id, "Collaborator token lapsed without a refresh token; signing out");
            self.forget(user_id).await;
            self.discard(session_id).await;
            return SessionState::Unauthenticated;
        };

        match self.provider.refresh_session(refresh_token).await {
            Ok(Some(fresh)) => {
                let renewed = SessionRecord {
                    kind: SessionKind::Delegated {
                        user_id,
                        email: fresh.email.or_else(|| email.clone()),
                        access_token: fresh.access_token,
                        refresh_token: fresh.refresh_token,
                        token_expires_at: fresh.token_expires_at,
                    },
                    ..record.clone()
                };
                if let Err(e) = self.sessions.save(&renewed).await {
                    warn!(%session_id, error = %e, "Could not persist refreshed session");
                    return SessionState::Unauthenticated;
                }
                debug!(%session_id, %user_id, "Collaborator token refreshed");
                self.mark_live(user_id).await;
                renewed.to_state()
            }
            Ok(None) => {
                info!(%session_id, %user_id, "Collaborator refused the refresh token; signing out");
                self.forget(user_id).await;
                self.discard(session_id).await;
                SessionState::Unauthenticated
            }
            Err(e) => {
                warn!(%session_id, error = %e, "Could not refresh delegated session");
                SessionState::Unauthenticated
            }
        }
    }

    async fn discard(&self, session_id: Uuid) {
        if let Err(e) = self.sessions.remove(session_id).await {
            warn!(%session_id, error = %e, "Failed to remove stale session");
        }
    }
}
