use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::AuthEvent;
use crate::modules::auth::application::ports::outgoing::{
    AuthProvider, AuthProviderError, DelegatedSession,
};

struct Inner {
    accounts: Mutex<HashMap<String, (String, Uuid)>>,
    tokens: Mutex<HashMap<String, Uuid>>,
    refresh_tokens: Mutex<HashMap<String, Uuid>>,
    unavailable: AtomicBool,
    sign_in_calls: AtomicUsize,
    sign_out_calls: AtomicUsize,
    get_user_calls: AtomicUsize,
    refresh_calls: AtomicUsize,
    events: broadcast::Sender<AuthEvent>,
}

/// In-memory stand-in for the hosted auth service.
#[derive(Clone)]
pub struct FakeAuthProvider {
    inner: Arc<Inner>,
}

impl Default for FakeAuthProvider {
    fn default() -> Self {
        let (events, _) = broadcast::channel(16);
        Self {
            inner: Arc::new(Inner {
                accounts: Mutex::new(HashMap::new()),
                tokens: Mutex::new(HashMap::new()),
                refresh_tokens: Mutex::new(HashMap::new()),
                unavailable: AtomicBool::new(false),
                sign_in_calls: AtomicUsize::new(0),
                sign_out_calls: AtomicUsize::new(0),
                get_user_calls: AtomicUsize::new(0),
                refresh_calls: AtomicUsize::new(0),
                events,
            }),
        }
    }
}

impl FakeAuthProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_account(self, email: &str, password: &str, user_id: Uuid) -> Self {
        self.inner
            .accounts
            .lock()
            .unwrap()
            .insert(email.to_string(), (password.to_string(), user_id));
        self
    }

    pub fn with_known_token(self, token: &str, user_id: Uuid) -> Self {
        self.inner
            .tokens
            .lock()
            .unwrap()
            .insert(token.to_string(), user_id);
        self
    }

    pub fn with_refresh_token(self, token: &str, user_id: Uuid) -> Self {
        self.inner
            .refresh_tokens
            .lock()
            .unwrap()
            .insert(token.to_string(), user_id);
        self
    }

    /// Every call fails as if the service were down.
    pub fn unavailable(self) -> Self {
        self.inner.unavailable.store(true, Ordering::SeqCst);
        self
    }

    pub fn sign_in_calls(&self) -> usize {
        self.inner.sign_in_calls.load(Ordering::SeqCst)
    }

    pub fn sign_out_calls(&self) -> usize {
        self.inner.sign_out_calls.load(Ordering::SeqCst)
    }

    pub fn get_user_calls(&self) -> usize {
        self.inner.get_user_calls.load(Ordering::SeqCst)
    }

    pub fn refresh_calls(&self) -> usize {
        self.inner.refresh_calls.load(Ordering::SeqCst)
    }

    pub fn emit(&self, event: AuthEvent) {
        let _ = self.inner.events.send(event);
    }

    fn check_reachable(&self) -> Result<(), AuthProviderError> {
        if self.inner.unavailable.load(Ordering::SeqCst) {
            return Err(AuthProviderError::Unavailable(
                "error sending request to auth service".into(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl AuthProvider for FakeAuthProvider {
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<DelegatedSession, AuthProviderError> {
        self.inner.sign_in_calls.fetch_add(1, Ordering::SeqCst);
        self.check_reachable()?;

        let account = self.inner.accounts.lock().unwrap().get(email).cloned();
        match account {
            Some((expected, user_id)) if expected == password => {
                let access_token = format!("at-{}", user_id);
                self.inner
                    .tokens
                    .lock()
                    .unwrap()
                    .insert(access_token.clone(), user_id);
                let refresh_token = format!("rt-{}", user_id);
                self.inner
                    .refresh_tokens
                    .lock()
                    .unwrap()
                    .insert(refresh_token.clone(), user_id);
                Ok(DelegatedSession {
                    user_id,
                    email: Some(email.to_string()),
                    access_token,
                    refresh_token: Some(refresh_token),
                    token_expires_at: Some(Utc::now() + Duration::hours(1)),
                })
            }
            _ => Err(AuthProviderError::Rejected("Invalid login credentials".into())),
        }
    }

    async fn sign_out(&self, user_id: Uuid, _access_token: &str) -> Result<(), AuthProviderError> {
        self.inner.sign_out_calls.fetch_add(1, Ordering::SeqCst);
        self.check_reachable()?;
        self.inner
            .tokens
            .lock()
            .unwrap()
            .retain(|_, owner| *owner != user_id);
        self.inner
            .refresh_tokens
            .lock()
            .unwrap()
            .retain(|_, owner| *owner != user_id);
        Ok(())
    }

    /// Refresh tokens are single use, like the real service.
    async fn refresh_session(
        &self,
        refresh_token: &str,
    ) -> Result<Option<DelegatedSession>, AuthProviderError> {
        let n = self.inner.refresh_calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.check_reachable()?;

        let Some(user_id) = self.inner.refresh_tokens.lock().unwrap().remove(refresh_token) else {
            return Ok(None);
        };
        let access_token = format!("at-{}-{}", user_id, n);
        let next_refresh = format!("rt-{}-{}", user_id, n);
        self.inner
            .tokens
            .lock()
            .unwrap()
            .insert(access_token.clone(), user_id);
        self.inner
            .refresh_tokens
            .lock()
            .unwrap()
            .insert(next_refresh.clone(), user_id);

        Ok(Some(DelegatedSession {
            user_id,
            email: None,
            access_token,
            refresh_token: Some(next_refresh),
            token_expires_at: Some(Utc::now() + Duration::hours(1)),
        }))
    }

    async fn get_user(&self, access_token: &str) -> Result<Option<Uuid>, AuthProviderError> {
        self.inner.get_user_calls.fetch_add(1, Ordering::SeqCst);
        self.check_reachable()?;
        Ok(self.inner.tokens.lock().unwrap().get(access_token).copied())
    }

    fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.inner.events.subscribe()
    }
}
