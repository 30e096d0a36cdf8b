use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

// ========================= Session State =========================

/// What the admin gate currently believes about a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    /// Signed in through the configured override credential.
    LocalOverride { session_id: Uuid },
    /// Signed in through the collaborator's password sign-in.
    DelegatedSession {
        session_id: Uuid,
        user_id: Uuid,
        email: Option<String>,
    },
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        !matches!(self, SessionState::Unauthenticated)
    }

    pub fn session_id(&self) -> Option<Uuid> {
        match self {
            SessionState::Unauthenticated => None,
            SessionState::LocalOverride { session_id }
            | SessionState::DelegatedSession { session_id, .. } => Some(*session_id),
        }
    }

    pub fn mode(&self) -> &'static str {
        match self {
            SessionState::Unauthenticated => "unauthenticated",
            SessionState::LocalOverride { .. } => "local_override",
            SessionState::DelegatedSession { .. } => "delegated",
        }
    }
}

// ========================= Session Record =========================

/// The persisted "admin authenticated" flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub session_id: Uuid,
    pub kind: SessionKind,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionKind {
    LocalOverride,
    Delegated {
        user_id: Uuid,
        email: Option<String>,
        access_token: String,
        #[serde(default)]
        refresh_token: Option<String>,
        /// When the collaborator stops accepting `access_token`.
        #[serde(default)]
        token_expires_at: Option<DateTime<Utc>>,
    },
}

impl SessionRecord {
    pub fn new(kind: SessionKind, ttl: chrono::Duration) -> Self {
        let now = Utc::now();
        Self {
            session_id: Uuid::new_v4(),
            kind,
            created_at: now,
            expires_at: now + ttl,
        }
    }

    pub fn user_id(&self) -> Option<Uuid> {
        match &self.kind {
            SessionKind::LocalOverride => None,
            SessionKind::Delegated { user_id, .. } => Some(*user_id),
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    /// True once a delegated session's collaborator token has lapsed and
    /// must be refreshed before the session counts again.
    pub fn needs_token_refresh_at(&self, now: DateTime<Utc>) -> bool {
        match &self.kind {
            SessionKind::Delegated {
                token_expires_at: Some(at),
                ..
            } => *at <= now,
            _ => false,
        }
    }

    pub fn to_state(&self) -> SessionState {
        match &self.kind {
            SessionKind::LocalOverride => SessionState::LocalOverride {
                session_id: self.session_id,
            },
            SessionKind::Delegated { user_id, email, .. } => SessionState::DelegatedSession {
                session_id: self.session_id,
                user_id: *user_id,
                email: email.clone(),
            },
        }
    }
}

// ========================= Auth Events =========================

/// Collaborator-side auth changes the gate listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthEvent {
    SignedIn { user_id: Uuid },
    SignedOut { user_id: Uuid },
}

// ========================= Admin Credentials =========================

/// Login form input. Email is trimmed; the password is kept as typed.
#[derive(Clone)]
pub struct AdminCredentials {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdminCredentialsError {
    #[error("Email cannot be empty")]
    EmptyEmail,
    #[error("Password cannot be empty")]
    EmptyPassword,
}

impl AdminCredentials {
    pub fn new(email: String, password: String) -> Result<Self, AdminCredentialsError> {
        let email = email.trim().to_string();
        if email.is_empty() {
            return Err(AdminCredentialsError::EmptyEmail);
        }
        if password.is_empty() {
            return Err(AdminCredentialsError::EmptyPassword);
        }
        Ok(Self { email, password })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl<'de> Deserialize<'de> for AdminCredentials {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct AdminCredentialsHelper {
            email: String,
            password: String,
        }

        let helper = AdminCredentialsHelper::deserialize(deserializer)?;
        AdminCredentials::new(helper.email, helper.password).map_err(serde::de::Error::custom)
    }
}
