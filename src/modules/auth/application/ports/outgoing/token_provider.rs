use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,
    #[error("Token is not yet valid")]
    TokenNotYetValid,
    #[error("Invalid token signature")]
    InvalidSignature,
    #[error("Malformed token")]
    MalformedToken,
    #[error("Token encoding error: {0}")]
    EncodingError(String),
}

/// Claims of an admin session token. `sub` is the session id, not a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: Uuid,
    pub exp: i64,
    pub iat: i64,
    pub nbf: i64,
    pub iss: String,
}

pub trait TokenProvider: Send + Sync {
    fn issue(&self, session_id: Uuid, expires_at: DateTime<Utc>) -> Result<String, TokenError>;
    fn verify(&self, token: &str) -> Result<SessionClaims, TokenError>;
}
