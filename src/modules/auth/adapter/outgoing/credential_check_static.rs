use sha2::{Digest, Sha256};
use std::env;
use std::sync::Arc;

use crate::modules::auth::application::ports::outgoing::CredentialCheck;

pub fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Override credential loaded at startup. Only the password's SHA-256 digest
/// is held.
#[derive(Clone)]
pub struct StaticCredentialCheck {
    email: String,
    password_sha256: String,
}

impl StaticCredentialCheck {
    pub fn new(email: &str, password_sha256: &str) -> Self {
        Self {
            email: email.trim().to_string(),
            password_sha256: password_sha256.trim().to_ascii_lowercase(),
        }
    }

    /// `ADMIN_OVERRIDE_EMAIL` + `ADMIN_OVERRIDE_PASSWORD_SHA256`. Either one
    /// missing disables the override.
    pub fn from_env() -> Arc<dyn CredentialCheck> {
        let email = env::var("ADMIN_OVERRIDE_EMAIL").ok().filter(|v| !v.trim().is_empty());
        let digest = env::var("ADMIN_OVERRIDE_PASSWORD_SHA256")
            .ok()
            .filter(|v| !v.trim().is_empty());

        match (email, digest) {
            (Some(email), Some(digest)) => {
                if digest.trim().len() != 64 || !digest.trim().chars().all(|c| c.is_ascii_hexdigit()) {
                    panic!("ADMIN_OVERRIDE_PASSWORD_SHA256 must be a 64 character hex digest");
                }
                tracing::info!("Admin override credential enabled");
                Arc::new(Self::new(&email, &digest))
            }
            _ => {
                tracing::info!("Admin override credential not configured");
                Arc::new(DisabledCredentialCheck)
            }
        }
    }
}

impl CredentialCheck for StaticCredentialCheck {
    fn matches(&self, email: &str, password: &str) -> bool {
        email == self.email && sha256_hex(password) == self.password_sha256
    }
}

/// Used when no override is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledCredentialCheck;

impl CredentialCheck for DisabledCredentialCheck {
    fn matches(&self, _email: &str, _password: &str) -> bool {
        false
    }

    fn is_enabled(&self) -> bool {
        false
    }
}
