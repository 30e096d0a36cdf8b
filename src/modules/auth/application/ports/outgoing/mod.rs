pub mod auth_provider;
pub mod credential_check;
pub mod session_store;
pub mod token_provider;

pub use auth_provider::{AuthProvider, AuthProviderError, DelegatedSession};
pub use credential_check::CredentialCheck;
pub use session_store::{SessionStore, SessionStoreError};
pub use token_provider::{SessionClaims, TokenError, TokenProvider};
