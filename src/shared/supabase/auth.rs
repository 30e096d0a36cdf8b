use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::client::{decode, encode, SupabaseClient};
use super::error::SupabaseError;
use super::transport::HttpMethod;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: i64,
    pub user: AuthUser,
}

#[derive(Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RefreshGrant<'a> {
    refresh_token: &'a str,
}

impl SupabaseClient {
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, SupabaseError> {
        let request = self
            .auth_request(HttpMethod::Post, "/auth/v1/token", self.anon_key())
            .query_pair("grant_type", "password")
            .header("Content-Type", "application/json")
            .body(encode(&PasswordGrant { email, password })?);

        let response = self.execute(request).await?;
        decode(&response)
    }

    /// Exchanges a refresh token for a new session. `None` when the refresh
    /// token was revoked or already used.
    pub async fn refresh_session(
        &self,
        refresh_token: &str,
    ) -> Result<Option<AuthSession>, SupabaseError> {
        let request = self
            .auth_request(HttpMethod::Post, "/auth/v1/token", self.anon_key())
            .query_pair("grant_type", "refresh_token")
            .header("Content-Type", "application/json")
            .body(encode(&RefreshGrant { refresh_token })?);

        match self.execute(request).await {
            Ok(response) => decode(&response).map(Some),
            Err(SupabaseError::Api { status: 400 | 401 | 403 | 404, .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn sign_out(&self, access_token: &str) -> Result<(), SupabaseError> {
        let request = self.auth_request(HttpMethod::Post, "/auth/v1/logout", access_token);
        self.execute(request).await.map(|_| ())
    }

    /// Looks up the user behind a token. `None` when the token is no longer
    /// accepted.
    pub async fn get_user(&self, access_token: &str) -> Result<Option<AuthUser>, SupabaseError> {
        let request = self.auth_request(HttpMethod::Get, "/auth/v1/user", access_token);
        match self.execute(request).await {
            Ok(response) => decode(&response).map(Some),
            Err(SupabaseError::Api { status: 401 | 403 | 404, .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
