use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::fmt;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::{SessionClaims, TokenError, TokenProvider};

use super::jwt_config::JwtConfig;

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("issuer", &self.config.issuer)
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }
}

impl TokenProvider for JwtTokenService {
    fn issue(&self, session_id: Uuid, expires_at: DateTime<Utc>) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = SessionClaims {
            sub: session_id,
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            iss: self.config.issuer.clone(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }

    fn verify(&self, token: &str) -> Result<SessionClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;
        validation.set_issuer(&[self.config.issuer.as_str()]);

        let decoded =
            decode::<SessionClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Session token expired");
                        TokenError::TokenExpired
                    }
                    ErrorKind::ImmatureSignature => {
                        tracing::warn!("Session token not yet valid");
                        TokenError::TokenNotYetValid
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::error!("Security alert: invalid session token signature");
                        TokenError::InvalidSignature
                    }
                    _ => {
                        tracing::warn!(error = %e, "Malformed session token");
                        TokenError::MalformedToken
                    }
                }
            })?;

        Ok(decoded.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn service(issuer: &str) -> JwtTokenService {
        JwtTokenService::new(JwtConfig {
            secret_key: "test_secret_key_for_testing_purposes_only".to_string(),
            issuer: issuer.to_string(),
            session_ttl_secs: 3600,
        })
    }

    #[test]
    fn issued_token_verifies_to_session_id() {
        let svc = service("portfolio-admin");
        let session_id = Uuid::new_v4();

        let token = svc.issue(session_id, Utc::now() + Duration::hours(1)).unwrap();
        let claims = svc.verify(&token).unwrap();

        assert_eq!(claims.sub, session_id);
        assert_eq!(claims.iss, "portfolio-admin");
    }

    #[test]
    fn expired_token_is_rejected() {
        let svc = service("portfolio-admin");

        let token = svc
            .issue(Uuid::new_v4(), Utc::now() - Duration::hours(1))
            .unwrap();

        assert_eq!(svc.verify(&token).unwrap_err(), TokenError::TokenExpired);
    }

    #[test]
    fn wrong_issuer_is_rejected() {
        let token = service("someone-else")
            .issue(Uuid::new_v4(), Utc::now() + Duration::hours(1))
            .unwrap();

        assert_eq!(
            service("portfolio-admin").verify(&token).unwrap_err(),
            TokenError::MalformedToken
        );
    }

    #[test]
    fn garbage_is_malformed() {
        assert_eq!(
            service("portfolio-admin").verify("not-a-jwt").unwrap_err(),
            TokenError::MalformedToken
        );
    }
}
