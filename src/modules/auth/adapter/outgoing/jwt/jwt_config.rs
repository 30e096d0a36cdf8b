use std::env;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub session_ttl_secs: i64,
}

impl JwtConfig {
    fn parse_ttl(key: &str, default: &str) -> i64 {
        env::var(key)
            .unwrap_or_else(|_| default.to_string())
            .parse::<i64>()
            .unwrap_or_else(|_| panic!("Invalid {} value", key))
    }

    /// Load session token configuration from environment variables
    pub fn from_env() -> Self {
        let secret_key = env::var("SESSION_SECRET").expect("SESSION_SECRET must be set");

        // HS256 needs at least 32 bytes of key material
        if secret_key.len() < 32 {
            panic!("SESSION_SECRET must be at least 32 characters long for HS256 algorithm");
        }

        let session_ttl_secs = Self::parse_ttl("SESSION_TTL_SECS", "28800");
        if session_ttl_secs <= 0 || session_ttl_secs > 7 * 86400 {
            panic!("SESSION_TTL_SECS must be between 1 and 604800 seconds (7 days)");
        }

        let issuer = env::var("SESSION_ISSUER").unwrap_or_else(|_| "portfolio-admin".to_string());

        Self {
            secret_key,
            issuer,
            session_ttl_secs,
        }
    }

    pub fn session_ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.session_ttl_secs)
    }
}
