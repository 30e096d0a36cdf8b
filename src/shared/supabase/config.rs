use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    pub url: String,
    pub anon_key: String,
    /// When set, table and storage calls run with this key instead of the
    /// anon key. Auth calls always use the anon key.
    pub service_role_key: Option<String>,
    pub request_timeout: Duration,
}

impl SupabaseConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let url = env::var("SUPABASE_URL").expect("SUPABASE_URL must be set");
        let anon_key = env::var("SUPABASE_ANON_KEY").expect("SUPABASE_ANON_KEY must be set");

        if url.trim().is_empty() || anon_key.trim().is_empty() {
            panic!("SUPABASE_URL and SUPABASE_ANON_KEY must not be empty");
        }

        let service_role_key = env::var("SUPABASE_SERVICE_ROLE_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());

        let timeout_secs = env::var("SUPABASE_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u64>()
            .unwrap_or_else(|_| panic!("Invalid SUPABASE_TIMEOUT_SECS value"));

        Self {
            url: url.trim_end_matches('/').to_string(),
            anon_key,
            service_role_key,
            request_timeout: Duration::from_secs(timeout_secs),
        }
    }

    pub fn data_key(&self) -> &str {
        self.service_role_key.as_deref().unwrap_or(&self.anon_key)
    }
}
