use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct MessagesConfig {
    pub poll_interval: Duration,
    /// Show a placeholder inbox instead of an error when the backend is
    /// unreachable.
    pub demo_fallback: bool,
}

impl MessagesConfig {
    pub fn from_env() -> Self {
        let poll_secs = env::var("MESSAGES_POLL_INTERVAL_SECS")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<u64>()
            .unwrap_or_else(|_| panic!("Invalid MESSAGES_POLL_INTERVAL_SECS value"));

        if poll_secs == 0 {
            panic!("MESSAGES_POLL_INTERVAL_SECS must be at least 1");
        }

        let demo_fallback = parse_flag(env::var("MESSAGES_DEMO_FALLBACK").ok().as_deref());

        Self {
            poll_interval: Duration::from_secs(poll_secs),
            demo_fallback,
        }
    }
}

/// Unset means enabled.
fn parse_flag(raw: Option<&str>) -> bool {
    match raw.map(|v| v.trim().to_ascii_lowercase()) {
        None => true,
        Some(v) => !matches!(v.as_str(), "false" | "0" | "no" | "off"),
    }
}
