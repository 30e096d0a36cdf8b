/// Startup-injected strategy for the local override login.
pub trait CredentialCheck: Send + Sync {
    fn matches(&self, email: &str, password: &str) -> bool;

    fn is_enabled(&self) -> bool {
        true
    }
}
