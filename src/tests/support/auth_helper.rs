use crate::tests::support::app_state_builder::TestAppStateBuilder;
use crate::tests::support::stubs::StubCheckSessionUseCase;

/// Any bearer token passes once the session check is stubbed.
pub const ADMIN_AUTH: (&str, &str) = ("Authorization", "Bearer test-session");

/// A builder whose session check accepts every caller as the override admin.
pub fn admin_state() -> TestAppStateBuilder {
    TestAppStateBuilder::default().with_check_session(StubCheckSessionUseCase::local_override())
}
