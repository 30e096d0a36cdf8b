pub mod app_state_builder;
pub mod auth_helper;
pub mod fake_auth_provider;
pub mod fake_message_repository;
pub mod fixtures;
pub mod stubs;
