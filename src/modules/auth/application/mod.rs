pub mod admin_auth_use_cases;
pub mod domain;
pub mod ports;
pub mod services;
pub mod use_cases;

pub use admin_auth_use_cases::AdminAuthUseCases;
