pub mod domain;
pub mod message_use_cases;
pub mod ports;
pub mod service;

pub use message_use_cases::MessageUseCases;
