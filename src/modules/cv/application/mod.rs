pub mod cv_use_cases;
pub mod domain;
pub mod ports;
pub mod service;

pub use cv_use_cases::CvUseCases;
