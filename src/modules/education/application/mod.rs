pub mod domain;
pub mod education_use_cases;
pub mod ports;
pub mod service;

pub use education_use_cases::EducationUseCases;
