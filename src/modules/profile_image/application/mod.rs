pub mod domain;
pub mod ports;
pub mod profile_image_use_cases;
pub mod service;

pub use profile_image_use_cases::ProfileImageUseCases;
