mod profile_image_service;

pub use profile_image_service::ProfileImageService;
