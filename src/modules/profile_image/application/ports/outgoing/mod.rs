pub mod profile_image_repository;

pub use profile_image_repository::ProfileImageRepository;
