pub mod cv_file_repository;

pub use cv_file_repository::CvFileRepository;
