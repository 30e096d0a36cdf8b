pub mod personal_info_repository;

pub use personal_info_repository::PersonalInfoRepository;
