mod get_personal_info_service;
mod upsert_personal_info_service;

pub use get_personal_info_service::GetPersonalInfoService;
pub use upsert_personal_info_service::UpsertPersonalInfoService;
