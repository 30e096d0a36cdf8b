mod get_personal_info;
mod upsert_personal_info;

pub use get_personal_info::GetPersonalInfoUseCase;
pub use upsert_personal_info::UpsertPersonalInfoUseCase;
