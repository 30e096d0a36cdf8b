mod get_personal_info;
mod upsert_personal_info;

pub use get_personal_info::{__path_get_personal_info_handler, get_personal_info_handler};
pub use upsert_personal_info::{__path_upsert_personal_info_handler, upsert_personal_info_handler};
