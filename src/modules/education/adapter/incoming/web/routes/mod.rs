mod create_education;
mod delete_education;
mod list_education;
mod update_education;

pub use create_education::{__path_create_education_handler, create_education_handler};
pub use delete_education::{__path_delete_education_handler, delete_education_handler};
pub use list_education::{__path_list_education_handler, list_education_handler};
pub use update_education::{__path_update_education_handler, update_education_handler};
