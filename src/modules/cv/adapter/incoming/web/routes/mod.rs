mod delete_cv;
mod get_active_cv;
mod list_cv_files;
mod set_active_cv;
mod upload_cv;

pub use delete_cv::{__path_delete_cv_handler, delete_cv_handler};
pub use get_active_cv::{__path_get_active_cv_handler, get_active_cv_handler};
pub use list_cv_files::{__path_list_cv_files_handler, list_cv_files_handler};
pub use set_active_cv::{__path_set_active_cv_handler, set_active_cv_handler};
pub use upload_cv::{__path_upload_cv_handler, upload_cv_handler, UploadCvQuery};
