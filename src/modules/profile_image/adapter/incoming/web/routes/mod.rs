mod delete_profile_image;
mod get_active_profile_image;
mod list_profile_images;
mod set_active_profile_image;
mod upload_profile_image;

pub use delete_profile_image::{__path_delete_profile_image_handler, delete_profile_image_handler};
pub use get_active_profile_image::{__path_get_active_profile_image_handler, get_active_profile_image_handler};
pub use list_profile_images::{__path_list_profile_images_handler, list_profile_images_handler};
pub use set_active_profile_image::{__path_set_active_profile_image_handler, set_active_profile_image_handler};
pub use upload_profile_image::{__path_upload_profile_image_handler, upload_profile_image_handler, UploadImageQuery};
