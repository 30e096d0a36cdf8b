mod create_project;
mod delete_project;
mod list_projects;
mod update_project;

pub use create_project::{__path_create_project_handler, create_project_handler};
pub use delete_project::{__path_delete_project_handler, delete_project_handler};
pub use list_projects::{__path_list_projects_handler, list_projects_handler};
pub use update_project::{__path_update_project_handler, update_project_handler};
