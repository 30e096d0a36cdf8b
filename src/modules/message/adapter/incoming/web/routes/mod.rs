mod contact_status;
mod delete_message;
mod export_messages;
mod get_message;
mod list_messages;
mod refresh_messages;
mod submit_contact;

pub use contact_status::{__path_contact_status_handler, contact_status_handler, ContactStatusView};
pub use delete_message::{__path_delete_message_handler, delete_message_handler};
pub use export_messages::{__path_export_messages_handler, export_messages_handler};
pub use get_message::{__path_get_message_handler, get_message_handler};
pub use list_messages::{__path_list_messages_handler, list_messages_handler, InboxQuery};
pub use refresh_messages::{__path_refresh_messages_handler, refresh_messages_handler};
pub use submit_contact::{__path_submit_contact_handler, submit_contact_handler, ContactFormDto};
