mod messages_panel;
mod probe_backend_service;
mod submit_contact_service;

pub use messages_panel::{MessagesPanel, MountedPanel, DEMO_WARNING};
pub use probe_backend_service::ProbeBackendService;
pub use submit_contact_service::SubmitContactService;
