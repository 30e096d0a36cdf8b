mod message_inbox;
mod probe_backend;
mod submit_contact;

pub use message_inbox::{InboxError, InboxSnapshot, MessageInbox};
pub use probe_backend::{ProbeBackendError, ProbeBackendUseCase};
pub use submit_contact::{SubmitContactError, SubmitContactUseCase};
