use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::modules::message::application::domain::entities::{ContactForm, NewContactMessage};
use crate::modules::message::application::ports::incoming::use_cases::{
    SubmitContactError, SubmitContactUseCase,
};
use crate::modules::message::application::ports::outgoing::ContactMessageRepository;

/// Public contact form. Tries the table first and the stored procedure
/// second; nothing else is retried.
pub struct SubmitContactService<R>
where
    R: ContactMessageRepository,
{
    repository: R,
}

impl<R> SubmitContactService<R>
where
    R: ContactMessageRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SubmitContactUseCase for SubmitContactService<R>
where
    R: ContactMessageRepository + Send + Sync,
{
    async fn execute(&self, form: ContactForm) -> Result<NewContactMessage, SubmitContactError> {
        let message = NewContactMessage::try_from(form)?;

        let first = match self.repository.insert(&message).await {
            Ok(()) => {
                info!(subject = %message.subject, "Contact message stored");
                return Ok(message);
            }
            Err(e) => e,
        };

        warn!(error = %first, "Direct insert failed, trying insert_contact_message");

        match self.repository.insert_via_rpc(&message).await {
            Ok(()) => {
                info!(subject = %message.subject, "Contact message stored via RPC");
                Ok(message)
            }
            Err(second) => {
                error!(insert = %first, rpc = %second, "Contact message could not be stored");
                Err(SubmitContactError::Database(first.to_string()))
            }
        }
    }
}
