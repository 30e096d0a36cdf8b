use async_trait::async_trait;
use thiserror::Error;

use crate::modules::message::application::domain::entities::{
    ContactForm, ContactValidationError, NewContactMessage,
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitContactError {
    #[error(transparent)]
    Validation(#[from] ContactValidationError),

    /// Both insert paths failed; carries the first failure.
    #[error("Database error: {0}")]
    Database(String),
}

#[async_trait]
pub trait SubmitContactUseCase: Send + Sync {
    async fn execute(&self, form: ContactForm) -> Result<NewContactMessage, SubmitContactError>;
}
