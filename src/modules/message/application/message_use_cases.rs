use std::sync::Arc;

use crate::modules::message::application::ports::incoming::use_cases::{
    MessageInbox, ProbeBackendUseCase, SubmitContactUseCase,
};

#[derive(Clone)]
pub struct MessageUseCases {
    pub submit: Arc<dyn SubmitContactUseCase + Send + Sync>,
    pub probe: Arc<dyn ProbeBackendUseCase + Send + Sync>,
    pub inbox: Arc<dyn MessageInbox + Send + Sync>,
}
