use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc;

use crate::modules::message::application::domain::entities::{ContactMessage, NewContactMessage};
use crate::shared::subscription::Subscription;
use crate::shared::supabase::ChangeEvent;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContactMessageRepositoryError {
    /// Backend message, kept verbatim.
    #[error("{0}")]
    Backend(String),
}

#[async_trait]
pub trait ContactMessageRepository: Send + Sync {
    /// Direct table insert.
    async fn insert(&self, message: &NewContactMessage) -> Result<(), ContactMessageRepositoryError>;

    /// Insert through the `insert_contact_message` stored procedure.
    async fn insert_via_rpc(
        &self,
        message: &NewContactMessage,
    ) -> Result<(), ContactMessageRepositoryError>;

    async fn count(&self) -> Result<u64, ContactMessageRepositoryError>;

    /// Newest first, through the `get_contact_messages` stored procedure.
    async fn list_via_rpc(&self) -> Result<Vec<ContactMessage>, ContactMessageRepositoryError>;

    /// Newest first, straight from the table.
    async fn list_direct(&self) -> Result<Vec<ContactMessage>, ContactMessageRepositoryError>;

    /// Unknown ids are not an error.
    async fn delete(&self, id: &str) -> Result<(), ContactMessageRepositoryError>;

    /// Row changes as they happen. The feed stops when the guard drops.
    fn watch(&self) -> (Subscription, mpsc::Receiver<ChangeEvent<ContactMessage>>);
}
