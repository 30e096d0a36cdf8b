use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::modules::message::application::domain::csv_export::CsvExport;
use crate::modules::message::application::domain::entities::{ContactMessage, ConnectionStatus};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InboxError {
    #[error("Failed to delete message: {0}")]
    DeleteFailed(String),
}

/// What the admin sees: connection state, banners, and the (possibly
/// filtered) list.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct InboxSnapshot {
    pub status: ConnectionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Size of the unfiltered list.
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<String>,
    pub messages: Vec<ContactMessage>,
}

/// The admin's working view of contact messages.
#[async_trait]
pub trait MessageInbox: Send + Sync {
    /// Reloads from the backend, walking the fallback chain.
    async fn refresh(&self) -> InboxSnapshot;

    /// Current state, filtered in memory when `search` is non-empty.
    async fn snapshot(&self, search: Option<&str>) -> InboxSnapshot;

    /// Selects a message by id.
    async fn open(&self, id: &str) -> Option<ContactMessage>;

    async fn delete(&self, id: &str) -> Result<(), InboxError>;

    async fn export_csv(&self, today: NaiveDate) -> CsvExport;
}
