use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::modules::message::application::domain::csv_export::CsvExport;
use crate::modules::message::application::domain::entities::{ContactMessage, ConnectionStatus};
use crate::modules::message::application::ports::incoming::use_cases::{
    InboxError, InboxSnapshot, MessageInbox,
};
use crate::modules::message::application::ports::outgoing::ContactMessageRepository;
use crate::shared::subscription::Subscription;
use crate::shared::supabase::ChangeEvent;

pub const DEMO_WARNING: &str = "Using demo data - Database connection needs to be configured";
const UNREADABLE: &str = "Unable to fetch messages. Please check database permissions.";

#[derive(Debug)]
struct PanelState {
    messages: Vec<ContactMessage>,
    status: ConnectionStatus,
    warning: Option<String>,
    error: Option<String>,
    selected: Option<String>,
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            messages: Vec::new(),
            status: ConnectionStatus::Checking,
            warning: None,
            error: None,
            selected: None,
        }
    }
}

impl PanelState {
    fn view(&self, search: Option<&str>) -> InboxSnapshot {
        let messages = match search.map(str::trim).filter(|s| !s.is_empty()) {
            Some(term) => self
                .messages
                .iter()
                .filter(|m| m.matches(term))
                .cloned()
                .collect(),
            None => self.messages.clone(),
        };

        InboxSnapshot {
            status: self.status,
            warning: self.warning.clone(),
            error: self.error.clone(),
            total: self.messages.len(),
            selected: self.selected.clone(),
            messages,
        }
    }

    fn forget(&mut self, id: &str) {
        self.messages.retain(|m| !m.has_id(id));
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
    }
}

/// The admin inbox. Holds the last loaded list in memory and keeps it
/// current from the change feed while mounted.
pub struct MessagesPanel<R>
where
    R: ContactMessageRepository,
{
    repository: R,
    demo_fallback: bool,
    state: RwLock<PanelState>,
}

/// Keeps a panel subscribed. Dropping it stops the feed and the event loop.
pub struct MountedPanel {
    _subscription: Subscription,
}

impl<R> MessagesPanel<R>
where
    R: ContactMessageRepository + 'static,
{
    pub fn new(repository: R, demo_fallback: bool) -> Self {
        Self {
            repository,
            demo_fallback,
            state: RwLock::new(PanelState::default()),
        }
    }

    /// Loads the inbox, then applies change events until the returned
    /// guard is dropped.
    pub fn mount(self: &Arc<Self>) -> MountedPanel {
        let (feed, mut events) = self.repository.watch();
        let panel = Arc::clone(self);

        let handle = tokio::spawn(async move {
            panel.refresh().await;
            while let Some(event) = events.recv().await {
                panel.apply(event).await;
            }
        });

        // The feed and the loop draining it live and die together.
        MountedPanel {
            _subscription: feed.with(handle),
        }
    }

    pub async fn apply(&self, event: ChangeEvent<ContactMessage>) {
        let mut state = self.state.write().await;
        match event {
            ChangeEvent::Insert(message) => {
                if let Some(id) = message.id.as_deref() {
                    if state.messages.iter().any(|m| m.has_id(id)) {
                        return;
                    }
                }
                info!(id = ?message.id, "New contact message");
                state.messages.insert(0, message);
            }
            ChangeEvent::Delete { id } => {
                info!(id = %id, "Contact message removed");
                state.forget(&id);
            }
        }
    }

    /// RPC first, then the table.
    async fn load(&self) -> Result<Vec<ContactMessage>, String> {
        match self.repository.list_via_rpc().await {
            Ok(messages) => return Ok(messages),
            Err(e) => warn!(error = %e, "get_contact_messages failed, reading the table"),
        }

        self.repository.list_direct().await.map_err(|e| {
            let message = e.to_string();
            if message.is_empty() {
                UNREADABLE.to_string()
            } else {
                message
            }
        })
    }
}

#[async_trait]
impl<R> MessageInbox for MessagesPanel<R>
where
    R: ContactMessageRepository + 'static,
{
    async fn refresh(&self) -> InboxSnapshot {
        self.state.write().await.status = ConnectionStatus::Checking;

        let loaded = self.load().await;

        let mut state = self.state.write().await;
        match loaded {
            Ok(messages) => {
                info!(count = messages.len(), "Inbox loaded");
                if let Some(selected) = state.selected.take() {
                    if messages.iter().any(|m| m.has_id(&selected)) {
                        state.selected = Some(selected);
                    }
                }
                state.messages = messages;
                state.status = ConnectionStatus::Connected;
                state.warning = None;
                state.error = None;
            }
            Err(message) if self.demo_fallback => {
                warn!(error = %message, "Inbox unreachable, showing demo data");
                state.messages = vec![ContactMessage::demo(Utc::now())];
                state.status = ConnectionStatus::Demo;
                state.warning = Some(DEMO_WARNING.to_string());
                state.error = Some(message);
                state.selected = None;
            }
            Err(message) => {
                error!(error = %message, "Inbox unreachable");
                state.messages.clear();
                state.status = ConnectionStatus::Error;
                state.warning = None;
                state.error = Some(message);
                state.selected = None;
            }
        }

        state.view(None)
    }

    async fn snapshot(&self, search: Option<&str>) -> InboxSnapshot {
        self.state.read().await.view(search)
    }

    async fn open(&self, id: &str) -> Option<ContactMessage> {
        let mut state = self.state.write().await;
        let found = state.messages.iter().find(|m| m.has_id(id)).cloned();
        if found.is_some() {
            state.selected = Some(id.to_string());
        }
        found
    }

    async fn delete(&self, id: &str) -> Result<(), InboxError> {
        let (demo, listed) = {
            let state = self.state.read().await;
            (
                state.status == ConnectionStatus::Demo,
                state.messages.iter().any(|m| m.has_id(id)),
            )
        };

        // Stored ids are uuids, so anything else that is not on screen (a
        // stale demo row, a typo) cannot exist remotely.
        if !demo && !listed && Uuid::parse_str(id).is_err() {
            debug!(id = %id, "Delete of an id the backend cannot hold; nothing to do");
            return Ok(());
        }

        // Demo rows only exist here.
        if !demo {
            if let Err(e) = self.repository.delete(id).await {
                let err = InboxError::DeleteFailed(e.to_string());
                error!(id = %id, error = %e, "Delete failed");
                self.state.write().await.error = Some(err.to_string());
                return Err(err);
            }
        }

        self.state.write().await.forget(id);
        info!(id = %id, "Contact message deleted");
        Ok(())
    }

    async fn export_csv(&self, today: NaiveDate) -> CsvExport {
        let state = self.state.read().await;
        CsvExport::build(&state.messages, today)
    }
}
