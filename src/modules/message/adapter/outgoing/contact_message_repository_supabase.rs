use async_trait::async_trait;
use serde_json::json;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::modules::message::application::domain::entities::{ContactMessage, NewContactMessage};
use crate::modules::message::application::ports::outgoing::{
    ContactMessageRepository, ContactMessageRepositoryError,
};
use crate::shared::subscription::Subscription;
use crate::shared::supabase::{ChangeEvent, PollingChangeFeed, SupabaseClient, SupabaseError};

pub const CONTACT_MESSAGES_TABLE: &str = "contact_messages";
const FEED_CAPACITY: usize = 64;

#[derive(Clone)]
pub struct SupabaseContactMessageRepository {
    client: SupabaseClient,
    feed: PollingChangeFeed,
}

impl SupabaseContactMessageRepository {
    pub fn new(client: SupabaseClient, poll_interval: Duration) -> Self {
        let feed = PollingChangeFeed::new(
            client.clone(),
            CONTACT_MESSAGES_TABLE,
            "created_at",
            poll_interval,
        );
        Self { client, feed }
    }
}

fn backend(e: SupabaseError) -> ContactMessageRepositoryError {
    ContactMessageRepositoryError::Backend(e.to_string())
}

#[async_trait]
impl ContactMessageRepository for SupabaseContactMessageRepository {
    async fn insert(&self, message: &NewContactMessage) -> Result<(), ContactMessageRepositoryError> {
        self.client
            .table(CONTACT_MESSAGES_TABLE)
            .insert::<_, serde_json::Value>(message)
            .await
            .map(|_| ())
            .map_err(backend)
    }

    async fn insert_via_rpc(
        &self,
        message: &NewContactMessage,
    ) -> Result<(), ContactMessageRepositoryError> {
        let args = json!({
            "p_name": message.name,
            "p_email": message.email,
            "p_subject": message.subject,
            "p_message": message.message,
        });

        self.client
            .rpc_void("insert_contact_message", &args)
            .await
            .map_err(backend)
    }

    async fn count(&self) -> Result<u64, ContactMessageRepositoryError> {
        self.client
            .table(CONTACT_MESSAGES_TABLE)
            .count()
            .await
            .map_err(backend)
    }

    async fn list_via_rpc(&self) -> Result<Vec<ContactMessage>, ContactMessageRepositoryError> {
        // A null result decodes as an error, which sends the caller to the table.
        self.client
            .rpc("get_contact_messages", &json!({}))
            .await
            .map_err(backend)
    }

    async fn list_direct(&self) -> Result<Vec<ContactMessage>, ContactMessageRepositoryError> {
        self.client
            .table(CONTACT_MESSAGES_TABLE)
            .order("created_at", false)
            .fetch()
            .await
            .map_err(backend)
    }

    async fn delete(&self, id: &str) -> Result<(), ContactMessageRepositoryError> {
        self.client
            .table(CONTACT_MESSAGES_TABLE)
            .eq("id", id)
            .delete()
            .await
            .map(|_| ())
            .map_err(backend)
    }

    fn watch(&self) -> (Subscription, mpsc::Receiver<ChangeEvent<ContactMessage>>) {
        self.feed.subscribe(FEED_CAPACITY)
    }
}
