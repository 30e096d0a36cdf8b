use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

use crate::modules::message::application::domain::entities::{ContactMessage, NewContactMessage};
use crate::modules::message::application::ports::outgoing::{
    ContactMessageRepository, ContactMessageRepositoryError,
};
use crate::shared::subscription::Subscription;
use crate::shared::supabase::ChangeEvent;

type Scripted<T> = Result<T, String>;

struct Script {
    insert: Option<String>,
    rpc_insert: Option<String>,
    count: Scripted<u64>,
    rpc_list: Scripted<Vec<ContactMessage>>,
    direct_list: Scripted<Vec<ContactMessage>>,
    delete: Option<String>,
}

impl Default for Script {
    fn default() -> Self {
        Self {
            insert: None,
            rpc_insert: None,
            count: Ok(0),
            rpc_list: Ok(vec![]),
            direct_list: Ok(vec![]),
            delete: None,
        }
    }
}

#[derive(Default)]
struct Recorded {
    calls: Vec<&'static str>,
    inserted: Vec<NewContactMessage>,
    rpc_inserted: Vec<NewContactMessage>,
    deleted: Vec<String>,
}

/// Scripted contact message store with a hand-fed change feed.
#[derive(Clone, Default)]
pub struct FakeMessageRepository {
    script: Arc<Mutex<Script>>,
    recorded: Arc<Mutex<Recorded>>,
    feed: Arc<Mutex<Option<mpsc::Sender<ChangeEvent<ContactMessage>>>>>,
}

impl FakeMessageRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_messages(self, messages: Vec<ContactMessage>) -> Self {
        self.script.lock().unwrap().rpc_list = Ok(messages);
        self
    }

    pub fn with_direct_messages(self, messages: Vec<ContactMessage>) -> Self {
        self.script.lock().unwrap().direct_list = Ok(messages);
        self
    }

    pub fn with_count(self, count: u64) -> Self {
        self.script.lock().unwrap().count = Ok(count);
        self
    }

    pub fn failing_insert(self, message: &str) -> Self {
        self.script.lock().unwrap().insert = Some(message.to_string());
        self
    }

    pub fn failing_rpc_insert(self, message: &str) -> Self {
        self.script.lock().unwrap().rpc_insert = Some(message.to_string());
        self
    }

    pub fn failing_count(self, message: &str) -> Self {
        self.script.lock().unwrap().count = Err(message.to_string());
        self
    }

    pub fn failing_rpc_list(self, message: &str) -> Self {
        self.script.lock().unwrap().rpc_list = Err(message.to_string());
        self
    }

    pub fn failing_direct_list(self, message: &str) -> Self {
        self.script.lock().unwrap().direct_list = Err(message.to_string());
        self
    }

    pub fn failing_delete(self, message: &str) -> Self {
        self.script.lock().unwrap().delete = Some(message.to_string());
        self
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.recorded.lock().unwrap().calls.clone()
    }

    pub fn inserted(&self) -> Vec<NewContactMessage> {
        self.recorded.lock().unwrap().inserted.clone()
    }

    pub fn rpc_inserted(&self) -> Vec<NewContactMessage> {
        self.recorded.lock().unwrap().rpc_inserted.clone()
    }

    pub fn deleted(&self) -> Vec<String> {
        self.recorded.lock().unwrap().deleted.clone()
    }

    /// Delivers an event to the current watcher. False when nobody listens.
    pub async fn push_event(&self, event: ChangeEvent<ContactMessage>) -> bool {
        let sender = self.feed.lock().unwrap().clone();
        match sender {
            Some(tx) => tx.send(event).await.is_ok(),
            None => false,
        }
    }

    fn record(&self, call: &'static str) {
        self.recorded.lock().unwrap().calls.push(call);
    }
}

fn backend<T>(result: Scripted<T>) -> Result<T, ContactMessageRepositoryError> {
    result.map_err(ContactMessageRepositoryError::Backend)
}

fn fail_if(error: Option<String>) -> Result<(), ContactMessageRepositoryError> {
    match error {
        Some(message) => Err(ContactMessageRepositoryError::Backend(message)),
        None => Ok(()),
    }
}

#[async_trait]
impl ContactMessageRepository for FakeMessageRepository {
    async fn insert(&self, message: &NewContactMessage) -> Result<(), ContactMessageRepositoryError> {
        self.record("insert");
        fail_if(self.script.lock().unwrap().insert.clone())?;
        self.recorded.lock().unwrap().inserted.push(message.clone());
        Ok(())
    }

    async fn insert_via_rpc(
        &self,
        message: &NewContactMessage,
    ) -> Result<(), ContactMessageRepositoryError> {
        self.record("insert_via_rpc");
        fail_if(self.script.lock().unwrap().rpc_insert.clone())?;
        self.recorded.lock().unwrap().rpc_inserted.push(message.clone());
        Ok(())
    }

    async fn count(&self) -> Result<u64, ContactMessageRepositoryError> {
        self.record("count");
        backend(self.script.lock().unwrap().count.clone())
    }

    async fn list_via_rpc(&self) -> Result<Vec<ContactMessage>, ContactMessageRepositoryError> {
        self.record("list_via_rpc");
        backend(self.script.lock().unwrap().rpc_list.clone())
    }

    async fn list_direct(&self) -> Result<Vec<ContactMessage>, ContactMessageRepositoryError> {
        self.record("list_direct");
        backend(self.script.lock().unwrap().direct_list.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), ContactMessageRepositoryError> {
        self.record("delete");
        fail_if(self.script.lock().unwrap().delete.clone())?;
        self.recorded.lock().unwrap().deleted.push(id.to_string());
        Ok(())
    }

    fn watch(&self) -> (Subscription, mpsc::Receiver<ChangeEvent<ContactMessage>>) {
        let (tx, rx) = mpsc::channel(16);
        *self.feed.lock().unwrap() = Some(tx);
        let idle = tokio::spawn(std::future::pending::<()>());
        (Subscription::new("fake-feed", idle), rx)
    }
}
