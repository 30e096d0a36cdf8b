use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashSet;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

use super::client::SupabaseClient;
use super::error::SupabaseError;
use crate::shared::subscription::Subscription;

const KEY_COLUMN: &str = "id";

#[derive(Debug, Clone, PartialEq)]
pub enum ChangeEvent<T> {
    Insert(T),
    Delete { id: String },
}

/// How one id snapshot turns into the next.
#[derive(Debug, Default, PartialEq)]
pub struct KeyDiff {
    /// Oldest first, assuming snapshots are ordered newest first.
    pub inserted: Vec<String>,
    pub deleted: Vec<String>,
}

impl KeyDiff {
    pub fn is_empty(&self) -> bool {
        self.inserted.is_empty() && self.deleted.is_empty()
    }
}

pub fn diff_keys(previous: &[String], current: &[String]) -> KeyDiff {
    let before: HashSet<&str> = previous.iter().map(String::as_str).collect();
    let after: HashSet<&str> = current.iter().map(String::as_str).collect();

    KeyDiff {
        inserted: current
            .iter()
            .rev()
            .filter(|k| !before.contains(k.as_str()))
            .cloned()
            .collect(),
        deleted: previous
            .iter()
            .filter(|k| !after.contains(k.as_str()))
            .cloned()
            .collect(),
    }
}

#[derive(Deserialize)]
struct KeyRow {
    id: Option<String>,
}

/// Change notifications for one table. Each tick reads only the id column
/// and diffs it against the previous read; full rows are fetched just for
/// the ids that appeared.
#[derive(Clone)]
pub struct PollingChangeFeed {
    client: SupabaseClient,
    table: String,
    order_column: String,
    interval: Duration,
}

impl PollingChangeFeed {
    pub fn new(client: SupabaseClient, table: &str, order_column: &str, interval: Duration) -> Self {
        Self {
            client,
            table: table.to_string(),
            order_column: order_column.to_string(),
            interval,
        }
    }

    /// Starts polling. The first successful read is the baseline and emits
    /// nothing. Polling stops when the guard is dropped or the receiver goes
    /// away.
    pub fn subscribe<T>(&self, capacity: usize) -> (Subscription, mpsc::Receiver<ChangeEvent<T>>)
    where
        T: DeserializeOwned + Send + 'static,
    {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        let feed = self.clone();

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(feed.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut snapshot: Option<Vec<String>> = None;

            loop {
                ticker.tick().await;

                let current = match feed.read_keys().await {
                    Ok(keys) => keys,
                    Err(e) => {
                        tracing::warn!(table = %feed.table, error = %e, "Change feed poll failed");
                        continue;
                    }
                };

                let Some(previous) = snapshot.as_ref() else {
                    snapshot = Some(current);
                    continue;
                };

                let diff = diff_keys(previous, &current);
                if diff.is_empty() {
                    continue;
                }

                let inserted: Vec<T> = if diff.inserted.is_empty() {
                    Vec::new()
                } else {
                    match feed.read_rows(&diff.inserted).await {
                        Ok(rows) => rows,
                        Err(e) => {
                            // Keep the old snapshot so the next tick retries.
                            tracing::warn!(table = %feed.table, error = %e, "Could not fetch new rows");
                            continue;
                        }
                    }
                };

                let events = inserted
                    .into_iter()
                    .map(ChangeEvent::Insert)
                    .chain(diff.deleted.into_iter().map(|id| ChangeEvent::Delete { id }));
                for event in events {
                    if tx.send(event).await.is_err() {
                        tracing::debug!(table = %feed.table, "Change feed receiver closed");
                        return;
                    }
                }
                snapshot = Some(current);
            }
        });

        (Subscription::new("change-feed", handle), rx)
    }

    async fn read_keys(&self) -> Result<Vec<String>, SupabaseError> {
        let rows: Vec<KeyRow> = self
            .client
            .table(&self.table)
            .select(KEY_COLUMN)
            .order(&self.order_column, false)
            .fetch()
            .await?;
        Ok(rows.into_iter().filter_map(|r| r.id).collect())
    }

    async fn read_rows<T: DeserializeOwned>(&self, keys: &[String]) -> Result<Vec<T>, SupabaseError> {
        self.client
            .table(&self.table)
            .in_list(KEY_COLUMN, keys)
            .order(&self.order_column, true)
            .fetch()
            .await
    }
}
