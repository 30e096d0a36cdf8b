//! Tables where at most one row is active at a time (CV files and profile
//! images).

use async_trait::async_trait;
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use crate::shared::content::{ContentError, RepositoryError};
use crate::shared::supabase::SupabaseClient;

#[async_trait]
pub trait ActiveFlagStore: Send + Sync {
    async fn exists(&self, id: Uuid) -> Result<bool, RepositoryError>;

    /// Clears the flag on every active row.
    async fn deactivate_all(&self) -> Result<(), RepositoryError>;

    async fn activate(&self, id: Uuid) -> Result<(), RepositoryError>;
}

/// Deactivate-all, then activate-one. The two steps are separate requests:
/// if the second fails nothing is active until the next activation.
pub async fn activate_exclusively<S>(
    store: &S,
    id: Uuid,
    entity: &'static str,
) -> Result<(), ContentError>
where
    S: ActiveFlagStore + ?Sized,
{
    if !store.exists(id).await? {
        return Err(ContentError::not_found(entity));
    }

    store.deactivate_all().await?;

    if let Err(e) = store.activate(id).await {
        warn!(entity, id = %id, error = %e, "Activation failed after deactivating; none active");
        return Err(e.into());
    }

    info!(entity, id = %id, "Activated");
    Ok(())
}

/// `is_active` bookkeeping for one backend table.
#[derive(Clone)]
pub struct ActiveFlagTable {
    client: SupabaseClient,
    table: &'static str,
}

impl ActiveFlagTable {
    pub fn new(client: SupabaseClient, table: &'static str) -> Self {
        Self { client, table }
    }
}

#[async_trait]
impl ActiveFlagStore for ActiveFlagTable {
    async fn exists(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let rows: Vec<serde_json::Value> = self
            .client
            .table(self.table)
            .select("id")
            .eq("id", id)
            .limit(1)
            .fetch()
            .await?;
        Ok(!rows.is_empty())
    }

    async fn deactivate_all(&self) -> Result<(), RepositoryError> {
        self.client
            .table(self.table)
            .eq("is_active", true)
            .update::<_, serde_json::Value>(&json!({ "is_active": false }))
            .await?;
        Ok(())
    }

    async fn activate(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.client
            .table(self.table)
            .eq("id", id)
            .update::<_, serde_json::Value>(&json!({ "is_active": true }))
            .await?;
        Ok(())
    }
}
