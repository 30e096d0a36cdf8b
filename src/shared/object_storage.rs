use async_trait::async_trait;

use crate::shared::content::RepositoryError;
use crate::shared::supabase::SupabaseClient;

/// Public file storage for uploads.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Stores the object and returns its public URL.
    async fn put(
        &self,
        bucket: &str,
        object: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, RepositoryError>;
}

#[derive(Clone)]
pub struct SupabaseObjectStorage {
    client: SupabaseClient,
}

impl SupabaseObjectStorage {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStorage for SupabaseObjectStorage {
    async fn put(
        &self,
        bucket: &str,
        object: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, RepositoryError> {
        self.client.upload(bucket, object, bytes, content_type).await?;
        Ok(self.client.public_url(bucket, object))
    }
}
