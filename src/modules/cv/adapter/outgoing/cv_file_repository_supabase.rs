use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::cv::application::domain::entities::{CvFile, NewCvFile};
use crate::modules::cv::application::ports::outgoing::CvFileRepository;
use crate::shared::activation::{ActiveFlagStore, ActiveFlagTable};
use crate::shared::content::RepositoryError;
use crate::shared::supabase::SupabaseClient;

pub const CV_FILES_TABLE: &str = "cv_files";

#[derive(Clone)]
pub struct SupabaseCvFileRepository {
    client: SupabaseClient,
    flags: ActiveFlagTable,
}

impl SupabaseCvFileRepository {
    pub fn new(client: SupabaseClient) -> Self {
        Self {
            flags: ActiveFlagTable::new(client.clone(), CV_FILES_TABLE),
            client,
        }
    }
}

#[async_trait]
impl ActiveFlagStore for SupabaseCvFileRepository {
    async fn exists(&self, id: Uuid) -> Result<bool, RepositoryError> {
        self.flags.exists(id).await
    }

    async fn deactivate_all(&self) -> Result<(), RepositoryError> {
        self.flags.deactivate_all().await
    }

    async fn activate(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.flags.activate(id).await
    }
}

#[async_trait]
impl CvFileRepository for SupabaseCvFileRepository {
    async fn list(&self) -> Result<Vec<CvFile>, RepositoryError> {
        Ok(self
            .client
            .table(CV_FILES_TABLE)
            .order("uploaded_at", false)
            .fetch()
            .await?)
    }

    async fn get_active(&self) -> Result<Option<CvFile>, RepositoryError> {
        Ok(self
            .client
            .table(CV_FILES_TABLE)
            .eq("is_active", true)
            .fetch_single()
            .await?)
    }

    async fn insert(&self, file: &NewCvFile) -> Result<CvFile, RepositoryError> {
        Ok(self.client.table(CV_FILES_TABLE).insert(file).await?)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.client.table(CV_FILES_TABLE).eq("id", id).delete().await?;
        Ok(())
    }
}
