use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::profile_image::application::domain::entities::{
    NewProfileImage, ProfileImage,
};
use crate::modules::profile_image::application::ports::outgoing::ProfileImageRepository;
use crate::shared::activation::{ActiveFlagStore, ActiveFlagTable};
use crate::shared::content::RepositoryError;
use crate::shared::supabase::SupabaseClient;

pub const PROFILE_IMAGES_TABLE: &str = "profile_images";

#[derive(Clone)]
pub struct SupabaseProfileImageRepository {
    client: SupabaseClient,
    flags: ActiveFlagTable,
}

impl SupabaseProfileImageRepository {
    pub fn new(client: SupabaseClient) -> Self {
        Self {
            flags: ActiveFlagTable::new(client.clone(), PROFILE_IMAGES_TABLE),
            client,
        }
    }
}

#[async_trait]
impl ActiveFlagStore for SupabaseProfileImageRepository {
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
impl ProfileImageRepository for SupabaseProfileImageRepository {
    async fn list(&self) -> Result<Vec<ProfileImage>, RepositoryError> {
        Ok(self
            .client
            .table(PROFILE_IMAGES_TABLE)
            .order("uploaded_at", false)
            .fetch()
            .await?)
    }

    async fn get_active(&self) -> Result<Option<ProfileImage>, RepositoryError> {
        Ok(self
            .client
            .table(PROFILE_IMAGES_TABLE)
            .eq("is_active", true)
            .fetch_single()
            .await?)
    }

    async fn insert(&self, image: &NewProfileImage) -> Result<ProfileImage, RepositoryError> {
        Ok(self.client.table(PROFILE_IMAGES_TABLE).insert(image).await?)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.client
            .table(PROFILE_IMAGES_TABLE)
            .eq("id", id)
            .delete()
            .await?;
        Ok(())
    }
}
