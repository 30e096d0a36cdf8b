use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::modules::profile::application::domain::entities::{PersonalInfo, PersonalInfoInput};
use crate::modules::profile::application::ports::outgoing::PersonalInfoRepository;
use crate::shared::content::RepositoryError;
use crate::shared::supabase::SupabaseClient;

pub const PERSONAL_INFO_TABLE: &str = "personal_info";

#[derive(Serialize)]
struct PersonalInfoRow<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<Uuid>,
    #[serde(flatten)]
    fields: &'a PersonalInfoInput,
}

#[derive(Clone)]
pub struct SupabasePersonalInfoRepository {
    client: SupabaseClient,
}

impl SupabasePersonalInfoRepository {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PersonalInfoRepository for SupabasePersonalInfoRepository {
    async fn get(&self) -> Result<Option<PersonalInfo>, RepositoryError> {
        Ok(self
            .client
            .table(PERSONAL_INFO_TABLE)
            .order("created_at", true)
            .limit(1)
            .fetch_single()
            .await?)
    }

    async fn upsert(
        &self,
        id: Option<Uuid>,
        input: &PersonalInfoInput,
    ) -> Result<PersonalInfo, RepositoryError> {
        let row = PersonalInfoRow { id, fields: input };
        Ok(self.client.table(PERSONAL_INFO_TABLE).upsert(&row).await?)
    }
}
