use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::education::application::domain::entities::{Education, EducationInput};
use crate::modules::education::application::ports::outgoing::EducationRepository;
use crate::shared::content::RepositoryError;
use crate::shared::supabase::SupabaseClient;

pub const EDUCATION_TABLE: &str = "education";

#[derive(Clone)]
pub struct SupabaseEducationRepository {
    client: SupabaseClient,
}

impl SupabaseEducationRepository {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl EducationRepository for SupabaseEducationRepository {
    async fn list(&self) -> Result<Vec<Education>, RepositoryError> {
        Ok(self
            .client
            .table(EDUCATION_TABLE)
            .order("start_date", false)
            .fetch()
            .await?)
    }

    async fn create(&self, input: &EducationInput) -> Result<Education, RepositoryError> {
        Ok(self.client.table(EDUCATION_TABLE).insert(input).await?)
    }

    async fn update(
        &self,
        id: Uuid,
        input: &EducationInput,
    ) -> Result<Option<Education>, RepositoryError> {
        let rows: Vec<Education> = self
            .client
            .table(EDUCATION_TABLE)
            .eq("id", id)
            .update(input)
            .await?;
        Ok(rows.into_iter().next())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.client.table(EDUCATION_TABLE).eq("id", id).delete().await?;
        Ok(())
    }
}
