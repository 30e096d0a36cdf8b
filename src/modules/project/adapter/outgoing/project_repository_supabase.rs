use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::{Project, ProjectInput};
use crate::modules::project::application::ports::outgoing::ProjectRepository;
use crate::shared::content::RepositoryError;
use crate::shared::supabase::SupabaseClient;

pub const PROJECTS_TABLE: &str = "projects";

#[derive(Clone)]
pub struct SupabaseProjectRepository {
    client: SupabaseClient,
}

impl SupabaseProjectRepository {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProjectRepository for SupabaseProjectRepository {
    async fn list(&self) -> Result<Vec<Project>, RepositoryError> {
        Ok(self
            .client
            .table(PROJECTS_TABLE)
            .order("sort_order", true)
            .fetch()
            .await?)
    }

    async fn create(&self, input: &ProjectInput) -> Result<Project, RepositoryError> {
        Ok(self.client.table(PROJECTS_TABLE).insert(input).await?)
    }

    async fn update(
        &self,
        id: Uuid,
        input: &ProjectInput,
    ) -> Result<Option<Project>, RepositoryError> {
        let rows: Vec<Project> = self
            .client
            .table(PROJECTS_TABLE)
            .eq("id", id)
            .update(input)
            .await?;
        Ok(rows.into_iter().next())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.client.table(PROJECTS_TABLE).eq("id", id).delete().await?;
        Ok(())
    }
}
